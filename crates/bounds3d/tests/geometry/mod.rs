mod ellipse;
mod kernel_queries;
mod mesh_hull;
mod pick_query;
mod random_volumes;
mod serialization;
mod volume_properties;
