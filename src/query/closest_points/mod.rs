//! Implementation details of the `closest_points` function.

pub use self::closest_points::ClosestPoints;
pub use self::closest_points_line_line::{
    closest_points_ray_ray, closest_points_ray_segment, closest_points_segment_segment,
};
pub(crate) use self::closest_points_line_line::{closest_parameters, LinearComponent};
pub use self::closest_points_plane::{
    closest_points_plane_plane, closest_points_plane_triangle, closest_points_ray_plane,
    closest_points_segment_plane,
};
pub(crate) use self::closest_points_plane::crossing_point;
pub use self::closest_points_point::{
    closest_points_point_plane, closest_points_point_point, closest_points_point_ray,
    closest_points_point_segment, closest_points_point_triangle, project_point_segment,
    project_point_triangle,
};
pub use self::closest_points_triangle::{
    closest_points_ray_triangle, closest_points_segment_triangle,
    closest_points_triangle_triangle,
};

mod closest_points;
mod closest_points_line_line;
mod closest_points_plane;
mod closest_points_point;
mod closest_points_triangle;
