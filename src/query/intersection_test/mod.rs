//! Implementation details of the intersection tests.

pub use self::intersection_test_box::{
    distance_squared_local_box_point, distance_squared_local_box_segment,
    intersection_test_aabb_aabb, intersection_test_aabb_capsule, intersection_test_aabb_sphere,
    intersection_test_box_capsule, intersection_test_box_sphere, intersection_test_box_triangle,
    intersection_test_local_box_triangle, intersection_test_obb_obb, local_box_edges,
};
pub use self::intersection_test_capsule::{
    intersection_test_capsule_capsule, intersection_test_sphere_capsule,
    intersection_test_sphere_sphere,
};
pub use self::intersection_test_frustum::{
    contains_frustum_aabb, contains_frustum_box, contains_frustum_point, contains_frustum_sphere,
};
pub use self::intersection_test_line::{
    intersection_plane_plane, intersection_segment_plane, intersection_segment_triangle,
    intersection_test_ray_ray, intersection_test_ray_segment, intersection_test_segment_segment,
};
pub use self::intersection_test_plane::{
    classify_aabb, classify_capsule, classify_obb, classify_points, classify_segment,
    classify_sphere, classify_triangle,
};
pub use self::intersection_test_point::{
    intersection_test_point_point, intersection_test_point_ray, intersection_test_point_segment,
    intersection_test_point_triangle,
};
pub use self::intersection_test_triangle_triangle::intersection_test_triangle_triangle;

mod intersection_test_box;
mod intersection_test_capsule;
mod intersection_test_frustum;
mod intersection_test_line;
mod intersection_test_plane;
mod intersection_test_point;
mod intersection_test_triangle_triangle;
