//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{BoundingIntersection, LineIntersection, Ray};
pub use self::ray_aabb::{cast_ray_aabb, cast_ray_obb, clip_line_slabs};
pub use self::ray_capsule::{cast_ray_capsule, clip_line_capsule};
pub use self::ray_convex::{cast_ray_frustum, cast_ray_mesh_hull, clip_line_halfspaces};
pub use self::ray_plane::cast_ray_plane;
pub use self::ray_sphere::{cast_ray_sphere, clip_line_sphere};
pub use self::ray_triangle::{cast_ray_triangle, cast_ray_triangle_with_barycentrics};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_capsule;
mod ray_convex;
mod ray_plane;
mod ray_sphere;
mod ray_triangle;
