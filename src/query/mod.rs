//! Non-persistent geometric queries.
//!
//! This module is the geometric kernel of the crate: closed-form closest points,
//! distances and intersection tests between the primitives point, ray, segment, plane
//! and triangle, and the volumetric predicates the bounding volumes are built on.
//!
//! The functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` is `closest_points`, `distance`, `intersection_test`, `cast_ray` or
//!   `classify` (classification with respect to a plane).
//! * `[shape1]` and `[shape2]` are the types of the shapes passed to the function.
//!
//! Closest-point routines work with squared distances; only the `distance_*` functions
//! take a square root.

pub use self::closest_points::*;
pub use self::containment::{ContainmentType, PlaneSide};
pub use self::distance::*;
pub use self::ellipse::{
    cast_ray_ellipse, classify_ellipse, closest_points_point_ellipse,
    closest_points_segment_ellipse,
};
pub use self::error::QueryError;
pub use self::intersection_test::*;
pub use self::ray::*;

pub mod closest_points;
mod containment;
pub mod distance;
mod ellipse;
mod error;
pub mod intersection_test;
pub mod ray;
pub mod sat;
