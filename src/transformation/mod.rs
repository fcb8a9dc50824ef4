//! Point cloud transformations.

pub use self::convex_hull::{convex_hull, flat_convex_hull, try_convex_hull, ConvexHullError};

mod convex_hull;
