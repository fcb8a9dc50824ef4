//! Geometric primitives the queries of this crate operate on.
//!
//! Points are plain [`Point`](crate::math::Point)s, rays live in
//! [`query::Ray`](crate::query::Ray).

pub use self::ellipse::Ellipse;
pub use self::plane::Plane;
pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod ellipse;
mod plane;
mod segment;
mod triangle;
