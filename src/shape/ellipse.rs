//! Definition of the ellipse primitive.

use crate::math::{Point, Real, Vector};

/// A flat ellipse in 3D space.
///
/// None of the queries involving an ellipse are implemented: every bounding volume and
/// kernel entry point taking an `Ellipse` returns
/// [`QueryError::NotImplemented`](crate::query::QueryError::NotImplemented).
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipse {
    /// The ellipse center.
    pub center: Point<Real>,
    /// The semi-major axis, scaled by its length.
    pub major_axis: Vector<Real>,
    /// The semi-minor axis, scaled by its length.
    pub minor_axis: Vector<Real>,
}

impl Ellipse {
    /// Creates a new ellipse.
    pub fn new(center: Point<Real>, major_axis: Vector<Real>, minor_axis: Vector<Real>) -> Self {
        Self {
            center,
            major_axis,
            minor_axis,
        }
    }
}
