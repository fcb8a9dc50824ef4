use crate::math::{Point, Real};
use std::mem;

/// The closest points between two shapes.
///
/// `point1` lies on the first shape, `point2` on the second. When the shapes
/// intersect, both points are the same point of the intersection and the squared
/// distance is zero.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClosestPoints {
    /// The point of the first shape closest to the second shape.
    pub point1: Point<Real>,
    /// The point of the second shape closest to the first shape.
    pub point2: Point<Real>,
    /// The squared distance between `point1` and `point2`.
    pub distance_squared: Real,
}

impl ClosestPoints {
    /// Builds the result from the two closest points.
    #[inline]
    pub fn new(point1: Point<Real>, point2: Point<Real>) -> Self {
        ClosestPoints {
            point1,
            point2,
            distance_squared: na::distance_squared(&point1, &point2),
        }
    }

    /// Two shapes touching at `point`.
    #[inline]
    pub fn touching(point: Point<Real>) -> Self {
        ClosestPoints {
            point1: point,
            point2: point,
            distance_squared: 0.0,
        }
    }

    /// The distance between the two closest points.
    #[inline]
    pub fn distance(&self) -> Real {
        self.distance_squared.sqrt()
    }

    /// Swaps the two points of this result.
    pub fn flip(&mut self) {
        mem::swap(&mut self.point1, &mut self.point2)
    }

    /// Returns the result with its two points swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        ClosestPoints {
            point1: self.point2,
            point2: self.point1,
            distance_squared: self.distance_squared,
        }
    }

    /// Keeps the result with the smallest distance.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.distance_squared < self.distance_squared {
            other
        } else {
            self
        }
    }
}
