//! Definition of the segment shape.

use crate::math::{Isometry, Point, Real, Vector, ZERO_TOLERANCE};
use na::{self, Unit};
use std::mem;
use std::ops::Index;

/// A segment shape.
///
/// Serialized as `start` followed by `end`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub start: Point<Real>,
    /// The segment second point.
    pub end: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point<Real>, end: Point<Real>) -> Segment {
        Segment { start, end }
    }

    /// Creates a segment centered at `center`, oriented along `dir` and with
    /// half-length `extent`.
    ///
    /// `dir` is expected to be normalized.
    #[inline]
    pub fn from_center(center: Point<Real>, dir: &Vector<Real>, extent: Real) -> Segment {
        Segment::new(center - dir * extent, center + dir * extent)
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.start` toward `self.end`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.end - self.start
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The squared length of this segment.
    #[inline]
    pub fn length_squared(&self) -> Real {
        self.scaled_direction().norm_squared()
    }

    /// Half the length of this segment.
    #[inline]
    pub fn extent(&self) -> Real {
        self.length() * 0.5
    }

    /// The middle point of this segment.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.start, &self.end)
    }

    /// The unit direction of this segment.
    ///
    /// Returns `None` if this segment is degenerate.
    #[inline]
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), ZERO_TOLERANCE)
    }

    /// Is this segment reduced to a point?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() <= ZERO_TOLERANCE * ZERO_TOLERANCE
    }

    /// Swaps the two endpoints of this segment.
    pub fn reverse(&mut self) {
        mem::swap(&mut self.start, &mut self.end)
    }

    /// The point at parameter `t`, `0` being `self.start` and `1` being `self.end`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.start + self.scaled_direction() * t
    }

    /// Applies the isometry `m` to the vertices of this segment and returns the resulting segment.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Segment::new(m * self.start, m * self.end)
    }

    /// Scales, rotates then translates this segment.
    #[inline]
    pub fn scaled_transformed(
        &self,
        scale: &Vector<Real>,
        rotation: &crate::math::Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Self {
        let tr = |p: &Point<Real>| Point::from(rotation * p.coords.component_mul(scale) + translation);
        Segment::new(tr(&self.start), tr(&self.end))
    }
}

impl Index<usize> for Segment {
    type Output = Point<Real>;

    #[inline]
    fn index(&self, i: usize) -> &Point<Real> {
        match i {
            0 => &self.start,
            1 => &self.end,
            _ => panic!("Segment vertex index out of bounds: {i} (expected 0 or 1)."),
        }
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
