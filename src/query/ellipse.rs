//! Queries involving an [`Ellipse`].
//!
//! None of them is implemented: each one reports [`QueryError::NotImplemented`] so that
//! callers never receive a plausible-looking wrong answer.

use crate::math::{Point, Real};
use crate::query::{ClosestPoints, LineIntersection, PlaneSide, QueryError, Ray};
use crate::shape::{Ellipse, Plane, Segment};

/// Closest points between a point and an ellipse. Not implemented.
pub fn closest_points_point_ellipse(
    _pt: &Point<Real>,
    _ellipse: &Ellipse,
) -> Result<ClosestPoints, QueryError> {
    Err(QueryError::not_implemented("closest_points_point_ellipse"))
}

/// Closest points between a segment and an ellipse. Not implemented.
pub fn closest_points_segment_ellipse(
    _seg: &Segment,
    _ellipse: &Ellipse,
) -> Result<ClosestPoints, QueryError> {
    Err(QueryError::not_implemented("closest_points_segment_ellipse"))
}

/// Casts a ray on an ellipse. Not implemented.
pub fn cast_ray_ellipse(
    _ray: &Ray,
    _ellipse: &Ellipse,
) -> Result<Option<LineIntersection>, QueryError> {
    Err(QueryError::not_implemented("cast_ray_ellipse"))
}

/// Classifies an ellipse with respect to a plane. Not implemented.
pub fn classify_ellipse(_plane: &Plane, _ellipse: &Ellipse) -> Result<PlaneSide, QueryError> {
    Err(QueryError::not_implemented("classify_ellipse"))
}
