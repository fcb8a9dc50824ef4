use crate::math::{Point, Real, Rotation, Vector};

/// Scales, rotates then translates a point.
#[inline]
pub fn scaled_transform_point(
    pt: &Point<Real>,
    scale: &Vector<Real>,
    rotation: &Rotation<Real>,
    translation: &Vector<Real>,
) -> Point<Real> {
    Point::from(rotation * pt.coords.component_mul(scale) + translation)
}

/// The largest absolute scaling factor, by which round shapes have their radius scaled.
#[inline]
pub fn max_abs_scale(scale: &Vector<Real>) -> Real {
    scale.abs().max()
}
