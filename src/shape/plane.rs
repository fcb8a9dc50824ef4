//! Definition of the plane shape.

use crate::math::{Isometry, Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::PlaneSide;
use na::Unit;

/// An infinite plane, i.e., the set of points `x` such that `normal · x + offset = 0`.
///
/// The signed distance of a point to the plane is positive on the side the
/// normal points to (the [`PlaneSide::Front`] side).
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: Unit<Vector<Real>>,
    /// The plane's signed offset from the origin, along `-normal`.
    pub offset: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and signed offset.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, offset: Real) -> Plane {
        Plane { normal, offset }
    }

    /// Builds the plane with the given normal and passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Unit<Vector<Real>>, point: &Point<Real>) -> Plane {
        Plane::new(normal, -normal.dot(&point.coords))
    }

    /// Builds the plane passing through the three given points, counter-clockwise.
    ///
    /// Returns `None` if the points are collinear.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let normal = Unit::try_new((b - a).cross(&(c - a)), ZERO_TOLERANCE)?;
        Some(Plane::from_normal_and_point(normal, a))
    }

    /// Builds a plane from the coefficients `(a, b, c, d)` of `ax + by + cz + d = 0`.
    ///
    /// The coefficients are normalized. Returns `None` if `(a, b, c)` is zero.
    pub fn from_coefficients(a: Real, b: Real, c: Real, d: Real) -> Option<Plane> {
        let n = Vector::new(a, b, c);
        let norm = n.norm();

        if norm <= ZERO_TOLERANCE {
            return None;
        }

        Some(Plane::new(Unit::new_unchecked(n / norm), d / norm))
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.offset
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - *self.normal * self.signed_distance(pt)
    }

    /// A point lying on this plane.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        Point::from(*self.normal * -self.offset)
    }

    /// The plane with the same points but an opposite normal.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.offset)
    }

    /// Classifies `pt` with respect to this plane.
    ///
    /// A point exactly on the plane is classified as [`PlaneSide::Intersects`].
    #[inline]
    pub fn classify_point(&self, pt: &Point<Real>) -> PlaneSide {
        PlaneSide::from_signed_distance(self.signed_distance(pt))
    }

    /// Applies the isometry `m` to this plane.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Plane {
        Plane::from_normal_and_point(m * self.normal, &(m * self.origin()))
    }

    /// Scales, rotates then translates this plane.
    ///
    /// Non-uniform scaling is applied through the inverse-transpose of the scaling so that the
    /// plane keeps containing the transformed points.
    pub fn scaled_transformed(
        &self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Plane {
        let origin = self.origin().coords.component_mul(scale);
        let inv_scale = scale.map(|s| if s.abs() > ZERO_TOLERANCE { 1.0 / s } else { 0.0 });
        let normal = self.normal.component_mul(&inv_scale);
        let normal = Unit::try_new(rotation * normal, ZERO_TOLERANCE).unwrap_or(self.normal);
        Plane::from_normal_and_point(normal, &Point::from(rotation * origin + translation))
    }
}

#[cfg(test)]
mod test {
    use crate::query::PlaneSide;
    use crate::shape::Plane;
    use na::{Point3, Vector3};

    #[test]
    fn plane_signed_distance_and_projection() {
        let plane = Plane::from_normal_and_point(Vector3::y_axis(), &Point3::new(0.0, 2.0, 0.0));
        assert_relative_eq!(plane.signed_distance(&Point3::new(3.0, 5.0, 1.0)), 3.0);
        assert_eq!(
            plane.project_point(&Point3::new(3.0, 5.0, 1.0)),
            Point3::new(3.0, 2.0, 1.0)
        );
        assert_eq!(plane.classify_point(&Point3::new(0.0, 2.0, 7.0)), PlaneSide::Intersects);
        assert_eq!(plane.classify_point(&Point3::new(0.0, 1.0, 0.0)), PlaneSide::Back);
    }

    #[test]
    fn plane_from_collinear_points_is_none() {
        let p = Point3::origin();
        let q = Point3::new(1.0, 1.0, 1.0);
        let r = Point3::new(2.0, 2.0, 2.0);
        assert!(Plane::from_points(&p, &q, &r).is_none());
    }

    #[test]
    fn plane_from_coefficients_is_normalized() {
        let plane = Plane::from_coefficients(0.0, 0.0, 2.0, -4.0).unwrap();
        assert_relative_eq!(*plane.normal, Vector3::z());
        assert_relative_eq!(plane.offset, -2.0);
    }
}
