//! Bounding sphere.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{Aabb, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Isometry, Point, Real, Rotation, Vector, DIM};
use crate::query::{self, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};
use crate::utils;
use num::Zero;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingSphere {
    center: Point<Real>,
    radius: Real,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        BoundingSphere::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    ///
    /// A negative radius is replaced by its absolute value.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius: radius.abs(),
            corners: CornerCache::default(),
        }
    }

    /// A sphere enclosing all the given points.
    ///
    /// Centered on the center of the axis-aligned box of the points, with the distance
    /// to the furthest point as radius. Zero-radius sphere at the origin if there is no
    /// point.
    pub fn from_points(pts: &[Point<Real>]) -> BoundingSphere {
        let center = Aabb::from_points(pts).center();
        let radius = pts
            .iter()
            .map(|pt| na::distance_squared(pt, &center))
            .fold(0.0, Real::max)
            .sqrt();

        BoundingSphere::new(center, radius)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Moves this sphere.
    #[inline]
    pub fn set_center(&mut self, center: Point<Real>) {
        self.center = center;
        self.corners.invalidate();
    }

    /// Resizes this sphere.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius.abs();
        self.corners.invalidate();
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere::new(m * self.center, self.radius)
    }

    /// Does this sphere contain the whole of `other`?
    #[inline]
    pub fn contains_sphere(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) + other.radius <= self.radius
    }

    /// Grows this sphere, as little as possible, so that it contains `other`.
    ///
    /// If one of the spheres contains the other one, the result is the containing one.
    pub fn merge_sphere(&mut self, other: &BoundingSphere) {
        if self.contains_sphere(other) {
            return;
        }

        if other.contains_sphere(self) {
            self.center = other.center;
            self.radius = other.radius;
            self.corners.invalidate();
            return;
        }

        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }

        self.corners.invalidate();
    }

    /// The smallest sphere containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merged_sphere(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = self.clone();
        res.merge_sphere(other);
        res
    }

    /// Enlarges this sphere by `amount`.
    ///
    /// # Panics
    /// Panics if `amount` is negative.
    #[inline]
    pub fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount;
        self.corners.invalidate();
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn volume(&self) -> Real {
        let pi = na::convert::<f64, Real>(std::f64::consts::PI);
        pi * self.radius * self.radius * self.radius * 4.0 / 3.0
    }

    /// The extremal points of the sphere along each coordinate axis.
    #[inline]
    fn corner_count(&self) -> usize {
        2 * DIM
    }

    fn compute_corners(&self, out: &mut [Point<Real>]) {
        check_corner_buffer(out, 2 * DIM);

        for i in 0..DIM {
            let offset = Vector::ith(i, self.radius);
            out[2 * i] = self.center - offset;
            out[2 * i + 1] = self.center + offset;
        }
    }

    #[inline]
    fn corner_cache(&self) -> &CornerCache {
        &self.corners
    }

    #[inline]
    fn corner_cache_mut(&mut self) -> &mut CornerCache {
        &mut self.corners
    }

    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        let center = self.center.coords.dot(axis);
        let radius = self.radius * axis.norm();
        (center - radius, center + radius)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius)
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let delta = pt - self.center;
        let dist = delta.norm();

        if dist <= self.radius {
            *pt
        } else {
            self.center + delta * (self.radius / dist)
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        if na::distance_squared(pt, &self.center) <= self.radius * self.radius {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    #[inline]
    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        query::closest_points_point_triangle(&self.center, tri).distance_squared
            <= self.radius * self.radius
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_sphere(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_sphere(plane, self)
    }

    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        self.center = utils::scaled_transform_point(&self.center, scale, rotation, translation);
        self.radius *= utils::max_abs_scale(scale);
        self.corners.invalidate();
    }

    fn fit_points(&mut self, points: &[Point<Real>]) {
        let fitted = BoundingSphere::from_points(points);
        self.center = fitted.center;
        self.radius = fitted.radius;
        self.corners.invalidate();
    }
}
