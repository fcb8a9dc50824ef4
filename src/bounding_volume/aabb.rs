//! Axis Aligned Bounding Box.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{BoundingSphere, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Point, Real, Rotation, Vector, DIM};
use crate::query::{self, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};

/// An Axis-Aligned Bounding Box.
///
/// The box is described by its center and its half extents along each axis. Serialized
/// as `center` followed by `extents`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Aabb {
    center: Point<Real>,
    extents: Vector<Real>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::new(Point::origin(), Vector::zeros())
    }
}

impl Aabb {
    /// The vertex indices of each edge of this box, following the corner ordering of
    /// [`BoundingVolume::compute_corners`].
    pub const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (3, 2),
        (0, 3),
        (4, 5),
        (5, 6),
        (7, 6),
        (4, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    /// Creates a new box from its center and its half extents.
    ///
    /// Negative half extents are replaced by their absolute value.
    #[inline]
    pub fn new(center: Point<Real>, extents: Vector<Real>) -> Aabb {
        Aabb {
            center,
            extents: extents.abs(),
            corners: CornerCache::default(),
        }
    }

    /// Creates a new box from its minimum and maximum corners.
    #[inline]
    pub fn from_min_max(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb::new(na::center(&mins, &maxs), (maxs - mins) * 0.5)
    }

    /// The smallest box containing all the given points.
    ///
    /// Zero-volume box at the origin if there is no point.
    pub fn from_points<'a, I>(pts: I) -> Aabb
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut it = pts.into_iter();

        match it.next() {
            Some(first) => {
                let mut mins = *first;
                let mut maxs = *first;

                for pt in it {
                    mins = mins.inf(pt);
                    maxs = maxs.sup(pt);
                }

                Aabb::from_min_max(mins, maxs)
            }
            None => Aabb::default(),
        }
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The half extents of this box.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.extents
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center - self.extents
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center + self.extents
    }

    /// Moves this box.
    #[inline]
    pub fn set_center(&mut self, center: Point<Real>) {
        self.center = center;
        self.corners.invalidate();
    }

    /// Resizes this box around its center.
    #[inline]
    pub fn set_extents(&mut self, extents: Vector<Real>) {
        self.extents = extents.abs();
        self.corners.invalidate();
    }

    /// Resets this box to the given minimum and maximum corners.
    #[inline]
    pub fn set_min_max(&mut self, mins: Point<Real>, maxs: Point<Real>) {
        self.center = na::center(&mins, &maxs);
        self.extents = ((maxs - mins) * 0.5).abs();
        self.corners.invalidate();
    }

    /// Grows this box, as little as possible, so that it contains `pt`.
    pub fn extend_point(&mut self, pt: &Point<Real>) {
        let mins = self.mins().inf(pt);
        let maxs = self.maxs().sup(pt);
        self.set_min_max(mins, maxs);
    }

    /// Grows this box, as little as possible, so that it contains all the given points.
    pub fn extend_points<'a, I>(&mut self, pts: I)
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut mins = self.mins();
        let mut maxs = self.maxs();

        for pt in pts {
            mins = mins.inf(pt);
            maxs = maxs.sup(pt);
        }

        self.set_min_max(mins, maxs);
    }

    /// Enlarges this box by `amount` along every direction.
    ///
    /// # Panics
    /// Panics if `amount` is negative.
    #[inline]
    pub fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.extents += Vector::repeat(amount);
        self.corners.invalidate();
    }

    /// This box enlarged by `amount` along every direction.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb::new(self.center, self.extents + Vector::repeat(amount))
    }

    /// Computes the intersection of this box and another one.
    ///
    /// Returns `None` if the boxes are disjoint.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let mins = self.mins().sup(&other.mins());
        let maxs = self.maxs().inf(&other.maxs());

        for i in 0..DIM {
            if mins[i] > maxs[i] {
                return None;
            }
        }

        Some(Aabb::from_min_max(mins, maxs))
    }

    /// Does this box contain the whole of `other`?
    #[inline]
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        let (mins, maxs) = (self.mins(), self.maxs());
        let (omins, omaxs) = (other.mins(), other.maxs());
        (0..DIM).all(|i| omins[i] >= mins[i] && omaxs[i] <= maxs[i])
    }

    /// Grows this box, as little as possible, so that it contains `other`.
    pub fn merge_volume(&mut self, other: &dyn BoundingVolume) {
        let mut mins = self.mins();
        let mut maxs = self.maxs();

        for i in 0..DIM {
            let (min, max) = other.project_on_axis(&Vector::ith(i, 1.0));
            mins[i] = mins[i].min(min);
            maxs[i] = maxs[i].max(max);
        }

        self.set_min_max(mins, maxs);
    }

    /// The eight corners of this box.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let mut out = [Point::origin(); 8];
        self.compute_corners(&mut out);
        out
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::AxisAlignedBox
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn volume(&self) -> Real {
        let e = self.extents * 2.0;
        e.x * e.y * e.z
    }

    #[inline]
    fn corner_count(&self) -> usize {
        8
    }

    fn compute_corners(&self, out: &mut [Point<Real>]) {
        check_corner_buffer(out, 8);
        let mins = self.mins();
        let maxs = self.maxs();
        out[0] = Point::new(mins.x, mins.y, mins.z);
        out[1] = Point::new(maxs.x, mins.y, mins.z);
        out[2] = Point::new(maxs.x, maxs.y, mins.z);
        out[3] = Point::new(mins.x, maxs.y, mins.z);
        out[4] = Point::new(mins.x, mins.y, maxs.z);
        out[5] = Point::new(maxs.x, mins.y, maxs.z);
        out[6] = Point::new(maxs.x, maxs.y, maxs.z);
        out[7] = Point::new(mins.x, maxs.y, maxs.z);
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
        let radius = self.extents.dot(&axis.abs());
        (center - radius, center + radius)
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        Aabb::new(self.center, self.extents)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.extents.norm())
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.sup(&self.mins()).inf(&self.maxs())
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        let delta = pt - self.center;

        if (0..DIM).all(|i| delta[i].abs() <= self.extents[i]) {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    #[inline]
    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        let c = self.center.coords;
        let local = Triangle::new(tri.a - c, tri.b - c, tri.c - c);
        query::intersection_test_local_box_triangle(&self.extents, &local)
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_aabb(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_aabb(plane, self)
    }

    /// The result is the axis-aligned box of the transformed box.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        let center = rotation * self.center.coords.component_mul(scale) + translation;
        let scaled_extents = self.extents.component_mul(&scale.abs());
        let rot = rotation.to_rotation_matrix();
        let extents = rot.matrix().abs() * scaled_extents;
        self.center = Point::from(center);
        self.extents = extents;
        self.corners.invalidate();
    }

    fn fit_points(&mut self, points: &[Point<Real>]) {
        let fitted = Aabb::from_points(points);
        self.center = fitted.center;
        self.extents = fitted.extents;
        self.corners.invalidate();
    }
}
