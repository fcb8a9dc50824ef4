//! Oriented Bounding Box.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Matrix, Point, Real, Rotation, Vector, DIM, ZERO_TOLERANCE};
use crate::query::{self, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};
use crate::utils;

/// An Oriented Bounding Box.
///
/// The box is described by its center, an orthonormal frame given as the columns of
/// `axes`, and its half extents along each of these axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Obb {
    center: Point<Real>,
    axes: Matrix<Real>,
    extents: Vector<Real>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for Obb {
    fn default() -> Self {
        Obb::from_axes(Point::origin(), Matrix::identity(), Vector::zeros())
    }
}

impl Obb {
    /// Creates a box with the given center, orientation and half extents.
    #[inline]
    pub fn new(center: Point<Real>, rotation: &Rotation<Real>, extents: Vector<Real>) -> Obb {
        Obb::from_axes(center, rotation.to_rotation_matrix().into_inner(), extents)
    }

    /// Creates a box from its center, its axes and its half extents.
    ///
    /// The columns of `axes` must be orthonormal.
    #[inline]
    pub fn from_axes(center: Point<Real>, axes: Matrix<Real>, extents: Vector<Real>) -> Obb {
        Obb {
            center,
            axes,
            extents: extents.abs(),
            corners: CornerCache::default(),
        }
    }

    /// An oriented box covering exactly the given axis-aligned box.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Obb {
        Obb::from_axes(aabb.center(), Matrix::identity(), aabb.extents())
    }

    /// The center of this box.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.center
    }

    /// The half extents of this box along each of its axes.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.extents
    }

    /// The axes of this box, as the columns of a rotation matrix.
    #[inline]
    pub fn axes(&self) -> &Matrix<Real> {
        &self.axes
    }

    /// The `i`-th axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.axes.column(i).into_owned()
    }

    /// The orientation of this box.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(self.axes))
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

    /// Reorients this box around its center.
    #[inline]
    pub fn set_rotation(&mut self, rotation: &Rotation<Real>) {
        self.axes = rotation.to_rotation_matrix().into_inner();
        self.corners.invalidate();
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.to_local_vector(&(pt - self.center)))
    }

    /// Expresses a world-space vector in the local frame of this box.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.axes.tr_mul(v)
    }

    /// Expresses a point given in the local frame of this box in world-space.
    #[inline]
    pub fn to_world_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.center + self.axes * pt.coords
    }

    /// The half length of the projection of this box on `axis`.
    #[inline]
    pub fn projected_radius(&self, axis: &Vector<Real>) -> Real {
        (0..DIM)
            .map(|i| self.extents[i] * self.axes.column(i).dot(axis).abs())
            .sum()
    }

    /// Grows this box, keeping its orientation, so that it contains `other`.
    pub fn merge_volume(&mut self, other: &dyn BoundingVolume) {
        let mut mins = Vector::zeros();
        let mut maxs = Vector::zeros();

        for i in 0..DIM {
            let axis = self.axis(i);
            let (min, max) = self.project_on_axis(&axis);
            let (omin, omax) = other.project_on_axis(&axis);
            mins[i] = min.min(omin);
            maxs[i] = max.max(omax);
        }

        self.center = Point::from(self.axes * ((mins + maxs) * 0.5));
        self.extents = (maxs - mins) * 0.5;
        self.corners.invalidate();
    }
}

impl BoundingVolume for Obb {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::OrientedBox
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
        let local = Aabb::new(Point::origin(), self.extents);
        local.compute_corners(out);

        for pt in out.iter_mut().take(8) {
            *pt = self.to_world_point(pt);
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
        let radius = self.projected_radius(axis);
        (center - radius, center + radius)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.extents.norm())
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let local = self.to_local_point(pt);
        let clamped = local.coords.zip_map(&self.extents, |x, e| x.max(-e).min(e));
        self.to_world_point(&Point::from(clamped))
    }

    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        let local = self.to_local_point(pt);

        if (0..DIM).all(|i| local[i].abs() <= self.extents[i] + ZERO_TOLERANCE) {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    #[inline]
    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        query::intersection_test_box_triangle(self, tri)
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_obb(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_obb(plane, self)
    }

    /// The axes of the result are the rotated axes of this box. Its extents enclose the
    /// scaled box, which is not a box anymore if the scaling is not uniform.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        let mut extents = Vector::zeros();

        for j in 0..DIM {
            let axis_j = self.axis(j);
            extents[j] = (0..DIM)
                .map(|i| {
                    let scaled = self.axis(i).component_mul(scale);
                    self.extents[i] * axis_j.dot(&scaled).abs()
                })
                .sum();
        }

        self.center = utils::scaled_transform_point(&self.center, scale, rotation, translation);
        self.axes = rotation.to_rotation_matrix().into_inner() * self.axes;
        self.extents = extents;
        self.corners.invalidate();
    }

    fn fit_points(&mut self, points: &[Point<Real>]) {
        let (center, axes, extents) = utils::obb(points);
        self.center = center;
        self.axes = axes;
        self.extents = extents;
        self.corners.invalidate();
    }
}
