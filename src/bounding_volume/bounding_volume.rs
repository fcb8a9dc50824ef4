use crate::bounding_volume::point_buffer::{gather_indexed_points, gather_points};
use crate::bounding_volume::{Aabb, BoundingSphere, CornerCache, IndexBuffer, PointBuffer, SubRange};
use crate::math::{Point, Real, Rotation, Vector, DIM};
use crate::query::{BoundingIntersection, ContainmentType, PlaneSide, QueryError, Ray};
use crate::shape::{Ellipse, Plane, Segment, Triangle};

/// Identifies the concrete variant of a bounding volume.
///
/// This is the dispatch key of the pairwise operations of
/// [`BoundingShape`](crate::bounding_volume::BoundingShape).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeType {
    /// A [`BoundingSphere`].
    Sphere,
    /// An [`Aabb`].
    AxisAlignedBox,
    /// An [`Obb`](crate::bounding_volume::Obb).
    OrientedBox,
    /// A [`BoundingCapsule`](crate::bounding_volume::BoundingCapsule).
    Capsule,
    /// A [`BoundingFrustum`](crate::bounding_volume::BoundingFrustum).
    Frustum,
    /// A [`MeshHull`](crate::bounding_volume::MeshHull).
    Mesh,
}

/// Trait implemented by every bounding volume.
///
/// Bounding volumes are closed convex sets: a point on the boundary is contained. Every
/// mutating method marks the corner cache as stale so that the next call to
/// [`BoundingVolume::corners`] recomputes it.
pub trait BoundingVolume {
    /// The variant of this bounding volume.
    fn shape_type(&self) -> ShapeType;

    /// The center of this bounding volume.
    fn center(&self) -> Point<Real>;

    /// The volume enclosed by this bounding volume.
    fn volume(&self) -> Real;

    /// The number of corners enumerated by [`Self::compute_corners`].
    fn corner_count(&self) -> usize;

    /// Writes the extremal corners of this bounding volume into `out`.
    ///
    /// # Panics
    /// Panics if `out` holds less than [`Self::corner_count`] points.
    fn compute_corners(&self, out: &mut [Point<Real>]);

    #[doc(hidden)]
    fn corner_cache(&self) -> &CornerCache;

    #[doc(hidden)]
    fn corner_cache_mut(&mut self) -> &mut CornerCache;

    /// The extremal corners of this bounding volume.
    ///
    /// They are computed lazily and cached until the next mutation.
    fn corners(&mut self) -> &[Point<Real>] {
        if self.corner_cache().is_dirty() {
            let mut buf = CornerCache::buffer(self.corner_count());
            self.compute_corners(&mut buf);
            self.corner_cache_mut().store(buf);
        }

        self.corner_cache().as_slice()
    }

    /// The interval covered by the projection of this volume on `axis`.
    ///
    /// `axis` is expected to be normalized.
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real);

    /// The smallest axis-aligned box enclosing this volume.
    fn aabb(&self) -> Aabb {
        let mut mins = Point::origin();
        let mut maxs = Point::origin();

        for i in 0..DIM {
            let (min, max) = self.project_on_axis(&Vector::ith(i, 1.0));
            mins[i] = min;
            maxs[i] = max;
        }

        Aabb::from_min_max(mins, maxs)
    }

    /// A sphere enclosing this volume.
    fn bounding_sphere(&self) -> BoundingSphere;

    /// The point of this volume closest to `pt`.
    ///
    /// Points inside of the volume are their own closest point.
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real>;

    /// The squared distance from `pt` to this volume, zero if `pt` is inside.
    #[inline]
    fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(pt, &self.closest_point(pt))
    }

    /// Classifies a point with respect to this volume.
    ///
    /// Points are either `Inside` (including the boundary) or `Outside`.
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType;

    /// Classifies a segment with respect to this volume.
    fn contains_segment(&self, seg: &Segment) -> ContainmentType {
        if self.contains_point(&seg.start) == ContainmentType::Inside
            && self.contains_point(&seg.end) == ContainmentType::Inside
        {
            ContainmentType::Inside
        } else if self.intersects_segment(seg) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    /// Tests whether a triangle intersects this volume.
    fn intersects_triangle(&self, tri: &Triangle) -> bool;

    /// Classifies a triangle with respect to this volume.
    fn contains_triangle(&self, tri: &Triangle) -> ContainmentType {
        let inside = tri
            .vertices()
            .iter()
            .all(|v| self.contains_point(v) == ContainmentType::Inside);

        if inside {
            ContainmentType::Inside
        } else if self.intersects_triangle(tri) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Outside
        }
    }

    /// Casts a ray on this volume.
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection;

    /// Tests whether a segment intersects this volume.
    fn intersects_segment(&self, seg: &Segment) -> bool {
        if self.contains_point(&seg.start) == ContainmentType::Inside {
            return true;
        }

        let ray = Ray::new(seg.start, seg.scaled_direction());
        self.intersects_ray(&ray)
            .closest()
            .map(|hit| hit.distance <= 1.0)
            .unwrap_or(false)
    }

    /// Classifies this volume with respect to a plane.
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide;

    /// Classifies an ellipse with respect to this volume. Not implemented.
    fn contains_ellipse(&self, _ellipse: &Ellipse) -> Result<ContainmentType, QueryError> {
        Err(QueryError::not_implemented("contains_ellipse"))
    }

    /// Tests whether an ellipse intersects this volume. Not implemented.
    fn intersects_ellipse(&self, _ellipse: &Ellipse) -> Result<bool, QueryError> {
        Err(QueryError::not_implemented("intersects_ellipse"))
    }

    /// Scales, rotates then translates this volume.
    ///
    /// The result encloses the transformed volume. It is exact for rigid motions and
    /// uniform scaling.
    fn transform(&mut self, scale: &Vector<Real>, rotation: &Rotation<Real>, translation: &Vector<Real>);

    /// Resets this volume to enclose the given points.
    ///
    /// An empty set yields a zero-volume shape at the origin, a single point a
    /// zero-extent shape at that point.
    fn fit_points(&mut self, points: &[Point<Real>]);

    /// Resets this volume to enclose the points of `buffer` selected by `range`.
    ///
    /// The whole buffer is used if `range` is `None`.
    ///
    /// # Panics
    /// Panics if `range` is not within the buffer.
    fn compute_from_points<B>(&mut self, buffer: &B, range: Option<SubRange>)
    where
        B: PointBuffer + ?Sized,
        Self: Sized,
    {
        let points = gather_points(buffer, range);
        self.fit_points(&points);
    }

    /// Resets this volume to enclose the points of `buffer` referenced by the indices of
    /// `indices` selected by `range`.
    ///
    /// The whole index buffer is used if `range` is `None`.
    ///
    /// # Panics
    /// Panics if `range` is not within the index buffer, or if an index is not within
    /// the point buffer.
    fn compute_from_indexed_points<B, I>(&mut self, buffer: &B, indices: &I, range: Option<SubRange>)
    where
        B: PointBuffer + ?Sized,
        I: IndexBuffer + ?Sized,
        Self: Sized,
    {
        let points = gather_indexed_points(buffer, indices, range);
        self.fit_points(&points);
    }
}

/// Corner enumeration helper checking the output buffer size.
#[inline]
pub(crate) fn check_corner_buffer(out: &[Point<Real>], count: usize) {
    assert!(
        out.len() >= count,
        "The corner buffer is too small: {} points given, {} required.",
        out.len(),
        count
    );
}
