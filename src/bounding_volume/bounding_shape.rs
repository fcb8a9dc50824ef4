//! The closed set of bounding volumes and their pairwise operations.

use crate::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingSphere, BoundingVolume, CornerCache, MeshHull,
    Obb, ShapeType,
};
use crate::math::{Point, Real, Rotation, Vector, DIM};
use crate::query::{self, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};
use crate::utils;

/// A bounding volume of any of the supported kinds.
///
/// The pairwise operations [`BoundingShape::contains`], [`BoundingShape::intersects`]
/// and [`BoundingShape::merge`] dispatch on the kinds of both operands. Pairs without a
/// dedicated routine, notably all the pairs involving a [`MeshHull`], are tested
/// through the corners of the volumes (see [`utils::corner_fallback_contains`]), which
/// is less precise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum BoundingShape {
    /// A bounding sphere.
    Sphere(BoundingSphere),
    /// An axis-aligned bounding box.
    AxisAlignedBox(Aabb),
    /// An oriented bounding box.
    OrientedBox(Obb),
    /// A bounding capsule.
    Capsule(BoundingCapsule),
    /// A bounding frustum.
    Frustum(BoundingFrustum),
    /// The convex hull of a mesh.
    Mesh(MeshHull),
}

macro_rules! dispatch(
    ($shape: expr, $v: ident => $e: expr) => {
        match $shape {
            BoundingShape::Sphere($v) => $e,
            BoundingShape::AxisAlignedBox($v) => $e,
            BoundingShape::OrientedBox($v) => $e,
            BoundingShape::Capsule($v) => $e,
            BoundingShape::Frustum($v) => $e,
            BoundingShape::Mesh($v) => $e,
        }
    }
);

impl From<BoundingSphere> for BoundingShape {
    fn from(v: BoundingSphere) -> Self {
        BoundingShape::Sphere(v)
    }
}

impl From<Aabb> for BoundingShape {
    fn from(v: Aabb) -> Self {
        BoundingShape::AxisAlignedBox(v)
    }
}

impl From<Obb> for BoundingShape {
    fn from(v: Obb) -> Self {
        BoundingShape::OrientedBox(v)
    }
}

impl From<BoundingCapsule> for BoundingShape {
    fn from(v: BoundingCapsule) -> Self {
        BoundingShape::Capsule(v)
    }
}

impl From<BoundingFrustum> for BoundingShape {
    fn from(v: BoundingFrustum) -> Self {
        BoundingShape::Frustum(v)
    }
}

impl From<MeshHull> for BoundingShape {
    fn from(v: MeshHull) -> Self {
        BoundingShape::Mesh(v)
    }
}

fn classify(inside: bool, intersects: impl FnOnce() -> bool) -> ContainmentType {
    if inside {
        ContainmentType::Inside
    } else if intersects() {
        ContainmentType::Intersects
    } else {
        ContainmentType::Outside
    }
}

fn all_corners_inside(volume: &dyn BoundingVolume, other: &dyn BoundingVolume) -> bool {
    let mut corners = CornerCache::buffer(other.corner_count());
    other.compute_corners(&mut corners);
    corners
        .iter()
        .all(|pt| volume.contains_point(pt) == ContainmentType::Inside)
}

fn obb_contains_sphere(obb: &Obb, center: &Point<Real>, radius: Real) -> bool {
    let local = obb.to_local_point(center);
    (0..DIM).all(|i| local[i].abs() + radius <= obb.extents()[i])
}

fn sphere_contains_sphere(center: &Point<Real>, radius: Real, other: &(Point<Real>, Real)) -> bool {
    na::distance(center, &other.0) + other.1 <= radius
}

fn capsule_contains_sphere(capsule: &BoundingCapsule, other: &(Point<Real>, Real)) -> bool {
    let dist2 = query::closest_points_point_segment(&other.0, capsule.centerline()).distance_squared;
    dist2.sqrt() + other.1 <= capsule.radius()
}

impl BoundingShape {
    /// This shape as a bounding volume trait-object.
    #[inline]
    pub fn as_volume(&self) -> &dyn BoundingVolume {
        dispatch!(self, v => v)
    }

    /// This shape as a mutable bounding volume trait-object.
    #[inline]
    pub fn as_volume_mut(&mut self) -> &mut dyn BoundingVolume {
        dispatch!(self, v => v)
    }

    /// This shape as an oriented box, if it is a box.
    fn as_obb(&self) -> Option<Obb> {
        match self {
            BoundingShape::AxisAlignedBox(aabb) => Some(Obb::from_aabb(aabb)),
            BoundingShape::OrientedBox(obb) => Some(obb.clone()),
            _ => None,
        }
    }

    /// The spheres whose convex hull is this shape, if it is round.
    fn as_spheres(&self) -> Option<Vec<(Point<Real>, Real)>> {
        match self {
            BoundingShape::Sphere(s) => Some(vec![(s.center(), s.radius())]),
            BoundingShape::Capsule(c) => Some(c.end_spheres().to_vec()),
            _ => None,
        }
    }

    /// Points whose convex hull contains this shape.
    fn enclosing_points(&self) -> Vec<Point<Real>> {
        let volume: &dyn BoundingVolume = match self {
            BoundingShape::Sphere(_) | BoundingShape::Capsule(_) => {
                return self.as_volume().aabb().vertices().to_vec();
            }
            _ => self.as_volume(),
        };

        let mut corners = CornerCache::buffer(volume.corner_count());
        volume.compute_corners(&mut corners);
        corners.to_vec()
    }

    /// Classifies `other` with respect to this shape.
    ///
    /// `other` is `Inside` if it lies entirely in this shape, `Intersects` if they
    /// only overlap, and `Outside` if they are disjoint.
    pub fn contains(&self, other: &BoundingShape) -> ContainmentType {
        self.contains_specialized(other).unwrap_or_else(|| {
            log::trace!(
                "Corner fallback for the containment of a {:?} in a {:?}.",
                other.shape_type(),
                self.shape_type()
            );
            utils::corner_fallback_contains(self.as_volume(), other.as_volume())
        })
    }

    fn contains_specialized(&self, other: &BoundingShape) -> Option<ContainmentType> {
        use BoundingShape::*;

        let intersects = || self.intersects(other);

        let result = match (self, other) {
            (AxisAlignedBox(_) | OrientedBox(_), Sphere(_) | Capsule(_)) => {
                let obb = self.as_obb()?;
                let spheres = other.as_spheres()?;
                let inside = spheres.iter().all(|(c, r)| obb_contains_sphere(&obb, c, *r));
                classify(inside, intersects)
            }
            (
                AxisAlignedBox(_) | OrientedBox(_) | Sphere(_) | Capsule(_),
                AxisAlignedBox(_) | OrientedBox(_),
            ) => classify(
                all_corners_inside(self.as_volume(), other.as_volume()),
                intersects,
            ),
            (AxisAlignedBox(_) | OrientedBox(_) | Sphere(_), Frustum(frustum)) => {
                let overlaps = || match self {
                    AxisAlignedBox(aabb) => query::contains_frustum_aabb(frustum, aabb).overlaps(),
                    OrientedBox(obb) => query::contains_frustum_box(frustum, obb).overlaps(),
                    Sphere(s) => query::contains_frustum_sphere(frustum, s).overlaps(),
                    _ => false,
                };
                classify(all_corners_inside(self.as_volume(), other.as_volume()), overlaps)
            }
            (Sphere(s), Sphere(_) | Capsule(_)) => {
                let spheres = other.as_spheres()?;
                let inside = spheres
                    .iter()
                    .all(|o| sphere_contains_sphere(&s.center(), s.radius(), o));
                classify(inside, intersects)
            }
            (Capsule(c), Sphere(_) | Capsule(_)) => {
                let spheres = other.as_spheres()?;
                let inside = spheres.iter().all(|o| capsule_contains_sphere(c, o));
                classify(inside, intersects)
            }
            (Frustum(frustum), AxisAlignedBox(aabb)) => query::contains_frustum_aabb(frustum, aabb),
            (Frustum(frustum), OrientedBox(obb)) => query::contains_frustum_box(frustum, obb),
            (Frustum(frustum), Sphere(s)) => query::contains_frustum_sphere(frustum, s),
            _ => return None,
        };

        Some(result)
    }

    /// Tests whether this shape and `other` overlap.
    pub fn intersects(&self, other: &BoundingShape) -> bool {
        Self::intersects_specialized(self, other)
            .or_else(|| Self::intersects_specialized(other, self))
            .unwrap_or_else(|| {
                log::trace!(
                    "Corner fallback for the intersection of a {:?} and a {:?}.",
                    self.shape_type(),
                    other.shape_type()
                );
                utils::corner_fallback_intersects(self.as_volume(), other.as_volume())
            })
    }

    fn intersects_specialized(a: &BoundingShape, b: &BoundingShape) -> Option<bool> {
        use BoundingShape::*;

        let result = match (a, b) {
            (AxisAlignedBox(a), AxisAlignedBox(b)) => query::intersection_test_aabb_aabb(a, b),
            (AxisAlignedBox(_) | OrientedBox(_), AxisAlignedBox(_) | OrientedBox(_)) => {
                query::intersection_test_obb_obb(&a.as_obb()?, &b.as_obb()?)
            }
            (AxisAlignedBox(aabb), Sphere(s)) => query::intersection_test_aabb_sphere(aabb, s),
            (OrientedBox(obb), Sphere(s)) => query::intersection_test_box_sphere(obb, s),
            (AxisAlignedBox(aabb), Capsule(c)) => query::intersection_test_aabb_capsule(aabb, c),
            (OrientedBox(obb), Capsule(c)) => query::intersection_test_box_capsule(obb, c),
            (Sphere(a), Sphere(b)) => query::intersection_test_sphere_sphere(a, b),
            (Sphere(s), Capsule(c)) => query::intersection_test_sphere_capsule(s, c),
            (Capsule(a), Capsule(b)) => query::intersection_test_capsule_capsule(a, b),
            (Frustum(f), AxisAlignedBox(aabb)) => query::contains_frustum_aabb(f, aabb).overlaps(),
            (Frustum(f), OrientedBox(obb)) => query::contains_frustum_box(f, obb).overlaps(),
            (Frustum(f), Sphere(s)) => query::contains_frustum_sphere(f, s).overlaps(),
            _ => return None,
        };

        Some(result)
    }

    /// Grows this shape so that it contains `other` too.
    ///
    /// The result keeps the kind of this shape: merging a sphere into a capsule grows
    /// the capsule, not the other way around. Merging is thus not commutative, though
    /// both orders enclose the two operands.
    pub fn merge(&mut self, other: &BoundingShape) {
        match self {
            BoundingShape::AxisAlignedBox(aabb) => aabb.merge_volume(other.as_volume()),
            BoundingShape::OrientedBox(obb) => obb.merge_volume(other.as_volume()),
            BoundingShape::Frustum(frustum) => frustum.merge_volume(other.as_volume()),
            BoundingShape::Sphere(sphere) => match other {
                BoundingShape::Capsule(capsule) => {
                    for (center, radius) in capsule.end_spheres() {
                        sphere.merge_sphere(&BoundingSphere::new(center, radius));
                    }
                }
                _ => sphere.merge_sphere(&other.as_volume().bounding_sphere()),
            },
            BoundingShape::Capsule(capsule) => match other.as_spheres() {
                Some(spheres) => capsule.merge_spheres(&spheres),
                None => {
                    let spheres: Vec<_> = other
                        .enclosing_points()
                        .into_iter()
                        .map(|pt| (pt, 0.0))
                        .collect();
                    capsule.merge_spheres(&spheres);
                }
            },
            BoundingShape::Mesh(hull) => hull.merge_points(&other.enclosing_points()),
        }
    }

    /// The result of merging `other` into a copy of this shape.
    #[must_use]
    pub fn merged(&self, other: &BoundingShape) -> BoundingShape {
        let mut res = self.clone();
        res.merge(other);
        res
    }
}

impl BoundingVolume for BoundingShape {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        dispatch!(self, v => v.shape_type())
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        dispatch!(self, v => BoundingVolume::center(v))
    }

    #[inline]
    fn volume(&self) -> Real {
        dispatch!(self, v => v.volume())
    }

    #[inline]
    fn corner_count(&self) -> usize {
        dispatch!(self, v => v.corner_count())
    }

    #[inline]
    fn compute_corners(&self, out: &mut [Point<Real>]) {
        dispatch!(self, v => v.compute_corners(out))
    }

    #[inline]
    fn corner_cache(&self) -> &CornerCache {
        dispatch!(self, v => v.corner_cache())
    }

    #[inline]
    fn corner_cache_mut(&mut self) -> &mut CornerCache {
        dispatch!(self, v => v.corner_cache_mut())
    }

    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        dispatch!(self, v => v.project_on_axis(axis))
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        dispatch!(self, v => BoundingVolume::aabb(v))
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        dispatch!(self, v => v.bounding_sphere())
    }

    #[inline]
    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        dispatch!(self, v => v.closest_point(pt))
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        dispatch!(self, v => v.contains_point(pt))
    }

    #[inline]
    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        dispatch!(self, v => v.intersects_triangle(tri))
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        dispatch!(self, v => v.intersects_ray(ray))
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        dispatch!(self, v => v.intersects_plane(plane))
    }

    #[inline]
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        dispatch!(self, v => v.transform(scale, rotation, translation))
    }

    #[inline]
    fn fit_points(&mut self, points: &[Point<Real>]) {
        dispatch!(self, v => v.fit_points(points))
    }
}
