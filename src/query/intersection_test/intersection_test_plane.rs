use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{Point, Real, DIM};
use crate::query::PlaneSide;
use crate::shape::{Plane, Segment, Triangle};

/// Classifies a set of points with respect to a plane.
///
/// An empty set is classified as [`PlaneSide::Intersects`].
pub fn classify_points<'a>(
    plane: &Plane,
    points: impl IntoIterator<Item = &'a Point<Real>>,
) -> PlaneSide {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for pt in points {
        let dist = plane.signed_distance(pt);
        min = min.min(dist);
        max = max.max(dist);
    }

    if min > max {
        PlaneSide::Intersects
    } else {
        PlaneSide::from_signed_interval(min, max)
    }
}

/// Classifies a segment with respect to a plane.
#[inline]
pub fn classify_segment(plane: &Plane, seg: &Segment) -> PlaneSide {
    classify_points(plane, [&seg.start, &seg.end])
}

/// Classifies a triangle with respect to a plane.
#[inline]
pub fn classify_triangle(plane: &Plane, tri: &Triangle) -> PlaneSide {
    classify_points(plane, [&tri.a, &tri.b, &tri.c])
}

/// Classifies an axis-aligned box with respect to a plane.
///
/// Only the two corners of the box that are extremal along the plane normal are
/// tested: for each axis, the nearest corner takes the minimum coordinate if the normal
/// component is non-negative, the maximum otherwise, and conversely for the farthest one.
pub fn classify_aabb(plane: &Plane, aabb: &Aabb) -> PlaneSide {
    let mins = aabb.mins();
    let maxs = aabb.maxs();
    let mut nearest = Point::origin();
    let mut farthest = Point::origin();

    for i in 0..DIM {
        if plane.normal[i] >= 0.0 {
            nearest[i] = mins[i];
            farthest[i] = maxs[i];
        } else {
            nearest[i] = maxs[i];
            farthest[i] = mins[i];
        }
    }

    PlaneSide::from_signed_interval(
        plane.signed_distance(&nearest),
        plane.signed_distance(&farthest),
    )
}

/// Classifies an oriented box with respect to a plane.
pub fn classify_obb(plane: &Plane, obb: &Obb) -> PlaneSide {
    let center_dist = plane.signed_distance(&obb.center());
    let radius = obb.projected_radius(&plane.normal);
    PlaneSide::from_signed_interval(center_dist - radius, center_dist + radius)
}

/// Classifies a sphere with respect to a plane.
#[inline]
pub fn classify_sphere(plane: &Plane, sphere: &BoundingSphere) -> PlaneSide {
    let center_dist = plane.signed_distance(&sphere.center());
    PlaneSide::from_signed_interval(center_dist - sphere.radius(), center_dist + sphere.radius())
}

/// Classifies a capsule with respect to a plane.
pub fn classify_capsule(plane: &Plane, capsule: &BoundingCapsule) -> PlaneSide {
    let seg = capsule.centerline();
    let d1 = plane.signed_distance(&seg.start);
    let d2 = plane.signed_distance(&seg.end);
    PlaneSide::from_signed_interval(
        d1.min(d2) - capsule.radius(),
        d1.max(d2) + capsule.radius(),
    )
}
