use crate::bounding_volume::{Aabb, BoundingFrustum, BoundingSphere, Obb};
use crate::math::{Point, Real};
use crate::query::intersection_test::{classify_aabb, classify_obb, classify_sphere};
use crate::query::{ContainmentType, PlaneSide};
use crate::shape::Plane;

// The inside of a frustum is the back side of its planes.
fn contains_by_planes(planes: &[Plane], classify: impl Fn(&Plane) -> PlaneSide) -> ContainmentType {
    let mut result = ContainmentType::Inside;

    for plane in planes {
        match classify(plane) {
            PlaneSide::Front => return ContainmentType::Outside,
            PlaneSide::Intersects => result = ContainmentType::Intersects,
            PlaneSide::Back => {}
        }
    }

    result
}

/// Classifies an oriented box with respect to a frustum.
///
/// A box straddling one of the frustum planes is reported as `Intersects` even if it
/// lies outside of the frustum near one of its edges.
pub fn contains_frustum_box(frustum: &BoundingFrustum, obb: &Obb) -> ContainmentType {
    contains_by_planes(frustum.planes(), |plane| classify_obb(plane, obb))
}

/// Classifies an axis-aligned box with respect to a frustum.
///
/// Same approximation as [`contains_frustum_box`].
pub fn contains_frustum_aabb(frustum: &BoundingFrustum, aabb: &Aabb) -> ContainmentType {
    contains_by_planes(frustum.planes(), |plane| classify_aabb(plane, aabb))
}

/// Classifies a sphere with respect to a frustum.
pub fn contains_frustum_sphere(
    frustum: &BoundingFrustum,
    sphere: &BoundingSphere,
) -> ContainmentType {
    contains_by_planes(frustum.planes(), |plane| classify_sphere(plane, sphere))
}

/// Classifies a point with respect to a frustum.
///
/// A point on the boundary is `Intersects`.
pub fn contains_frustum_point(frustum: &BoundingFrustum, pt: &Point<Real>) -> ContainmentType {
    contains_by_planes(frustum.planes(), |plane| plane.classify_point(pt))
}
