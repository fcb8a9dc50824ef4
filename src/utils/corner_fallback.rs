//! Approximate pairwise tests between bounding volumes without a dedicated routine.
//!
//! These tests only look at the corner points of the volumes and are therefore less
//! precise than the specialized tests: two volumes overlapping without any corner of
//! either one being inside of the other are reported as disjoint.

use crate::bounding_volume::{BoundingVolume, CornerBuffer, CornerCache};
use crate::query::ContainmentType;

fn corner_points(volume: &dyn BoundingVolume) -> CornerBuffer {
    let mut buf = CornerCache::buffer(volume.corner_count());
    volume.compute_corners(&mut buf);
    buf
}

/// Classifies `other` with respect to `volume` through the corners of both volumes.
///
/// `other` is `Inside` if all its corners are inside of `volume`. It `Intersects` if
/// only some of them are, or if a corner of `volume` is inside of `other`.
pub fn corner_fallback_contains(
    volume: &dyn BoundingVolume,
    other: &dyn BoundingVolume,
) -> ContainmentType {
    let corners = corner_points(other);
    let inside = corners
        .iter()
        .filter(|pt| volume.contains_point(pt) == ContainmentType::Inside)
        .count();

    if inside == corners.len() && !corners.is_empty() {
        return ContainmentType::Inside;
    }

    if inside > 0 {
        return ContainmentType::Intersects;
    }

    let reverse = corner_points(volume)
        .iter()
        .any(|pt| other.contains_point(pt) == ContainmentType::Inside);

    if reverse {
        ContainmentType::Intersects
    } else {
        ContainmentType::Outside
    }
}

/// Tests whether two volumes overlap through their corners.
#[inline]
pub fn corner_fallback_intersects(volume: &dyn BoundingVolume, other: &dyn BoundingVolume) -> bool {
    corner_fallback_contains(volume, other).overlaps()
}
