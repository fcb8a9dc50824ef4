use crate::bounding_volume::{BoundingFrustum, MeshHull};
use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::query::ray::{cast_ray_aabb, cast_ray_triangle};
use crate::query::{BoundingIntersection, Ray};
use crate::shape::Plane;

/// Computes the parametric interval the line `origin + dir * t` spends inside of the
/// convex polyhedron bounded by `planes`.
///
/// The inside of the polyhedron is the back side of every plane, i.e., plane normals
/// point outward.
pub fn clip_line_halfspaces(
    planes: impl IntoIterator<Item = Plane>,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let mut tmax = Real::MAX;
    let mut tmin = -tmax;

    for plane in planes {
        let dist = plane.signed_distance(origin);
        let denom = plane.normal.dot(dir);

        if denom.abs() <= ZERO_TOLERANCE {
            if dist > 0.0 {
                return None;
            }
            continue;
        }

        let t = -dist / denom;

        if denom < 0.0 {
            // Entering the half-space.
            tmin = tmin.max(t);
        } else {
            tmax = tmax.min(t);
        }

        if tmin > tmax {
            return None;
        }
    }

    Some((tmin, tmax))
}

/// Casts a ray on a frustum, reporting the entry and exit crossings.
pub fn cast_ray_frustum(ray: &Ray, frustum: &BoundingFrustum) -> BoundingIntersection {
    match clip_line_halfspaces(frustum.planes().iter().copied(), &ray.origin, &ray.dir) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}

/// Casts a ray on a convex mesh hull, reporting the entry and exit crossings.
///
/// A flat hull has no interior: a ray crossing its polygon has a single hit. Flat hulls
/// reduced to a segment or a point are approximated by the axis-aligned box of their
/// vertices.
pub fn cast_ray_mesh_hull(ray: &Ray, hull: &MeshHull) -> BoundingIntersection {
    if hull.is_flat() {
        if hull.vertices().len() < 3 {
            return cast_ray_aabb(ray, &hull.aabb());
        }

        return hull
            .flat_triangles()
            .iter()
            .filter_map(|tri| cast_ray_triangle(ray, tri, false))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
            .map(BoundingIntersection::one)
            .unwrap_or_else(BoundingIntersection::none);
    }

    match clip_line_halfspaces(hull.face_planes(), &ray.origin, &ray.dir) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}
