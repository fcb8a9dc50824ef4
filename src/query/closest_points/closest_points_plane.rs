use crate::math::{Point, Real};
use crate::query::{cast_ray_plane, intersection_plane_plane, ClosestPoints, Ray};
use crate::shape::{Plane, Segment, Triangle};

/// Closest points between a ray and a plane.
///
/// A ray that does not reach the plane is closest to it at its origin.
pub fn closest_points_ray_plane(ray: &Ray, plane: &Plane) -> ClosestPoints {
    match cast_ray_plane(ray, plane) {
        Some(hit) => ClosestPoints::touching(hit.point),
        None => ClosestPoints::new(ray.origin, plane.project_point(&ray.origin)),
    }
}

/// Closest points between a segment and a plane.
///
/// A segment that does not cross the plane is closest to it at the endpoint with the
/// smallest distance.
pub fn closest_points_segment_plane(seg: &Segment, plane: &Plane) -> ClosestPoints {
    let d1 = plane.signed_distance(&seg.start);
    let d2 = plane.signed_distance(&seg.end);

    if let Some(pt) = crossing_point(&seg.start, d1, &seg.end, d2) {
        return ClosestPoints::touching(pt);
    }

    let closest = if d1.abs() <= d2.abs() { seg.start } else { seg.end };
    ClosestPoints::new(closest, plane.project_point(&closest))
}

/// Closest points between two planes.
///
/// Non-parallel planes touch along their intersection line: the reported point is the
/// point of that line closest to the origin. Parallel planes are closest at the origin
/// of the first plane and its projection on the second.
pub fn closest_points_plane_plane(plane1: &Plane, plane2: &Plane) -> ClosestPoints {
    match intersection_plane_plane(plane1, plane2) {
        Some(line) => ClosestPoints::touching(line.origin),
        None => {
            let origin = plane1.origin();
            ClosestPoints::new(origin, plane2.project_point(&origin))
        }
    }
}

/// Closest points between a plane and a triangle.
///
/// A triangle that crosses the plane touches it at a point of one of its edges.
/// Otherwise the vertex nearest to the plane is reported.
pub fn closest_points_plane_triangle(plane: &Plane, tri: &Triangle) -> ClosestPoints {
    let vtx = tri.vertices();
    let dist = vtx.map(|v| plane.signed_distance(&v));

    for i in 0..3 {
        let j = (i + 1) % 3;
        if let Some(pt) = crossing_point(&vtx[i], dist[i], &vtx[j], dist[j]) {
            return ClosestPoints::touching(pt);
        }
    }

    let mut best = 0;
    for i in 1..3 {
        if dist[i].abs() < dist[best].abs() {
            best = i;
        }
    }

    ClosestPoints::new(plane.project_point(&vtx[best]), vtx[best])
}

/// The point where the segment `[a, b]` crosses a plane, given the signed distances of its
/// endpoints.
pub(crate) fn crossing_point(a: &Point<Real>, da: Real, b: &Point<Real>, db: Real) -> Option<Point<Real>> {
    if da == 0.0 {
        Some(*a)
    } else if db == 0.0 {
        Some(*b)
    } else if (da < 0.0) != (db < 0.0) {
        let t = da / (da - db);
        Some(a + (b - a) * t)
    } else {
        None
    }
}
