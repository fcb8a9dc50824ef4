use crate::math::{Point, Real, ZERO_TOLERANCE};
use crate::query::closest_points::{closest_parameters, crossing_point, LinearComponent};
use crate::query::{
    cast_ray_triangle, intersection_test_point_triangle, LineIntersection, Ray,
};
use crate::shape::{Plane, Segment, Triangle};
use na::Unit;

const SQUARED_TOLERANCE: Real = ZERO_TOLERANCE * ZERO_TOLERANCE;

fn linear_intersection(
    c1: &LinearComponent,
    c2: &LinearComponent,
) -> Option<(Real, Point<Real>)> {
    let (s, t) = closest_parameters(c1, c2);
    let p1 = c1.point_at(s);

    if na::distance_squared(&p1, &c2.point_at(t)) <= SQUARED_TOLERANCE {
        Some((s, p1))
    } else {
        None
    }
}

/// Computes the point where two rays meet, if any.
///
/// The reported distance is measured along the first ray.
pub fn intersection_test_ray_ray(ray1: &Ray, ray2: &Ray) -> Option<LineIntersection> {
    linear_intersection(&LinearComponent::from_ray(ray1), &LinearComponent::from_ray(ray2))
        .map(|(t, pt)| LineIntersection::new(t, pt))
}

/// Computes the point where a ray meets a segment, if any.
pub fn intersection_test_ray_segment(ray: &Ray, seg: &Segment) -> Option<LineIntersection> {
    linear_intersection(
        &LinearComponent::from_ray(ray),
        &LinearComponent::from_segment(seg),
    )
    .map(|(t, pt)| LineIntersection::new(t, pt))
}

/// Computes the point where two segments meet, if any.
///
/// The reported distance is the distance from the start of the first segment.
pub fn intersection_test_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> Option<LineIntersection> {
    linear_intersection(
        &LinearComponent::from_segment(seg1),
        &LinearComponent::from_segment(seg2),
    )
    .map(|(_, pt)| LineIntersection::new(na::distance(&seg1.start, &pt), pt))
}

/// Computes the point where a segment crosses a plane, if any.
///
/// The reported distance is the distance from the start of the segment. A segment lying
/// on the plane crosses it at its start.
pub fn intersection_segment_plane(seg: &Segment, plane: &Plane) -> Option<LineIntersection> {
    let d1 = plane.signed_distance(&seg.start);
    let d2 = plane.signed_distance(&seg.end);
    crossing_point(&seg.start, d1, &seg.end, d2)
        .map(|pt| LineIntersection::new(na::distance(&seg.start, &pt), pt))
}

/// Computes the point where a segment crosses a triangle, if any.
///
/// Both faces of the triangle are considered. The reported distance is the distance
/// from the start of the segment. A degenerate segment is tested as a point.
pub fn intersection_segment_triangle(seg: &Segment, tri: &Triangle) -> Option<LineIntersection> {
    if seg.is_degenerate() {
        return if intersection_test_point_triangle(&seg.start, tri) {
            Some(LineIntersection::new(0.0, seg.start))
        } else {
            None
        };
    }

    let ray = Ray::new(seg.start, seg.scaled_direction());
    let hit = cast_ray_triangle(&ray, tri, false)?;

    if hit.distance <= 1.0 {
        Some(LineIntersection::new(hit.distance * seg.length(), hit.point))
    } else {
        None
    }
}

/// Computes the line shared by two planes.
///
/// The line is returned as a ray starting at the point of the line closest to the
/// origin, directed along the unit vector `plane1.normal × plane2.normal`. Returns
/// `None` for parallel planes.
pub fn intersection_plane_plane(plane1: &Plane, plane2: &Plane) -> Option<Ray> {
    let dir = plane1.normal.cross(&plane2.normal);
    let dir = Unit::try_new(dir, ZERO_TOLERANCE)?;

    // The point of the line closest to the origin is a combination of both normals.
    let n1n2 = plane1.normal.dot(&plane2.normal);
    let det = 1.0 - n1n2 * n1n2;
    let c1 = (-plane1.offset + plane2.offset * n1n2) / det;
    let c2 = (-plane2.offset + plane1.offset * n1n2) / det;
    let origin = Point::from(*plane1.normal * c1 + *plane2.normal * c2);

    Some(Ray::new(origin, dir.into_inner()))
}
