use crate::query::{
    cast_ray_triangle, closest_points_point_triangle, closest_points_ray_segment,
    closest_points_segment_segment, ClosestPoints, Ray,
};
use crate::query::intersection_test::intersection_segment_triangle;
use crate::shape::{Segment, Triangle};

/// Closest points between a ray and a triangle.
///
/// The ray hits the triangle, or is closest to it through one of the triangle edges or
/// through its origin.
pub fn closest_points_ray_triangle(ray: &Ray, tri: &Triangle) -> ClosestPoints {
    if let Some(hit) = cast_ray_triangle(ray, tri, false) {
        return ClosestPoints::touching(hit.point);
    }

    let mut best = closest_points_point_triangle(&ray.origin, tri);
    for edge in &tri.edges() {
        best = best.min(closest_points_ray_segment(ray, edge));
    }

    best
}

/// Closest points between a segment and a triangle.
///
/// The segment crosses the triangle, or is closest to it through one of the triangle
/// edges or through one of its endpoints.
pub fn closest_points_segment_triangle(seg: &Segment, tri: &Triangle) -> ClosestPoints {
    if let Some(hit) = intersection_segment_triangle(seg, tri) {
        return ClosestPoints::touching(hit.point);
    }

    let mut best = closest_points_point_triangle(&seg.start, tri)
        .min(closest_points_point_triangle(&seg.end, tri));

    for edge in &tri.edges() {
        best = best.min(closest_points_segment_segment(seg, edge));
    }

    best
}

/// Closest points between two triangles.
///
/// Two disjoint triangles are closest through an edge of one of them. If the triangles
/// intersect, the reported point is one of the points where an edge of one triangle
/// meets the other triangle.
pub fn closest_points_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> ClosestPoints {
    let mut best: Option<ClosestPoints> = None;

    for edge in &tri1.edges() {
        let res = closest_points_segment_triangle(edge, tri2);
        if res.distance_squared == 0.0 {
            return res;
        }
        best = Some(best.map_or(res, |b| b.min(res)));
    }

    for edge in &tri2.edges() {
        let res = closest_points_segment_triangle(edge, tri1).flipped();
        if res.distance_squared == 0.0 {
            return res;
        }
        best = Some(best.map_or(res, |b| b.min(res)));
    }

    // Both loops run three times, so `best` is always set here.
    best.unwrap_or_else(|| ClosestPoints::new(tri1.a, tri2.a))
}
