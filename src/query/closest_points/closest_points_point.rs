use crate::math::{Point, Real, ZERO_TOLERANCE};
use crate::query::{ClosestPoints, Ray};
use crate::shape::{Plane, Segment, Triangle};

/// Closest points between two points.
#[inline]
pub fn closest_points_point_point(p1: &Point<Real>, p2: &Point<Real>) -> ClosestPoints {
    ClosestPoints::new(*p1, *p2)
}

/// Closest points between a point and a ray.
///
/// The projection of the point on the ray is clamped to the ray origin.
#[inline]
pub fn closest_points_point_ray(pt: &Point<Real>, ray: &Ray) -> ClosestPoints {
    ClosestPoints::new(*pt, ray.point_at(ray.project_parameter(pt)))
}

/// Closest points between a point and a segment.
///
/// A degenerate segment collapses to its start point.
#[inline]
pub fn closest_points_point_segment(pt: &Point<Real>, seg: &Segment) -> ClosestPoints {
    ClosestPoints::new(*pt, project_point_segment(pt, seg).0)
}

/// Projects `pt` on `seg` and returns the projection with its parameter on the segment.
///
/// The parameter of the orthogonal projection is clamped to `[0, 1]`.
pub fn project_point_segment(pt: &Point<Real>, seg: &Segment) -> (Point<Real>, Real) {
    let ab = seg.scaled_direction();
    let sqnab = ab.norm_squared();

    if sqnab <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return (seg.start, 0.0);
    }

    let ap = pt - seg.start;
    let t = na::clamp(ab.dot(&ap) / sqnab, 0.0, 1.0);
    (seg.point_at(t), t)
}

/// Closest points between a point and a plane.
#[inline]
pub fn closest_points_point_plane(pt: &Point<Real>, plane: &Plane) -> ClosestPoints {
    ClosestPoints::new(*pt, plane.project_point(pt))
}

/// Closest points between a point and a triangle.
#[inline]
pub fn closest_points_point_triangle(pt: &Point<Real>, tri: &Triangle) -> ClosestPoints {
    ClosestPoints::new(*pt, project_point_triangle(pt, tri))
}

/// Projects `pt` on `tri`.
///
/// The projection is found by locating the Voronoï region of the triangle the point
/// lies in: one of its three vertices, three edges, or its face. A degenerate triangle
/// is handled as the union of its edges.
pub fn project_point_triangle(pt: &Point<Real>, tri: &Triangle) -> Point<Real> {
    let a = tri.a;
    let b = tri.b;
    let c = tri.c;

    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);

    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        // Voronoï region of `a`.
        return a;
    }

    let bp = pt - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);

    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        // Voronoï region of `b`.
        return b;
    }

    let cp = pt - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);

    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        // Voronoï region of `c`.
        return c;
    }

    let bc = c - b;
    let n = ab.cross(&ac);

    if n.norm_squared() <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return project_point_degenerate_triangle(pt, tri);
    }

    let vc = n.dot(&ab.cross(&ap));
    if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        // Voronoï region of `ab`.
        return a + ab * (ab_ap / ab.norm_squared());
    }

    let vb = -n.dot(&ac.cross(&cp));
    if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        // Voronoï region of `ac`.
        return a + ac * (ac_ap / ac.norm_squared());
    }

    let va = n.dot(&bc.cross(&bp));
    if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
        // Voronoï region of `bc`.
        return b + bc * (bc.dot(&bp) / bc.norm_squared());
    }

    // Voronoï region of the face.
    let denom = va + vb + vc;

    if denom == 0.0 {
        return project_point_degenerate_triangle(pt, tri);
    }

    let v = vb / denom;
    let w = vc / denom;
    a + ab * v + ac * w
}

fn project_point_degenerate_triangle(pt: &Point<Real>, tri: &Triangle) -> Point<Real> {
    let [e0, e1, e2] = tri.edges();
    let candidates = [
        project_point_segment(pt, &e0).0,
        project_point_segment(pt, &e1).0,
        project_point_segment(pt, &e2).0,
    ];

    let mut best = candidates[0];
    let mut best_dist = na::distance_squared(pt, &best);

    for candidate in &candidates[1..] {
        let dist = na::distance_squared(pt, candidate);
        if dist < best_dist {
            best_dist = dist;
            best = *candidate;
        }
    }

    best
}

#[cfg(test)]
mod test {
    use super::*;
    use na::{Point3, Vector3};

    #[test]
    fn point_segment_projection_is_clamped() {
        let seg = Segment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0));
        let inside = closest_points_point_segment(&Point3::new(1.0, 3.0, 0.0), &seg);
        assert_eq!(inside.point2, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(inside.distance(), 3.0);

        let beyond = closest_points_point_segment(&Point3::new(5.0, 4.0, 0.0), &seg);
        assert_eq!(beyond.point2, Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(beyond.distance(), 5.0);
    }

    #[test]
    fn point_degenerate_segment_is_point_distance() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let seg = Segment::new(p, p);
        let res = closest_points_point_segment(&Point3::new(1.0, 1.0, 4.0), &seg);
        assert_eq!(res.point2, p);
        assert_relative_eq!(res.distance_squared, 9.0);
    }

    #[test]
    fn point_ray_behind_origin() {
        let ray = Ray::new(Point3::origin(), Vector3::x());
        let res = closest_points_point_ray(&Point3::new(-3.0, 4.0, 0.0), &ray);
        assert_eq!(res.point2, Point3::origin());
        assert_relative_eq!(res.distance(), 5.0);
    }

    #[test]
    fn point_triangle_voronoi_regions() {
        let tri = Triangle::new(
            Point3::origin(),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );

        // Face.
        let face = project_point_triangle(&Point3::new(0.5, 0.5, 3.0), &tri);
        assert_relative_eq!(face, Point3::new(0.5, 0.5, 0.0), epsilon = 1.0e-6);
        // Vertex.
        let vertex = project_point_triangle(&Point3::new(-1.0, -1.0, 1.0), &tri);
        assert_eq!(vertex, tri.a);
        // Edge bc.
        let edge = project_point_triangle(&Point3::new(2.0, 2.0, 0.0), &tri);
        assert_relative_eq!(edge, Point3::new(1.0, 1.0, 0.0), epsilon = 1.0e-6);
    }

    #[test]
    fn point_flat_triangle_uses_edges() {
        let tri = Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let res = closest_points_point_triangle(&Point3::new(1.5, 2.0, 0.0), &tri);
        assert_relative_eq!(res.point2, Point3::new(1.5, 0.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(res.distance_squared, 4.0, epsilon = 1.0e-5);
    }
}
