use crate::math::{Real, ZERO_TOLERANCE};
use crate::query::closest_points_triangle_triangle;
use crate::shape::Triangle;

/// Tests whether two triangles intersect.
///
/// Each triangle is first tested against the plane of the other one: if all three
/// vertices lie strictly on the same side, the triangles are disjoint. Otherwise the
/// triangles intersect if, and only if, an edge of one of them meets the other one,
/// which also covers coplanar triangles.
pub fn intersection_test_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> bool {
    if separated_by_plane(tri1, tri2) || separated_by_plane(tri2, tri1) {
        return false;
    }

    closest_points_triangle_triangle(tri1, tri2).distance_squared
        <= ZERO_TOLERANCE * ZERO_TOLERANCE
}

fn separated_by_plane(tri: &Triangle, other: &Triangle) -> bool {
    let n = tri.scaled_normal();

    if n.norm_squared() <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return false;
    }

    let d: [Real; 3] = other.vertices().map(|v| n.dot(&(v - tri.a)));
    (d[0] > 0.0 && d[1] > 0.0 && d[2] > 0.0) || (d[0] < 0.0 && d[1] < 0.0 && d[2] < 0.0)
}

#[cfg(test)]
mod test {
    use super::intersection_test_triangle_triangle;
    use crate::shape::Triangle;
    use na::Point3;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Point3::origin(),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn crossing_triangles() {
        let vertical = Triangle::new(
            Point3::new(0.5, 0.5, -1.0),
            Point3::new(0.5, 0.5, 1.0),
            Point3::new(5.0, 5.0, 0.0),
        );
        assert!(intersection_test_triangle_triangle(&xy_triangle(), &vertical));
    }

    #[test]
    fn stacked_triangles_miss() {
        let above = Triangle::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(0.0, 2.0, 1.0),
        );
        assert!(!intersection_test_triangle_triangle(&xy_triangle(), &above));
    }

    #[test]
    fn coplanar_overlapping_triangles() {
        let shifted = Triangle::new(
            Point3::new(0.5, 0.5, 0.0),
            Point3::new(3.0, 0.5, 0.0),
            Point3::new(0.5, 3.0, 0.0),
        );
        assert!(intersection_test_triangle_triangle(&xy_triangle(), &shifted));

        let apart = Triangle::new(
            Point3::new(5.0, 5.0, 0.0),
            Point3::new(6.0, 5.0, 0.0),
            Point3::new(5.0, 6.0, 0.0),
        );
        assert!(!intersection_test_triangle_triangle(&xy_triangle(), &apart));
    }
}
