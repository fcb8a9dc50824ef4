use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::shape::Triangle;
use crate::utils;

/// Computes the separation between a convex polyhedron, given by its vertices, and a
/// triangle along the given unit axis.
#[inline]
pub fn polyhedron_triangle_compute_separation_wrt_line(
    vertices: &[Point<Real>],
    triangle: &Triangle,
    axis: &Vector<Real>,
) -> Real {
    let (poly_min, poly_max) = utils::point_cloud_project_on_axis(vertices, axis);
    let (tri_min, tri_max) = utils::point_cloud_project_on_axis(&triangle.vertices(), axis);
    (tri_min - poly_max).max(poly_min - tri_max)
}

/// Finds the best separating axis between a convex polyhedron and a triangle.
///
/// The candidate axes are the polyhedron face normals, the triangle normal, and the
/// cross products of each polyhedron edge direction with each triangle edge. Nearly
/// zero cross products are skipped.
pub fn polyhedron_triangle_find_separating_axis(
    vertices: &[Point<Real>],
    face_normals: &[Vector<Real>],
    edge_dirs: &[Vector<Real>],
    triangle: &Triangle,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    let mut test = |axis: Vector<Real>| {
        if let Some(axis) = axis.try_normalize(ZERO_TOLERANCE) {
            let separation =
                polyhedron_triangle_compute_separation_wrt_line(vertices, triangle, &axis);

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis;
            }
        }
    };

    for normal in face_normals {
        test(*normal);
    }

    test(triangle.scaled_normal());

    for edge in triangle.edges() {
        let tri_dir = edge.scaled_direction();

        for dir in edge_dirs {
            test(dir.cross(&tri_dir));
        }
    }

    (best_separation, best_dir)
}
