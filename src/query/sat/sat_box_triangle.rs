use crate::math::{Real, Vector, DIM, ZERO_TOLERANCE};
use crate::shape::Triangle;

/// Computes the separation between the box `[-half_extents, half_extents]` and a
/// triangle along the given axis.
///
/// The axis does not need to be normalized: only the sign of the result is meaningful
/// when it is not.
#[inline]
pub fn local_box_triangle_compute_separation_wrt_line(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
    axis: &Vector<Real>,
) -> Real {
    let pa = triangle.a.coords.dot(axis);
    let pb = triangle.b.coords.dot(axis);
    let pc = triangle.c.coords.dot(axis);
    let tri_min = pa.min(pb).min(pc);
    let tri_max = pa.max(pb).max(pc);
    let radius = half_extents.dot(&axis.abs());

    (tri_min - radius).max(-radius - tri_max)
}

/// Finds the best separating axis between the box `[-half_extents, half_extents]` and a
/// triangle among the box face normals, the triangle normal, and the nine cross products
/// of a box axis with a triangle edge.
pub fn local_box_triangle_find_separating_axis(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    let mut test = |axis: Vector<Real>| {
        let norm = axis.norm();

        if norm > ZERO_TOLERANCE {
            let axis = axis / norm;
            let separation =
                local_box_triangle_compute_separation_wrt_line(half_extents, triangle, &axis);

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis;
            }
        }
    };

    for i in 0..DIM {
        test(Vector::ith(i, 1.0));
    }

    test(triangle.scaled_normal());

    let edges = [
        triangle.b - triangle.a,
        triangle.c - triangle.b,
        triangle.a - triangle.c,
    ];

    for edge in &edges {
        for i in 0..DIM {
            test(Vector::<Real>::ith(i, 1.0).cross(edge));
        }
    }

    (best_separation, best_dir)
}
