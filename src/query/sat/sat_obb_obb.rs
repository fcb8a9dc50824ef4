use crate::bounding_volume::Obb;
use crate::math::{Real, Vector, DIM, ZERO_TOLERANCE};

/// Computes the separation of two oriented boxes along the given unit axis.
///
/// A positive separation means the axis separates the boxes.
#[inline]
pub fn obb_obb_compute_separation_wrt_line(obb1: &Obb, obb2: &Obb, axis: &Vector<Real>) -> Real {
    let dist = (obb2.center() - obb1.center()).dot(axis).abs();
    dist - obb1.projected_radius(axis) - obb2.projected_radius(axis)
}

/// Finds the best separating axis among the face normals of both boxes.
pub fn obb_obb_find_separating_normal_twoway(obb1: &Obb, obb2: &Obb) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    for obb in [obb1, obb2] {
        for i in 0..DIM {
            let axis = obb.axis(i);
            let separation = obb_obb_compute_separation_wrt_line(obb1, obb2, &axis);

            if separation > best_separation {
                best_separation = separation;
                best_dir = axis;
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the cross products of an edge of each box.
///
/// Cross products of nearly parallel edges are skipped: their direction is dominated by
/// rounding errors and would report spurious separations.
pub fn obb_obb_find_separating_edge_twoway(obb1: &Obb, obb2: &Obb) -> (Real, Vector<Real>) {
    let mut best_separation = -Real::MAX;
    let mut best_dir = Vector::zeros();

    // We have 3 * 3 = 9 axes to test.
    for i in 0..DIM {
        let axis1 = obb1.axis(i);

        for j in 0..DIM {
            let axis = axis1.cross(&obb2.axis(j));
            let norm = axis.norm();

            if norm > ZERO_TOLERANCE {
                let axis = axis / norm;
                let separation = obb_obb_compute_separation_wrt_line(obb1, obb2, &axis);

                if separation > best_separation {
                    best_separation = separation;
                    best_dir = axis;
                }
            }
        }
    }

    (best_separation, best_dir)
}

/// Finds the best separating axis among the 15 candidate axes of two oriented boxes.
///
/// Returns the largest separation found and its axis. The boxes are disjoint if, and
/// only if, this separation is positive.
pub fn obb_obb_find_separating_axis(obb1: &Obb, obb2: &Obb) -> (Real, Vector<Real>) {
    let faces = obb_obb_find_separating_normal_twoway(obb1, obb2);

    if faces.0 > 0.0 {
        return faces;
    }

    let edges = obb_obb_find_separating_edge_twoway(obb1, obb2);

    if edges.0 > faces.0 {
        edges
    } else {
        faces
    }
}
