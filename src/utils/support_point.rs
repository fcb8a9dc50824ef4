use crate::math::{Point, Real, Vector};

/// The index of the point of `points` furthest along `dir`.
///
/// # Panics
/// Panics if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// The smallest and largest projections of `points` on `axis`.
///
/// Returns `(0, 0)` if there is no point.
pub fn point_cloud_project_on_axis(points: &[Point<Real>], axis: &Vector<Real>) -> (Real, Real) {
    if points.is_empty() {
        return (0.0, 0.0);
    }

    points.iter().fold((Real::MAX, -Real::MAX), |(min, max), pt| {
        let dot = pt.coords.dot(axis);
        (min.min(dot), max.max(dot))
    })
}
