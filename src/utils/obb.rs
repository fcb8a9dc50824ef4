use crate::math::{Matrix, Point, Real, Vector, DIM};

/// Computes a right-handed orthonormal frame aligned with the principal directions of
/// a set of points.
///
/// The columns of the returned matrix are the eigenvectors of the covariance matrix of
/// the points. The identity is returned if there are less than two points.
pub fn principal_axes(pts: &[Point<Real>]) -> Matrix<Real> {
    if pts.len() < 2 {
        return Matrix::identity();
    }

    let cov = crate::utils::cov(pts);
    let mut eigv = cov.symmetric_eigen().eigenvectors;

    if eigv.determinant() < 0.0 {
        eigv = -eigv;
    }

    eigv
}

/// Computes an oriented box enclosing the given points, as its center, its axes (as the
/// columns of a rotation matrix) and its half extents.
///
/// The box is aligned with the principal directions of the points. It is not
/// guaranteed to be the smallest enclosing oriented box, though it is a good one for
/// most purposes.
pub fn obb(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>, Vector<Real>) {
    if pts.is_empty() {
        return (Point::origin(), Matrix::identity(), Vector::zeros());
    }

    let axes = principal_axes(pts);
    let mut mins = Vector::repeat(Real::MAX);
    let mut maxs = Vector::repeat(-Real::MAX);

    for pt in pts {
        for i in 0..DIM {
            let dot = axes.column(i).dot(&pt.coords);
            mins[i] = mins[i].min(dot);
            maxs[i] = maxs[i].max(dot);
        }
    }

    let local_center = (maxs + mins) / 2.0;
    (
        Point::from(axes * local_center),
        axes,
        (maxs - mins) / 2.0,
    )
}

#[cfg(test)]
mod test {
    use super::obb;
    use crate::math::Real;
    use na::{Point3, Vector3};

    #[test]
    fn obb_of_elongated_cloud() {
        let dir = Vector3::new(1.0, 1.0, 0.0).normalize();
        let pts: Vec<_> = (0..=10)
            .map(|i| Point3::from(dir * (i as Real)) + Vector3::new(0.0, 0.0, (i % 2) as Real * 0.1))
            .collect();
        let (center, axes, extents) = obb(&pts);

        assert_relative_eq!(axes.determinant(), 1.0, epsilon = 1.0e-4);
        assert_relative_eq!(extents.max(), 5.0, epsilon = 1.0e-3);

        for pt in &pts {
            let local = axes.transpose() * (pt - center);
            for i in 0..3 {
                assert!(local[i].abs() <= extents[i] + 1.0e-4);
            }
        }
    }
}
