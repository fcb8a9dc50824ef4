use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::utils;
use arrayvec::ArrayVec;

/// Errors that can occur during convex hull computation.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum ConvexHullError {
    /// Less than four points were given.
    #[error("at least four points are needed to compute a 3D convex hull")]
    IncompleteInput,
    /// All the points lie on a single point, line, or plane.
    #[error("the points are coincident, collinear or coplanar")]
    Degenerate,
}

#[derive(Clone, Debug)]
struct Facet {
    pts: [usize; 3],
    normal: Vector<Real>,
    offset: Real,
}

impl Facet {
    fn new(pts: [usize; 3], points: &[Point<Real>]) -> Facet {
        let [a, b, c] = pts.map(|i| points[i]);
        let normal = (b - a)
            .cross(&(c - a))
            .try_normalize(Real::EPSILON)
            .unwrap_or_else(Vector::zeros);
        let offset = -normal.dot(&a.coords);
        Facet {
            pts,
            normal,
            offset,
        }
    }

    #[inline]
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.offset
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.pts;
        [(a, b), (b, c), (c, a)]
    }
}

/// Computes the convex hull of a set of 3d points.
///
/// Returns the hull vertices and its triangles, counter-clockwise when seen from the
/// outside. If the points are flat (coincident, collinear or coplanar), there is no
/// triangle and the vertices are those of the planar hull, see [`flat_convex_hull`].
pub fn convex_hull(points: &[Point<Real>]) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    match try_convex_hull(points) {
        Ok(res) => res,
        Err(err) => {
            log::debug!("Flat convex hull of {} points: {}.", points.len(), err);
            (flat_convex_hull(points), Vec::new())
        }
    }
}

/// Computes the convex hull of a set of flat points, i.e., lying on a common plane.
///
/// The hull is computed in the plane of the two main principal directions of the
/// points. Its vertices are returned in order along its boundary. Collinear points give
/// the two extremities of their segment, and coincident points a single point.
pub fn flat_convex_hull(points: &[Point<Real>]) -> Vec<Point<Real>> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let axes = utils::principal_axes(points);
    let eigenvalues = utils::cov(points).symmetric_eigen().eigenvalues;
    // `principal_axes` only flips the sign of the eigenvectors, the order is preserved.
    let smallest = eigenvalues.imin();
    let (i, j) = match smallest {
        0 => (1, 2),
        1 => (2, 0),
        _ => (0, 1),
    };
    let u = axes.column(i).into_owned();
    let v = axes.column(j).into_owned();

    let scale = crate::bounding_volume::Aabb::from_points(points)
        .extents()
        .max()
        .max(1.0);
    let eps = ZERO_TOLERANCE * scale;

    let mut projected: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(id, pt)| (pt.coords.dot(&u), pt.coords.dot(&v), id))
        .collect();
    projected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    // Andrew's monotone chain: lower then upper half.
    let mut hull = Vec::with_capacity(projected.len() + 1);
    push_half_chain(&mut hull, projected.iter(), eps);
    push_half_chain(&mut hull, projected.iter().rev(), eps);

    let mut result: Vec<Point<Real>> = Vec::with_capacity(hull.len());
    for (_, _, id) in hull {
        let pt = points[id];
        if result.iter().all(|other| na::distance(other, &pt) > eps) {
            result.push(pt);
        }
    }

    result
}

type ProjectedPoint = (Real, Real, usize);

fn push_half_chain<'a>(
    hull: &mut Vec<ProjectedPoint>,
    pts: impl Iterator<Item = &'a ProjectedPoint>,
    eps: Real,
) {
    let start = hull.len();
    let cross = |o: &ProjectedPoint, a: &ProjectedPoint, b: &ProjectedPoint| {
        (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
    };

    for pt in pts {
        while hull.len() >= start + 2
            && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], pt) <= eps * eps
        {
            let _ = hull.pop();
        }
        hull.push(*pt);
    }

    // The last point is the first one of the other half.
    let _ = hull.pop();
}

/// Computes the convex hull of a set of 3d points, failing on flat inputs.
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::IncompleteInput);
    }

    let scale = crate::bounding_volume::Aabb::from_points(points)
        .extents()
        .max()
        .max(1.0);
    let eps = ZERO_TOLERANCE * scale;

    let simplex = initial_simplex(points, eps)?;
    let mut facets = initial_facets(&simplex, points);

    let mut visible = Vec::new();
    let mut horizon = Vec::new();

    for (pid, pt) in points.iter().enumerate() {
        if simplex.contains(&pid) {
            continue;
        }

        visible.clear();
        visible.extend(
            facets
                .iter()
                .enumerate()
                .filter(|(_, f)| f.distance_to_point(pt) > eps)
                .map(|(i, _)| i),
        );

        if visible.is_empty() {
            continue;
        }

        // The horizon is made of the edges of visible facets that are not shared with
        // another visible facet.
        horizon.clear();
        for &i in &visible {
            for (a, b) in facets[i].edges() {
                let shared = visible
                    .iter()
                    .any(|&j| j != i && facets[j].edges().contains(&(b, a)));

                if !shared {
                    horizon.push((a, b));
                }
            }
        }

        for &i in visible.iter().rev() {
            let _ = facets.swap_remove(i);
        }

        for &(a, b) in &horizon {
            facets.push(Facet::new([a, b, pid], points));
        }
    }

    Ok(compact(points, &facets))
}

fn initial_simplex(
    points: &[Point<Real>],
    eps: Real,
) -> Result<ArrayVec<usize, 4>, ConvexHullError> {
    let mut simplex = ArrayVec::new();

    let i0 = utils::point_cloud_support_point_id(&-Vector::x(), points);
    let p0 = points[i0];
    simplex.push(i0);

    let (i1, d1) = furthest(points, |pt| na::distance(pt, &p0));
    if d1 <= eps {
        return Err(ConvexHullError::Degenerate);
    }
    let p1 = points[i1];
    simplex.push(i1);

    let dir = (p1 - p0) / d1;
    let (i2, d2) = furthest(points, |pt| {
        let dp = pt - p0;
        (dp - dir * dp.dot(&dir)).norm()
    });
    if d2 <= eps {
        return Err(ConvexHullError::Degenerate);
    }
    let p2 = points[i2];
    simplex.push(i2);

    let normal = (p1 - p0).cross(&(p2 - p0)).normalize();
    let (i3, d3) = furthest(points, |pt| normal.dot(&(pt - p0)).abs());
    if d3 <= eps {
        return Err(ConvexHullError::Degenerate);
    }
    simplex.push(i3);

    Ok(simplex)
}

fn furthest(points: &[Point<Real>], dist: impl Fn(&Point<Real>) -> Real) -> (usize, Real) {
    points
        .iter()
        .enumerate()
        .map(|(i, pt)| (i, dist(pt)))
        .fold((0, -Real::MAX), |best, curr| if curr.1 > best.1 { curr } else { best })
}

fn initial_facets(simplex: &[usize], points: &[Point<Real>]) -> Vec<Facet> {
    let [a, b, c, d] = [simplex[0], simplex[1], simplex[2], simplex[3]];
    let inner = utils::center(&[points[a], points[b], points[c], points[d]]);

    [[a, b, c], [a, c, d], [a, d, b], [b, d, c]]
        .iter()
        .map(|&[i, j, k]| {
            let facet = Facet::new([i, j, k], points);

            if facet.distance_to_point(&inner) > 0.0 {
                Facet::new([i, k, j], points)
            } else {
                facet
            }
        })
        .collect()
}

fn compact(points: &[Point<Real>], facets: &[Facet]) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let mut remap = vec![u32::MAX; points.len()];
    let mut vertices = Vec::new();

    let indices = facets
        .iter()
        .map(|facet| {
            facet.pts.map(|i| {
                if remap[i] == u32::MAX {
                    remap[i] = vertices.len() as u32;
                    vertices.push(points[i]);
                }
                remap[i]
            })
        })
        .collect();

    (vertices, indices)
}
