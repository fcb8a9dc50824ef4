//! Bounding capsule.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{BoundingSphere, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::{self, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Segment, Triangle};
use crate::utils;

/// A Bounding Capsule: the set of points within `radius` of the segment `centerline`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingCapsule {
    centerline: Segment,
    radius: Real,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for BoundingCapsule {
    fn default() -> Self {
        BoundingCapsule::from_sphere(&BoundingSphere::default())
    }
}

impl BoundingCapsule {
    /// Creates a capsule from its centerline and its radius.
    #[inline]
    pub fn new(centerline: Segment, radius: Real) -> BoundingCapsule {
        BoundingCapsule {
            centerline,
            radius: radius.abs(),
            corners: CornerCache::default(),
        }
    }

    /// A capsule with a zero-length centerline, equivalent to `sphere`.
    #[inline]
    pub fn from_sphere(sphere: &BoundingSphere) -> BoundingCapsule {
        BoundingCapsule::new(
            Segment::new(sphere.center(), sphere.center()),
            sphere.radius(),
        )
    }

    /// The segment this capsule is built around.
    #[inline]
    pub fn centerline(&self) -> &Segment {
        &self.centerline
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Changes the centerline of this capsule.
    #[inline]
    pub fn set_centerline(&mut self, centerline: Segment) {
        self.centerline = centerline;
        self.corners.invalidate();
    }

    /// Changes the radius of this capsule.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius.abs();
        self.corners.invalidate();
    }

    /// The two spheres at the ends of this capsule, as centers and radii.
    #[inline]
    pub fn end_spheres(&self) -> [(Point<Real>, Real); 2] {
        [
            (self.centerline.start, self.radius),
            (self.centerline.end, self.radius),
        ]
    }

    /// Grows this capsule so that it contains all the given spheres, keeping the
    /// direction of its centerline.
    ///
    /// A degenerate centerline takes the direction from its center to the furthest
    /// sphere.
    pub fn merge_spheres(&mut self, spheres: &[(Point<Real>, Real)]) {
        let center = self.centerline.center();
        let axis = self.centerline.direction().map(|d| d.into_inner()).or_else(|| {
            spheres
                .iter()
                .map(|(c, _)| c - center)
                .max_by(|a, b| a.norm_squared().total_cmp(&b.norm_squared()))
                .and_then(|v| v.try_normalize(ZERO_TOLERANCE))
        });

        let mut all: Vec<_> = self.end_spheres().to_vec();
        all.extend_from_slice(spheres);

        let (centerline, radius) = match axis {
            Some(axis) => enclose_spheres_along_axis(&center, &axis, &all),
            None => {
                let radius = all
                    .iter()
                    .map(|(c, r)| na::distance(c, &center) + r)
                    .fold(0.0, Real::max);
                (Segment::new(center, center), radius)
            }
        };

        self.centerline = centerline;
        self.radius = radius;
        self.corners.invalidate();
    }

    /// Grows this capsule so that it contains `other`, keeping the direction of its
    /// centerline.
    #[inline]
    pub fn merge_capsule(&mut self, other: &BoundingCapsule) {
        self.merge_spheres(&other.end_spheres());
    }

    /// Two unit vectors orthogonal to the centerline and to each other.
    fn radial_basis(&self) -> (Vector<Real>, Vector<Real>, Vector<Real>) {
        let dir = self
            .centerline
            .direction()
            .map(|d| d.into_inner())
            .unwrap_or_else(Vector::x);
        let helper = if dir.x.abs() < 0.9 {
            Vector::x()
        } else {
            Vector::y()
        };
        let u = dir.cross(&helper).normalize();
        let v = dir.cross(&u);
        (dir, u, v)
    }
}

/// Computes the capsule whose centerline lies on the line through `origin` along the
/// unit vector `axis` and which tightly encloses all the given spheres.
///
/// The radius is the largest distance from the line to a sphere boundary. The end
/// points are then pulled inward as far as every sphere remains covered.
fn enclose_spheres_along_axis(
    origin: &Point<Real>,
    axis: &Vector<Real>,
    spheres: &[(Point<Real>, Real)],
) -> (Segment, Real) {
    let params: Vec<_> = spheres
        .iter()
        .map(|(c, r)| {
            let dc = c - origin;
            let t = dc.dot(axis);
            let d = (dc - axis * t).norm();
            (t, d, *r)
        })
        .collect();

    let radius = params.iter().map(|(_, d, r)| d + r).fold(0.0, Real::max);

    let mut t0 = Real::MAX;
    let mut t1 = -Real::MAX;

    for (t, d, r) in &params {
        let reach = radius - r;
        let h = (reach * reach - d * d).max(0.0).sqrt();
        t0 = t0.min(t + h);
        t1 = t1.max(t - h);
    }

    if params.is_empty() {
        return (Segment::new(*origin, *origin), 0.0);
    }

    if t0 > t1 {
        let mid = (t0 + t1) * 0.5;
        t0 = mid;
        t1 = mid;
    }

    (
        Segment::new(origin + axis * t0, origin + axis * t1),
        radius,
    )
}

impl BoundingVolume for BoundingCapsule {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.centerline.center()
    }

    fn volume(&self) -> Real {
        let pi = na::convert::<f64, Real>(std::f64::consts::PI);
        let r2 = self.radius * self.radius;
        pi * r2 * self.centerline.length() + pi * r2 * self.radius * 4.0 / 3.0
    }

    /// The two tips of the capsule, then four points around each end of the centerline.
    #[inline]
    fn corner_count(&self) -> usize {
        10
    }

    fn compute_corners(&self, out: &mut [Point<Real>]) {
        check_corner_buffer(out, 10);
        let (dir, u, v) = self.radial_basis();
        let r = self.radius;
        let seg = &self.centerline;

        out[0] = seg.start - dir * r;
        out[1] = seg.end + dir * r;

        for (k, end) in [seg.start, seg.end].iter().enumerate() {
            let base = 2 + k * 4;
            out[base] = end + u * r;
            out[base + 1] = end + v * r;
            out[base + 2] = end - u * r;
            out[base + 3] = end - v * r;
        }
    }

    #[inline]
    fn corner_cache(&self) -> &CornerCache {
        &self.corners
    }

    #[inline]
    fn corner_cache_mut(&mut self) -> &mut CornerCache {
        &mut self.corners
    }

    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        let a = self.centerline.start.coords.dot(axis);
        let b = self.centerline.end.coords.dot(axis);
        let r = self.radius * axis.norm();
        (a.min(b) - r, a.max(b) + r)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(
            self.centerline.center(),
            self.centerline.extent() + self.radius,
        )
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let (proj, _) = query::project_point_segment(pt, &self.centerline);
        let delta = pt - proj;
        let dist = delta.norm();

        if dist <= self.radius {
            *pt
        } else {
            proj + delta * (self.radius / dist)
        }
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        let dist2 = query::closest_points_point_segment(pt, &self.centerline).distance_squared;

        if dist2 <= self.radius * self.radius {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    #[inline]
    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        query::closest_points_segment_triangle(&self.centerline, tri).distance_squared
            <= self.radius * self.radius
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_capsule(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_capsule(plane, self)
    }

    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        self.centerline = self
            .centerline
            .scaled_transformed(scale, rotation, translation);
        self.radius *= utils::max_abs_scale(scale);
        self.corners.invalidate();
    }

    /// Fits the centerline on the principal direction of the points.
    ///
    /// If the points are collinear or coplanar, the covariance matrix is singular and
    /// the fit degrades to a capsule with a zero-length centerline enclosing the
    /// points.
    fn fit_points(&mut self, points: &[Point<Real>]) {
        let fitted = match points.len() {
            0 => BoundingCapsule::default(),
            1 => BoundingCapsule::new(Segment::new(points[0], points[0]), 0.0),
            _ => {
                let (center, cov) = utils::center_cov(points);
                let eigen = cov.symmetric_eigen();
                let largest = eigen.eigenvalues.imax();
                let smallest = eigen.eigenvalues.imin();
                let scale = eigen.eigenvalues[largest].abs().max(1.0);

                if eigen.eigenvalues[smallest].abs() <= ZERO_TOLERANCE * scale {
                    log::debug!(
                        "Degenerate point set ({} points): fitting a sphere-equivalent capsule.",
                        points.len()
                    );
                    BoundingCapsule::from_sphere(&BoundingSphere::from_points(points))
                } else {
                    let axis = eigen.eigenvectors.column(largest).into_owned();
                    let spheres: Vec<_> = points.iter().map(|pt| (*pt, 0.0)).collect();
                    let (centerline, radius) = enclose_spheres_along_axis(&center, &axis, &spheres);
                    BoundingCapsule::new(centerline, radius)
                }
            }
        };

        self.centerline = fitted.centerline;
        self.radius = fitted.radius;
        self.corners.invalidate();
    }
}
