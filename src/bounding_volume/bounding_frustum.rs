//! Bounding frustum.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{BoundingSphere, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Point, ProjectionMatrix, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::{self, sat, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};
use crate::utils;
use na::Matrix4;

/// The corner indices of each face of a frustum, following the corner ordering of
/// [`BoundingVolume::compute_corners`].
const FACES_VERTEX_IDS: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // near
    [4, 5, 6, 7], // far
    [0, 3, 7, 4], // left
    [1, 2, 6, 5], // right
    [3, 2, 6, 7], // top
    [0, 1, 5, 4], // bottom
];

const EDGES_VERTEX_IDS: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (3, 2),
    (0, 3),
    (4, 5),
    (5, 6),
    (7, 6),
    (4, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

// Indices of the planes meeting at each corner.
const CORNER_PLANES: [[usize; 3]; 8] = [
    [BoundingFrustum::NEAR, BoundingFrustum::LEFT, BoundingFrustum::BOTTOM],
    [BoundingFrustum::NEAR, BoundingFrustum::RIGHT, BoundingFrustum::BOTTOM],
    [BoundingFrustum::NEAR, BoundingFrustum::RIGHT, BoundingFrustum::TOP],
    [BoundingFrustum::NEAR, BoundingFrustum::LEFT, BoundingFrustum::TOP],
    [BoundingFrustum::FAR, BoundingFrustum::LEFT, BoundingFrustum::BOTTOM],
    [BoundingFrustum::FAR, BoundingFrustum::RIGHT, BoundingFrustum::BOTTOM],
    [BoundingFrustum::FAR, BoundingFrustum::RIGHT, BoundingFrustum::TOP],
    [BoundingFrustum::FAR, BoundingFrustum::LEFT, BoundingFrustum::TOP],
];

/// A Bounding Frustum: the convex volume bounded by six planes, typically the view
/// volume of a camera.
///
/// The plane normals point outward: the inside of the frustum is the back side of all
/// of its planes. The frustum also keeps the view-projection matrix it was extracted
/// from. Merging or fitting a frustum moves its planes but leaves this matrix as is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BoundingFrustum {
    planes: [Plane; 6],
    matrix: ProjectionMatrix<Real>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for BoundingFrustum {
    /// The frustum of the identity matrix: the cube `[-1, 1]³`.
    fn default() -> Self {
        let planes = [
            Plane::new(-Vector::z_axis(), -1.0),
            Plane::new(Vector::z_axis(), -1.0),
            Plane::new(-Vector::x_axis(), -1.0),
            Plane::new(Vector::x_axis(), -1.0),
            Plane::new(Vector::y_axis(), -1.0),
            Plane::new(-Vector::y_axis(), -1.0),
        ];

        BoundingFrustum {
            planes,
            matrix: ProjectionMatrix::identity(),
            corners: CornerCache::default(),
        }
    }
}

impl BoundingFrustum {
    /// Index of the near plane.
    pub const NEAR: usize = 0;
    /// Index of the far plane.
    pub const FAR: usize = 1;
    /// Index of the left plane.
    pub const LEFT: usize = 2;
    /// Index of the right plane.
    pub const RIGHT: usize = 3;
    /// Index of the top plane.
    pub const TOP: usize = 4;
    /// Index of the bottom plane.
    pub const BOTTOM: usize = 5;

    /// Extracts the frustum of a view-projection matrix.
    ///
    /// The clip volume is assumed to be `[-1, 1]³` after the perspective division, as
    /// produced by [`na::Perspective3`] and [`na::Orthographic3`]. Returns `None` if one
    /// of the six planes is degenerate, e.g. for an infinite far plane.
    pub fn from_view_projection(matrix: &Matrix4<Real>) -> Option<BoundingFrustum> {
        let r0 = matrix.row(0);
        let r1 = matrix.row(1);
        let r2 = matrix.row(2);
        let r3 = matrix.row(3);

        // Each row combination is the inward-facing plane `r · (x, 1) >= 0`.
        let inward = [r3 + r2, r3 - r2, r3 + r0, r3 - r0, r3 - r1, r3 + r1];
        let mut planes = [Plane::new(Vector::x_axis(), 0.0); 6];

        for (plane, coeffs) in planes.iter_mut().zip(inward.iter()) {
            *plane = Plane::from_coefficients(-coeffs[0], -coeffs[1], -coeffs[2], -coeffs[3])?;
        }

        Some(BoundingFrustum {
            planes,
            matrix: *matrix,
            corners: CornerCache::default(),
        })
    }

    /// The six planes of this frustum, in near, far, left, right, top, bottom order.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// The view-projection matrix this frustum was extracted from.
    #[inline]
    pub fn matrix(&self) -> &ProjectionMatrix<Real> {
        &self.matrix
    }

    /// The near plane.
    #[inline]
    pub fn near(&self) -> &Plane {
        &self.planes[Self::NEAR]
    }

    /// The far plane.
    #[inline]
    pub fn far(&self) -> &Plane {
        &self.planes[Self::FAR]
    }

    /// The left plane.
    #[inline]
    pub fn left(&self) -> &Plane {
        &self.planes[Self::LEFT]
    }

    /// The right plane.
    #[inline]
    pub fn right(&self) -> &Plane {
        &self.planes[Self::RIGHT]
    }

    /// The top plane.
    #[inline]
    pub fn top(&self) -> &Plane {
        &self.planes[Self::TOP]
    }

    /// The bottom plane.
    #[inline]
    pub fn bottom(&self) -> &Plane {
        &self.planes[Self::BOTTOM]
    }

    /// Pushes the planes of this frustum outward, as little as possible, so that it
    /// contains `other`.
    pub fn merge_volume(&mut self, other: &dyn BoundingVolume) {
        for plane in &mut self.planes {
            let (_, max) = other.project_on_axis(&plane.normal);
            plane.offset = plane.offset.min(-max);
        }

        self.corners.invalidate();
    }

    fn corner_points(&self) -> [Point<Real>; 8] {
        let mut out = [Point::origin(); 8];
        self.compute_corners(&mut out);
        out
    }

    fn face_normals(&self) -> [Vector<Real>; 6] {
        self.planes.map(|plane| plane.normal.into_inner())
    }

    fn boundary_triangles(corners: &[Point<Real>; 8]) -> impl Iterator<Item = Triangle> + '_ {
        FACES_VERTEX_IDS.iter().flat_map(move |[a, b, c, d]| {
            [
                Triangle::new(corners[*a], corners[*b], corners[*c]),
                Triangle::new(corners[*a], corners[*c], corners[*d]),
            ]
        })
    }
}

/// The point where three planes meet.
///
/// Falls back to the origin if two of the planes are parallel.
fn intersection_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Point<Real> {
    let n23 = p2.normal.cross(&p3.normal);
    let denom = p1.normal.dot(&n23);

    if denom.abs() <= ZERO_TOLERANCE {
        log::debug!("Parallel frustum planes: the corner is set to the origin.");
        return Point::origin();
    }

    let n31 = p3.normal.cross(&p1.normal);
    let n12 = p1.normal.cross(&p2.normal);
    Point::from(-(n23 * p1.offset + n31 * p2.offset + n12 * p3.offset) / denom)
}

impl BoundingVolume for BoundingFrustum {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Frustum
    }

    fn center(&self) -> Point<Real> {
        utils::center(&self.corner_points())
    }

    /// Sums the volumes of the tetrahedra joining the center to each face triangle.
    fn volume(&self) -> Real {
        let corners = self.corner_points();
        let center = utils::center(&corners);

        Self::boundary_triangles(&corners)
            .map(|tri| {
                let a = tri.a - center;
                let b = tri.b - center;
                let c = tri.c - center;
                a.dot(&b.cross(&c)).abs() / 6.0
            })
            .sum()
    }

    #[inline]
    fn corner_count(&self) -> usize {
        8
    }

    fn compute_corners(&self, out: &mut [Point<Real>]) {
        check_corner_buffer(out, 8);

        for (pt, [i, j, k]) in out.iter_mut().zip(CORNER_PLANES.iter()) {
            *pt = intersection_three_planes(&self.planes[*i], &self.planes[*j], &self.planes[*k]);
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
        utils::point_cloud_project_on_axis(&self.corner_points(), axis)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::from_points(&self.corner_points())
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        if self.contains_point(pt) == ContainmentType::Inside {
            return *pt;
        }

        let corners = self.corner_points();
        Self::boundary_triangles(&corners)
            .map(|tri| query::closest_points_point_triangle(pt, &tri))
            .min_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared))
            .map(|res| res.point2)
            .unwrap_or(*pt)
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        if self
            .planes
            .iter()
            .all(|plane| plane.signed_distance(pt) <= ZERO_TOLERANCE)
        {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        let corners = self.corner_points();
        let edge_dirs = EDGES_VERTEX_IDS.map(|(a, b)| corners[b] - corners[a]);
        sat::polyhedron_triangle_find_separating_axis(&corners, &self.face_normals(), &edge_dirs, tri)
            .0
            <= 0.0
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_frustum(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_points(plane, &self.corner_points())
    }

    /// The view-projection matrix is updated so that it still maps the transformed
    /// frustum to the clip volume, unless the transformation is not invertible.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        for plane in &mut self.planes {
            *plane = plane.scaled_transformed(scale, rotation, translation);
        }

        let transform = Matrix4::new_translation(translation)
            * rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(scale);

        match transform.try_inverse() {
            Some(inv) => self.matrix *= inv,
            None => log::debug!("Singular frustum transformation: the matrix is left unchanged."),
        }

        self.corners.invalidate();
    }

    /// Keeps the orientation of the planes and moves each one to touch the points.
    fn fit_points(&mut self, points: &[Point<Real>]) {
        for plane in &mut self.planes {
            let (_, max) = utils::point_cloud_project_on_axis(points, &plane.normal);
            plane.offset = -max;
        }

        self.corners.invalidate();
    }
}
