//! Convex hull of a mesh used as bounding volume.

use crate::bounding_volume::bounding_volume::check_corner_buffer;
use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume, CornerCache, ShapeType};
use crate::math::{Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::query::{self, sat, BoundingIntersection, ContainmentType, PlaneSide, Ray};
use crate::shape::{Plane, Triangle};
use crate::transformation;
use crate::utils;

/// The convex hull of a set of points, used as bounding volume.
///
/// The faces are triangles, counter-clockwise when seen from the outside. A hull built
/// from flat points (coincident, collinear or coplanar) has no face: it is the convex
/// polygon, segment, or point formed by its vertices, given in order along its
/// boundary. Such a flat hull has a zero volume.
///
/// A hull is never empty: without any point, it is the single vertex at the origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct MeshHull {
    vertices: Vec<Point<Real>>,
    faces: Vec<[u32; 3]>,
    #[cfg_attr(feature = "serde", serde(skip))]
    corners: CornerCache,
}

impl Default for MeshHull {
    fn default() -> Self {
        MeshHull::from_points(&[])
    }
}

// The hull of `points`, collapsed to the origin if there is none.
fn hull_of(points: &[Point<Real>]) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    if points.is_empty() {
        (vec![Point::origin()], Vec::new())
    } else {
        transformation::convex_hull(points)
    }
}

impl MeshHull {
    /// Computes the convex hull of the given points.
    ///
    /// Without any point, the hull is the single vertex at the origin.
    pub fn from_points(points: &[Point<Real>]) -> MeshHull {
        let (vertices, faces) = hull_of(points);
        MeshHull {
            vertices,
            faces,
            corners: CornerCache::default(),
        }
    }

    /// Creates a hull from vertices and faces known to form a convex polyhedron.
    ///
    /// The faces must be counter-clockwise when seen from the outside.
    ///
    /// # Panics
    /// Panics if a face index is not a valid vertex index.
    pub fn from_convex_mesh(vertices: Vec<Point<Real>>, faces: Vec<[u32; 3]>) -> MeshHull {
        assert!(
            faces.iter().flatten().all(|i| (*i as usize) < vertices.len()),
            "A face index is out of the vertex buffer."
        );
        MeshHull {
            vertices,
            faces,
            corners: CornerCache::default(),
        }
    }

    /// The vertices of this hull.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangular faces of this hull, as indices of its vertices.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Does this hull have no interior?
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.faces.is_empty()
    }

    /// The axis-aligned box of the vertices of this hull.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }

    /// The triangles bounding this hull.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.faces.iter().map(move |[a, b, c]| {
            Triangle::new(
                self.vertices[*a as usize],
                self.vertices[*b as usize],
                self.vertices[*c as usize],
            )
        })
    }

    /// The outward-facing planes of the faces of this hull.
    ///
    /// Degenerate faces are skipped.
    pub fn face_planes(&self) -> impl Iterator<Item = Plane> + '_ {
        self.triangles().filter_map(|tri| tri.plane())
    }

    /// Triangles covering a flat hull, fanned from its first vertex.
    ///
    /// A flat hull with two vertices is covered by one degenerate triangle, and a single
    /// vertex by a triangle collapsed to that point.
    pub fn flat_triangles(&self) -> Vec<Triangle> {
        let v = &self.vertices;

        match v.len() {
            0 => Vec::new(),
            1 => vec![Triangle::new(v[0], v[0], v[0])],
            2 => vec![Triangle::new(v[0], v[1], v[1])],
            n => (1..n - 1)
                .map(|i| Triangle::new(v[0], v[i], v[i + 1]))
                .collect(),
        }
    }

    // The triangles covering the boundary of this hull, flat or not.
    fn boundary_triangles(&self) -> Vec<Triangle> {
        if self.is_flat() {
            self.flat_triangles()
        } else {
            self.triangles().collect()
        }
    }

    /// Grows this hull so that it contains the given points.
    pub fn merge_points(&mut self, points: &[Point<Real>]) {
        let mut all = self.vertices.clone();
        all.extend_from_slice(points);
        self.fit_points(&all);
    }
}

impl BoundingVolume for MeshHull {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Mesh
    }

    /// The average of the vertices, the origin if there is none.
    fn center(&self) -> Point<Real> {
        if self.vertices.is_empty() {
            Point::origin()
        } else {
            utils::center(&self.vertices)
        }
    }

    fn volume(&self) -> Real {
        if self.is_flat() {
            return 0.0;
        }

        let center = self.center();
        self.triangles()
            .map(|tri| {
                let a = tri.a - center;
                let b = tri.b - center;
                let c = tri.c - center;
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    /// The vertices of the hull.
    #[inline]
    fn corner_count(&self) -> usize {
        self.vertices.len()
    }

    fn compute_corners(&self, out: &mut [Point<Real>]) {
        check_corner_buffer(out, self.vertices.len());
        out[..self.vertices.len()].copy_from_slice(&self.vertices);
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
        utils::point_cloud_project_on_axis(&self.vertices, axis)
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        MeshHull::aabb(self)
    }

    #[inline]
    fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::from_points(&self.vertices)
    }

    fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        if !self.is_flat() && self.contains_point(pt) == ContainmentType::Inside {
            return *pt;
        }

        self.boundary_triangles()
            .iter()
            .map(|tri| query::closest_points_point_triangle(pt, tri))
            .min_by(|a, b| a.distance_squared.total_cmp(&b.distance_squared))
            .map(|res| res.point2)
            .unwrap_or_else(Point::origin)
    }

    fn contains_point(&self, pt: &Point<Real>) -> ContainmentType {
        let inside = if self.is_flat() {
            self.boundary_triangles()
                .iter()
                .any(|tri| query::intersection_test_point_triangle(pt, tri))
        } else {
            self.face_planes()
                .all(|plane| plane.signed_distance(pt) <= ZERO_TOLERANCE)
        };

        if inside {
            ContainmentType::Inside
        } else {
            ContainmentType::Outside
        }
    }

    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        if self.is_flat() {
            return self
                .flat_triangles()
                .iter()
                .any(|flat| query::intersection_test_triangle_triangle(flat, tri));
        }

        let normals: Vec<_> = self.face_planes().map(|p| p.normal.into_inner()).collect();
        let edge_dirs: Vec<_> = self
            .triangles()
            .flat_map(|t| t.edges())
            .map(|e| e.scaled_direction())
            .collect();

        sat::polyhedron_triangle_find_separating_axis(&self.vertices, &normals, &edge_dirs, tri).0
            <= 0.0
    }

    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> BoundingIntersection {
        query::cast_ray_mesh_hull(ray, self)
    }

    #[inline]
    fn intersects_plane(&self, plane: &Plane) -> PlaneSide {
        query::classify_points(plane, &self.vertices)
    }

    /// Transforms the vertices. Faces are flipped by mirroring transformations to stay
    /// counter-clockwise.
    fn transform(
        &mut self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) {
        for pt in &mut self.vertices {
            *pt = utils::scaled_transform_point(pt, scale, rotation, translation);
        }

        if scale.x * scale.y * scale.z < 0.0 {
            for face in &mut self.faces {
                face.swap(1, 2);
            }
        }

        self.corners.invalidate();
    }

    fn fit_points(&mut self, points: &[Point<Real>]) {
        let (vertices, faces) = hull_of(points);
        self.vertices = vertices;
        self.faces = faces;
        self.corners.invalidate();
    }
}
