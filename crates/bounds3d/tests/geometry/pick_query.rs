use bounds3d::bounding_volume::{Aabb, BoundingShape, BoundingSphere, MeshHull};
use bounds3d::math::Real;
use bounds3d::picking::{MeshHit, PickQuery, Pickable, PickingOptions};
use bounds3d::query::{self, Ray};
use bounds3d::shape::Triangle;
use na::{Point3, Vector3};

/// A triangle mesh with a box around it.
struct Mesh {
    bounding: BoundingShape,
    triangles: Vec<Triangle>,
}

impl Mesh {
    fn new(triangles: Vec<Triangle>) -> Self {
        let pts: Vec<_> = triangles.iter().flat_map(|t| t.vertices()).collect();
        let aabb = Aabb::from_points(&pts);
        Mesh {
            bounding: aabb.loosened(0.5).into(),
            triangles,
        }
    }
}

impl Pickable for Mesh {
    fn world_bounding(&self) -> &BoundingShape {
        &self.bounding
    }

    fn intersect_mesh(&self, ray: &Ray, ignore_backfaces: bool, hits: &mut Vec<MeshHit>) -> bool {
        let len = hits.len();
        hits.extend(self.triangles.iter().filter_map(|tri| {
            query::cast_ray_triangle(ray, tri, ignore_backfaces).map(|intersection| MeshHit {
                intersection,
                triangle: Some(*tri),
            })
        }));
        hits.len() > len
    }
}

fn sphere_at(x: Real) -> BoundingShape {
    BoundingSphere::new(Point3::new(x, 0.0, 0.0), 1.0).into()
}

#[test]
fn closest_pick_after_sort() {
    // Hit at distances 5 and 3.
    let far = sphere_at(6.0);
    let near = sphere_at(4.0);
    let ray = Ray::new(Point3::origin(), Vector3::x());
    let mut picks = PickQuery::new(ray, PickingOptions::empty());

    assert!(picks.add_pick(&far));
    assert!(picks.add_pick(&near));
    assert!(!picks.is_sorted());

    picks.sort();
    let order: Vec<*const BoundingShape> = picks.iter().map(|r| r.object() as *const _).collect();
    assert_eq!(order, [&near as *const BoundingShape, &far as *const BoundingShape]);
    assert_relative_eq!(picks.closest_pick().unwrap().distance(), 3.0);
    assert_relative_eq!(picks.farthest_pick().unwrap().distance(), 5.0);

    picks.sort();
    let again: Vec<*const BoundingShape> = picks.iter().map(|r| r.object() as *const _).collect();
    assert_eq!(order, again);
}

#[test]
fn empty_query() {
    let missed = sphere_at(-4.0);
    let ray = Ray::new(Point3::origin(), Vector3::x());
    let mut picks = PickQuery::new(ray, PickingOptions::empty());

    assert!(picks.closest_pick().is_none());
    assert!(picks.farthest_pick().is_none());

    assert!(!picks.add_pick(&missed));
    assert!(picks.closest_pick().is_none());
    assert!(picks.farthest_pick().is_none());

    picks.clear();
    assert!(picks.is_empty());
    assert_eq!(picks.len(), 0);
    picks.clear();
    assert!(picks.is_empty());
}

#[test]
fn mesh_phase_gates_on_bounding_phase() {
    // The bounding box of `offset` is hit, its single triangle is not.
    let hit = Mesh::new(vec![Triangle::new(
        Point3::new(5.0, -1.0, -1.0),
        Point3::new(5.0, 1.0, -1.0),
        Point3::new(5.0, 0.0, 1.0),
    )]);
    let offset = Mesh::new(vec![Triangle::new(
        Point3::new(3.0, 0.2, -1.0),
        Point3::new(3.0, 2.0, -1.0),
        Point3::new(3.0, 2.0, 1.0),
    )]);
    let ray = Ray::new(Point3::origin(), Vector3::x());

    let mut coarse = PickQuery::new(ray, PickingOptions::empty());
    assert!(coarse.add_pick(&hit));
    assert!(coarse.add_pick(&offset));
    assert_eq!(coarse.len(), 2);
    assert!(coarse.closest_pick().unwrap().mesh_hit().is_none());

    let mut fine = PickQuery::new(ray, PickingOptions::PRIMITIVE_PICKING);
    assert!(fine.add_pick(&hit));
    assert!(!fine.add_pick(&offset));
    let closest = fine.closest_pick().unwrap();
    assert!(std::ptr::eq(closest.object(), &hit));
    assert_relative_eq!(closest.distance(), 5.0);
    assert_relative_eq!(closest.bounding_hit().distance, 4.5);
}

#[test]
fn fine_distances_rank_before_bounding_distances() {
    // A large box with a far triangle, and a small box with a near triangle.
    let large = Mesh::new(vec![
        Triangle::new(
            Point3::new(2.0, -5.0, -5.0),
            Point3::new(2.0, 5.0, -5.0),
            Point3::new(2.0, 0.0, 5.0),
        ),
        Triangle::new(
            Point3::new(9.0, -5.0, -5.0),
            Point3::new(9.0, 5.0, -5.0),
            Point3::new(9.0, 0.0, 5.0),
        ),
    ]);
    let small = Mesh::new(vec![Triangle::new(
        Point3::new(4.0, -1.0, -1.0),
        Point3::new(4.0, 1.0, -1.0),
        Point3::new(4.0, 0.0, 1.0),
    )]);
    let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::x());
    let mut picks = PickQuery::new(ray, PickingOptions::PRIMITIVE_PICKING);
    assert!(picks.add_pick(&small));
    assert!(picks.add_pick(&large));

    // Both hit their first triangle: the large mesh at 2, the small one at 4.
    let closest = picks.closest_pick().unwrap();
    assert!(std::ptr::eq(closest.object(), &large));
    assert_relative_eq!(closest.distance(), 2.0);
}

#[test]
fn heterogeneous_candidates() {
    let hull: BoundingShape = MeshHull::from_points(&[
        Point3::new(7.0, -1.0, -1.0),
        Point3::new(9.0, -1.0, -1.0),
        Point3::new(8.0, 1.0, -1.0),
        Point3::new(8.0, 0.0, 1.0),
    ])
    .into();
    let sphere = sphere_at(3.0);
    let candidates: Vec<&dyn Pickable> = vec![&hull, &sphere];

    let ray = Ray::new(Point3::origin(), Vector3::x());
    let mut picks = PickQuery::new(ray, PickingOptions::PRIMITIVE_PICKING);
    for candidate in &candidates {
        assert!(picks.add_pick(*candidate));
    }

    assert_relative_eq!(picks.closest_pick().unwrap().distance(), 2.0);
    assert!(picks.farthest_pick().unwrap().distance() > 7.0);
}
