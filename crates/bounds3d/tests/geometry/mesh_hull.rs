use super::random_volumes::Generator;
use bounds3d::bounding_volume::{BoundingVolume, MeshHull};
use bounds3d::math::Real;
use bounds3d::query::{ContainmentType, Ray};
use bounds3d::shape::Triangle;
use na::{Point3, Vector3};

#[test]
fn hull_contains_its_vertices_and_input() {
    let mut gen = Generator::new(2024);

    for _ in 0..10 {
        let pts = gen.points(40, 3.0);
        let mut hull = MeshHull::from_points(&pts);

        assert!(!hull.is_flat());
        assert!(hull.volume() > 0.0);
        for pt in hull.vertices().to_vec().iter().chain(pts.iter()) {
            assert_eq!(hull.contains_point(pt), ContainmentType::Inside);
        }
        assert_eq!(hull.corners().len(), hull.vertices().len());
    }
}

#[test]
fn hull_faces_point_outward() {
    let mut gen = Generator::new(3);
    let hull = MeshHull::from_points(&gen.points(25, 2.0));
    let center = hull.center();

    for plane in hull.face_planes() {
        assert!(plane.signed_distance(&center) < 0.0);
    }
}

#[test]
fn ray_through_hull() {
    let cube: Vec<_> = (0..8)
        .map(|i| {
            Point3::new(
                (i & 1) as Real * 2.0 - 1.0,
                ((i >> 1) & 1) as Real * 2.0 - 1.0,
                ((i >> 2) & 1) as Real * 2.0 - 1.0,
            )
        })
        .collect();
    let hull = MeshHull::from_points(&cube);
    assert_relative_eq!(hull.volume(), 8.0, epsilon = 1.0e-4);

    let ray = Ray::new(Point3::new(-5.0, 0.2, 0.3), Vector3::x());
    let hit = hull.intersects_ray(&ray);
    assert_eq!(hit.count(), 2);
    assert_relative_eq!(hit.closest().unwrap().distance, 4.0, epsilon = 1.0e-4);
    assert_relative_eq!(hit.farthest().unwrap().distance, 6.0, epsilon = 1.0e-4);

    let miss = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vector3::x());
    assert!(!hull.intersects_ray(&miss).is_hit());
}

#[test]
fn flat_hull_is_a_polygon() {
    let square = [
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(2.0, 0.0, 1.0),
        Point3::new(2.0, 2.0, 1.0),
        Point3::new(0.0, 2.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
    ];
    let hull = MeshHull::from_points(&square);

    assert!(hull.is_flat());
    assert_eq!(hull.vertices().len(), 4);
    assert_eq!(hull.volume(), 0.0);
    assert_eq!(
        hull.contains_point(&Point3::new(1.5, 0.5, 1.0)),
        ContainmentType::Inside
    );
    assert_eq!(
        hull.contains_point(&Point3::new(1.5, 0.5, 1.5)),
        ContainmentType::Outside
    );

    let ray = Ray::new(Point3::new(1.0, 1.0, 5.0), -Vector3::z());
    let hit = hull.intersects_ray(&ray);
    assert_eq!(hit.count(), 1);
    assert_relative_eq!(hit.closest().unwrap().distance, 4.0);

    let crossing = Triangle::new(
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(1.5, 1.0, 2.0),
        Point3::new(0.5, 1.5, 2.0),
    );
    assert!(hull.intersects_triangle(&crossing));
}
