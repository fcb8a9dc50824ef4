use super::random_volumes::{corners_of, Generator};
use bounds3d::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingShape, BoundingSphere, BoundingVolume,
    MeshHull, Obb, ShapeType, SubRange,
};
use bounds3d::math::{Point, Real, Rotation, Vector};
use bounds3d::query::ContainmentType;
use na::{Point3, Vector3};

fn empty_shapes() -> [BoundingShape; 6] {
    [
        Aabb::default().into(),
        Obb::default().into(),
        BoundingSphere::default().into(),
        BoundingCapsule::default().into(),
        BoundingFrustum::default().into(),
        MeshHull::default().into(),
    ]
}

#[test]
fn every_volume_contains_its_center() {
    let mut gen = Generator::new(42);

    for _ in 0..20 {
        for shape in gen.shapes() {
            assert_eq!(
                shape.contains_point(&shape.center()),
                ContainmentType::Inside,
                "{:?}",
                shape.shape_type()
            );
        }
    }
}

#[test]
fn extend_points_is_tight() {
    let mut gen = Generator::new(7);

    for _ in 0..20 {
        let pts = gen.points(16, 10.0);
        let mut aabb = Aabb::new(pts[0], Vector::zeros());
        aabb.extend_points(&pts[1..]);

        for pt in &pts {
            assert_eq!(aabb.contains_point(pt), ContainmentType::Inside);
        }

        // Every face of the box touches a point.
        for i in 0..3 {
            let min = pts.iter().map(|pt| pt[i]).fold(Real::MAX, Real::min);
            let max = pts.iter().map(|pt| pt[i]).fold(-Real::MAX, Real::max);
            assert_relative_eq!(aabb.mins()[i], min, epsilon = 1.0e-5);
            assert_relative_eq!(aabb.maxs()[i], max, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn merge_encloses_the_corners_of_both_volumes() {
    let mut gen = Generator::new(1234);

    for _ in 0..10 {
        let shapes = gen.shapes();

        for a in &shapes {
            for b in &shapes {
                let merged = a.merged(b);
                assert_eq!(merged.shape_type(), a.shape_type());

                for pt in corners_of(a).iter().chain(corners_of(b).iter()) {
                    let dist = merged.distance_squared_to_point(pt).sqrt();
                    assert!(
                        dist <= 1.0e-3,
                        "{:?} merged with {:?} misses {} by {}",
                        a.shape_type(),
                        b.shape_type(),
                        pt,
                        dist
                    );
                }
            }
        }
    }
}

#[test]
fn fitted_volumes_enclose_their_points() {
    let mut gen = Generator::new(99);

    for _ in 0..10 {
        let pts = gen.points(30, 4.0);

        for mut shape in empty_shapes() {
            shape.fit_points(&pts);

            for pt in &pts {
                let dist = shape.distance_squared_to_point(pt).sqrt();
                assert!(dist <= 1.0e-3, "{:?} misses {}", shape.shape_type(), pt);
            }
        }
    }
}

#[test]
fn degenerate_fits() {
    let single = [Point3::new(1.0, 2.0, 3.0)];

    for mut shape in empty_shapes() {
        assert_eq!(
            shape.contains_point(&shape.center()),
            ContainmentType::Inside,
            "{:?}",
            shape.shape_type()
        );

        shape.fit_points(&[]);
        assert_eq!(shape.volume(), 0.0, "{:?}", shape.shape_type());
        assert_relative_eq!(shape.center(), Point::origin());
        assert_eq!(
            shape.contains_point(&shape.center()),
            ContainmentType::Inside,
            "{:?}",
            shape.shape_type()
        );

        shape.fit_points(&single);
        assert_eq!(shape.volume(), 0.0, "{:?}", shape.shape_type());
        assert_relative_eq!(shape.center(), single[0], epsilon = 1.0e-5);
        assert_eq!(shape.contains_point(&single[0]), ContainmentType::Inside);
    }
}

#[test]
fn capsule_fit_degrades_on_collinear_points() {
    let pts: Vec<_> = (0..10)
        .map(|i| Point3::new(i as Real, 2.0 * i as Real, 1.0))
        .collect();
    let mut capsule = BoundingCapsule::default();
    capsule.fit_points(&pts);

    assert!(capsule.centerline().is_degenerate());
    for pt in &pts {
        assert_eq!(capsule.contains_point(pt), ContainmentType::Inside);
    }

    // A thick point cloud gives a capsule along its main direction.
    let mut gen = Generator::new(5);
    let pts: Vec<_> = (0..50)
        .map(|_| {
            let t = gen.real(-10.0, 10.0);
            Point3::new(t, gen.real(-0.5, 0.5), gen.real(-0.5, 0.5))
        })
        .collect();
    capsule.fit_points(&pts);

    let dir = capsule.centerline().direction().unwrap();
    assert!(dir.x.abs() > 0.99);
    assert!(capsule.radius() < 1.0);
}

#[test]
fn compute_from_sub_ranges() {
    let buffer = vec![
        Point3::new(100.0, 0.0, 0.0),
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-100.0, 0.0, 0.0),
    ];

    let mut aabb = Aabb::default();
    aabb.compute_from_points(&buffer, Some(SubRange::new(1, 2)));
    assert_eq!(aabb.mins(), Point3::new(-1.0, -1.0, -1.0));
    assert_eq!(aabb.maxs(), Point3::new(1.0, 1.0, 1.0));

    let indices: Vec<u16> = vec![3, 0, 1];
    let mut sphere = BoundingSphere::default();
    sphere.compute_from_indexed_points(&buffer, &indices, Some(SubRange::new(0, 2)));
    assert_relative_eq!(sphere.center(), Point3::origin());
    assert_relative_eq!(sphere.radius(), 100.0);

    let mut obb = Obb::default();
    obb.compute_from_points(&buffer, None);
    for pt in &buffer {
        assert!(obb.distance_squared_to_point(pt) <= 1.0e-6);
    }
}

#[test]
#[should_panic]
fn sub_range_out_of_bounds() {
    let buffer = vec![Point3::origin(); 3];
    let mut aabb = Aabb::default();
    aabb.compute_from_points(&buffer, Some(SubRange::new(2, 2)));
}

#[test]
#[should_panic]
fn undersized_corner_buffer() {
    let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
    let mut out = [Point3::origin(); 4];
    aabb.compute_corners(&mut out);
}

#[test]
fn corners_are_cached_until_mutation() {
    let mut sphere = BoundingSphere::new(Point3::origin(), 1.0);
    assert_eq!(sphere.corners().len(), 6);
    assert!(sphere.corners().contains(&Point3::new(1.0, 0.0, 0.0)));

    sphere.set_radius(2.0);
    assert!(sphere.corners().contains(&Point3::new(2.0, 0.0, 0.0)));

    let mut capsule = BoundingCapsule::from_sphere(&sphere);
    assert_eq!(capsule.corners().len(), 10);
}

#[test]
fn transformed_volumes_enclose_transformed_corners() {
    let mut gen = Generator::new(31);

    for _ in 0..10 {
        let scale = gen.extents();
        let rotation = gen.rotation();
        let translation = gen.point(3.0).coords;
        let transform = |pt: &Point<Real>| rotation * pt.coords.component_mul(&scale) + translation;

        for mut shape in gen.shapes() {
            let corners = corners_of(&shape);
            shape.transform(&scale, &rotation, &translation);

            for pt in &corners {
                let moved = Point::from(transform(pt));
                let dist = shape.distance_squared_to_point(&moved).sqrt();
                assert!(dist <= 1.0e-3, "{:?} misses {}", shape.shape_type(), moved);
            }
        }
    }
}

#[test]
fn rigid_transforms_preserve_volumes() {
    let mut gen = Generator::new(8);
    let rotation: Rotation<Real> = gen.rotation();
    let translation = gen.point(3.0).coords;

    for mut shape in gen.shapes() {
        if matches!(shape.shape_type(), ShapeType::AxisAlignedBox) {
            continue;
        }

        let volume = shape.volume();
        shape.transform(&Vector::repeat(1.0), &rotation, &translation);
        assert_relative_eq!(shape.volume(), volume, max_relative = 1.0e-3);
    }
}

#[test]
fn frustum_box_containment() {
    let proj = na::Perspective3::new(1.0, std::f32::consts::FRAC_PI_2 as Real, 1.0, 10.0);
    let view = na::Isometry3::look_at_rh(&Point3::origin(), &Point3::new(0.0, 0.0, -1.0), &Vector3::y());
    let frustum: BoundingShape = BoundingFrustum::from_view_projection(&(proj.to_homogeneous() * view.to_homogeneous()))
        .unwrap()
        .into();

    let visible: BoundingShape = Aabb::new(Point3::new(0.0, 0.0, -5.0), Vector3::repeat(1.0)).into();
    let clipped: BoundingShape = Aabb::new(Point3::new(0.0, 0.0, -10.0), Vector3::repeat(1.0)).into();
    let behind: BoundingShape = Aabb::new(Point3::new(0.0, 0.0, 5.0), Vector3::repeat(1.0)).into();
    let rotated: BoundingShape = Obb::new(
        Point3::new(0.0, 0.0, -5.0),
        &Rotation::from_euler_angles(0.5, 0.2, 0.1),
        Vector3::repeat(1.0),
    )
    .into();

    assert_eq!(frustum.contains(&visible), ContainmentType::Inside);
    assert_eq!(frustum.contains(&clipped), ContainmentType::Intersects);
    assert_eq!(frustum.contains(&behind), ContainmentType::Outside);
    assert_eq!(frustum.contains(&rotated), ContainmentType::Inside);
    assert!(frustum.intersects(&clipped));
    assert!(!behind.intersects(&frustum));
}
