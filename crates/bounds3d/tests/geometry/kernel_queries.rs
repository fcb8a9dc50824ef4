use bounds3d::bounding_volume::{Aabb, Obb};
use bounds3d::math::{Real, Rotation};
use bounds3d::query::{self, PlaneSide, Ray};
use bounds3d::shape::{Plane, Segment, Triangle};
use na::{Point3, Unit, Vector3};

#[test]
fn parallel_segments_distance() {
    let seg1 = Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));

    assert_eq!(query::distance_segment_segment(&seg1, &seg2), 1.0);
    assert_eq!(query::distance_segment_segment(&seg2, &seg1), 1.0);
    assert!(query::intersection_test_segment_segment(&seg1, &seg2).is_none());
}

#[test]
fn degenerate_segment_is_a_point() {
    let seg = Segment::new(Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 2.0, 3.0));
    let pt = Point3::new(1.0, 2.0, 5.0);

    assert_relative_eq!(query::distance_point_segment(&pt, &seg), 2.0);
}

#[test]
fn ray_aabb_entry_and_exit() {
    let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
    let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());
    let hit = query::cast_ray_aabb(&ray, &aabb);

    assert_eq!(hit.count(), 2);
    assert_relative_eq!(hit.closest().unwrap().distance, 4.0);
    assert_relative_eq!(hit.farthest().unwrap().distance, 6.0);

    let inside = Ray::new(Point3::origin(), Vector3::x());
    let hit = query::cast_ray_aabb(&inside, &aabb);
    assert_eq!(hit.count(), 1);
    assert_relative_eq!(hit.closest().unwrap().distance, 1.0);

    let away = Ray::new(Point3::new(-5.0, 0.0, 0.0), -Vector3::x());
    assert!(!query::cast_ray_aabb(&away, &aabb).is_hit());
}

#[test]
fn ray_triangle_backface_culling() {
    let tri = Triangle::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let from_front = Ray::new(Point3::new(0.2, 0.2, 1.0), -Vector3::z());
    let from_back = Ray::new(Point3::new(0.2, 0.2, -1.0), Vector3::z());

    let hit = query::cast_ray_triangle(&from_front, &tri, true).unwrap();
    assert_relative_eq!(hit.distance, 1.0);
    assert_relative_eq!(hit.point, Point3::new(0.2, 0.2, 0.0));

    assert!(query::cast_ray_triangle(&from_back, &tri, true).is_none());
    assert!(query::cast_ray_triangle(&from_back, &tri, false).is_some());
}

#[test]
fn point_triangle_voronoi_regions() {
    let tri = Triangle::new(
        Point3::origin(),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );

    // Face, edge, and vertex regions.
    let face = query::closest_points_point_triangle(&Point3::new(0.5, 0.5, 3.0), &tri);
    assert_relative_eq!(face.point2, Point3::new(0.5, 0.5, 0.0));
    assert_relative_eq!(face.distance(), 3.0);

    let edge = query::closest_points_point_triangle(&Point3::new(1.0, -1.0, 0.0), &tri);
    assert_relative_eq!(edge.point2, Point3::new(1.0, 0.0, 0.0));

    let vertex = query::closest_points_point_triangle(&Point3::new(-1.0, -1.0, 0.0), &tri);
    assert_relative_eq!(vertex.point2, Point3::origin());
}

#[test]
fn plane_classification() {
    let plane = Plane::new(Vector3::z_axis(), -1.0);

    assert_eq!(plane.classify_point(&Point3::new(0.0, 0.0, 2.0)), PlaneSide::Front);
    assert_eq!(plane.classify_point(&Point3::new(0.0, 0.0, 0.0)), PlaneSide::Back);
    assert_eq!(plane.classify_point(&Point3::new(3.0, 3.0, 1.0)), PlaneSide::Intersects);

    let seg = Segment::new(Point3::origin(), Point3::new(0.0, 0.0, 2.0));
    assert_eq!(query::classify_segment(&plane, &seg), PlaneSide::Intersects);
    let inter = query::intersection_segment_plane(&seg, &plane).unwrap();
    assert_relative_eq!(inter.point, Point3::new(0.0, 0.0, 1.0));

    let aabb = Aabb::new(Point3::new(0.0, 0.0, 3.0), Vector3::repeat(1.0));
    assert_eq!(query::classify_aabb(&plane, &aabb), PlaneSide::Front);
    // Touching the plane counts as intersecting.
    let aabb = Aabb::new(Point3::new(0.0, 0.0, 2.0), Vector3::repeat(1.0));
    assert_eq!(query::classify_aabb(&plane, &aabb), PlaneSide::Intersects);
}

#[test]
fn plane_plane_line() {
    let p1 = Plane::new(Vector3::z_axis(), 0.0);
    let p2 = Plane::new(Unit::new_normalize(Vector3::new(1.0, 0.0, 0.0)), -2.0);
    let line = query::intersection_plane_plane(&p1, &p2).unwrap();

    assert_relative_eq!(line.dir.normalize().dot(&Vector3::y()).abs(), 1.0);
    assert_relative_eq!(p1.signed_distance(&line.origin), 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(p2.signed_distance(&line.origin), 0.0, epsilon = 1.0e-5);

    let parallel = Plane::new(Vector3::z_axis(), -3.0);
    assert!(query::intersection_plane_plane(&p1, &parallel).is_none());
    assert_relative_eq!(query::distance_plane_plane(&p1, &parallel), 3.0);
}

#[test]
fn near_parallel_obb_sat() {
    let tiny: Real = 1.0e-7;
    let obb1 = Obb::new(Point3::origin(), &Rotation::identity(), Vector3::repeat(1.0));
    let rot = Rotation::from_axis_angle(&Vector3::z_axis(), tiny);

    let touching = Obb::new(Point3::new(1.99, 0.0, 0.0), &rot, Vector3::repeat(1.0));
    let apart = Obb::new(Point3::new(2.01, 0.0, 0.0), &rot, Vector3::repeat(1.0));
    let diagonal = Obb::new(
        Point3::new(2.0, 2.0, 0.0),
        &Rotation::from_axis_angle(&Vector3::z_axis(), Real::to_radians(45.0)),
        Vector3::repeat(1.0),
    );

    assert!(query::intersection_test_obb_obb(&obb1, &touching));
    assert!(!query::intersection_test_obb_obb(&obb1, &apart));
    assert!(!query::intersection_test_obb_obb(&obb1, &diagonal));
}

#[test]
fn triangle_triangle() {
    let tri1 = Triangle::new(
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    );
    let crossing = Triangle::new(
        Point3::new(0.0, 0.0, -1.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(0.0, 2.0, 0.5),
    );
    let above = Triangle::new(
        Point3::new(-1.0, -1.0, 2.0),
        Point3::new(1.0, -1.0, 2.0),
        Point3::new(0.0, 1.0, 2.0),
    );

    assert!(query::intersection_test_triangle_triangle(&tri1, &crossing));
    assert!(!query::intersection_test_triangle_triangle(&tri1, &above));
    assert_relative_eq!(query::distance_triangle_triangle(&tri1, &above), 2.0);
}
