use bounds3d::bounding_volume::BoundingVolume;
use bounds3d::query::{self, QueryError, Ray};
use bounds3d::shape::{Ellipse, Plane, Segment};
use na::{Point3, Vector3};

use super::random_volumes::Generator;

fn ellipse() -> Ellipse {
    Ellipse::new(Point3::origin(), Vector3::x() * 2.0, Vector3::y())
}

#[test]
fn volumes_report_ellipse_queries_as_not_implemented() {
    let mut gen = Generator::new(0);

    for shape in gen.shapes() {
        assert!(matches!(
            shape.contains_ellipse(&ellipse()),
            Err(QueryError::NotImplemented { .. })
        ));
        assert!(matches!(
            shape.intersects_ellipse(&ellipse()),
            Err(QueryError::NotImplemented { .. })
        ));
    }
}

#[test]
fn primitives_report_ellipse_queries_as_not_implemented() {
    let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vector3::z());
    let seg = Segment::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    let plane = Plane::new(Vector3::z_axis(), 0.0);

    assert!(query::cast_ray_ellipse(&ray, &ellipse()).is_err());
    assert!(query::closest_points_segment_ellipse(&seg, &ellipse()).is_err());
    assert!(query::closest_points_point_ellipse(&Point3::origin(), &ellipse()).is_err());

    let err = query::classify_ellipse(&plane, &ellipse()).unwrap_err();
    assert_eq!(err.to_string(), "query not implemented: classify_ellipse");
}
