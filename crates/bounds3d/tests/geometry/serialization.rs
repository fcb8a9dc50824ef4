#![cfg(feature = "serde-serialize")]

use super::random_volumes::Generator;
use bounds3d::bounding_volume::{Aabb, BoundingShape, BoundingVolume, SubRange};
use bounds3d::picking::PickingOptions;
use bounds3d::query::{BoundingIntersection, ContainmentType, LineIntersection, Ray};
use bounds3d::shape::{Ellipse, Plane, Segment, Triangle};
use na::{Point3, Vector3};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

fn round_trip<T: Serialize + DeserializeOwned + PartialEq + Debug>(value: &T) -> T {
    let json = serde_json::to_string(value).unwrap();
    let back: T = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, value, "{}", json);
    back
}

#[test]
fn primitives_round_trip() {
    let a = Point3::new(1.0, -2.0, 0.5);
    let b = Point3::new(0.25, 3.0, -1.0);
    let c = Point3::new(-4.0, 0.0, 2.0);

    let _ = round_trip(&Segment::new(a, b));
    let _ = round_trip(&Triangle::new(a, b, c));
    let _ = round_trip(&Plane::from_points(&a, &b, &c).unwrap());
    let _ = round_trip(&Ray::new(a, Vector3::new(0.0, 0.0, -1.0)));
    let _ = round_trip(&Ellipse::new(a, Vector3::x() * 2.0, Vector3::y()));
    let _ = round_trip(&SubRange::new(3, 7));
    let _ = round_trip(&ContainmentType::Intersects);
    let _ = round_trip(&(PickingOptions::PRIMITIVE_PICKING | PickingOptions::IGNORE_BACKFACES));
    let _ = round_trip(&BoundingIntersection::two(
        LineIntersection::new(1.0, a),
        LineIntersection::new(2.0, b),
    ));
}

#[test]
fn volumes_round_trip_with_dirty_corners() {
    let mut gen = Generator::new(11);

    for _ in 0..5 {
        for mut shape in gen.shapes() {
            // Fill the cache before serializing.
            let corners = shape.corners().to_vec();

            let mut back = round_trip(&shape);
            assert!(back.corner_cache().is_dirty());
            assert_eq!(back.corners(), &corners[..]);
        }
    }
}

#[test]
fn declaration_order_is_kept() {
    let json = serde_json::to_string(&Segment::new(Point3::origin(), Point3::new(1.0, 2.0, 3.0))).unwrap();
    assert_eq!(json, r#"{"start":[0.0,0.0,0.0],"end":[1.0,2.0,3.0]}"#);

    let json = serde_json::to_string(&Aabb::new(Point3::origin(), Vector3::repeat(1.0))).unwrap();
    assert_eq!(json, r#"{"center":[0.0,0.0,0.0],"extents":[1.0,1.0,1.0]}"#);

    let shape: BoundingShape = Aabb::new(Point3::origin(), Vector3::repeat(1.0)).into();
    let json = serde_json::to_string(&shape).unwrap();
    assert!(json.starts_with(r#"{"AxisAlignedBox":{"center""#));
}
