use crate::bounding_volume::{BoundingCapsule, BoundingSphere};
use crate::query::{closest_points_point_segment, closest_points_segment_segment};

/// Tests whether two spheres intersect.
#[inline]
pub fn intersection_test_sphere_sphere(sphere1: &BoundingSphere, sphere2: &BoundingSphere) -> bool {
    let reach = sphere1.radius() + sphere2.radius();
    na::distance_squared(&sphere1.center(), &sphere2.center()) <= reach * reach
}

/// Tests whether a sphere and a capsule intersect.
#[inline]
pub fn intersection_test_sphere_capsule(sphere: &BoundingSphere, capsule: &BoundingCapsule) -> bool {
    let reach = sphere.radius() + capsule.radius();
    closest_points_point_segment(&sphere.center(), capsule.centerline()).distance_squared
        <= reach * reach
}

/// Tests whether two capsules intersect.
#[inline]
pub fn intersection_test_capsule_capsule(
    capsule1: &BoundingCapsule,
    capsule2: &BoundingCapsule,
) -> bool {
    let reach = capsule1.radius() + capsule2.radius();
    closest_points_segment_segment(capsule1.centerline(), capsule2.centerline()).distance_squared
        <= reach * reach
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Segment;
    use na::Point3;

    #[test]
    fn capsule_pairs() {
        let vertical = BoundingCapsule::new(
            Segment::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
            0.5,
        );
        let horizontal = BoundingCapsule::new(
            Segment::new(Point3::new(-1.0, 0.0, 0.9), Point3::new(1.0, 0.0, 0.9)),
            0.5,
        );
        assert!(intersection_test_capsule_capsule(&vertical, &horizontal));

        let far = BoundingCapsule::new(
            Segment::new(Point3::new(-1.0, 0.0, 1.1), Point3::new(1.0, 0.0, 1.1)),
            0.5,
        );
        assert!(!intersection_test_capsule_capsule(&vertical, &far));

        let sphere = BoundingSphere::new(Point3::new(0.0, 2.0, 0.0), 0.6);
        assert!(intersection_test_sphere_capsule(&sphere, &vertical));
        let sphere = BoundingSphere::new(Point3::new(0.0, 2.2, 0.0), 0.6);
        assert!(!intersection_test_sphere_capsule(&sphere, &vertical));
    }
}
