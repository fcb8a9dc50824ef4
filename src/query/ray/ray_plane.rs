use crate::math::ZERO_TOLERANCE;
use crate::query::{LineIntersection, Ray};
use crate::shape::Plane;

/// Casts a ray on a plane.
///
/// A ray lying on the plane hits it at its origin. A ray parallel to the plane but
/// off of it, or pointing away from it, misses.
pub fn cast_ray_plane(ray: &Ray, plane: &Plane) -> Option<LineIntersection> {
    let dist = plane.signed_distance(&ray.origin);
    let denom = plane.normal.dot(&ray.dir);

    if denom.abs() <= ZERO_TOLERANCE {
        return if dist.abs() <= ZERO_TOLERANCE {
            Some(LineIntersection::new(0.0, ray.origin))
        } else {
            None
        };
    }

    let t = -dist / denom;

    if t < 0.0 {
        None
    } else {
        Some(LineIntersection::on_ray(ray, t))
    }
}
