use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::query::{BoundingIntersection, Ray};

/// Computes the parametric interval the line `origin + dir * t` spends inside of the
/// sphere of the given center and radius.
///
/// Returns `None` if the line misses the sphere or if `dir` is zero.
pub fn clip_line_sphere(
    center: &Point<Real>,
    radius: Real,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let dcenter = origin - center;
    let a = dir.norm_squared();

    if a <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return None;
    }

    let b = dcenter.dot(dir);
    let c = dcenter.norm_squared() - radius * radius;
    let delta = b * b - a * c;

    if delta < 0.0 {
        return None;
    }

    let sqrt_delta = delta.sqrt();
    Some(((-b - sqrt_delta) / a, (-b + sqrt_delta) / a))
}

/// Casts a ray on a sphere, reporting the entry and exit crossings.
pub fn cast_ray_sphere(ray: &Ray, sphere: &BoundingSphere) -> BoundingIntersection {
    match clip_line_sphere(&sphere.center(), sphere.radius(), &ray.origin, &ray.dir) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}

#[cfg(test)]
mod test {
    use super::cast_ray_sphere;
    use crate::bounding_volume::BoundingSphere;
    use crate::query::Ray;
    use na::{Point3, Vector3};

    #[test]
    fn ray_through_and_tangent_to_sphere() {
        let sphere = BoundingSphere::new(Point3::new(5.0, 0.0, 0.0), 1.0);
        let through = cast_ray_sphere(&Ray::new(Point3::origin(), Vector3::x()), &sphere);
        assert_eq!(through.count(), 2);
        assert_relative_eq!(through.closest().unwrap().distance, 4.0);
        assert_relative_eq!(through.farthest().unwrap().distance, 6.0);

        let tangent = cast_ray_sphere(
            &Ray::new(Point3::new(0.0, 1.0, 0.0), Vector3::x()),
            &sphere,
        );
        assert_eq!(tangent.count(), 1);
        assert_relative_eq!(tangent.closest().unwrap().point, Point3::new(5.0, 1.0, 0.0));

        let miss = cast_ray_sphere(&Ray::new(Point3::new(0.0, 2.0, 0.0), Vector3::x()), &sphere);
        assert!(!miss.is_hit());
    }
}
