use crate::bounding_volume::BoundingCapsule;
use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::query::ray::clip_line_sphere;
use crate::query::{BoundingIntersection, Ray};
use crate::shape::Segment;

/// Computes the parametric interval the line `origin + dir * t` spends inside of the
/// capsule with the given centerline and radius.
///
/// The capsule is the union of two spheres and of a finite cylinder. Since it is
/// convex, the union of the three intervals is itself an interval.
pub fn clip_line_capsule(
    centerline: &Segment,
    radius: Real,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let mut result = clip_line_sphere(&centerline.start, radius, origin, dir);

    if centerline.is_degenerate() {
        return result;
    }

    result = union(
        result,
        clip_line_sphere(&centerline.end, radius, origin, dir),
    );
    union(
        result,
        clip_line_cylinder(centerline, radius, origin, dir),
    )
}

fn union(a: Option<(Real, Real)>, b: Option<(Real, Real)>) -> Option<(Real, Real)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

// Intersection of the line with the infinite cylinder around the centerline, restricted
// to the slab between the two end caps.
fn clip_line_cylinder(
    centerline: &Segment,
    radius: Real,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let d = centerline.scaled_direction();
    let m = origin - centerline.start;
    let dd = d.norm_squared();
    let md = m.dot(&d);
    let nd = dir.dot(&d);
    let nn = dir.norm_squared();
    let mn = m.dot(dir);

    let a = dd * nn - nd * nd;
    let k = m.norm_squared() - radius * radius;
    let c = dd * k - md * md;

    let (mut tmin, mut tmax) = if a.abs() <= ZERO_TOLERANCE * dd * nn {
        // Line parallel to the axis.
        if c > 0.0 {
            return None;
        }
        (-Real::MAX, Real::MAX)
    } else {
        let b = dd * mn - nd * md;
        let delta = b * b - a * c;

        if delta < 0.0 {
            return None;
        }

        let sqrt_delta = delta.sqrt();
        ((-b - sqrt_delta) / a, (-b + sqrt_delta) / a)
    };

    if nd.abs() <= ZERO_TOLERANCE {
        if md < 0.0 || md > dd {
            return None;
        }
    } else {
        let t0 = -md / nd;
        let t1 = (dd - md) / nd;
        tmin = tmin.max(t0.min(t1));
        tmax = tmax.min(t0.max(t1));
    }

    if tmin > tmax {
        None
    } else {
        Some((tmin, tmax))
    }
}

/// Casts a ray on a capsule, reporting the entry and exit crossings.
pub fn cast_ray_capsule(ray: &Ray, capsule: &BoundingCapsule) -> BoundingIntersection {
    match clip_line_capsule(capsule.centerline(), capsule.radius(), &ray.origin, &ray.dir) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}
