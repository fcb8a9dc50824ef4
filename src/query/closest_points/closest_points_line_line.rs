use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};
use crate::query::{ClosestPoints, Ray};
use crate::shape::Segment;

/// A linear component `origin + dir * t` with `t` restricted to `[min, max]`.
///
/// Segments use `[0, 1]`, rays `[0, +∞)`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LinearComponent {
    pub origin: Point<Real>,
    pub dir: Vector<Real>,
    pub min: Real,
    pub max: Real,
}

impl LinearComponent {
    pub fn from_segment(seg: &Segment) -> Self {
        Self {
            origin: seg.start,
            dir: seg.scaled_direction(),
            min: 0.0,
            max: 1.0,
        }
    }

    pub fn from_ray(ray: &Ray) -> Self {
        Self {
            origin: ray.origin,
            dir: ray.dir,
            min: 0.0,
            max: Real::MAX,
        }
    }

    #[inline]
    fn clamp(&self, t: Real) -> Real {
        t.max(self.min).min(self.max)
    }

    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Computes the parameters of the closest points of two linear components.
///
/// Both parameters are clamped to their component range independently, then the first
/// one is re-clamped from the clamped second one. Nearly parallel components (the
/// squared sine of their angle below the zero tolerance) pick the start of the first
/// component to avoid dividing by a vanishing denominator.
pub(crate) fn closest_parameters(c1: &LinearComponent, c2: &LinearComponent) -> (Real, Real) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = c1.dir;
    let d2 = c2.dir;
    let r = c1.origin - c2.origin;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let eps = ZERO_TOLERANCE * ZERO_TOLERANCE;
    if a <= eps && e <= eps {
        s = c1.min;
        t = c2.min;
    } else if a <= eps {
        s = c1.min;
        t = c2.clamp(f / e);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = c2.min;
            s = c1.clamp(-c / a);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            if denom > ZERO_TOLERANCE * ae {
                s = c1.clamp((b * f - c * e) / denom);
            } else {
                // Parallel.
                s = c1.min;
            }

            t = (b * s + f) / e;

            if t < c2.min || t > c2.max {
                t = c2.clamp(t);
                s = c1.clamp((b * t - c) / a);
            }
        }
    }

    (s, t)
}

#[inline]
fn closest_points_linear(c1: &LinearComponent, c2: &LinearComponent) -> ClosestPoints {
    let (s, t) = closest_parameters(c1, c2);
    ClosestPoints::new(c1.point_at(s), c2.point_at(t))
}

/// Closest points between two segments.
///
/// Degenerate segments are handled as points.
#[inline]
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> ClosestPoints {
    closest_points_linear(
        &LinearComponent::from_segment(seg1),
        &LinearComponent::from_segment(seg2),
    )
}

/// Closest points between two rays.
#[inline]
pub fn closest_points_ray_ray(ray1: &Ray, ray2: &Ray) -> ClosestPoints {
    closest_points_linear(&LinearComponent::from_ray(ray1), &LinearComponent::from_ray(ray2))
}

/// Closest points between a ray and a segment.
#[inline]
pub fn closest_points_ray_segment(ray: &Ray, seg: &Segment) -> ClosestPoints {
    closest_points_linear(
        &LinearComponent::from_ray(ray),
        &LinearComponent::from_segment(seg),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use na::{Point3, Vector3};

    #[test]
    fn parallel_unit_segments_are_one_apart() {
        let seg1 = Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        let res = closest_points_segment_segment(&seg1, &seg2);
        assert_eq!(res.distance(), 1.0);
    }

    #[test]
    fn crossing_segments_touch() {
        let seg1 = Segment::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point3::new(0.0, -1.0, 2.0), Point3::new(0.0, 1.0, 2.0));
        let res = closest_points_segment_segment(&seg1, &seg2);
        assert_relative_eq!(res.point1, Point3::origin());
        assert_relative_eq!(res.point2, Point3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(res.distance(), 2.0);
    }

    #[test]
    fn clamped_segment_endpoints() {
        let seg1 = Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point3::new(3.0, 1.0, 0.0), Point3::new(3.0, 5.0, 0.0));
        let res = closest_points_segment_segment(&seg1, &seg2);
        assert_relative_eq!(res.point1, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(res.point2, Point3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn rays_diverging_from_close_origins() {
        let ray1 = Ray::new(Point3::origin(), Vector3::x());
        let ray2 = Ray::new(Point3::new(0.0, 1.0, 0.0), -Vector3::x());
        let res = closest_points_ray_ray(&ray1, &ray2);
        assert_relative_eq!(res.distance(), 1.0);
        assert_relative_eq!(res.point1, Point3::origin());
    }

    #[test]
    fn ray_segment_ahead() {
        let ray = Ray::new(Point3::origin(), Vector3::x());
        let seg = Segment::new(Point3::new(10.0, -1.0, 3.0), Point3::new(10.0, 1.0, 3.0));
        let res = closest_points_ray_segment(&ray, &seg);
        assert_relative_eq!(res.point1, Point3::new(10.0, 0.0, 0.0), epsilon = 1.0e-5);
        assert_relative_eq!(res.distance(), 3.0, epsilon = 1.0e-5);
    }
}
