use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Point, Real, Vector, DIM};
use crate::query::{BoundingIntersection, Ray};
use crate::shape::Segment;

impl Aabb {
    /// Computes the parameters of the two points where the line `origin + dir * t`
    /// crosses this box.
    ///
    /// Returns `None` if the line misses the box.
    #[inline]
    pub fn clip_line_parameters(
        &self,
        origin: &Point<Real>,
        dir: &Vector<Real>,
    ) -> Option<(Real, Real)> {
        clip_line_slabs(&self.mins(), &self.maxs(), origin, dir)
    }

    /// Computes the part of the segment `[pa, pb]` lying inside of this box.
    ///
    /// Returns `None` if the segment misses the box.
    #[inline]
    pub fn clip_segment(&self, pa: &Point<Real>, pb: &Point<Real>) -> Option<Segment> {
        let ab = pb - pa;
        let (t0, t1) = self.clip_line_parameters(pa, &ab)?;
        let (t0, t1) = (t0.max(0.0), t1.min(1.0));

        if t0 > t1 {
            None
        } else {
            Some(Segment::new(pa + ab * t0, pa + ab * t1))
        }
    }
}

/// Computes the parametric interval the line `origin + dir * t` spends inside of the
/// box `[mins, maxs]`, using the slab method.
///
/// Each axis restricts the running `[tmin, tmax]` interval to the parameters where
/// the line is between the two slab planes of that axis. An empty interval means the
/// line misses the box.
pub fn clip_line_slabs(
    mins: &Point<Real>,
    maxs: &Point<Real>,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let mut tmax = Real::MAX;
    let mut tmin = -tmax;

    for i in 0usize..DIM {
        if dir[i] == 0.0 {
            if origin[i] < mins[i] || origin[i] > maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / dir[i];
            let mut inter_with_near_slab = (mins[i] - origin[i]) * denom;
            let mut inter_with_far_slab = (maxs[i] - origin[i]) * denom;

            if inter_with_near_slab > inter_with_far_slab {
                std::mem::swap(&mut inter_with_near_slab, &mut inter_with_far_slab)
            }

            tmin = tmin.max(inter_with_near_slab);
            tmax = tmax.min(inter_with_far_slab);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some((tmin, tmax))
}

/// Casts a ray on an axis-aligned box, reporting the entry and exit crossings.
pub fn cast_ray_aabb(ray: &Ray, aabb: &Aabb) -> BoundingIntersection {
    match aabb.clip_line_parameters(&ray.origin, &ray.dir) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}

/// Casts a ray on an oriented box, reporting the entry and exit crossings.
///
/// The ray is expressed in the local frame of the box, where the box is axis-aligned.
/// Rotations preserve the ray parameters.
pub fn cast_ray_obb(ray: &Ray, obb: &Obb) -> BoundingIntersection {
    let local_origin = Point::from(obb.to_local_vector(&(ray.origin - obb.center())));
    let local_dir = obb.to_local_vector(&ray.dir);
    let half = obb.extents();

    match clip_line_slabs(
        &Point::from(-half),
        &Point::from(half),
        &local_origin,
        &local_dir,
    ) {
        Some((tmin, tmax)) => BoundingIntersection::from_line_interval(ray, tmin, tmax),
        None => BoundingIntersection::none(),
    }
}

#[cfg(test)]
mod test {
    use super::{cast_ray_aabb, cast_ray_obb};
    use crate::bounding_volume::{Aabb, Obb};
    use crate::math::Rotation;
    use crate::query::Ray;
    use na::{Point3, Vector3};

    #[test]
    fn ray_through_unit_box() {
        let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());
        let inter = cast_ray_aabb(&ray, &aabb);

        assert_eq!(inter.count(), 2);
        assert_relative_eq!(inter.closest().unwrap().distance, 4.0);
        assert_relative_eq!(inter.farthest().unwrap().distance, 6.0);
        assert_relative_eq!(inter.closest().unwrap().point, Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn ray_parallel_to_slab_outside_misses() {
        let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
        let ray = Ray::new(Point3::new(-5.0, 2.0, 0.0), Vector3::x());
        assert!(!cast_ray_aabb(&ray, &aabb).is_hit());

        let away = Ray::new(Point3::new(-5.0, 0.0, 0.0), -Vector3::x());
        assert!(!cast_ray_aabb(&away, &aabb).is_hit());
    }

    #[test]
    fn ray_from_inside_box_exits_once() {
        let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
        let ray = Ray::new(Point3::origin(), Vector3::y());
        let inter = cast_ray_aabb(&ray, &aabb);
        assert_eq!(inter.count(), 1);
        assert_relative_eq!(inter.closest().unwrap().distance, 1.0);
    }

    #[test]
    fn ray_through_rotated_box() {
        let rot = Rotation::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_4 as _);
        let obb = Obb::new(Point3::origin(), &rot, Vector3::repeat(1.0));
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());
        let inter = cast_ray_obb(&ray, &obb);

        assert_eq!(inter.count(), 2);
        let half_diag = 2.0f64.sqrt() as crate::math::Real;
        assert_relative_eq!(inter.closest().unwrap().distance, 5.0 - half_diag, epsilon = 1.0e-5);
        assert_relative_eq!(inter.farthest().unwrap().distance, 5.0 + half_diag, epsilon = 1.0e-5);
    }
}
