//! Rays and the results of casting them.

use crate::math::{Isometry, Point, Real, Rotation, Vector, ZERO_TOLERANCE};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at `origin` and extending along `dir`.
/// The direction does not need to be normalized, but every hit distance is expressed
/// in multiples of `dir`: callers usually pass a unit vector so that distances are in
/// world units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Scales, rotates then translates this ray.
    ///
    /// The direction is scaled too, so hit distances are preserved by the transformation.
    #[inline]
    pub fn scaled_transformed(
        &self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Self {
        Self::new(
            Point::from(rotation * self.origin.coords.component_mul(scale) + translation),
            rotation * self.dir.component_mul(scale),
        )
    }

    /// Computes the point at the given parameter on this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// The parameter of the orthogonal projection of `pt` on this ray, clamped to be
    /// non-negative.
    ///
    /// Returns `0` if the ray direction is zero.
    #[inline]
    pub fn project_parameter(&self, pt: &Point<Real>) -> Real {
        let dd = self.dir.norm_squared();

        if dd <= ZERO_TOLERANCE * ZERO_TOLERANCE {
            0.0
        } else {
            ((pt - self.origin).dot(&self.dir) / dd).max(0.0)
        }
    }
}

/// The point where a ray or a line crosses a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineIntersection {
    /// The distance from the ray origin, in multiples of the ray direction.
    pub distance: Real,
    /// The intersection point.
    pub point: Point<Real>,
}

impl LineIntersection {
    /// Builds an intersection from its distance and point.
    #[inline]
    pub fn new(distance: Real, point: Point<Real>) -> Self {
        Self { distance, point }
    }

    /// The intersection at the parameter `t` of `ray`.
    #[inline]
    pub fn on_ray(ray: &Ray, t: Real) -> Self {
        Self::new(t, ray.point_at(t))
    }
}

/// The points where a ray crosses the boundary of a convex bounding volume.
///
/// A ray misses the volume (zero hit), grazes it or starts inside of it (one hit), or
/// passes through it (two hits, the entry then the exit). Having no hit is a valid state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingIntersection {
    count: u8,
    hits: [Option<LineIntersection>; 2],
}

impl BoundingIntersection {
    /// A ray that misses.
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// A single boundary crossing.
    #[inline]
    pub fn one(hit: LineIntersection) -> Self {
        Self {
            count: 1,
            hits: [Some(hit), None],
        }
    }

    /// An entry and an exit crossing.
    ///
    /// The two hits are reordered if `entry` is farther than `exit`.
    #[inline]
    pub fn two(entry: LineIntersection, exit: LineIntersection) -> Self {
        let (entry, exit) = if entry.distance <= exit.distance {
            (entry, exit)
        } else {
            (exit, entry)
        };

        Self {
            count: 2,
            hits: [Some(entry), Some(exit)],
        }
    }

    /// Builds the crossings of `ray` from the parametric interval `[tmin, tmax]` the
    /// supporting line of the ray spends inside of a convex volume.
    ///
    /// Parameters behind the ray origin are discarded: a ray starting inside of the
    /// volume only reports its exit.
    pub fn from_line_interval(ray: &Ray, tmin: Real, tmax: Real) -> Self {
        if tmax < 0.0 || tmin > tmax {
            Self::none()
        } else if tmin < 0.0 {
            Self::one(LineIntersection::on_ray(ray, tmax))
        } else if tmax - tmin <= ZERO_TOLERANCE {
            Self::one(LineIntersection::on_ray(ray, tmin))
        } else {
            Self::two(
                LineIntersection::on_ray(ray, tmin),
                LineIntersection::on_ray(ray, tmax),
            )
        }
    }

    /// The number of boundary crossings: 0, 1 or 2.
    #[inline]
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Does the ray hit the volume at all?
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.count > 0
    }

    /// The crossing nearest to the ray origin.
    #[inline]
    pub fn closest(&self) -> Option<LineIntersection> {
        self.hits[0]
    }

    /// The crossing farthest from the ray origin.
    ///
    /// Equal to [`Self::closest`] when there is a single crossing.
    #[inline]
    pub fn farthest(&self) -> Option<LineIntersection> {
        match self.count {
            2 => self.hits[1],
            _ => self.hits[0],
        }
    }

    /// Iterates through the crossings, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = &LineIntersection> {
        self.hits.iter().take(self.count()).flatten()
    }
}

#[cfg(test)]
mod test {
    use super::{BoundingIntersection, Ray};
    use na::{Point3, Vector3};

    #[test]
    fn line_interval_to_crossings() {
        let ray = Ray::new(Point3::origin(), Vector3::x());

        let inter = BoundingIntersection::from_line_interval(&ray, 2.0, 3.0);
        assert_eq!(inter.count(), 2);
        assert_eq!(inter.closest().unwrap().distance, 2.0);
        assert_eq!(inter.farthest().unwrap().point, Point3::new(3.0, 0.0, 0.0));

        let inside = BoundingIntersection::from_line_interval(&ray, -1.0, 3.0);
        assert_eq!(inside.count(), 1);
        assert_eq!(inside.closest(), inside.farthest());

        let behind = BoundingIntersection::from_line_interval(&ray, -3.0, -1.0);
        assert!(!behind.is_hit());
        assert!(behind.closest().is_none());
        assert_eq!(behind.iter().count(), 0);
    }
}
