//! Distances between primitives.
//!
//! Every closest-point routine works on squared distances. These wrappers take the
//! single square root of the outermost call.

use crate::math::{Point, Real};
use crate::query::*;
use crate::shape::{Plane, Segment, Triangle};

macro_rules! distance_from_closest_points(
    ($($name: ident, $closest_points: ident, $a: ident: $A: ty, $b: ident: $B: ty);* $(;)*) => {$(
        #[doc = concat!("The distance between a ", stringify!($a), " and a ", stringify!($b), ".")]
        #[inline]
        pub fn $name($a: &$A, $b: &$B) -> Real {
            $closest_points($a, $b).distance()
        }
    )*}
);

distance_from_closest_points!(
    distance_point_point, closest_points_point_point, point1: Point<Real>, point2: Point<Real>;
    distance_point_ray, closest_points_point_ray, point: Point<Real>, ray: Ray;
    distance_point_segment, closest_points_point_segment, point: Point<Real>, segment: Segment;
    distance_point_triangle, closest_points_point_triangle, point: Point<Real>, triangle: Triangle;
    distance_ray_ray, closest_points_ray_ray, ray1: Ray, ray2: Ray;
    distance_ray_segment, closest_points_ray_segment, ray: Ray, segment: Segment;
    distance_ray_plane, closest_points_ray_plane, ray: Ray, plane: Plane;
    distance_ray_triangle, closest_points_ray_triangle, ray: Ray, triangle: Triangle;
    distance_segment_segment, closest_points_segment_segment, segment1: Segment, segment2: Segment;
    distance_segment_plane, closest_points_segment_plane, segment: Segment, plane: Plane;
    distance_segment_triangle, closest_points_segment_triangle, segment: Segment, triangle: Triangle;
    distance_plane_plane, closest_points_plane_plane, plane1: Plane, plane2: Plane;
    distance_plane_triangle, closest_points_plane_triangle, plane: Plane, triangle: Triangle;
    distance_triangle_triangle, closest_points_triangle_triangle, triangle1: Triangle, triangle2: Triangle;
);

/// The unsigned distance between a point and a plane.
#[inline]
pub fn distance_point_plane(point: &Point<Real>, plane: &Plane) -> Real {
    plane.signed_distance(point).abs()
}

/// The squared distance between a point and a segment.
#[inline]
pub fn distance_squared_point_segment(point: &Point<Real>, segment: &Segment) -> Real {
    closest_points_point_segment(point, segment).distance_squared
}

/// The squared distance between two segments.
#[inline]
pub fn distance_squared_segment_segment(segment1: &Segment, segment2: &Segment) -> Real {
    closest_points_segment_segment(segment1, segment2).distance_squared
}
