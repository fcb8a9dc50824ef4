use crate::math::{Point, Real, ZERO_TOLERANCE};
use crate::query::{
    closest_points_point_ray, closest_points_point_segment, closest_points_point_triangle, Ray,
};
use crate::shape::{Segment, Triangle};

const SQUARED_TOLERANCE: Real = ZERO_TOLERANCE * ZERO_TOLERANCE;

/// Are the two points equal, within the zero tolerance?
#[inline]
pub fn intersection_test_point_point(p1: &Point<Real>, p2: &Point<Real>) -> bool {
    na::distance_squared(p1, p2) <= SQUARED_TOLERANCE
}

/// Does the point lie on the ray, within the zero tolerance?
#[inline]
pub fn intersection_test_point_ray(pt: &Point<Real>, ray: &Ray) -> bool {
    closest_points_point_ray(pt, ray).distance_squared <= SQUARED_TOLERANCE
}

/// Does the point lie on the segment, within the zero tolerance?
#[inline]
pub fn intersection_test_point_segment(pt: &Point<Real>, seg: &Segment) -> bool {
    closest_points_point_segment(pt, seg).distance_squared <= SQUARED_TOLERANCE
}

/// Does the point lie on the triangle, within the zero tolerance?
#[inline]
pub fn intersection_test_point_triangle(pt: &Point<Real>, tri: &Triangle) -> bool {
    closest_points_point_triangle(pt, tri).distance_squared <= SQUARED_TOLERANCE
}
