use crate::bounding_volume::{Aabb, BoundingCapsule, BoundingSphere, Obb};
use crate::math::{Point, Real, Vector, DIM};
use crate::query::closest_points_segment_segment;
use crate::query::ray::clip_line_slabs;
use crate::query::sat;
use crate::shape::{Segment, Triangle};

/// Tests whether two axis-aligned boxes intersect.
///
/// Touching boxes intersect.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    let delta = aabb2.center() - aabb1.center();
    let reach = aabb1.extents() + aabb2.extents();
    (0..DIM).all(|i| delta[i].abs() <= reach[i])
}

/// Tests whether two oriented boxes intersect, using the separating-axis test.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    sat::obb_obb_find_separating_axis(obb1, obb2).0 <= 0.0
}

/// Tests whether an axis-aligned box and a sphere intersect.
#[inline]
pub fn intersection_test_aabb_sphere(aabb: &Aabb, sphere: &BoundingSphere) -> bool {
    let local_center = sphere.center() - aabb.center().coords;
    distance_squared_local_box_point(&aabb.extents(), &local_center)
        <= sphere.radius() * sphere.radius()
}

/// Tests whether an oriented box and a sphere intersect.
#[inline]
pub fn intersection_test_box_sphere(obb: &Obb, sphere: &BoundingSphere) -> bool {
    let local_center = obb.to_local_point(&sphere.center());
    distance_squared_local_box_point(&obb.extents(), &local_center)
        <= sphere.radius() * sphere.radius()
}

/// Tests whether an axis-aligned box and a capsule intersect.
#[inline]
pub fn intersection_test_aabb_capsule(aabb: &Aabb, capsule: &BoundingCapsule) -> bool {
    let center = aabb.center().coords;
    let seg = capsule.centerline();
    let local_seg = Segment::new(seg.start - center, seg.end - center);
    distance_squared_local_box_segment(&aabb.extents(), &local_seg)
        <= capsule.radius() * capsule.radius()
}

/// Tests whether an oriented box and a capsule intersect.
#[inline]
pub fn intersection_test_box_capsule(obb: &Obb, capsule: &BoundingCapsule) -> bool {
    let seg = capsule.centerline();
    let local_seg = Segment::new(obb.to_local_point(&seg.start), obb.to_local_point(&seg.end));
    distance_squared_local_box_segment(&obb.extents(), &local_seg)
        <= capsule.radius() * capsule.radius()
}

/// Tests whether a triangle intersects the box `[-half_extents, half_extents]`.
#[inline]
pub fn intersection_test_local_box_triangle(half_extents: &Vector<Real>, tri: &Triangle) -> bool {
    sat::local_box_triangle_find_separating_axis(half_extents, tri).0 <= 0.0
}

/// Tests whether a triangle intersects an oriented box.
#[inline]
pub fn intersection_test_box_triangle(obb: &Obb, tri: &Triangle) -> bool {
    let local = Triangle::new(
        obb.to_local_point(&tri.a),
        obb.to_local_point(&tri.b),
        obb.to_local_point(&tri.c),
    );
    intersection_test_local_box_triangle(&obb.extents(), &local)
}

/// The squared distance between a point and the box `[-half_extents, half_extents]`.
///
/// Zero if the point is inside of the box.
#[inline]
pub fn distance_squared_local_box_point(half_extents: &Vector<Real>, pt: &Point<Real>) -> Real {
    let mut res = 0.0;

    for i in 0..DIM {
        let excess = pt[i].abs() - half_extents[i];
        if excess > 0.0 {
            res += excess * excess;
        }
    }

    res
}

/// The squared distance between a segment and the box `[-half_extents, half_extents]`.
///
/// If the segment does not cross the box, its closest point is one of its endpoints or
/// the closest point between the segment and one of the twelve box edges.
pub fn distance_squared_local_box_segment(half_extents: &Vector<Real>, seg: &Segment) -> Real {
    let mins = Point::from(-half_extents);
    let maxs = Point::from(*half_extents);

    if let Some((t0, t1)) = clip_line_slabs(&mins, &maxs, &seg.start, &seg.scaled_direction()) {
        if t0 <= 1.0 && t1 >= 0.0 {
            return 0.0;
        }
    }

    let mut best = distance_squared_local_box_point(half_extents, &seg.start)
        .min(distance_squared_local_box_point(half_extents, &seg.end));

    for edge in local_box_edges(half_extents) {
        best = best.min(closest_points_segment_segment(seg, &edge).distance_squared);
    }

    best
}

/// The twelve edges of the box `[-half_extents, half_extents]`.
pub fn local_box_edges(half_extents: &Vector<Real>) -> [Segment; 12] {
    let h = half_extents;
    let mut edges = [Segment::new(Point::origin(), Point::origin()); 12];
    let mut k = 0;

    for i in 0..DIM {
        let j = (i + 1) % DIM;
        let l = (i + 2) % DIM;

        for sj in [-1.0, 1.0] {
            for sl in [-1.0, 1.0] {
                let mut a = Point::origin();
                a[j] = h[j] * sj;
                a[l] = h[l] * sl;
                let mut b = a;
                a[i] = -h[i];
                b[i] = h[i];
                edges[k] = Segment::new(a, b);
                k += 1;
            }
        }
    }

    edges
}
