use crate::math::{Real, ZERO_TOLERANCE};
use crate::query::{LineIntersection, Ray};
use crate::shape::Triangle;

/// Casts a ray on a triangle.
///
/// The front face of the triangle is the side its counter-clockwise normal points to.
/// When `ignore_backface` is `true`, a ray reaching the triangle from behind is a miss.
/// Rays parallel to the triangle plane and degenerate triangles never hit.
#[inline]
pub fn cast_ray_triangle(ray: &Ray, tri: &Triangle, ignore_backface: bool) -> Option<LineIntersection> {
    cast_ray_triangle_with_barycentrics(ray, tri, ignore_backface).map(|(inter, _)| inter)
}

/// Casts a ray on a triangle and returns the barycentric coordinates of the hit point
/// as well.
pub fn cast_ray_triangle_with_barycentrics(
    ray: &Ray,
    tri: &Triangle,
    ignore_backface: bool,
) -> Option<(LineIntersection, [Real; 3])> {
    let ab = tri.b - tri.a;
    let ac = tri.c - tri.a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // The ray is parallel to the triangle, or the triangle is flat.
    if d.abs() <= ZERO_TOLERANCE * n.norm() * ray.dir.norm() {
        return None;
    }

    if ignore_backface && d > 0.0 {
        return None;
    }

    let ap = ray.origin - tri.a;
    let t = ap.dot(&n);

    // The ray does not point toward the triangle plane.
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let e = -ray.dir.cross(&ap);
    let (mut v, mut w);
    let d_abs = d.abs();

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d_abs {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d_abs {
            return None;
        }
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d_abs {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d_abs {
            return None;
        }
    }

    let invd = 1.0 / d_abs;
    let toi = t.abs() * invd;
    v *= invd;
    w *= invd;

    Some((
        LineIntersection::new(toi, tri.a + ab * v + ac * w),
        [1.0 - v - w, v, w],
    ))
}
