//! Definition of the triangle shape.

use crate::math::{Isometry, Point, Real, Rotation, Vector, ZERO_TOLERANCE};
use crate::shape::{Plane, Segment};
use na::{self, Unit};
use std::ops::Index;

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The normal of this triangle assuming it is oriented counter-clockwise.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its length is twice the triangle area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented counter-clockwise.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), ZERO_TOLERANCE)
    }

    /// The plane supporting this triangle, `None` if the triangle is degenerate.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        self.normal()
            .map(|n| Plane::from_normal_and_point(n, &self.a))
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Is this triangle flat, i.e., collinear or reduced to a point?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_normal().norm_squared() <= ZERO_TOLERANCE * ZERO_TOLERANCE
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// Reverses the winding of this triangle.
    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.b, &mut self.c);
    }

    /// Applies the isometry `m` to the vertices of this triangle and returns the resulting triangle.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Triangle::new(m * self.a, m * self.b, m * self.c)
    }

    /// Scales, rotates then translates this triangle.
    #[inline]
    pub fn scaled_transformed(
        &self,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
        translation: &Vector<Real>,
    ) -> Self {
        let tr = |p: &Point<Real>| Point::from(rotation * p.coords.component_mul(scale) + translation);
        Triangle::new(tr(&self.a), tr(&self.b), tr(&self.c))
    }

    /// Computes the barycentric coordinates of `p` wrt. this triangle.
    ///
    /// `p` is assumed to lie on the triangle plane. Returns `None` for degenerate triangles.
    pub fn barycentric_coordinates(&self, p: &Point<Real>) -> Option<[Real; 3]> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ap = p - self.a;

        let d00 = ab.dot(&ab);
        let d01 = ab.dot(&ac);
        let d11 = ac.dot(&ac);
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        if denom.abs() <= ZERO_TOLERANCE * ZERO_TOLERANCE {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some([1.0 - v - w, v, w])
    }
}

impl Index<usize> for Triangle {
    type Output = Point<Real>;

    #[inline]
    fn index(&self, i: usize) -> &Point<Real> {
        match i {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => panic!("Triangle vertex index out of bounds: {i} (expected 0, 1 or 2)."),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::shape::Triangle;
    use na::{Point3, Vector3};

    #[test]
    fn test_triangle_area() {
        let pa = Point3::new(0.0, 5.0, 0.0);
        let pb = Point3::new(0.0, 0.0, 0.0);
        let pc = Point3::new(0.0, 0.0, 4.0);

        assert!(relative_eq!(Triangle::new(pa, pb, pc).area(), 10.0));
    }

    #[test]
    fn triangle_normal_follows_winding() {
        let tri = Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(*tri.normal().unwrap(), Vector3::z());

        let plane = tri.plane().unwrap();
        assert_relative_eq!(plane.offset, 0.0);
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let tri = Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(tri.is_degenerate());
        assert!(tri.normal().is_none());
        assert!(tri.plane().is_none());
        assert!(tri.barycentric_coordinates(&Point3::origin()).is_none());
    }

    #[test]
    fn barycentric_coordinates_of_vertices() {
        let tri = Triangle::new(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        );
        let bc = tri.barycentric_coordinates(&tri.b).unwrap();
        assert_relative_eq!(bc[0], 0.0, epsilon = 1.0e-5);
        assert_relative_eq!(bc[1], 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(bc[2], 0.0, epsilon = 1.0e-5);
    }
}
