//! Seeded generators of random bounding volumes.

use bounds3d::bounding_volume::{
    Aabb, BoundingCapsule, BoundingFrustum, BoundingShape, BoundingSphere, BoundingVolume,
    MeshHull, Obb,
};
use bounds3d::math::{Point, Real, Rotation, Vector};
use bounds3d::shape::Segment;
use na::Unit;

pub struct Generator(oorandom::Rand32);

impl Generator {
    pub fn new(seed: u64) -> Self {
        Generator(oorandom::Rand32::new(seed))
    }

    pub fn real(&mut self, min: Real, max: Real) -> Real {
        min + (max - min) * self.0.rand_float() as Real
    }

    pub fn point(&mut self, range: Real) -> Point<Real> {
        Point::new(
            self.real(-range, range),
            self.real(-range, range),
            self.real(-range, range),
        )
    }

    pub fn extents(&mut self) -> Vector<Real> {
        Vector::new(self.real(0.1, 2.0), self.real(0.1, 2.0), self.real(0.1, 2.0))
    }

    pub fn rotation(&mut self) -> Rotation<Real> {
        let axis = Unit::new_normalize(self.point(1.0).coords + Vector::repeat(0.01));
        Rotation::from_axis_angle(&axis, self.real(-3.0, 3.0))
    }

    pub fn points(&mut self, count: usize, range: Real) -> Vec<Point<Real>> {
        (0..count).map(|_| self.point(range)).collect()
    }

    pub fn aabb(&mut self) -> Aabb {
        Aabb::new(self.point(5.0), self.extents())
    }

    pub fn obb(&mut self) -> Obb {
        let rot = self.rotation();
        Obb::new(self.point(5.0), &rot, self.extents())
    }

    pub fn sphere(&mut self) -> BoundingSphere {
        BoundingSphere::new(self.point(5.0), self.real(0.1, 2.0))
    }

    pub fn capsule(&mut self) -> BoundingCapsule {
        let center = self.point(5.0);
        let half = self.point(2.0).coords;
        BoundingCapsule::new(Segment::new(center - half, center + half), self.real(0.1, 1.5))
    }

    pub fn frustum(&mut self) -> BoundingFrustum {
        let mut frustum = BoundingFrustum::default();
        let rot = self.rotation();
        frustum.transform(&self.extents(), &rot, &self.point(5.0).coords);
        frustum
    }

    pub fn mesh(&mut self) -> MeshHull {
        let center = self.point(5.0);
        let pts: Vec<_> = self
            .points(12, 2.0)
            .into_iter()
            .map(|pt| pt + center.coords)
            .collect();
        MeshHull::from_points(&pts)
    }

    /// One random shape of each kind.
    pub fn shapes(&mut self) -> [BoundingShape; 6] {
        [
            self.aabb().into(),
            self.obb().into(),
            self.sphere().into(),
            self.capsule().into(),
            self.frustum().into(),
            self.mesh().into(),
        ]
    }
}

pub fn corners_of(volume: &dyn BoundingVolume) -> Vec<Point<Real>> {
    let mut corners = vec![Point::origin(); volume.corner_count()];
    volume.compute_corners(&mut corners);
    corners
}
