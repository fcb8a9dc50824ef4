use crate::bounding_volume::{BoundingShape, BoundingVolume};
use crate::picking::MeshHit;
use crate::query::Ray;

/// An object that can be picked by a ray.
///
/// This is implemented by the scene layer: the pick engine only reads the bounding
/// volume and the mesh hits of the object, it never owns its geometry.
pub trait Pickable {
    /// The bounding volume of this object, in world-space.
    fn world_bounding(&self) -> &BoundingShape;

    /// Casts `ray` on the mesh of this object.
    ///
    /// Pushes every hit into `hits` and returns `true` if there was at least one. When
    /// `ignore_backfaces` is `true`, triangles hit from behind must be skipped.
    fn intersect_mesh(&self, ray: &Ray, ignore_backfaces: bool, hits: &mut Vec<MeshHit>) -> bool;
}

/// A bounding volume is its own mesh: its hits carry no triangle.
impl Pickable for BoundingShape {
    #[inline]
    fn world_bounding(&self) -> &BoundingShape {
        self
    }

    fn intersect_mesh(&self, ray: &Ray, _: bool, hits: &mut Vec<MeshHit>) -> bool {
        let len = hits.len();
        hits.extend(self.intersects_ray(ray).iter().map(|inter| MeshHit {
            intersection: *inter,
            triangle: None,
        }));
        hits.len() > len
    }
}
