use crate::math::Real;
use crate::query::LineIntersection;
use crate::shape::Triangle;

/// A hit of a ray on the mesh of a [`Pickable`](crate::picking::Pickable).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshHit {
    /// Where the ray hits the mesh.
    pub intersection: LineIntersection,
    /// The triangle hit, if the mesh is made of triangles.
    pub triangle: Option<Triangle>,
}

impl MeshHit {
    /// The distance from the ray origin to this hit.
    #[inline]
    pub fn distance(&self) -> Real {
        self.intersection.distance
    }
}

/// A candidate object hit by the ray of a [`PickQuery`](crate::picking::PickQuery).
pub struct PickResult<'a, P: ?Sized> {
    pub(crate) object: &'a P,
    pub(crate) bounding_hit: LineIntersection,
    pub(crate) mesh_hit: Option<MeshHit>,
}

impl<P: ?Sized> Clone for PickResult<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for PickResult<'_, P> {}

impl<'a, P: ?Sized> PickResult<'a, P> {
    /// The object hit.
    #[inline]
    pub fn object(&self) -> &'a P {
        self.object
    }

    /// Where the ray enters the bounding volume of the object.
    ///
    /// This is the ray origin if it starts inside of the volume.
    #[inline]
    pub fn bounding_hit(&self) -> &LineIntersection {
        &self.bounding_hit
    }

    /// The closest hit on the mesh of the object, if primitive picking was enabled.
    #[inline]
    pub fn mesh_hit(&self) -> Option<&MeshHit> {
        self.mesh_hit.as_ref()
    }

    /// The distance used to rank this result: the mesh hit distance if any, the
    /// bounding hit distance otherwise.
    #[inline]
    pub fn distance(&self) -> Real {
        self.mesh_hit
            .map(|hit| hit.distance())
            .unwrap_or(self.bounding_hit.distance)
    }
}

impl<P: ?Sized> std::fmt::Debug for PickResult<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickResult")
            .field("bounding_hit", &self.bounding_hit)
            .field("mesh_hit", &self.mesh_hit)
            .finish_non_exhaustive()
    }
}
