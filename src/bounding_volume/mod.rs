//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_capsule::BoundingCapsule;
#[doc(inline)]
pub use crate::bounding_volume::bounding_frustum::BoundingFrustum;
#[doc(inline)]
pub use crate::bounding_volume::bounding_shape::BoundingShape;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::{BoundingVolume, ShapeType};
pub use crate::bounding_volume::corner_cache::{CornerBuffer, CornerCache};
#[doc(inline)]
pub use crate::bounding_volume::mesh_hull::MeshHull;
#[doc(inline)]
pub use crate::bounding_volume::obb::Obb;
pub use crate::bounding_volume::point_buffer::{IndexBuffer, PointBuffer, SubRange};

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_capsule;
#[doc(hidden)]
pub mod bounding_frustum;
mod bounding_shape;
#[doc(hidden)]
pub mod bounding_sphere;
mod corner_cache;
#[doc(hidden)]
pub mod mesh_hull;
#[doc(hidden)]
pub mod obb;
mod point_buffer;
