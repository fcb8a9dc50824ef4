//! Ray picking: ranking the objects of a scene hit by a ray.
//!
//! A [`PickQuery`] tests each candidate [`Pickable`] against its ray in two phases. The
//! bounding volume of the candidate is tested first, and only the candidates it hits
//! have their mesh tested when [`PickingOptions::PRIMITIVE_PICKING`] is set.

pub use self::pick_query::{default_pick_order, PickQuery};
pub use self::pick_result::{MeshHit, PickResult};
pub use self::pickable::Pickable;
pub use self::picking_options::PickingOptions;

mod pick_query;
mod pick_result;
mod pickable;
mod picking_options;
