#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Controls the phases run by a [`PickQuery`](crate::picking::PickQuery).
///
/// The default options only run the bounding-volume phase.
pub struct PickingOptions(u8);

bitflags::bitflags! {
    impl PickingOptions: u8 {
        /// If set, candidates hit by the ray on their bounding volume are tested
        /// against their mesh too, and only kept if the mesh is hit.
        const PRIMITIVE_PICKING = 1;
        /// If set, mesh triangles hit from behind are ignored.
        ///
        /// Only relevant with [`PickingOptions::PRIMITIVE_PICKING`].
        const IGNORE_BACKFACES = 1 << 1;
    }
}
