use crate::math::{Point, Real};
use smallvec::SmallVec;

/// The corner buffer of a bounding volume.
///
/// Box-like volumes have eight corners, so they never allocate.
pub type CornerBuffer = SmallVec<[Point<Real>; 8]>;

/// Lazily computed corners of a bounding volume, with a dirty flag.
///
/// The cache is not part of the value of a volume: it is never serialized, compares
/// equal to any other cache, and starts dirty.
#[derive(Clone, Debug)]
pub struct CornerCache {
    corners: CornerBuffer,
    dirty: bool,
}

impl Default for CornerCache {
    fn default() -> Self {
        Self {
            corners: SmallVec::new(),
            dirty: true,
        }
    }
}

impl PartialEq for CornerCache {
    #[inline]
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl CornerCache {
    /// A zeroed buffer able to hold `count` corners.
    #[inline]
    pub fn buffer(count: usize) -> CornerBuffer {
        SmallVec::from_elem(Point::origin(), count)
    }

    /// Does the cache need to be recomputed?
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the cache as stale.
    #[inline]
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Replaces the cached corners and marks the cache as up to date.
    #[inline]
    pub fn store(&mut self, corners: CornerBuffer) {
        self.corners = corners;
        self.dirty = false;
    }

    /// The cached corners. Meaningless if the cache is dirty.
    #[inline]
    pub fn as_slice(&self) -> &[Point<Real>] {
        &self.corners
    }
}
