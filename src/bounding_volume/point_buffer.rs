//! Random-access point and index storage consumed by
//! [`BoundingVolume::compute_from_points`](crate::bounding_volume::BoundingVolume::compute_from_points).

use crate::math::{Point, Real};
use std::ops::Range;

/// Random access to the points of a geometry storage.
pub trait PointBuffer {
    /// The number of points in this buffer.
    fn len(&self) -> usize;

    /// Is this buffer empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th point of this buffer.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    fn point(&self, i: usize) -> Point<Real>;
}

/// Random access to an index buffer referencing the points of a [`PointBuffer`].
pub trait IndexBuffer {
    /// The number of indices in this buffer.
    fn len(&self) -> usize;

    /// Is this buffer empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th index of this buffer.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    fn index(&self, i: usize) -> usize;
}

impl PointBuffer for [Point<Real>] {
    #[inline]
    fn len(&self) -> usize {
        <[Point<Real>]>::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self[i]
    }
}

impl PointBuffer for Vec<Point<Real>> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn point(&self, i: usize) -> Point<Real> {
        self[i]
    }
}

macro_rules! impl_index_buffer(
    ($($t: ty),*) => {$(
        impl IndexBuffer for [$t] {
            #[inline]
            fn len(&self) -> usize {
                <[$t]>::len(self)
            }

            #[inline]
            fn index(&self, i: usize) -> usize {
                self[i] as usize
            }
        }

        impl IndexBuffer for Vec<$t> {
            #[inline]
            fn len(&self) -> usize {
                Vec::len(self)
            }

            #[inline]
            fn index(&self, i: usize) -> usize {
                self[i] as usize
            }
        }
    )*}
);

impl_index_buffer!(u16, u32, usize);

/// A contiguous window `[start, start + count)` of a point or index buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubRange {
    /// The first element of the window.
    pub start: usize,
    /// The number of elements of the window.
    pub count: usize,
}

impl SubRange {
    /// Creates a new window.
    #[inline]
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// The window covering a whole buffer of `len` elements.
    #[inline]
    pub fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    /// One past the last element of the window, `None` if it does not fit in a `usize`.
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.count)
    }

    /// The range of buffer positions selected by `range`, or the whole buffer if `None`.
    ///
    /// # Panics
    /// Panics if the window is not within a buffer of `len` elements.
    pub fn resolve(range: Option<SubRange>, len: usize) -> Range<usize> {
        let range = range.unwrap_or_else(|| SubRange::full(len));
        match range.end() {
            Some(end) if end <= len => range.start..end,
            _ => panic!(
                "Sub-range of {} elements starting at {} out of bounds of a buffer of {} elements.",
                range.count, range.start, len
            ),
        }
    }
}

/// Copies the points of `buffer` selected by `range`.
pub fn gather_points<B>(buffer: &B, range: Option<SubRange>) -> Vec<Point<Real>>
where
    B: PointBuffer + ?Sized,
{
    let points: Vec<_> = SubRange::resolve(range, buffer.len())
        .map(|i| buffer.point(i))
        .collect();

    if points.is_empty() {
        log::debug!("Fitting a bounding volume on an empty point window.");
    }

    points
}

/// Copies the points of `buffer` referenced by the indices of `indices` selected by `range`.
pub fn gather_indexed_points<B, I>(
    buffer: &B,
    indices: &I,
    range: Option<SubRange>,
) -> Vec<Point<Real>>
where
    B: PointBuffer + ?Sized,
    I: IndexBuffer + ?Sized,
{
    let points: Vec<_> = SubRange::resolve(range, indices.len())
        .map(|i| buffer.point(indices.index(i)))
        .collect();

    if points.is_empty() {
        log::debug!("Fitting a bounding volume on an empty index window.");
    }

    points
}
