//! Implementation details of the distance functions.

pub use self::distance::*;

mod distance;
