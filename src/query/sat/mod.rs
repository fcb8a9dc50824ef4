//! Application of the Separating-Axis-Theorem (SAT).

pub use self::sat_box_triangle::*;
pub use self::sat_obb_obb::*;
pub use self::sat_polyhedron_triangle::*;

mod sat_box_triangle;
mod sat_obb_obb;
mod sat_polyhedron_triangle;
