//! Vector, matrix and geometric primitive math for the Quimera engine.
//!
//! Points are row vectors. A transformation matrix is applied as `p * M`,
//! so translations live in the last row.

pub mod error;
pub mod geometry;
#[cfg(feature = "nalgebra")]
pub mod interop;
pub mod math;

pub use error::{MathError, Result};
