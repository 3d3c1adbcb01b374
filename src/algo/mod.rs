//! Mesh connectivity algorithms.
//!
//! - **Strip**: grid detection and grid-to-triangle-strip conversion

pub mod strip;

pub use strip::{detect_grid, gridmesh_to_strip, is_grid, strip_many, StripOptions};
