//! # gridstrip
//!
//! Detects triangle meshes whose connectivity is a regular rectangular grid
//! and converts them into a single triangle strip.
//!
//! Triangle strips encode shared vertices through traversal order, so a grid
//! of `2·(N-1)·(M-1)` triangles is drawn from roughly `2·N·M` strip indices
//! instead of three per triangle. The conversion is purely topological: it
//! reads vertex *indices* only, never positions or normals.
//!
//! ## Features
//!
//! - **Grid detection**: infers N×M dimensions, the patch triangulation and
//!   the patch order from the triangle list alone
//! - **Strip emission**: one continuous strip, joined across columns with
//!   degenerate triangles instead of primitive restart
//! - **Flexible indexing**: `u16`, `u32`, `u64` and `usize` index buffers
//! - **Batch conversion**: many independent meshes in parallel
//!
//! ## Quick Start
//!
//! ```
//! use gridstrip::prelude::*;
//!
//! let triangles: Vec<[u32; 3]> = vec![[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]];
//!
//! match gridmesh_to_strip(6, &triangles) {
//!     Ok(grid) => {
//!         assert_eq!(grid.layout.dimensions, GridDimensions { rows: 3, columns: 2 });
//!         assert_eq!(grid.vertices, vec![3, 3, 0, 4, 1, 5, 2]);
//!     }
//!     Err(err) => panic!("not a grid: {err}"),
//! }
//! ```
//!
//! ## Building Grids
//!
//! ```
//! use gridstrip::prelude::*;
//!
//! let dims = GridDimensions::new(10, 20).unwrap();
//! let triangles: Vec<[u16; 3]> =
//!     grid_triangles(dims, PatchType::UpIn, TraversalOrder::RowMajor).unwrap();
//!
//! let layout = detect_grid(dims.vertex_count(), &triangles).unwrap();
//! assert_eq!(layout.order, TraversalOrder::RowMajor);
//! assert_eq!(layout.strip_len(), 2 * (11 * 19 - 1));
//! ```
//!
//! ## Logging
//!
//! Rejections and successful conversions are reported through `tracing`;
//! install a subscriber and enable `gridstrip=debug` to see why a mesh was
//! not recognized as a grid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use gridstrip::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::strip::{
        detect_grid, gridmesh_to_strip, is_grid, strip_many, strip_to_triangles, GridInput,
        GridLayout, GridOutcome, GridStrip, StripOptions,
    };
    pub use crate::error::{Result, StripError};
    pub use crate::mesh::{
        grid_triangles, Diagonal, GridDimensions, MeshIndex, PatchType, TraversalOrder, Winding,
    };
}
