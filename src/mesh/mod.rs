//! Core mesh data structures.
//!
//! The transforms in this crate work on connectivity alone: a triangle mesh is
//! a slice of `[I; 3]` vertex index triples plus a vertex count, with the
//! vertex data itself owned elsewhere.
//!
//! # Index Types
//!
//! Indices are generic over the [`MeshIndex`] trait, allowing `u16`, `u32`,
//! `u64` or `usize` index buffers.
//!
//! # Grids
//!
//! [`GridDimensions`] describes an N×M vertex grid, [`PatchType`] how each of
//! its quads is split into two triangles, and [`grid_triangles`] builds the
//! corresponding triangle list:
//!
//! ```
//! use gridstrip::mesh::{grid_triangles, GridDimensions, PatchType, TraversalOrder};
//!
//! let dims = GridDimensions::new(4, 4).unwrap();
//! let tris: Vec<[u16; 3]> =
//!     grid_triangles(dims, PatchType::DownIn, TraversalOrder::RowMajor).unwrap();
//! assert_eq!(tris.len(), 18);
//! ```

mod builder;
mod grid;
mod index;
mod patch;

pub use builder::{flip_winding, grid_triangles};
pub use grid::{GridDimensions, TraversalOrder};
pub use index::{triangle_to_usize, MeshIndex};
pub use patch::{corner_vertex, Diagonal, PatchSignature, PatchType, Winding, PATCH_SIGNATURES};
