//! Grid mesh to triangle strip conversion.
//!
//! A triangle mesh whose connectivity is a regular N×M grid can be drawn as a
//! single triangle strip, which references each shared vertex implicitly
//! through traversal order instead of once per triangle. This module detects
//! such meshes and produces the strip.
//!
//! The conversion runs four stages, each of which can reject the mesh:
//!
//! 1. [`infer_dimensions`] reads N off the first patch (vertices 0, 1, N and
//!    N+1) and checks the vertex and triangle counts against it.
//! 2. [`classify_first_patch`] determines the [`PatchType`] of the first
//!    patch from the [`PATCH_SIGNATURES`](crate::mesh::PATCH_SIGNATURES) table.
//! 3. [`check_all_patches`] confirms every other patch repeats the first one,
//!    with patches listed either column-major or row-major.
//! 4. [`emit_strip`] generates the strip's vertex indices.
//!
//! Only connectivity is examined; vertex positions are never needed.
//!
//! # Example
//!
//! ```
//! use gridstrip::algo::strip::gridmesh_to_strip;
//!
//! let tris: [[u32; 3]; 4] = [[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]];
//!
//! let grid = gridmesh_to_strip(6, &tris).unwrap();
//! assert_eq!((grid.layout.dimensions.rows, grid.layout.dimensions.columns), (3, 2));
//! assert_eq!(grid.vertices, vec![3, 3, 0, 4, 1, 5, 2]);
//! ```
//!
//! Detection alone skips stage 4 and allocates nothing:
//!
//! ```
//! use gridstrip::algo::strip::{detect_grid, is_grid};
//!
//! let tris: [[u32; 3]; 4] = [[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 3]];
//! assert!(detect_grid(6, &tris).is_err());
//! assert!(!is_grid(6, &tris));
//! ```

mod classify;
mod consistency;
mod dimensions;
mod emit;
mod unstrip;

pub use classify::classify_first_patch;
pub use consistency::check_all_patches;
pub use dimensions::{infer_dimensions, infer_rows};
pub use emit::{emit_strip, strip_len};
pub use unstrip::strip_to_triangles;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::mesh::{GridDimensions, MeshIndex, PatchType, TraversalOrder};

/// Options for batch conversion.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// Whether to generate strips, or only detect grids (default: true).
    pub emit_strip: bool,

    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            emit_strip: true,
            parallel: true,
        }
    }
}

impl StripOptions {
    /// Options that only detect grids and never allocate strips.
    pub fn detect_only() -> Self {
        Self {
            emit_strip: false,
            ..Self::default()
        }
    }

    /// Set whether to generate strips.
    pub fn with_emit_strip(mut self, emit_strip: bool) -> Self {
        self.emit_strip = emit_strip;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// The grid structure found in a triangle mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLayout {
    /// Grid dimensions (N, M).
    pub dimensions: GridDimensions,
    /// How every patch is triangulated.
    pub patch_type: PatchType,
    /// Order in which the mesh lists its patches.
    pub order: TraversalOrder,
}

impl GridLayout {
    /// Number of vertices in the strip for this grid.
    pub fn strip_len(&self) -> usize {
        strip_len(self.dimensions, self.patch_type)
    }

    /// Generate the strip for this grid.
    pub fn strip<I: MeshIndex>(&self) -> Result<Vec<I>> {
        emit_strip(self.dimensions, self.patch_type)
    }
}

/// A grid mesh converted to a triangle strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStrip<I: MeshIndex = u32> {
    /// The detected grid.
    pub layout: GridLayout,
    /// Strip vertex indices into the mesh's vertex data.
    pub vertices: Vec<I>,
}

impl<I: MeshIndex> GridStrip<I> {
    /// Number of vertices in the strip.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the strip has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Take ownership of the strip's vertex indices.
    pub fn into_vertices(self) -> Vec<I> {
        self.vertices
    }
}

/// Check whether a triangle mesh is a grid, without generating a strip.
///
/// `vertex_count` is the number of vertices the triangles index into.
pub fn detect_grid<I: MeshIndex>(vertex_count: usize, triangles: &[[I; 3]]) -> Result<GridLayout> {
    let dimensions = infer_dimensions(vertex_count, triangles)?;
    let patch_type = classify_first_patch(triangles, dimensions.rows)?;
    let order = check_all_patches(triangles, dimensions)?;

    debug!(%dimensions, %patch_type, %order, "gridmesh: grid detected");

    Ok(GridLayout {
        dimensions,
        patch_type,
        order,
    })
}

/// Whether a triangle mesh is a grid.
pub fn is_grid<I: MeshIndex>(vertex_count: usize, triangles: &[[I; 3]]) -> bool {
    detect_grid(vertex_count, triangles).is_ok()
}

/// Convert a grid triangle mesh into a single triangle strip.
///
/// On failure nothing is allocated; the mesh should be drawn as a plain
/// triangle list instead.
pub fn gridmesh_to_strip<I: MeshIndex>(
    vertex_count: usize,
    triangles: &[[I; 3]],
) -> Result<GridStrip<I>> {
    let layout = detect_grid(vertex_count, triangles)?;
    let vertices = layout.strip()?;

    info!(
        "Trimesh successfully gridded to {}: {} triangles -> {} strip vertices",
        layout.dimensions,
        triangles.len(),
        vertices.len()
    );

    Ok(GridStrip { layout, vertices })
}

/// One mesh of a batch conversion.
#[derive(Debug, Clone, Copy)]
pub struct GridInput<'a, I: MeshIndex = u32> {
    /// Number of vertices the triangles index into.
    pub vertex_count: usize,
    /// Triangle vertex indices.
    pub triangles: &'a [[I; 3]],
}

impl<'a, I: MeshIndex> GridInput<'a, I> {
    /// Create a batch entry.
    pub fn new(vertex_count: usize, triangles: &'a [[I; 3]]) -> Self {
        Self {
            vertex_count,
            triangles,
        }
    }
}

/// Result of converting one mesh of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOutcome<I: MeshIndex = u32> {
    /// The detected grid.
    pub layout: GridLayout,
    /// The strip, if [`StripOptions::emit_strip`] was set.
    pub strip: Option<Vec<I>>,
}

fn convert_one<I: MeshIndex>(input: &GridInput<'_, I>, emit: bool) -> Result<GridOutcome<I>> {
    if emit {
        let GridStrip { layout, vertices } = gridmesh_to_strip(input.vertex_count, input.triangles)?;
        Ok(GridOutcome {
            layout,
            strip: Some(vertices),
        })
    } else {
        let layout = detect_grid(input.vertex_count, input.triangles)?;
        Ok(GridOutcome { layout, strip: None })
    }
}

/// Convert many independent meshes.
///
/// Results are returned in input order. Each mesh is converted on its own,
/// so a failure only affects its own entry.
pub fn strip_many<I: MeshIndex>(
    meshes: &[GridInput<'_, I>],
    options: &StripOptions,
) -> Vec<Result<GridOutcome<I>>> {
    let emit = options.emit_strip;

    let results: Vec<Result<GridOutcome<I>>> = if options.parallel {
        meshes.par_iter().map(|m| convert_one(m, emit)).collect()
    } else {
        meshes.iter().map(|m| convert_one(m, emit)).collect()
    };

    let converted = results.iter().filter(|r| r.is_ok()).count();
    info!(
        "Converted {} of {} meshes to grid strips",
        converted,
        meshes.len()
    );

    results
}
