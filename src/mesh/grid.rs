//! Grid topology.
//!
//! A grid of `rows` (N) by `columns` (M) vertices stores the vertex at row
//! `r`, column `c` at index `c·N + r`:
//!
//! ```text
//!  N-1 -- 2N-1 -- ... -- MN-1
//!   |       |              |
//!   :       :              :
//!   1 ---- N+1 -- ... - (M-1)N+1
//!   |       |              |
//!   0 ----- N --- ... -- (M-1)N
//! ```
//!
//! This is topological space only; geometrically the grid may be flipped or
//! bent in any way.

use std::fmt;

use crate::error::{Result, StripError};

/// Dimensions of a vertex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Vertices per column (N).
    pub rows: usize,
    /// Number of vertex columns (M).
    pub columns: usize,
}

impl GridDimensions {
    /// Create dimensions for a grid with at least one patch.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows < 2 {
            return Err(StripError::invalid_param(
                "rows",
                rows,
                "a grid needs at least 2 rows",
            ));
        }
        if columns < 2 {
            return Err(StripError::invalid_param(
                "columns",
                columns,
                "a grid needs at least 2 columns",
            ));
        }
        let triangles = rows.checked_mul(columns).and_then(|v| v.checked_mul(2));
        if triangles.is_none() {
            return Err(StripError::invalid_param(
                "columns",
                columns,
                "too many vertices to index",
            ));
        }
        Ok(Self { rows, columns })
    }

    /// Total number of vertices (N·M).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of patches, `(N-1)·(M-1)`.
    #[inline]
    pub fn patch_count(&self) -> usize {
        (self.rows - 1) * (self.columns - 1)
    }

    /// Number of triangles, two per patch.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.patch_count()
    }

    /// Index of the vertex at (`row`, `column`).
    #[inline]
    pub fn vertex(&self, row: usize, column: usize) -> usize {
        column * self.rows + row
    }

    /// Corner offsets of every patch, in the order the patches are laid out
    /// for the given traversal.
    pub fn patch_corners(&self, order: TraversalOrder) -> impl Iterator<Item = usize> + '_ {
        let (outer, inner) = match order {
            TraversalOrder::ColumnMajor => (self.columns - 1, self.rows - 1),
            TraversalOrder::RowMajor => (self.rows - 1, self.columns - 1),
        };
        (0..outer).flat_map(move |o| {
            (0..inner).map(move |i| match order {
                TraversalOrder::ColumnMajor => self.vertex(i, o),
                TraversalOrder::RowMajor => self.vertex(o, i),
            })
        })
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Order in which the patches of a grid appear in the triangle list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Bottom to top within a column, columns left to right. This matches the
    /// vertex layout.
    ColumnMajor,
    /// Left to right within a row, rows bottom to top.
    RowMajor,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::ColumnMajor => f.write_str("column-major"),
            TraversalOrder::RowMajor => f.write_str("row-major"),
        }
    }
}
