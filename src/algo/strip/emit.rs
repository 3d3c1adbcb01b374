//! Triangle strip emission.
//!
//! The strip walks the grid one column of patches at a time, zigzagging
//! between the left and right vertex of each row. Even columns run upward,
//! odd columns downward. Between columns a pair of repeated vertices forms
//! zero-area triangles that carry the strip over to the next column.

use tracing::trace;

use crate::error::{Result, StripError};
use crate::mesh::{Diagonal, GridDimensions, MeshIndex, PatchType};

/// Number of vertices in the strip for a grid.
///
/// Each column of patches takes `2N` vertices and each of the `M-2` column
/// transitions two more, giving `2·((N+1)·(M-1) - 1)`. Patch types whose
/// winding conflicts with the strip's natural one need one extra leading
/// vertex.
pub fn strip_len(dims: GridDimensions, patch_type: PatchType) -> usize {
    let base = 2 * ((dims.rows + 1) * dims.columns.saturating_sub(1)).saturating_sub(1);
    base + usize::from(patch_type.needs_winding_flip())
}

struct StripWriter<I> {
    vertices: Vec<I>,
}

impl<I: MeshIndex> StripWriter<I> {
    fn push(&mut self, v: usize) -> Result<()> {
        let index = I::try_from_usize(v).ok_or(StripError::IndexOverflow { index: v })?;
        self.vertices.push(index);
        Ok(())
    }
}

/// Emit the vertex indices of a single triangle strip covering the grid.
///
/// # Example
/// ```
/// use gridstrip::algo::strip::emit_strip;
/// use gridstrip::mesh::{GridDimensions, PatchType};
///
/// let dims = GridDimensions::new(3, 2).unwrap();
/// let strip: Vec<u32> = emit_strip(dims, PatchType::UpOut).unwrap();
/// assert_eq!(strip, vec![3, 3, 0, 4, 1, 5, 2]);
/// ```
pub fn emit_strip<I: MeshIndex>(dims: GridDimensions, patch_type: PatchType) -> Result<Vec<I>> {
    let dims = GridDimensions::new(dims.rows, dims.columns)?;
    let n = dims.rows;
    let last_column = dims.columns - 2;
    let diagonal = patch_type.diagonal();

    let mut out = StripWriter {
        vertices: Vec::with_capacity(strip_len(dims, patch_type)),
    };

    // Repeating the first vertex reverses the strip's facing.
    match patch_type {
        PatchType::UpOut => out.push(n)?,
        PatchType::DownIn => out.push(0)?,
        PatchType::UpIn | PatchType::DownOut => {}
    }

    let (mut v1, mut v2) = match diagonal {
        Diagonal::Up => (n, 0),
        Diagonal::Down => (0, n),
    };

    for column in 0..=last_column {
        let upward = column % 2 == 0;

        for row in 0..n {
            if upward {
                out.push(v1 + row)?;
                out.push(v2 + row)?;
            } else {
                out.push(v1 - row)?;
                out.push(v2 - row)?;
            }
        }
        if upward {
            v1 += n - 1;
            v2 += n - 1;
        } else {
            v1 -= n - 1;
            v2 -= n - 1;
        }

        if column == last_column {
            break;
        }

        let bridge_on_v1 = matches!(
            (upward, diagonal),
            (true, Diagonal::Up) | (false, Diagonal::Down)
        );
        if bridge_on_v1 {
            out.push(v1)?;
            out.push(v1)?;
            v2 = v1 + n;
        } else {
            out.push(v2)?;
            out.push(v2 + n)?;
            v1 = v2 + n;
        }
        trace!(column, v1, v2, "gridmesh: bridged to next column");
    }

    debug_assert_eq!(out.vertices.len(), strip_len(dims, patch_type));
    Ok(out.vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions::new(rows, columns).unwrap()
    }

    fn strip(rows: usize, columns: usize, pt: PatchType) -> Vec<u32> {
        emit_strip(dims(rows, columns), pt).unwrap()
    }

    #[test]
    fn test_single_column() {
        assert_eq!(strip(3, 2, PatchType::UpOut), vec![3, 3, 0, 4, 1, 5, 2]);
        assert_eq!(strip(3, 2, PatchType::UpIn), vec![3, 0, 4, 1, 5, 2]);
        assert_eq!(strip(3, 2, PatchType::DownOut), vec![0, 3, 1, 4, 2, 5]);
        assert_eq!(strip(3, 2, PatchType::DownIn), vec![0, 0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_bridges_up() {
        assert_eq!(
            strip(3, 3, PatchType::UpIn),
            vec![3, 0, 4, 1, 5, 2, 5, 5, 5, 8, 4, 7, 3, 6]
        );
        assert_eq!(
            strip(2, 3, PatchType::UpOut),
            vec![2, 2, 0, 3, 1, 3, 3, 3, 5, 2, 4]
        );
    }

    #[test]
    fn test_bridges_down() {
        assert_eq!(
            strip(3, 3, PatchType::DownOut),
            vec![0, 3, 1, 4, 2, 5, 5, 8, 8, 5, 7, 4, 6, 3]
        );
        assert_eq!(
            strip(2, 3, PatchType::DownIn),
            vec![0, 0, 2, 1, 3, 3, 5, 5, 3, 4, 2]
        );
    }

    #[test]
    fn test_strip_len() {
        for pt in PatchType::ALL {
            for rows in 2..6 {
                for columns in 2..6 {
                    let d = dims(rows, columns);
                    let s: Vec<usize> = emit_strip(d, pt).unwrap();
                    assert_eq!(s.len(), strip_len(d, pt));
                    assert!(s.iter().all(|&v| v < d.vertex_count()));
                }
            }
        }
    }

    #[test]
    fn test_degenerate_dimensions() {
        let result: Result<Vec<u32>> = emit_strip(
            GridDimensions { rows: 3, columns: 1 },
            PatchType::UpIn,
        );
        assert!(matches!(result, Err(StripError::InvalidParameter { .. })));
    }

    #[test]
    fn test_index_overflow() {
        let result: Result<Vec<u16>> = emit_strip(dims(256, 257), PatchType::UpIn);
        assert!(matches!(result, Err(StripError::IndexOverflow { .. })));
    }
}
