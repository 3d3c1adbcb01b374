//! Grid mesh construction.
//!
//! Builds the triangle list of a regular grid, the mirror image of the
//! detection in [`crate::algo::strip`]. Useful for producing test input and
//! for callers that generate grid surfaces procedurally.

use super::grid::{GridDimensions, TraversalOrder};
use super::index::MeshIndex;
use super::patch::{corner_vertex, PatchType};
use crate::error::{Result, StripError};

/// Build the triangle list of a grid.
///
/// Every patch is split the same way, as given by `patch_type`, and patches
/// are emitted in `order`. Within a patch the negative-signature triangle
/// comes first.
///
/// # Example
/// ```
/// use gridstrip::mesh::{grid_triangles, GridDimensions, PatchType, TraversalOrder};
///
/// let dims = GridDimensions::new(3, 2).unwrap();
/// let tris: Vec<[u32; 3]> =
///     grid_triangles(dims, PatchType::UpOut, TraversalOrder::ColumnMajor).unwrap();
/// assert_eq!(tris, vec![[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]]);
/// ```
pub fn grid_triangles<I: MeshIndex>(
    dims: GridDimensions,
    patch_type: PatchType,
    order: TraversalOrder,
) -> Result<Vec<[I; 3]>> {
    let dims = GridDimensions::new(dims.rows, dims.columns)?;
    let last = dims.vertex_count() - 1;
    if I::try_from_usize(last).is_none() {
        return Err(StripError::IndexOverflow { index: last });
    }

    let pair = patch_type.corner_triangles();
    let mut triangles = Vec::with_capacity(dims.triangle_count());

    for corner in dims.patch_corners(order) {
        for tri in pair {
            let mut out = [I::MAX; 3];
            for (slot, &label) in out.iter_mut().zip(&tri) {
                let v = corner_vertex(corner, label, dims.rows);
                *slot = I::try_from_usize(v).ok_or(StripError::IndexOverflow { index: v })?;
            }
            triangles.push(out);
        }
    }

    Ok(triangles)
}

/// Reverse the winding of every triangle.
///
/// Swapping the last two vertices turns a grid of one winding into the same
/// grid with the opposite winding, e.g. up/out into up/in.
pub fn flip_winding<I: MeshIndex>(triangles: &mut [[I; 3]]) {
    for tri in triangles {
        tri.swap(1, 2);
    }
}
