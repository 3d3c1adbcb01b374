//! Whole-grid consistency check.

use tracing::{debug, trace};

use crate::error::{Result, StripError};
use crate::mesh::{triangle_to_usize, GridDimensions, MeshIndex, TraversalOrder};

/// Replay the first patch at every patch position for one traversal order.
///
/// Returns the first patch that does not match.
fn check_order<I: MeshIndex>(
    triangles: &[[I; 3]],
    dims: GridDimensions,
    order: TraversalOrder,
) -> Result<()> {
    let a = triangle_to_usize(&triangles[0]);
    let b = triangle_to_usize(&triangles[1]);

    for (patch, corner) in dims.patch_corners(order).enumerate() {
        let kk = 2 * patch;
        let expected = [a.map(|v| v + corner), b.map(|v| v + corner)];
        let got = [
            triangle_to_usize(&triangles[kk]),
            triangle_to_usize(&triangles[kk + 1]),
        ];

        if got != expected {
            trace!(
                %order,
                patch,
                ?got,
                ?expected,
                "gridmesh: bad patch"
            );
            return Err(StripError::PatchMismatch {
                patch,
                got,
                expected,
            });
        }
    }

    Ok(())
}

/// Check that every patch is built like the first one.
///
/// Patches are first assumed to run in the same order as the vertices
/// (column-major). If that fails, row-major order is tried. The order that
/// matched is returned; if neither does, the error describes the first bad
/// patch of the row-major attempt.
pub fn check_all_patches<I: MeshIndex>(
    triangles: &[[I; 3]],
    dims: GridDimensions,
) -> Result<TraversalOrder> {
    let dims = GridDimensions::new(dims.rows, dims.columns)?;
    if triangles.len() != dims.triangle_count() {
        return Err(StripError::TriangleCountMismatch {
            expected: dims.triangle_count(),
            actual: triangles.len(),
        });
    }

    match check_order(triangles, dims, TraversalOrder::ColumnMajor) {
        Ok(()) => return Ok(TraversalOrder::ColumnMajor),
        Err(err) => debug!(%err, "gridmesh: column-major pass failed"),
    }

    match check_order(triangles, dims, TraversalOrder::RowMajor) {
        Ok(()) => Ok(TraversalOrder::RowMajor),
        Err(err) => {
            debug!(%err, "gridmesh: row-major pass failed, not a grid");
            Err(err)
        }
    }
}
