//! Grid dimension inference from the first patch.

use tracing::debug;

use crate::error::{Result, StripError};
use crate::mesh::{triangle_to_usize, GridDimensions, MeshIndex};

/// The six vertex indices of the first two triangles.
pub(crate) fn first_patch_indices<I: MeshIndex>(triangles: &[[I; 3]]) -> Result<[usize; 6]> {
    match triangles {
        [a, b, ..] => {
            let [a0, a1, a2] = triangle_to_usize(a);
            let [b0, b1, b2] = triangle_to_usize(b);
            Ok([a0, a1, a2, b0, b1, b2])
        }
        _ => Err(StripError::TooFewTriangles {
            count: triangles.len(),
        }),
    }
}

/// Infer the row count N from the first patch.
///
/// The first patch must be built from vertices 0, 1, N and N+1. Indices 0 and
/// 1 are skipped; the rest must take exactly two values that differ by one,
/// the smaller of which is N.
pub fn infer_rows<I: MeshIndex>(triangles: &[[I; 3]]) -> Result<usize> {
    let indices = first_patch_indices(triangles)?;
    let invalid = || StripError::InvalidFirstPatch { indices };

    let mut first: Option<usize> = None;
    let mut second: Option<usize> = None;

    for &v in &indices {
        if v <= 1 || first == Some(v) {
            continue;
        }
        match (first, second) {
            (None, _) => first = Some(v),
            (Some(_), None) => second = Some(v),
            (Some(_), Some(s)) if s == v => {}
            _ => {
                debug!(?indices, "gridmesh: invalid first 6 vertices");
                return Err(invalid());
            }
        }
    }

    let (Some(a), Some(b)) = (first, second) else {
        debug!(?indices, "gridmesh: first patch has fewer than 4 distinct corners");
        return Err(invalid());
    };

    if a.checked_add(1) == Some(b) {
        Ok(a)
    } else if b.checked_add(1) == Some(a) {
        Ok(b)
    } else {
        debug!(?indices, "gridmesh: first patch corners are not N and N+1");
        Err(invalid())
    }
}

/// Infer the grid dimensions (N, M) of a triangle mesh.
///
/// N comes from the first patch (see [`infer_rows`]); M is `vertex_count / N`,
/// which must divide evenly, and the triangle count must then be exactly
/// `2·(N-1)·(M-1)`.
///
/// # Example
/// ```
/// use gridstrip::algo::strip::infer_dimensions;
///
/// let tris: [[u32; 3]; 4] = [[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]];
/// let dims = infer_dimensions(6, &tris).unwrap();
/// assert_eq!((dims.rows, dims.columns), (3, 2));
/// ```
pub fn infer_dimensions<I: MeshIndex>(
    vertex_count: usize,
    triangles: &[[I; 3]],
) -> Result<GridDimensions> {
    debug!(
        vertex_count,
        triangle_count = triangles.len(),
        "gridmesh: inferring grid dimensions"
    );

    let rows = infer_rows(triangles)?;
    debug!(rows, "gridmesh: first guess at N");

    if vertex_count % rows != 0 {
        debug!(vertex_count, rows, "gridmesh: vertex count isn't divisible by N");
        return Err(StripError::NotDivisible { vertex_count, rows });
    }

    let columns = vertex_count / rows;
    // None when the grid is too large for its triangles to be counted.
    let expected = if columns < 2 {
        Some(0)
    } else {
        (rows - 1)
            .checked_mul(columns - 1)
            .and_then(|p| p.checked_mul(2))
    };

    if columns < 2 || expected != Some(triangles.len()) {
        let expected = expected.unwrap_or(usize::MAX);
        debug!(
            actual = triangles.len(),
            expected, "gridmesh: triangle count doesn't fit the grid"
        );
        return Err(StripError::TriangleCountMismatch {
            expected,
            actual: triangles.len(),
        });
    }

    Ok(GridDimensions { rows, columns })
}
