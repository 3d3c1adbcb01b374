//! First patch classification.

use tracing::debug;

use super::dimensions::first_patch_indices;
use crate::error::{Result, StripError};
use crate::mesh::{MeshIndex, PatchType, PATCH_SIGNATURES};

/// Map a vertex of the first patch onto its canonical corner label.
///
/// The first patch is assumed to use vertices {0, 1, N, N+1}, so anything
/// that is not 0, 1 or N is taken to be N+1.
#[inline]
fn canonical_label(v: usize, rows: usize) -> u8 {
    match v {
        0 => 0,
        1 => 1,
        v if v == rows => 2,
        _ => 3,
    }
}

/// Rotate a triangle until its smallest label comes first.
///
/// Rotation keeps the winding order intact, unlike sorting.
fn rotate_to_min(mut labels: [u8; 3]) -> [u8; 3] {
    while labels[0] > labels[1] || labels[0] > labels[2] {
        labels.rotate_left(1);
    }
    labels
}

/// Signed signature of one first-patch triangle.
fn signature(labels: [u8; 3], triangle: usize) -> Result<i8> {
    let labels = rotate_to_min(labels);
    match PATCH_SIGNATURES.iter().find(|s| s.corners == labels) {
        Some(s) => {
            debug!(triangle, value = s.value, "gridmesh: triangle signature");
            Ok(s.value)
        }
        None => {
            debug!(triangle, ?labels, "gridmesh: bad triangle in first patch");
            Err(StripError::UnknownTriangle { triangle, labels })
        }
    }
}

/// Classify how the first patch is triangulated.
///
/// Both triangles are mapped onto corner labels, rotated into canonical form
/// and looked up in [`PATCH_SIGNATURES`]. A valid patch pairs a `+X` triangle
/// with a `-X` triangle; `X` names the patch type.
///
/// # Example
/// ```
/// use gridstrip::algo::strip::classify_first_patch;
/// use gridstrip::mesh::PatchType;
///
/// let tris: [[u32; 3]; 2] = [[0, 3, 4], [0, 4, 1]];
/// assert_eq!(classify_first_patch(&tris, 3).unwrap(), PatchType::UpOut);
/// ```
pub fn classify_first_patch<I: MeshIndex>(triangles: &[[I; 3]], rows: usize) -> Result<PatchType> {
    let v = first_patch_indices(triangles)?;
    let label = |i: usize| canonical_label(v[i], rows);

    let first = signature([label(0), label(1), label(2)], 0)?;
    let second = signature([label(3), label(4), label(5)], 1)?;

    if first + second != 0 {
        debug!(first, second, "gridmesh: first triangles don't match");
        return Err(StripError::MismatchedTriangles { first, second });
    }

    PatchType::from_code(first.abs()).ok_or(StripError::MismatchedTriangles { first, second })
}
