//! Error types for gridstrip.
//!
//! Every error here means "this mesh is not a grid" (or a builder was given
//! parameters that cannot describe one). None of them are fatal: the caller's
//! recourse is to keep rendering the mesh as a plain triangle list.

use thiserror::Error;

/// Result type alias using [`StripError`].
pub type Result<T> = std::result::Result<T, StripError>;

/// Reasons a triangle mesh could not be converted to a grid strip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// The mesh has fewer than the two triangles that make up the first patch.
    #[error("mesh has {count} triangle(s), at least 2 are needed for the first patch")]
    TooFewTriangles {
        /// Number of triangles in the mesh.
        count: usize,
    },

    /// The first six vertex indices do not resolve to the corners {0, 1, N, N+1}.
    #[error("first patch vertices {indices:?} are not of the form {{0, 1, N, N+1}}")]
    InvalidFirstPatch {
        /// The vertex indices of the first two triangles.
        indices: [usize; 6],
    },

    /// The vertex count is not a multiple of the inferred row count.
    #[error("vertex count {vertex_count} is not divisible by row count {rows}")]
    NotDivisible {
        /// Number of vertices in the mesh.
        vertex_count: usize,
        /// Inferred number of rows (N).
        rows: usize,
    },

    /// The triangle count disagrees with `2·(N-1)·(M-1)`.
    #[error("triangle count {actual} does not match the {expected} expected for the grid")]
    TriangleCountMismatch {
        /// Triangle count implied by the inferred dimensions, `usize::MAX`
        /// if that count itself overflows.
        expected: usize,
        /// Triangle count of the mesh.
        actual: usize,
    },

    /// A triangle of the first patch is not a valid half of a patch.
    #[error("first patch triangle {triangle} has corner labels {labels:?}, which match no signature")]
    UnknownTriangle {
        /// Which triangle of the first patch (0 or 1).
        triangle: usize,
        /// Canonical corner labels after rotation.
        labels: [u8; 3],
    },

    /// The two triangles of the first patch do not form a complementary pair.
    #[error("first patch triangles do not match (signatures {first} and {second})")]
    MismatchedTriangles {
        /// Signature of the first triangle.
        first: i8,
        /// Signature of the second triangle.
        second: i8,
    },

    /// A patch does not reproduce the first patch under either traversal order.
    #[error("patch {patch} is {got:?}, expected {expected:?}")]
    PatchMismatch {
        /// Index of the offending patch in mesh order.
        patch: usize,
        /// The patch's two triangles as found in the mesh.
        got: [[usize; 3]; 2],
        /// The triangles the first patch predicts at this position.
        expected: [[usize; 3]; 2],
    },

    /// A strip index does not fit in the requested index type.
    #[error("vertex index {index} does not fit in the strip index type")]
    IndexOverflow {
        /// The index that overflowed.
        index: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl StripError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        StripError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StripError::NotDivisible {
            vertex_count: 10,
            rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex count 10 is not divisible by row count 3"
        );

        let err = StripError::invalid_param("rows", 1, "a grid needs at least 2 rows");
        assert_eq!(
            err.to_string(),
            "invalid parameter: rows = 1 (a grid needs at least 2 rows)"
        );
    }
}
