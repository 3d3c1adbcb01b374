//! Patch triangulation types.
//!
//! A patch is the quad between grid vertices `X`, `X+1`, `X+N` and `X+N+1`.
//! Its corners are labelled canonically, independent of where the patch sits
//! in the grid:
//!
//! ```text
//!   1 +------+ 3
//!     |      |
//!     |      |
//!   0 +------+ 2
//! ```

use std::fmt;

/// Direction of the diagonal seam that splits a patch into two triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    /// From lower left (corner 0) to upper right (corner 3).
    Up,
    /// From upper left (corner 1) to lower right (corner 2).
    Down,
}

/// Facing of a patch's triangles, by vertex order alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Normal points into the surface.
    In,
    /// Normal points out of the surface.
    Out,
}

/// The way every patch of a grid is triangulated.
///
/// This is topological, not geometric: "in" and "out" follow the vertex
/// order convention of [`PATCH_SIGNATURES`], never actual coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchType {
    /// Up diagonal, outward normal.
    UpOut,
    /// Up diagonal, inward normal.
    UpIn,
    /// Down diagonal, outward normal.
    DownOut,
    /// Down diagonal, inward normal.
    DownIn,
}

impl PatchType {
    /// All patch types.
    pub const ALL: [PatchType; 4] = [
        PatchType::UpOut,
        PatchType::UpIn,
        PatchType::DownOut,
        PatchType::DownIn,
    ];

    /// Signature magnitude of this patch type.
    #[inline]
    pub fn code(self) -> i8 {
        match self {
            PatchType::UpOut => 1,
            PatchType::UpIn => 2,
            PatchType::DownOut => 3,
            PatchType::DownIn => 4,
        }
    }

    /// Look up a patch type by signature magnitude.
    pub fn from_code(code: i8) -> Option<PatchType> {
        match code {
            1 => Some(PatchType::UpOut),
            2 => Some(PatchType::UpIn),
            3 => Some(PatchType::DownOut),
            4 => Some(PatchType::DownIn),
            _ => None,
        }
    }

    /// Diagonal direction of the patch.
    #[inline]
    pub fn diagonal(self) -> Diagonal {
        match self {
            PatchType::UpOut | PatchType::UpIn => Diagonal::Up,
            PatchType::DownOut | PatchType::DownIn => Diagonal::Down,
        }
    }

    /// Winding of the patch.
    #[inline]
    pub fn winding(self) -> Winding {
        match self {
            PatchType::UpOut | PatchType::DownOut => Winding::Out,
            PatchType::UpIn | PatchType::DownIn => Winding::In,
        }
    }

    /// Whether a strip of this type needs one leading duplicate vertex to
    /// flip its natural winding.
    ///
    /// This holds when diagonal and winding conflict: up/out and down/in.
    #[inline]
    pub fn needs_winding_flip(self) -> bool {
        matches!(self, PatchType::UpOut | PatchType::DownIn)
    }

    /// The two triangles of this patch type as canonical corner labels, the
    /// negative-signature triangle first.
    pub fn corner_triangles(self) -> [[u8; 3]; 2] {
        let i = 2 * (self.code() as usize - 1);
        [PATCH_SIGNATURES[i].corners, PATCH_SIGNATURES[i + 1].corners]
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatchType::UpOut => "up/out",
            PatchType::UpIn => "up/in",
            PatchType::DownOut => "down/out",
            PatchType::DownIn => "down/in",
        };
        f.write_str(name)
    }
}

/// One entry of the patch signature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSignature {
    /// Canonical corner labels, rotated so the smallest comes first.
    pub corners: [u8; 3],
    /// Signed signature. The magnitude is a [`PatchType::code`]; the two
    /// triangles of a valid patch carry opposite signs.
    pub value: i8,
}

/// Signatures of every triangle that can appear in a valid patch.
pub const PATCH_SIGNATURES: [PatchSignature; 8] = [
    PatchSignature { corners: [0, 2, 3], value: -1 }, // up   out  /|
    PatchSignature { corners: [0, 3, 1], value: 1 },  // up   out  |/
    PatchSignature { corners: [0, 3, 2], value: -2 }, // up   in   /|
    PatchSignature { corners: [0, 1, 3], value: 2 },  // up   in   |/
    PatchSignature { corners: [0, 2, 1], value: -3 }, // down out  |\
    PatchSignature { corners: [1, 2, 3], value: 3 },  // down out  \|
    PatchSignature { corners: [0, 1, 2], value: -4 }, // down in   |\
    PatchSignature { corners: [1, 3, 2], value: 4 },  // down in   \|
];

/// Vertex index of a canonical corner label for the patch whose lower left
/// vertex is `corner`.
#[inline]
pub fn corner_vertex(corner: usize, label: u8, rows: usize) -> usize {
    match label {
        0 => corner,
        1 => corner + 1,
        2 => corner + rows,
        _ => corner + rows + 1,
    }
}
