//! Triangle strip expansion.

use crate::mesh::MeshIndex;

/// Convert a triangle strip back into a triangle list.
///
/// Every window of three consecutive indices is a triangle, with the first
/// two vertices swapped on odd positions so all triangles keep the strip's
/// facing. Degenerate triangles (any repeated index) are dropped.
///
/// # Example
/// ```
/// use gridstrip::algo::strip::strip_to_triangles;
///
/// let tris = strip_to_triangles(&[3u32, 3, 0, 4, 1, 5, 2]);
/// assert_eq!(tris, vec![[0, 3, 4], [0, 4, 1], [1, 4, 5], [1, 5, 2]]);
/// ```
pub fn strip_to_triangles<I: MeshIndex>(strip: &[I]) -> Vec<[I; 3]> {
    strip
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[0] != w[1] && w[1] != w[2] && w[0] != w[2])
        .map(|(i, w)| {
            if i % 2 == 0 {
                [w[0], w[1], w[2]]
            } else {
                [w[1], w[0], w[2]]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strips() {
        assert!(strip_to_triangles::<u32>(&[]).is_empty());
        assert!(strip_to_triangles(&[0u32, 1]).is_empty());
        assert_eq!(strip_to_triangles(&[0u32, 1, 2]), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_alternating_winding() {
        assert_eq!(
            strip_to_triangles(&[0u16, 3, 1, 4]),
            vec![[0, 3, 1], [1, 3, 4]]
        );
    }

    #[test]
    fn test_bridge_is_dropped() {
        // Column bridge 5, 5 between two columns of a 3x3 grid.
        let strip: [u32; 14] = [3, 0, 4, 1, 5, 2, 5, 5, 5, 8, 4, 7, 3, 6];
        let tris = strip_to_triangles(&strip);
        assert_eq!(tris.len(), 8);
        assert!(tris.iter().all(|t| t[0] != t[1] && t[1] != t[2] && t[0] != t[2]));
    }
}
