//! Vertex index types.
//!
//! Triangles and strips are generic over the integer type of their vertex
//! indices so that a 16-bit index buffer can be converted into a 16-bit strip
//! without widening (u16 for small meshes, u32 for typical meshes, u64 or
//! usize for massive ones).

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can be used as vertex indices.
///
/// This trait is implemented for `u16`, `u32`, `u64` and `usize`.
pub trait MeshIndex: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// The largest index representable by this type.
    const MAX: Self;

    /// Convert from usize, returning `None` if the value does not fit.
    fn try_from_usize(v: usize) -> Option<Self>;

    /// Convert to usize.
    ///
    /// Values that do not fit saturate to `usize::MAX`, which is never a valid
    /// vertex index, so an oversized index can only make a mesh fail
    /// detection and never alias a real vertex.
    fn to_usize(self) -> usize;
}

macro_rules! impl_mesh_index {
    ($($ty:ty),*) => {
        $(
            impl MeshIndex for $ty {
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn try_from_usize(v: usize) -> Option<Self> {
                    <$ty>::try_from(v).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_mesh_index!(u16, u32, u64, usize);

/// Widen a triangle to usize indices.
#[inline]
pub fn triangle_to_usize<I: MeshIndex>(triangle: &[I; 3]) -> [usize; 3] {
    [
        triangle[0].to_usize(),
        triangle[1].to_usize(),
        triangle[2].to_usize(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_indices() {
        assert_eq!(u16::try_from_usize(1000), Some(1000u16));
        assert_eq!(u16::try_from_usize(70_000), None);
        assert_eq!(1000u16.to_usize(), 1000);
    }

    #[test]
    fn test_max() {
        assert_eq!(<u16 as MeshIndex>::MAX, u16::MAX);
        assert_eq!(u32::try_from_usize(u32::MAX as usize), Some(u32::MAX));
    }

    #[test]
    fn test_wide_index_never_truncates() {
        let v = u64::MAX.to_usize();
        assert!(v == usize::MAX || v as u64 == u64::MAX);
        // 2^32 + 3 must not wrap to 3 on narrow targets.
        let wide: u64 = (1 << 32) + 3;
        assert_ne!(wide.to_usize(), 3);
    }

    #[test]
    fn test_triangle_to_usize() {
        let t: [u16; 3] = [0, 4, 1];
        assert_eq!(triangle_to_usize(&t), [0, 4, 1]);
    }
}
