//! Property-based tests for grid detection and strip emission.
//!
//! Run with: cargo test --test proptest_grid

use gridstrip::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_patch_type() -> impl Strategy<Value = PatchType> {
    prop::sample::select(PatchType::ALL.to_vec())
}

fn arb_order() -> impl Strategy<Value = TraversalOrder> {
    prop::sample::select(vec![TraversalOrder::ColumnMajor, TraversalOrder::RowMajor])
}

/// A grid layout and its triangle list.
fn arb_grid() -> impl Strategy<Value = (GridDimensions, PatchType, TraversalOrder, Vec<[u32; 3]>)> {
    (2usize..24, 2usize..24, arb_patch_type(), arb_order()).prop_map(
        |(rows, columns, pt, order)| {
            let dims = GridDimensions::new(rows, columns).unwrap();
            let tris = grid_triangles(dims, pt, order).unwrap();
            (dims, pt, order, tris)
        },
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_dimension_recovery((dims, pt, _order, tris) in arb_grid()) {
        let layout = detect_grid(dims.vertex_count(), &tris).unwrap();
        prop_assert_eq!(layout.dimensions, dims);
        prop_assert_eq!(layout.patch_type, pt);
    }

    #[test]
    fn proptest_patch_order_recovered((dims, _pt, order, tris) in arb_grid()) {
        let layout = detect_grid(dims.vertex_count(), &tris).unwrap();
        // With a single row or column of patches both orders describe the
        // same triangle list, and column-major is tried first.
        if dims.rows > 2 && dims.columns > 2 {
            prop_assert_eq!(layout.order, order);
        }
    }

    #[test]
    fn proptest_strip_length_law((dims, pt, _order, tris) in arb_grid()) {
        let grid = gridmesh_to_strip(dims.vertex_count(), &tris).unwrap();
        let base = 2 * ((dims.rows + 1) * (dims.columns - 1) - 1);
        let extra = usize::from(matches!(pt, PatchType::UpOut | PatchType::DownIn));
        prop_assert_eq!(grid.len(), base + extra);
    }

    #[test]
    fn proptest_strip_indices_in_range((dims, pt, _order, tris) in arb_grid()) {
        let grid = gridmesh_to_strip(dims.vertex_count(), &tris).unwrap();
        let lead = usize::from(pt.needs_winding_flip());

        prop_assert!(grid.vertices.iter().all(|&v| (v as usize) < dims.vertex_count()));

        // Each column of patches is a 2N zigzag followed by a two-vertex bridge.
        let zigzag = 2 * dims.rows;
        let bridges = dims.columns - 2;
        prop_assert!(grid.len() - lead - 2 * bridges <= 2 * dims.vertex_count());

        for column in 0..bridges {
            let p = lead + column * (zigzag + 2) + zigzag;
            let (a, b) = (grid.vertices[p], grid.vertices[p + 1]);
            prop_assert!(
                a == b || b as usize == a as usize + dims.rows,
                "bridge {} is ({}, {})", column, a, b
            );
        }
    }

    #[test]
    fn proptest_strip_covers_every_triangle((dims, _pt, _order, tris) in arb_grid()) {
        let grid = gridmesh_to_strip(dims.vertex_count(), &tris).unwrap();
        let rebuilt = strip_to_triangles(&grid.vertices);
        prop_assert_eq!(normalized(&rebuilt), normalized(&tris));
    }

    #[test]
    fn proptest_detection_only_agrees((dims, _pt, _order, tris) in arb_grid()) {
        let layout = detect_grid(dims.vertex_count(), &tris).unwrap();
        let grid = gridmesh_to_strip(dims.vertex_count(), &tris).unwrap();
        prop_assert_eq!(layout, grid.layout);

        let batch = strip_many(
            &[GridInput::new(dims.vertex_count(), &tris)],
            &StripOptions::detect_only().sequential(),
        );
        let outcome = batch[0].as_ref().unwrap();
        prop_assert!(outcome.strip.is_none());
        prop_assert_eq!(outcome.layout, layout);
    }

    #[test]
    fn proptest_perturbed_patch_rejected(
        (dims, _pt, _order, tris) in arb_grid(),
        patch in any::<prop::sample::Index>(),
        which in 0usize..2,
        slot in 0usize..3,
        offset in 1u32..5,
    ) {
        // Skip the first patch, which defines the pattern.
        prop_assume!(dims.patch_count() > 1);
        let patch = 1 + patch.index(dims.patch_count() - 1);

        let mut broken = tris.clone();
        let tri = &mut broken[2 * patch + which];
        tri[slot] = (tri[slot] + offset) % dims.vertex_count() as u32;
        prop_assume!(broken != tris);

        prop_assert!(!is_grid(dims.vertex_count(), &broken));
    }
}

/// Rotate each triangle so its smallest index leads, then sort.
fn normalized(tris: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut out: Vec<[u32; 3]> = tris
        .iter()
        .map(|t| {
            let mut t = *t;
            while t[0] > t[1] || t[0] > t[2] {
                t.rotate_left(1);
            }
            t
        })
        .collect();
    out.sort_unstable();
    out
}
