//! Core constants for veb-tree.

/// Sentinel value for an empty min/max slot or a missing child index.
///
/// Used to indicate:
/// - Empty node (`min == max == EMPTY`)
/// - No summary / no clusters on a leaf node
pub const EMPTY: u32 = u32::MAX;

/// Exponent of the leaf universe (`u = 2`).
///
/// Leaf nodes own no children and store only `min`/`max`.
pub const LEAF_UNIVERSE_BITS: u8 = 1;

/// Largest supported universe exponent (`u = 2^30`).
///
/// Keeps every key below `EMPTY` and every node index of the eagerly built
/// structure (about 1.4 × u nodes) inside `u32`.
pub const MAX_UNIVERSE_BITS: u8 = 30;
