//! Node of the recursive vEB structure.

use crate::constants::EMPTY;
use crate::universe::Universe;

/// One node covering a sub-universe `[0, u)`.
///
/// # Layout
/// - `min`/`max`: cached extremes, `EMPTY` when the node holds nothing.
///   `min` is never stored inside a cluster; every other key is.
/// - `summary`: arena index of the node tracking non-empty clusters
///   (`EMPTY` on leaves).
/// - `clusters`: arena index of cluster 0's root (`EMPTY` on leaves).
/// - `stride`: node count of one cluster subtree. Clusters are built back
///   to back, so cluster `i` lives at `clusters + i * stride`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub min: u32,
    pub max: u32,
    pub summary: u32,
    pub clusters: u32,
    pub stride: u32,
    pub universe: Universe,
}

impl Node {
    /// Create an empty node with no children attached yet.
    #[inline]
    pub fn new(universe: Universe) -> Self {
        Node {
            min: EMPTY,
            max: EMPTY,
            summary: EMPTY,
            clusters: EMPTY,
            stride: 0,
            universe,
        }
    }

    /// Whether the node holds no key.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.min == EMPTY
    }

    /// Arena index of cluster `i`.
    ///
    /// # Note
    /// Meaningless on leaves. Callers check `universe.is_leaf()` first.
    #[inline(always)]
    pub fn cluster(&self, i: u32) -> u32 {
        debug_assert!(!self.universe.is_leaf());
        debug_assert!(i < self.universe.cluster_count());
        self.clusters + i * self.stride
    }

    /// Make `x` the only key of the node.
    #[inline(always)]
    pub fn set_single(&mut self, x: u32) {
        self.min = x;
        self.max = x;
    }

    /// Forget every key cached at this node. Children are untouched.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.min = EMPTY;
        self.max = EMPTY;
    }
}
