//! Error type for veb-tree.

use thiserror::Error;

/// An error returned by [`VebTree`](crate::VebTree) operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum VebError {
    /// The requested capacity cannot be covered by a supported universe.
    ///
    /// Capacity must be at least 1 and at most `max`.
    #[error("invalid universe capacity {capacity}: expected 1..={max}")]
    InvalidUniverse { capacity: usize, max: u64 },

    /// The eagerly built structure for the universe could not be allocated.
    #[error("failed to allocate {nodes} vEB nodes")]
    AllocationFailed { nodes: u64 },

    /// A key lies outside `[0, universe)`.
    #[error("key {key} is outside the universe [0, {universe})")]
    KeyOutOfRange { key: u32, universe: u64 },
}
