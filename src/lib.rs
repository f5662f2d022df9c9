//! # veb-tree
//!
//! van Emde Boas tree: an ordered set of `u32` keys over a fixed universe.
//! O(log log U) for every ordered-set query.
//!
//! ## Features
//! - O(1) min/max
//! - O(log log U) insert, remove, contains, successor, predecessor
//! - Universe chosen at construction and rounded up to a power of two
//! - Eager arena layout: all Θ(U) nodes are allocated up front
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use veb_tree::VebTree;
//!
//! let mut tree = VebTree::new(1000).unwrap();
//! tree.insert(42).unwrap();
//! tree.insert(7).unwrap();
//!
//! assert_eq!(tree.min(), Some(7));
//! assert_eq!(tree.successor(7), Some(42));
//! assert_eq!(tree.predecessor(7), None);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod arena;
mod constants;
mod error;
mod universe;
mod veb;

#[cfg(test)]
mod proptests;

pub use constants::MAX_UNIVERSE_BITS;
pub use error::VebError;
pub use universe::{lower_sqrt, upper_sqrt, Universe};
pub use veb::{Iter, Members, VebTree};
