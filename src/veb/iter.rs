//! Iterator support for VebTree traversal.
//!
//! Two enumerations are offered:
//! - [`Iter`] hops along the successor (or predecessor) chain, O(log log U)
//!   per key
//! - [`Members`] probes membership of every key in the universe, O(U) total
//!   regardless of how many keys are stored

use core::iter::FusedIterator;

use crate::veb::VebTree;

/// Iterator over keys in ascending order, following the successor chain.
///
/// # Algorithm
/// 1. Start at the cached `min` (front) and `max` (back)
/// 2. Advance the front with `successor`, the back with `predecessor`
/// 3. Stop once `len` keys have been yielded, so the ends never cross
///
/// # Example
/// ```rust
/// use veb_tree::VebTree;
///
/// let mut tree = VebTree::new(64).unwrap();
/// for key in [10, 20, 30] {
///     tree.insert(key).unwrap();
/// }
///
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
/// assert_eq!(tree.iter().rev().collect::<Vec<_>>(), vec![30, 20, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a VebTree,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a VebTree) -> Self {
        Self {
            tree,
            front: tree.min(),
            back: tree.max(),
            remaining: tree.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(key);
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(key);
        Some(key)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Keys in ascending order, found by testing every key of the universe.
///
/// A clone continues from the same position; call [`VebTree::members`]
/// again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Members<'a> {
    tree: &'a VebTree,
    next: u64,
}

impl<'a> Members<'a> {
    pub(crate) fn new(tree: &'a VebTree) -> Self {
        Self { tree, next: 0 }
    }
}

impl Iterator for Members<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let size = self.tree.capacity();
        while self.next < size {
            // next < size <= 2^MAX_UNIVERSE_BITS, so it fits u32.
            let key = self.next as u32;
            self.next += 1;
            if self.tree.contains(key) {
                return Some(key);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.tree.capacity().saturating_sub(self.next);
        (0, usize::try_from(left).ok())
    }
}

impl FusedIterator for Members<'_> {}
