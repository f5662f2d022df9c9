//! Main vEB tree structure for ordered integer sets.

use crate::arena::Arena;
use crate::constants::EMPTY;
use crate::error::VebError;
use crate::universe::Universe;
use crate::veb::{Iter, Members, Node};

/// Arena index of the root node; construction allocates it first.
const ROOT: u32 = 0;

/// Ordered set of `u32` keys drawn from a fixed universe `[0, u)`.
///
/// A van Emde Boas tree: every node over a universe `u` owns `upper_sqrt(u)`
/// clusters of `lower_sqrt(u)` keys each, plus a summary recording which
/// clusters are non-empty. The minimum of each node is cached at that node
/// only and never stored in a cluster, which is what keeps insert and
/// delete down to one real recursion per level.
///
/// # Key Features
/// - O(log log U) insert, remove, contains, successor, predecessor
/// - O(1) min/max
/// - Universe fixed at construction, rounded up to a power of two
///
/// # Architecture
/// - All nodes pre-allocated in one arena (Θ(U) nodes, no lazy allocation)
/// - Children referenced by `u32` arena index, no back references
/// - Range checks happen once at the public entry points; the recursion
///   below them is unchecked
///
/// # Memory Usage
/// About 1.4 × U nodes of 24 bytes each, whatever the number of keys.
///
/// # Example
/// ```rust
/// use veb_tree::VebTree;
///
/// let mut tree = VebTree::new(16).unwrap();
/// for key in [3, 7, 1, 14] {
///     tree.insert(key).unwrap();
/// }
///
/// assert_eq!(tree.min(), Some(1));
/// assert_eq!(tree.max(), Some(14));
/// assert_eq!(tree.successor(3), Some(7));
/// assert_eq!(tree.predecessor(7), Some(3));
/// assert!(!tree.contains(2));
/// ```
#[derive(Debug, Clone)]
pub struct VebTree {
    /// Every node of the structure; the root is at `ROOT`.
    nodes: Arena<Node>,

    /// Universe of the root node.
    universe: Universe,

    /// Number of keys stored in the tree.
    len: usize,
}

impl VebTree {
    /// Create an empty tree able to hold every key in `[0, capacity)`.
    ///
    /// The universe is rounded up to the next power of two (at least 2) and
    /// the whole recursive structure is built immediately.
    ///
    /// # Errors
    /// - [`VebError::InvalidUniverse`] if `capacity` is 0 or exceeds
    ///   `2^MAX_UNIVERSE_BITS`
    /// - [`VebError::AllocationFailed`] if the node storage cannot be
    ///   reserved
    ///
    /// No partial tree is ever returned.
    ///
    /// # Performance
    /// O(U) time and memory
    ///
    /// # Example
    /// ```rust
    /// use veb_tree::VebTree;
    ///
    /// let tree = VebTree::new(100).unwrap();
    /// assert_eq!(tree.capacity(), 128);
    /// assert!(tree.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, VebError> {
        let universe = Universe::from_capacity(capacity)?;
        let node_count = universe.node_count() as usize;

        let mut nodes = reserve_nodes(node_count)?;
        let root = build(&mut nodes, universe);
        debug_assert_eq!(root, ROOT);
        debug_assert_eq!(nodes.len(), node_count);

        tracing::debug!(
            capacity,
            universe = universe.size(),
            node_count,
            "built vEB tree"
        );

        Ok(Self {
            nodes,
            universe,
            len: 0,
        })
    }

    /// Universe of the tree.
    #[inline]
    pub fn universe(&self) -> Universe {
        self.universe
    }

    /// Number of representable keys (`u`); every key must be below it.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.universe.size()
    }

    /// Number of keys stored in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no key.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest key, or `None` if the tree is empty.
    ///
    /// # Performance
    /// O(1) - cached at the root
    #[inline]
    pub fn min(&self) -> Option<u32> {
        as_key(self.nodes.get(ROOT).min)
    }

    /// Largest key, or `None` if the tree is empty.
    ///
    /// # Performance
    /// O(1) - cached at the root
    #[inline]
    pub fn max(&self) -> Option<u32> {
        as_key(self.nodes.get(ROOT).max)
    }

    /// Check if a key exists in the tree.
    ///
    /// Keys outside the universe are never members.
    ///
    /// # Performance
    /// O(log log U)
    pub fn contains(&self, key: u32) -> bool {
        self.in_range(key) && self.contains_at(ROOT, key)
    }

    /// Insert a key into the tree.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was newly inserted
    /// * `Ok(false)` if the key already existed (the tree is unchanged)
    ///
    /// # Errors
    /// [`VebError::KeyOutOfRange`] if `key >= capacity()`.
    ///
    /// # Performance
    /// O(log log U)
    ///
    /// # Example
    /// ```rust
    /// use veb_tree::VebTree;
    ///
    /// let mut tree = VebTree::new(64).unwrap();
    /// assert_eq!(tree.insert(42), Ok(true));
    /// assert_eq!(tree.insert(42), Ok(false));
    /// assert!(tree.insert(64).is_err());
    /// ```
    pub fn insert(&mut self, key: u32) -> Result<bool, VebError> {
        self.check_key(key)?;
        if self.contains_at(ROOT, key) {
            return Ok(false);
        }

        self.insert_at(ROOT, key);
        self.len += 1;
        Ok(true)
    }

    /// Remove a key from the tree.
    ///
    /// # Returns
    /// * `Ok(true)` if the key was present and has been removed
    /// * `Ok(false)` if the key was absent (the tree is unchanged)
    ///
    /// # Errors
    /// [`VebError::KeyOutOfRange`] if `key >= capacity()`.
    ///
    /// # Performance
    /// O(log log U)
    pub fn remove(&mut self, key: u32) -> Result<bool, VebError> {
        self.check_key(key)?;
        if !self.contains_at(ROOT, key) {
            return Ok(false);
        }

        self.remove_at(ROOT, key);
        self.len -= 1;
        Ok(true)
    }

    /// Smallest key strictly greater than `key`.
    ///
    /// # Returns
    /// The successor, or `None` if no larger key exists (including every
    /// `key >= capacity()`).
    ///
    /// # Performance
    /// O(log log U)
    pub fn successor(&self, key: u32) -> Option<u32> {
        if !self.in_range(key) {
            return None;
        }
        as_key(self.successor_at(ROOT, key))
    }

    /// Largest key strictly smaller than `key`.
    ///
    /// # Returns
    /// The predecessor, or `None` if no smaller key exists. For
    /// `key >= capacity()` every stored key is smaller, so this is `max()`.
    ///
    /// # Performance
    /// O(log log U)
    pub fn predecessor(&self, key: u32) -> Option<u32> {
        if !self.in_range(key) {
            return self.max();
        }
        as_key(self.predecessor_at(ROOT, key))
    }

    /// Remove every key, keeping the allocated structure.
    ///
    /// # Performance
    /// O(U) - resets every node
    pub fn clear(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear();
        }
        self.len = 0;

        tracing::debug!(universe = self.universe.size(), "cleared vEB tree");
    }

    /// Insert every key of the universe.
    ///
    /// # Performance
    /// O(U log log U)
    pub fn fill(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear();
        }

        // Universe is at most 2^MAX_UNIVERSE_BITS, so its size fits u32.
        let size = self.universe.size() as u32;
        for key in 0..size {
            self.insert_at(ROOT, key);
        }
        self.len = size as usize;

        tracing::debug!(universe = self.universe.size(), "filled vEB tree");
    }

    /// Keys in ascending order, found by probing every key of the universe.
    ///
    /// Each call starts a fresh enumeration. Prefer [`iter`](Self::iter)
    /// for sparse trees; this walk is O(U log log U) whatever the key count.
    ///
    /// # Example
    /// ```rust
    /// use veb_tree::VebTree;
    ///
    /// let mut tree = VebTree::new(8).unwrap();
    /// tree.insert(5).unwrap();
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.members().collect::<Vec<_>>(), vec![2, 5]);
    /// ```
    pub fn members(&self) -> Members<'_> {
        Members::new(self)
    }

    /// Keys in ascending order, following the successor chain.
    ///
    /// Double-ended: `.rev()` follows the predecessor chain from `max()`.
    ///
    /// # Performance
    /// O(log log U) per key
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Total number of nodes in the structure (diagnostic).
    ///
    /// Depends only on the universe, never on the stored keys.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    fn in_range(&self, key: u32) -> bool {
        u64::from(key) < self.universe.size()
    }

    fn check_key(&self, key: u32) -> Result<(), VebError> {
        if self.in_range(key) {
            return Ok(());
        }

        tracing::trace!(key, universe = self.universe.size(), "key out of range");
        Err(VebError::KeyOutOfRange {
            key,
            universe: self.universe.size(),
        })
    }

    #[inline(always)]
    fn node(&self, idx: u32) -> &Node {
        self.nodes.get(idx)
    }

    #[inline(always)]
    fn node_mut(&mut self, idx: u32) -> &mut Node {
        self.nodes.get_mut(idx)
    }

    fn contains_at(&self, idx: u32, x: u32) -> bool {
        let node = self.node(idx);
        if x == node.min || x == node.max {
            return true;
        }
        if node.is_empty() || node.universe.is_leaf() {
            return false;
        }

        let u = node.universe;
        self.contains_at(node.cluster(u.high(x)), u.low(x))
    }

    /// Insert `x`, which must not be present at `idx`.
    fn insert_at(&mut self, idx: u32, x: u32) {
        let node = *self.node(idx);
        if node.is_empty() {
            self.node_mut(idx).set_single(x);
            return;
        }

        // The smaller of the two stays cached here; the other goes down.
        let mut x = x;
        if x < node.min {
            self.node_mut(idx).min = x;
            x = node.min;
        }

        let u = node.universe;
        if !u.is_leaf() {
            let (high, low) = (u.high(x), u.low(x));
            let cluster = node.cluster(high);
            if self.node(cluster).is_empty() {
                self.insert_at(node.summary, high);
                self.node_mut(cluster).set_single(low);
            } else {
                self.insert_at(cluster, low);
            }
        }

        if x > node.max {
            self.node_mut(idx).max = x;
        }
    }

    /// Remove `x`, which must be present at `idx`.
    fn remove_at(&mut self, idx: u32, x: u32) {
        let node = *self.node(idx);
        let u = node.universe;

        if u.is_leaf() || self.node(node.summary).is_empty() {
            // Every key of this node is cached in min/max.
            let node = self.node_mut(idx);
            if x == node.min && x == node.max {
                node.clear();
            } else if x == node.min {
                node.min = node.max;
            } else {
                node.max = node.min;
            }
            return;
        }

        if x == node.min {
            // Pull the smallest clustered key up to become the new min.
            let first = self.node(node.summary).min;
            let cluster = node.cluster(first);
            let low = self.node(cluster).min;
            self.node_mut(idx).min = u.index(first, low);
            self.remove_from_cluster(&node, first, low);
            return;
        }

        let high = u.high(x);
        self.remove_from_cluster(&node, high, u.low(x));

        if x == node.max {
            let last = self.node(node.summary).max;
            let max = if last == EMPTY {
                node.min
            } else {
                u.index(last, self.node(node.cluster(last)).max)
            };
            self.node_mut(idx).max = max;
        }
    }

    /// Remove `low` from cluster `high` of `node`, dropping the cluster from
    /// the summary when it empties.
    fn remove_from_cluster(&mut self, node: &Node, high: u32, low: u32) {
        let cluster = node.cluster(high);
        self.remove_at(cluster, low);
        if self.node(cluster).is_empty() {
            self.remove_at(node.summary, high);
        }
    }

    fn successor_at(&self, idx: u32, x: u32) -> u32 {
        let node = self.node(idx);
        let u = node.universe;

        if u.is_leaf() {
            return if x == 0 && node.max == 1 { 1 } else { EMPTY };
        }
        if !node.is_empty() && x < node.min {
            return node.min;
        }

        let (high, low) = (u.high(x), u.low(x));
        let max_low = self.node(node.cluster(high)).max;
        if max_low != EMPTY && low < max_low {
            let offset = self.successor_at(node.cluster(high), low);
            return u.index(high, offset);
        }

        let next = self.successor_at(node.summary, high);
        if next == EMPTY {
            return EMPTY;
        }
        u.index(next, self.node(node.cluster(next)).min)
    }

    fn predecessor_at(&self, idx: u32, x: u32) -> u32 {
        let node = self.node(idx);
        let u = node.universe;

        if u.is_leaf() {
            return if x == 1 && node.min == 0 { 0 } else { EMPTY };
        }
        if node.max != EMPTY && x > node.max {
            return node.max;
        }

        let (high, low) = (u.high(x), u.low(x));
        let min_low = self.node(node.cluster(high)).min;
        if min_low != EMPTY && low > min_low {
            let offset = self.predecessor_at(node.cluster(high), low);
            return u.index(high, offset);
        }

        let prev = self.predecessor_at(node.summary, high);
        if prev == EMPTY {
            // The cached min lives in no cluster, so the summary misses it.
            return if !node.is_empty() && x > node.min {
                node.min
            } else {
                EMPTY
            };
        }
        u.index(prev, self.node(node.cluster(prev)).max)
    }
}

impl<'a> IntoIterator for &'a VebTree {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reserve storage for every node up front, surfacing allocator failure.
fn reserve_nodes(node_count: usize) -> Result<Arena<Node>, VebError> {
    Arena::try_with_capacity(node_count).map_err(|_| {
        tracing::debug!(node_count, "failed to reserve vEB nodes");
        VebError::AllocationFailed {
            nodes: node_count as u64,
        }
    })
}

/// Build the full structure for `universe` in pre-order, returning the root.
///
/// Each subtree occupies a contiguous run of `universe.node_count()` slots,
/// which is what lets a node address its clusters by stride.
fn build(nodes: &mut Arena<Node>, universe: Universe) -> u32 {
    let idx = nodes.alloc(Node::new(universe));
    if universe.is_leaf() {
        return idx;
    }

    let cluster_universe = universe.cluster();
    let clusters = nodes.len() as u32;
    for _ in 0..universe.cluster_count() {
        build(nodes, cluster_universe);
    }
    let summary = build(nodes, universe.summary());

    let node = nodes.get_mut(idx);
    node.clusters = clusters;
    node.stride = cluster_universe.node_count() as u32;
    node.summary = summary;
    idx
}

#[inline(always)]
fn as_key(raw: u32) -> Option<u32> {
    (raw != EMPTY).then_some(raw)
}

#[cfg(test)]
impl VebTree {
    /// Walk the whole structure and panic on any broken invariant.
    pub(crate) fn assert_invariants(&self) {
        let keys = self.collect_checked(ROOT);
        assert_eq!(keys.len(), self.len, "len must match stored keys");
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "keys must be ordered");
    }

    /// Every node's min/max is EMPTY.
    pub(crate) fn is_structurally_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.min == EMPTY && node.max == EMPTY)
    }

    /// Keys held at `idx` in ascending order, validating the subtree.
    fn collect_checked(&self, idx: u32) -> Vec<u32> {
        let node = *self.node(idx);
        let u = node.universe;

        if node.is_empty() {
            assert_eq!(node.max, EMPTY, "empty node must have EMPTY max");
            if !u.is_leaf() {
                assert!(self.collect_checked(node.summary).is_empty());
                for i in 0..u.cluster_count() {
                    assert!(self.collect_checked(node.cluster(i)).is_empty());
                }
            }
            return Vec::new();
        }

        assert!(node.min <= node.max, "min must not exceed max");
        assert!(u64::from(node.max) < u.size(), "max must lie in the universe");

        if u.is_leaf() {
            let mut keys = vec![node.min];
            if node.max != node.min {
                keys.push(node.max);
            }
            return keys;
        }

        let mut clustered = Vec::new();
        let mut non_empty = Vec::new();
        for i in 0..u.cluster_count() {
            let offsets = self.collect_checked(node.cluster(i));
            if !offsets.is_empty() {
                non_empty.push(i);
            }
            clustered.extend(offsets.into_iter().map(|low| u.index(i, low)));
        }
        assert_eq!(
            self.collect_checked(node.summary),
            non_empty,
            "summary must list exactly the non-empty clusters"
        );

        if let Some(&first) = clustered.first() {
            assert!(node.min < first, "min must not be stored in a cluster");
            assert_eq!(clustered.last(), Some(&node.max));
        } else {
            assert_eq!(node.min, node.max, "lone key must be both min and max");
        }

        let mut keys = vec![node.min];
        keys.extend(clustered);
        keys
    }
}
