//! Power-of-two universes and the bit-splitting functions over them.

use crate::constants::{LEAF_UNIVERSE_BITS, MAX_UNIVERSE_BITS};
use crate::error::VebError;

/// Size of each cluster for a power-of-two universe: `2^⌊log2(u)/2⌋`.
///
/// # Arguments
/// * `u` - Universe size, a power of two `>= 2`
///
/// # Example
/// ```rust
/// assert_eq!(veb_tree::lower_sqrt(32), 4);
/// assert_eq!(veb_tree::lower_sqrt(16), 4);
/// ```
#[inline]
pub fn lower_sqrt(u: u64) -> u64 {
    debug_assert!(u >= 2 && u.is_power_of_two(), "universe must be a power of two");
    1 << (u.trailing_zeros() / 2)
}

/// Number of clusters for a power-of-two universe: `2^⌈log2(u)/2⌉`.
///
/// This is also the universe size of the summary.
///
/// # Example
/// ```rust
/// assert_eq!(veb_tree::upper_sqrt(32), 8);
/// assert_eq!(veb_tree::upper_sqrt(16), 4);
/// ```
#[inline]
pub fn upper_sqrt(u: u64) -> u64 {
    debug_assert!(u >= 2 && u.is_power_of_two(), "universe must be a power of two");
    1 << u.trailing_zeros().div_ceil(2)
}

/// Universe of a node: the key range `[0, 2^bits)`.
///
/// Stored as its exponent so that every split is a shift or a mask.
///
/// # Splitting
/// For a universe `u = 2^bits`:
/// - clusters cover `lower_sqrt(u) = 2^(bits / 2)` keys each
/// - there are `upper_sqrt(u) = 2^(bits - bits / 2)` clusters
/// - `high(x)` is the cluster of `x`, `low(x)` the offset inside it,
///   and `index(high(x), low(x)) == x`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Universe {
    bits: u8,
}

impl Universe {
    /// Smallest supported universe covering `capacity` keys.
    ///
    /// Rounds `capacity` up to the next power of two, with a floor of 2.
    ///
    /// # Errors
    /// [`VebError::InvalidUniverse`] if `capacity` is 0 or larger than
    /// `2^MAX_UNIVERSE_BITS`.
    ///
    /// # Example
    /// ```rust
    /// use veb_tree::Universe;
    ///
    /// assert_eq!(Universe::from_capacity(5).unwrap().size(), 8);
    /// assert_eq!(Universe::from_capacity(1).unwrap().size(), 2);
    /// assert!(Universe::from_capacity(0).is_err());
    /// ```
    pub fn from_capacity(capacity: usize) -> Result<Self, VebError> {
        let max = 1u64 << MAX_UNIVERSE_BITS;
        let requested = capacity as u64;
        if requested == 0 || requested > max {
            return Err(VebError::InvalidUniverse { capacity, max });
        }

        let size = requested.max(2).next_power_of_two();
        Ok(Self::from_bits(size.trailing_zeros() as u8))
    }

    #[inline(always)]
    pub(crate) fn from_bits(bits: u8) -> Self {
        debug_assert!((LEAF_UNIVERSE_BITS..=MAX_UNIVERSE_BITS).contains(&bits));
        Self { bits }
    }

    /// Exponent of the universe (`size() == 2^bits()`).
    #[inline(always)]
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Number of representable keys.
    #[inline(always)]
    pub fn size(self) -> u64 {
        1 << self.bits
    }

    /// Whether this is the `u = 2` base case.
    #[inline(always)]
    pub fn is_leaf(self) -> bool {
        self.bits == LEAF_UNIVERSE_BITS
    }

    /// Universe of each cluster (`lower_sqrt(u)` keys).
    #[inline(always)]
    pub fn cluster(self) -> Self {
        Self::from_bits(self.bits / 2)
    }

    /// Universe of the summary (`upper_sqrt(u)` keys).
    #[inline(always)]
    pub fn summary(self) -> Self {
        Self::from_bits(self.bits - self.bits / 2)
    }

    /// Number of clusters owned by a node of this universe.
    #[inline(always)]
    pub fn cluster_count(self) -> u32 {
        1 << (self.bits - self.bits / 2)
    }

    /// Cluster index containing `x`.
    #[inline(always)]
    pub fn high(self, x: u32) -> u32 {
        x >> (self.bits / 2)
    }

    /// Offset of `x` within its cluster.
    #[inline(always)]
    pub fn low(self, x: u32) -> u32 {
        x & ((1 << (self.bits / 2)) - 1)
    }

    /// Key at offset `offset` of cluster `cluster`; inverse of `(high, low)`.
    #[inline(always)]
    pub fn index(self, cluster: u32, offset: u32) -> u32 {
        (cluster << (self.bits / 2)) | offset
    }

    /// Total number of nodes in a fully built tree over this universe.
    ///
    /// `N(2) = 1`, `N(u) = 1 + upper_sqrt(u) * N(lower_sqrt(u)) + N(upper_sqrt(u))`.
    ///
    /// # Performance
    /// O(log log U) - one recursion per halving of the exponent
    pub fn node_count(self) -> u64 {
        if self.is_leaf() {
            return 1;
        }
        1 + u64::from(self.cluster_count()) * self.cluster().node_count()
            + self.summary().node_count()
    }
}
