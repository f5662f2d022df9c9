//! Arena storage for tree nodes.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

/// Contiguous storage addressed by `u32` indices.
///
/// Children refer to each other by index, so ownership stays strictly
/// parent-to-child with no back references.
///
/// # Memory Layout
/// - Elements stored contiguously in Vec
/// - Index-based access (u32 indices)
/// - Pre-sized at construction; the tree never grows after building
///
/// # Performance
/// - Allocation: O(1) amortized
/// - Access: O(1) by index
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Index in this Vec is the arena index used for references.
    elements: Vec<T>,
}

impl<T> Arena<T> {
    /// Create arena with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Number of elements to pre-allocate
    ///
    /// # Panics
    /// Aborts if the allocation fails. Use `try_with_capacity` for sizes
    /// derived from caller input.
    ///
    /// # Performance
    /// O(capacity) - allocates memory upfront
    #[cfg(test)]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Create arena with exactly `capacity` pre-allocated slots.
    ///
    /// # Errors
    /// Returns the allocator's error if the capacity overflows or the
    /// memory cannot be reserved, instead of aborting.
    ///
    /// # Performance
    /// O(capacity) - allocates memory upfront
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity)?;
        Ok(Arena { elements })
    }

    /// Append an element.
    ///
    /// # Returns
    /// Arena index of the new element
    ///
    /// # Performance
    /// O(1) amortized - Vec push
    #[inline]
    pub fn alloc(&mut self, value: T) -> u32 {
        let index = self.elements.len() as u32;
        self.elements.push(value);
        index
    }

    /// Get element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get(&self, index: u32) -> &T {
        &self.elements[index as usize]
    }

    /// Get mutable element by index.
    ///
    /// # Panics
    /// Panics if index is out of bounds
    #[inline(always)]
    pub fn get_mut(&mut self, index: u32) -> &mut T {
        &mut self.elements[index as usize]
    }

    /// Number of allocated elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Mutable iteration over every element, in allocation order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Iteration over every element, in allocation order.
    #[cfg(test)]
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }
}
