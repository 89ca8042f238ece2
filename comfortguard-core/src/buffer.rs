//! Bounded Circular Buffer for Sample History
//!
//! ## Overview
//!
//! A ring buffer that keeps the most recent `capacity` items and silently
//! drops the oldest one when a new item arrives on a full buffer. Capacity is
//! chosen at construction time (sessions restore their own window size).
//! Storage grows with the first `capacity` pushes; after that pushes never
//! reallocate.
//!
//! ### Memory Layout
//!
//! ```text
//! CircularBuffer with capacity 5, after 7 pushes (A..G):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │  C  │  D  │  E  │  ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2 (oldest item, next to be overwritten)
//!
//! Logical view (oldest → newest): [C, D, E, F, G]
//! ```
//!
//! ### Operations
//!
//! - `push()`: O(1), overwrites the oldest item when full
//! - `last()`: O(1)
//! - `iter()`: O(n), oldest to newest
//!
//! ## Usage Example
//!
//! ```rust
//! use comfortguard_core::buffer::CircularBuffer;
//!
//! let mut window = CircularBuffer::with_capacity(3);
//! for value in 1..=4 {
//!     window.push(value);
//! }
//!
//! // Oldest value (1) was evicted
//! let values: Vec<i32> = window.iter().copied().collect();
//! assert_eq!(values, vec![2, 3, 4]);
//! assert_eq!(window.last(), Some(&4));
//! ```

use alloc::vec::Vec;

/// Fixed-capacity circular buffer
///
/// ## Internal Invariants
///
/// - `data.len() == len <= capacity`, `capacity >= 1`
/// - `write_pos == 0` until the buffer first fills, then `write_pos < capacity`
/// - Iteration yields items in insertion order
///
/// ## Thread Safety
///
/// Single writer. Wrap in a mutex or keep one buffer per logical session if
/// several tasks append concurrently.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    /// Storage, grown on push until it reaches `capacity`
    data: Vec<T>,

    /// Maximum number of items kept
    capacity: usize,

    /// Physical index of the oldest item once full
    write_pos: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` items
    ///
    /// A capacity of zero is raised to one so the buffer can always hold the
    /// latest item. Storage is allocated as items arrive, so a large capacity
    /// costs nothing until it is used.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity: capacity.max(1),
            write_pos: 0,
        }
    }

    /// Adds an item, returning the evicted oldest item when full
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.data.len() < self.capacity {
            self.data.push(item);
            return None;
        }

        let evicted = core::mem::replace(&mut self.data[self.write_pos], item);
        self.write_pos = (self.write_pos + 1) % self.capacity;
        Some(evicted)
    }

    /// Maximum number of items kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Most recent item
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len() - 1)
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T> {
        CircularBufferIter { buffer: self, index: 0 }
    }

    /// Drop all items, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
        self.write_pos = 0;
    }

    /// Item by logical index (0 = oldest, len-1 = newest)
    ///
    /// Until the buffer fills, logical and physical indices match. Once
    /// full, the oldest item sits at `write_pos`:
    ///
    /// ```text
    /// Physical:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical:   [A, B, C, D, E]
    /// logical[i] = physical[(write_pos + i) % len]
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.data.get((self.write_pos + index) % self.len())
    }
}

impl<T: PartialEq> PartialEq for CircularBuffer<T> {
    /// Equal when capacity and logical contents match, whatever the physical
    /// rotation
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

/// Iterator over circular buffer contents
pub struct CircularBufferIter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    index: usize,
}

impl<'a, T> Iterator for CircularBufferIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for CircularBufferIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_buffer() {
        let buffer: CircularBuffer<f64> = CircularBuffer::with_capacity(5);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 5);
        assert!(buffer.last().is_none());
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut buffer = CircularBuffer::with_capacity(0);
        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.last(), Some(&2));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = CircularBuffer::with_capacity(3);

        let evicted: Vec<Option<u32>> = (0..5).map(|i| buffer.push(i)).collect();
        assert_eq!(evicted, vec![None, None, None, Some(0), Some(1)]);

        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        let values: Vec<u32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![2, 3, 4]);
        assert_eq!(buffer.iter().len(), 3);
    }

    #[test]
    fn equality_ignores_rotation() {
        let mut rotated = CircularBuffer::with_capacity(3);
        for i in 0..5 {
            rotated.push(i);
        }

        let mut fresh = CircularBuffer::with_capacity(3);
        for i in 2..5 {
            fresh.push(i);
        }

        assert_eq!(rotated, fresh);

        let mut other_capacity = CircularBuffer::with_capacity(4);
        for i in 2..5 {
            other_capacity.push(i);
        }
        assert_ne!(rotated, other_capacity);
    }

    #[test]
    fn clear_resets() {
        let mut buffer = CircularBuffer::with_capacity(2);
        buffer.push(1.0);
        buffer.push(2.0);
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.iter().count(), 0);

        buffer.push(3.0);
        assert_eq!(buffer.get(0), Some(&3.0));
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut buffer = CircularBuffer::with_capacity(usize::MAX);
        assert_eq!(buffer.capacity(), usize::MAX);
        assert!(buffer.is_empty());

        buffer.push(1u8);
        buffer.push(2u8);
        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_full());
        assert_eq!(buffer.last(), Some(&2));
    }

    #[test]
    fn logical_order_after_wrap() {
        let mut buffer = CircularBuffer::with_capacity(4);
        for i in 0..10 {
            buffer.push(i);
        }
        let values: Vec<i32> = buffer.iter().copied().collect();
        assert_eq!(values, vec![6, 7, 8, 9]);
        assert_eq!(buffer.get(0), Some(&6));
        assert_eq!(buffer.get(4), None);
        assert_eq!(buffer.last(), Some(&9));
    }
}
