// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for diagnostic events.
//!
//! A long admin session logs far more events than are worth keeping, so only
//! the most recent ones survive.

use std::collections::VecDeque;

use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

/// Number of events a diagnostics buffer can hold, clamped to a valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the supported bounds.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

/// Fixed-capacity event log; the oldest entry is dropped to make room.
///
/// ```
/// use front_desk::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut log = CircularBuffer::new(BufferCapacity::new(16));
/// for id in 1..=20_u64 {
///     log.push(format!("soft delete {id}"));
/// }
///
/// assert_eq!(log.len(), 16);
/// assert_eq!(log.iter().next().map(String::as_str), Some("soft delete 5"));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Bypasses the configured bounds; a capacity of zero still keeps one entry.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_capacity_clamps_to_valid_range() {
        assert_eq!(
            BufferCapacity::new(0).value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            MAX_DIAGNOSTICS_BUFFER_CAPACITY
        );
        assert_eq!(BufferCapacity::new(100).value(), 100);
    }

    #[test]
    fn buffer_capacity_default_returns_expected_value() {
        assert_eq!(
            BufferCapacity::default().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn overflow_keeps_the_most_recent_entries() {
        let mut log = CircularBuffer::with_raw_capacity(3);
        for poll in ["poll 1", "poll 2", "poll 3", "poll 4", "poll 5"] {
            log.push(poll);
        }

        assert_eq!(log.iter().copied().collect::<Vec<_>>(), ["poll 3", "poll 4", "poll 5"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::with_raw_capacity(5);
        buffer.push(1);
        buffer.push(2);

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }

    #[test]
    fn zero_raw_capacity_still_holds_one_item() {
        let mut buffer: CircularBuffer<&str> = CircularBuffer::with_raw_capacity(0);
        buffer.push("a");
        buffer.push("b");
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec!["b"]);
    }
}
