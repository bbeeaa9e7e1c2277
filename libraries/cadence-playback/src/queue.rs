//! Play-next queue
//!
//! FIFO of library indices the user asked to hear next. Queued tracks win
//! over shuffle, sequential order and repeat when advancing.
//!
//! ```text
//! Currently Playing: 4
//! ─────────────────────
//! Queue (front first):
//!   - 7
//!   - 2
//! ─────────────────────
//! then shuffle / 5 / repeat
//! ```
//!
//! Bounds and "not the current track" are the controller's business; the
//! queue itself only guarantees there are no duplicates.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    entries: VecDeque<usize>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an index unless it is already queued
    ///
    /// Returns whether the index was added
    pub fn push(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        self.entries.push_back(index);
        true
    }

    /// Take the next index to play
    pub fn pop_front(&mut self) -> Option<usize> {
        self.entries.pop_front()
    }

    /// Drop an index from anywhere in the queue
    ///
    /// Returns whether it was queued
    pub fn remove(&mut self, index: usize) -> bool {
        match self.entries.iter().position(|&queued| queued == index) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains(&index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued indices, front first
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }
}
