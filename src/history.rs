//! Bounded linear undo/redo history.

use std::collections::VecDeque;
use tracing::debug;

/// Default number of snapshots retained.
pub const DEFAULT_CAPACITY: usize = 30;

/// A bounded sequence of state snapshots with a movable cursor.
///
/// Each saved state is copied into the history, so later mutation of the
/// caller's live collection cannot alter stored snapshots. Saving while the
/// cursor is not at the end discards the redo branch; exceeding capacity
/// evicts the oldest snapshot.
///
/// The cursor ranges over `[-1, len - 1]`; `-1` means no snapshot is active
/// and is only reachable before the first save.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: VecDeque<Vec<T>>,
    cursor: isize,
    capacity: usize,
}

impl<T: Clone> History<T> {
    /// Create a history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a history retaining at most `capacity` snapshots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            cursor: -1,
            capacity,
        }
    }

    /// Save a snapshot of `state`, discarding any redo branch.
    ///
    /// If the history would exceed its capacity, the oldest snapshot is
    /// evicted and the cursor shifts down to stay on the same snapshot.
    pub fn save(&mut self, state: &[T]) {
        self.snapshots.truncate((self.cursor + 1) as usize);
        self.snapshots.push_back(state.to_vec());
        self.cursor += 1;

        if self.snapshots.len() > self.capacity {
            debug!(capacity = self.capacity, "evicting oldest snapshot");
            self.snapshots.pop_front();
            self.cursor -= 1;
        }
    }

    /// Step back one snapshot and return it.
    ///
    /// Returns `None` without moving the cursor when there is nothing
    /// earlier to return (cursor at 0, or empty history).
    pub fn undo(&mut self) -> Option<&[T]> {
        if self.cursor <= 0 {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor as usize).map(Vec::as_slice)
    }

    /// Step forward one snapshot and return it.
    ///
    /// Returns `None` without moving the cursor when the cursor is already
    /// at the newest snapshot.
    pub fn redo(&mut self) -> Option<&[T]> {
        if self.cursor + 1 >= self.snapshots.len() as isize {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor as usize).map(Vec::as_slice)
    }

    /// Index of the active snapshot, `-1` when the history is empty.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot has been saved.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of snapshots retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
