//! Snapshot history for undo/redo.
//!
//! Every committed mutation records a full project snapshot. Snapshots are
//! shared via `Arc` so undo and redo hand back the stored value without
//! copying it.

use std::sync::Arc;

use crate::project::Project;

/// Bounded linear history with a cursor.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    snapshots: Vec<Arc<Project>>,
    cursor: usize,
    capacity: usize,
}

impl HistoryManager {
    /// Creates a history seeded with `initial` as its only entry.
    pub fn new(initial: Project, capacity: usize) -> Self {
        Self {
            snapshots: vec![Arc::new(initial)],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Discards all entries and reseeds with `initial`.
    pub fn reset(&mut self, initial: Project) {
        self.snapshots = vec![Arc::new(initial)];
        self.cursor = 0;
    }

    /// Records a new snapshot.
    ///
    /// Entries after the cursor are discarded, the snapshot is appended, and
    /// the oldest entries are evicted beyond capacity. The cursor ends on the
    /// new entry.
    pub fn record(&mut self, snapshot: Project) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Arc::new(snapshot));

        if self.snapshots.len() > self.capacity {
            let excess = self.snapshots.len() - self.capacity;
            self.snapshots.drain(..excess);
        }

        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps back one entry. `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<Arc<Project>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor).cloned()
    }

    /// Steps forward one entry. `None` at the newest entry.
    pub fn redo(&mut self) -> Option<Arc<Project>> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor).cloned()
    }

    pub fn current(&self) -> Option<&Arc<Project>> {
        self.snapshots.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(Project::default(), trackkit_core::constants::HISTORY_CAPACITY)
    }
}
