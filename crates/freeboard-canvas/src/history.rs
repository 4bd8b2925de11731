//! Undo/redo history.
//!
//! Linear history over full-store snapshots. Snapshots share their element
//! sequence with the store, so keeping a hundred of them costs little more
//! than the elements that actually changed.

use freeboard_core::constants::DEFAULT_HISTORY_DEPTH;
use tracing::debug;

use crate::store::Snapshot;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Snapshot::default(), DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    /// Starts a history whose only entry is `initial`.
    ///
    /// `max_depth` is clamped to at least 2 so one step can always be undone.
    pub fn new(initial: Snapshot, max_depth: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_depth: max_depth.max(2),
        }
    }

    /// Records `snapshot` after the cursor, discarding any redo branch.
    ///
    /// Returns `false` and leaves the history untouched when `snapshot`
    /// equals the entry at the cursor.
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if self.current() == &snapshot {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.max_depth {
            let overflow = self.snapshots.len() - self.max_depth;
            self.snapshots.drain(..overflow);
        }
        self.cursor = self.snapshots.len() - 1;
        debug!(len = self.snapshots.len(), cursor = self.cursor, "history commit");
        true
    }

    /// Steps back, returning the snapshot to restore.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        Some(self.snapshots[self.cursor].clone())
    }

    /// Steps forward, returning the snapshot to restore.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        Some(self.snapshots[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
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

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every entry and starts over from `initial`.
    pub fn clear(&mut self, initial: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = 0;
    }
}
