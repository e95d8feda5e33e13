//! Bounded snapshot undo stack.
//!
//! The original editor leaned on its text widget's built-in undo; here the
//! buffer is the widget, so it carries its own stack. Snapshots are whole
//! content + cursor pairs pushed before each mutating operation. The
//! contract only requires "single-level-or-deeper" undo, so whole-content
//! snapshots are acceptable for the document sizes this editor handles.

use std::collections::VecDeque;

use crate::types::Position;

/// Default maximum number of retained snapshots.
pub const DEFAULT_UNDO_DEPTH: usize = 256;

/// One restorable buffer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub content: String,
    pub cursor: Position,
}

/// A bounded LIFO of buffer snapshots. The oldest snapshot is discarded
/// when the depth cap is exceeded.
#[derive(Debug)]
pub struct UndoStack {
    entries: VecDeque<Snapshot>,
    max_depth: usize,
}

impl UndoStack {
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.max_depth {
            self.entries.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
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
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}
