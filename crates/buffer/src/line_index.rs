//! Line index: character offsets where each line starts.
//!
//! Gives O(1) line count, O(1) line start lookup, and O(log n) offset→line
//! mapping. Updates are coarse: the text buffer reports each insertion and
//! removal with the affected text, and the index splices itself accordingly.

/// Tracks line boundaries over the buffer content.
///
/// Invariant: `starts` is strictly ascending and `starts[0] == 0` always,
/// so the buffer has at least one line even when empty.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    /// Rebuilds the index from full content. O(n); used for bulk loads.
    pub fn rebuild(&mut self, content: &str) {
        self.starts.clear();
        self.starts.push(0);
        let mut offset = 0;
        for ch in content.chars() {
            offset += 1;
            if ch == '\n' {
                self.starts.push(offset);
            }
        }
    }

    /// Number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Character offset where `line` starts, or None out of bounds.
    pub fn start(&self, line: usize) -> Option<usize> {
        self.starts.get(line).copied()
    }

    /// Character offset of the end of `line`, excluding its newline.
    /// For the last line this is `total_len`.
    pub fn end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line + 1 < self.starts.len() {
            Some(self.starts[line + 1] - 1)
        } else if line + 1 == self.starts.len() {
            Some(total_len)
        } else {
            None
        }
    }

    /// Length of `line` in characters, excluding its newline.
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        Some(self.end(line, total_len)? - self.start(line)?)
    }

    /// The line containing character offset `offset`.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// Records an insertion of `text` at `offset`.
    ///
    /// Shifts every later line start by the inserted length and splices in
    /// one new start per newline in `text`.
    pub fn record_insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let line = self.line_of(offset);
        let added = text.chars().count();

        for start in &mut self.starts[line + 1..] {
            *start += added;
        }

        let new_starts: Vec<usize> = text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(i, _)| offset + i + 1)
            .collect();
        // Insertion point keeps the array sorted: every new start lies
        // between starts[line] and the (already shifted) starts[line + 1].
        self.starts.splice(line + 1..line + 1, new_starts);
    }

    /// Records a removal of `removed` that previously began at `offset`.
    ///
    /// Drops the line starts that fell inside the removed range and shifts
    /// every later start back by the removed length.
    pub fn record_remove(&mut self, offset: usize, removed: &str) {
        if removed.is_empty() {
            return;
        }
        let count = removed.chars().count();
        let range_end = offset + count;
        self.starts
            .retain(|&s| s <= offset || s > range_end);
        for start in &mut self.starts {
            if *start > offset {
                *start -= count;
            }
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
