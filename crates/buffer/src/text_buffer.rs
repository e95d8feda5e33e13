//! The document: gap buffer content + line index + cursor + selection + undo.
//!
//! Every mutating operation pushes an undo snapshot first, keeps the line
//! index in sync with the gap buffer, and reports the affected lines as a
//! [`DirtyLines`] value for the frontend.

use crate::gap_buffer::GapBuffer;
use crate::grapheme;
use crate::line_index::LineIndex;
use crate::types::{DirtyLines, Position};
use crate::undo::{Snapshot, UndoStack};

/// A mutable text document with cursor, selection, and undo.
///
/// Positions are (line, column) pairs counting Unicode scalar values;
/// offsets are character offsets into the whole buffer.
#[derive(Debug)]
pub struct TextBuffer {
    text: GapBuffer,
    lines: LineIndex,
    cursor: Position,
    selection_anchor: Option<Position>,
    undo: UndoStack,
}

impl TextBuffer {
    /// Creates an empty buffer: one empty line, cursor at the origin.
    pub fn new() -> Self {
        Self {
            text: GapBuffer::new(),
            lines: LineIndex::new(),
            cursor: Position::default(),
            selection_anchor: None,
            undo: UndoStack::default(),
        }
    }

    /// Creates a buffer holding `content`, cursor at the origin.
    pub fn from_str(content: &str) -> Self {
        let mut lines = LineIndex::new();
        lines.rebuild(content);
        Self {
            text: GapBuffer::from_str(content),
            lines,
            cursor: Position::default(),
            selection_anchor: None,
            undo: UndoStack::default(),
        }
    }

    // ==================== Content access ====================

    /// The entire buffer content as a `String`.
    pub fn content(&self) -> String {
        self.text.chars().collect()
    }

    /// Total length in characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines; at least 1 even when empty.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Content of `line` without its trailing newline. Empty string out of
    /// bounds.
    pub fn line_content(&self, line: usize) -> String {
        let Some(start) = self.lines.start(line) else {
            return String::new();
        };
        let end = self.lines.end(line, self.len()).unwrap_or(start);
        self.text.slice(start..end)
    }

    /// Length of `line` in characters, excluding its newline.
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.line_len(line, self.len()).unwrap_or(0)
    }

    // ==================== Positions and offsets ====================

    /// Converts a position to a character offset, clamping to bounds.
    pub fn offset_at(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.lines.start(pos.line).unwrap_or(0) + pos.col
    }

    /// Converts a character offset to a position, clamping to bounds.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.len());
        let line = self.lines.line_of(offset);
        let start = self.lines.start(line).unwrap_or(0);
        Position::new(line, offset - start)
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count() - 1);
        let col = pos.col.min(self.line_len(line));
        Position::new(line, col)
    }

    // ==================== Cursor ====================

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Places the cursor, clamped to valid bounds. Selection is untouched;
    /// callers that want to drop it use [`clear_selection`](Self::clear_selection).
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
    }

    /// Moves left one grapheme cluster, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        self.clear_selection();
        if self.cursor.col > 0 {
            let line = self.line_content(self.cursor.line);
            self.cursor.col = grapheme::prev_cluster_start(&line, self.cursor.col);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    /// Moves right one grapheme cluster, wrapping to the next line start.
    pub fn move_right(&mut self) {
        self.clear_selection();
        if self.cursor.col < self.line_len(self.cursor.line) {
            let line = self.line_content(self.cursor.line);
            self.cursor.col = grapheme::next_cluster_end(&line, self.cursor.col);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    /// Moves up one line, clamping the column to the new line's length.
    pub fn move_up(&mut self) {
        self.clear_selection();
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    /// Moves down one line, clamping the column to the new line's length.
    pub fn move_down(&mut self) {
        self.clear_selection();
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.line));
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.clear_selection();
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.clear_selection();
        self.cursor.col = self.line_len(self.cursor.line);
    }

    pub fn move_to_buffer_start(&mut self) {
        self.clear_selection();
        self.cursor = Position::default();
    }

    pub fn move_to_buffer_end(&mut self) {
        self.clear_selection();
        let line = self.line_count() - 1;
        self.cursor = Position::new(line, self.line_len(line));
    }

    // ==================== Selection ====================

    /// Anchors a selection at `pos` (clamped). The selection extends from
    /// the anchor to the cursor.
    pub fn set_selection_anchor(&mut self, pos: Position) {
        self.selection_anchor = Some(self.clamp(pos));
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    pub fn selection_anchor(&self) -> Option<Position> {
        self.selection_anchor
    }

    pub fn has_selection(&self) -> bool {
        matches!(self.selection_anchor, Some(anchor) if anchor != self.cursor)
    }

    /// The selection as (start, end) in document order, or None when empty.
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        if anchor < self.cursor {
            Some((anchor, self.cursor))
        } else {
            Some((self.cursor, anchor))
        }
    }

    /// The selected text, or None when nothing is selected.
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection_range()?;
        Some(self.text.slice(self.offset_at(start)..self.offset_at(end)))
    }

    /// Selects the whole buffer with the insertion cursor at the start.
    ///
    /// The anchor goes to the buffer end and the cursor to the origin, so a
    /// caller scrolling the cursor into view lands on the first line.
    pub fn select_all(&mut self) {
        let line = self.line_count() - 1;
        self.selection_anchor = Some(Position::new(line, self.line_len(line)));
        self.cursor = Position::default();
    }

    // ==================== Editing ====================

    /// Inserts a character at the cursor, replacing any selection.
    pub fn insert_char(&mut self, ch: char) -> DirtyLines {
        let mut tmp = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut tmp))
    }

    /// Inserts a line break at the cursor.
    pub fn insert_newline(&mut self) -> DirtyLines {
        self.insert_char('\n')
    }

    /// Inserts a string at the cursor, replacing any selection.
    pub fn insert_str(&mut self, s: &str) -> DirtyLines {
        if s.is_empty() {
            return DirtyLines::None;
        }
        self.checkpoint();
        let dirty = self.delete_selection_inner();
        let line = self.cursor.line;
        self.splice_in(s);
        let inserted = if s.contains('\n') {
            DirtyLines::FromLineToEnd(line)
        } else {
            DirtyLines::Single(line)
        };
        dirty.merge(inserted)
    }

    /// Deletes the selection, or the grapheme cluster before the cursor.
    pub fn delete_backward(&mut self) -> DirtyLines {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.selection_anchor = None;
        let Position { line, col } = self.cursor;
        if col == 0 {
            if line == 0 {
                return DirtyLines::None;
            }
            // Join with the previous line by removing its newline.
            self.checkpoint();
            let offset = self.offset_at(self.cursor);
            self.splice_out(offset - 1, offset);
            DirtyLines::FromLineToEnd(line - 1)
        } else {
            self.checkpoint();
            let start_col = grapheme::prev_cluster_start(&self.line_content(line), col);
            let line_start = self.lines.start(line).unwrap_or(0);
            self.splice_out(line_start + start_col, line_start + col);
            DirtyLines::Single(line)
        }
    }

    /// Deletes the selection, or the grapheme cluster after the cursor.
    pub fn delete_forward(&mut self) -> DirtyLines {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.selection_anchor = None;
        let Position { line, col } = self.cursor;
        if col == self.line_len(line) {
            if line + 1 == self.line_count() {
                return DirtyLines::None;
            }
            // Join with the next line by removing our newline.
            self.checkpoint();
            let offset = self.offset_at(self.cursor);
            self.splice_out(offset, offset + 1);
            DirtyLines::FromLineToEnd(line)
        } else {
            self.checkpoint();
            let end_col = grapheme::next_cluster_end(&self.line_content(line), col);
            let line_start = self.lines.start(line).unwrap_or(0);
            self.splice_out(line_start + col, line_start + end_col);
            DirtyLines::Single(line)
        }
    }

    /// Deletes the selected text, leaving the cursor at the former
    /// selection start. No-op without a selection.
    pub fn delete_selection(&mut self) -> DirtyLines {
        if self.selection_range().is_none() {
            return DirtyLines::None;
        }
        self.checkpoint();
        self.delete_selection_inner()
    }

    /// Replaces the whole document. Resets cursor, selection, and undo; used
    /// for New and Open, which swap content wholesale.
    pub fn set_content(&mut self, content: &str) {
        self.text = GapBuffer::from_str(content);
        self.lines.rebuild(content);
        self.cursor = Position::default();
        self.selection_anchor = None;
        self.undo.clear();
    }

    /// Restores the most recent undo snapshot. Returns `DirtyLines::None`
    /// when the stack is empty.
    pub fn undo(&mut self) -> DirtyLines {
        match self.undo.pop() {
            Some(Snapshot { content, cursor }) => {
                self.text = GapBuffer::from_str(&content);
                self.lines.rebuild(&content);
                self.cursor = cursor;
                self.selection_anchor = None;
                DirtyLines::FromLineToEnd(0)
            }
            None => DirtyLines::None,
        }
    }

    /// Number of undo snapshots currently held.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    // ==================== Internals ====================

    fn checkpoint(&mut self) {
        self.undo.push(Snapshot {
            content: self.content(),
            cursor: self.cursor,
        });
    }

    /// Inserts `s` at the cursor offset and advances the cursor past it.
    fn splice_in(&mut self, s: &str) {
        let offset = self.offset_at(self.cursor);
        self.text.move_gap(offset);
        self.text.insert_text(s);
        self.lines.record_insert(offset, s);
        self.cursor = self.position_at(offset + s.chars().count());
    }

    /// Removes the offset range `start..end` and leaves the cursor at `start`.
    fn splice_out(&mut self, start: usize, end: usize) -> String {
        let removed = self.text.remove_range(start..end);
        self.lines.record_remove(start, &removed);
        self.cursor = self.position_at(start);
        removed
    }

    fn delete_selection_inner(&mut self) -> DirtyLines {
        let Some((start, end)) = self.selection_range() else {
            return DirtyLines::None;
        };
        let start_off = self.offset_at(start);
        let end_off = self.offset_at(end);
        let removed = self.splice_out(start_off, end_off);
        self.selection_anchor = None;
        if removed.contains('\n') {
            DirtyLines::FromLineToEnd(start.line)
        } else {
            DirtyLines::Single(start.line)
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
