//! Gap buffer storage for the text buffer.
//!
//! A gap buffer keeps the document in one array with an empty "gap" at the
//! edit point: `[text before gap | gap | text after gap]`. Insertions and
//! deletions at the gap are O(1); repositioning the gap costs the distance
//! moved, which amortizes well because edits cluster around the cursor.

use std::ops::Range;

/// Minimum gap size maintained when the buffer grows.
const MIN_GAP: usize = 32;

/// Character storage with a movable gap.
///
/// All positions are logical character offsets; the gap is invisible to
/// callers except through the cost model.
#[derive(Debug)]
pub struct GapBuffer {
    data: Vec<char>,
    /// First slot of the gap.
    gap_start: usize,
    /// One past the last slot of the gap.
    gap_end: usize,
}

impl GapBuffer {
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; MIN_GAP],
            gap_start: 0,
            gap_end: MIN_GAP,
        }
    }

    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        data.resize(len + MIN_GAP, '\0');
        Self {
            data,
            gap_start: len,
            gap_end: len + MIN_GAP,
        }
    }

    /// Logical length in characters, excluding the gap.
    pub fn len(&self) -> usize {
        self.data.len() - (self.gap_end - self.gap_start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the gap so that the next insertion lands at logical offset `pos`.
    pub fn move_gap(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Grows the gap in place to hold at least `needed` characters.
    /// The gap position is preserved.
    fn reserve_gap(&mut self, needed: usize) {
        let gap = self.gap_end - self.gap_start;
        if gap >= needed {
            return;
        }
        let growth = (needed - gap).max(self.len()).max(MIN_GAP);

        let old_len = self.data.len();
        let tail_len = old_len - self.gap_end;
        self.data.resize(old_len + growth, '\0');
        if tail_len > 0 {
            let new_tail_start = self.data.len() - tail_len;
            self.data.copy_within(self.gap_end..old_len, new_tail_start);
        }
        self.gap_end = self.data.len() - tail_len;
    }

    /// Inserts a string at the gap.
    pub fn insert_text(&mut self, s: &str) {
        let count = s.chars().count();
        self.reserve_gap(count);
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Removes the logical range `start..end`, returning the removed text.
    ///
    /// The gap ends up at `start`. Out-of-bounds ranges are clamped.
    pub fn remove_range(&mut self, range: Range<usize>) -> String {
        let start = range.start.min(self.len());
        let end = range.end.min(self.len());
        if start >= end {
            return String::new();
        }

        self.move_gap(start);
        // The doomed characters now sit immediately after the gap; swallow
        // them by advancing gap_end.
        let count = end - start;
        let removed: String = self.data[self.gap_end..self.gap_end + count].iter().collect();
        self.gap_end += count;
        removed
    }

    /// Returns the character at logical offset `pos`.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + (self.gap_end - self.gap_start)
        };
        Some(self.data[physical])
    }

    /// Iterates over every character in logical order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the logical range `start..end` as a `String`, clamped to the
    /// buffer length.
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len());
        let end = range.end.min(self.len());
        (start..end).filter_map(|i| self.char_at(i)).collect()
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let buf = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.to_string(), "");
    }

    #[test]
    fn from_str_round_trips() {
        let buf = GapBuffer::from_str("hello\nworld");
        assert_eq!(buf.len(), 11);
        assert_eq!(buf.to_string(), "hello\nworld");
    }

    #[test]
    fn insert_at_gap() {
        let mut buf = GapBuffer::new();
        buf.insert_text("ac");
        buf.move_gap(1);
        buf.insert_text("b");
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn insert_text_in_middle() {
        let mut buf = GapBuffer::from_str("held");
        buf.move_gap(3);
        buf.insert_text("e worl");
        assert_eq!(buf.to_string(), "hele world");
    }

    #[test]
    fn remove_range_returns_removed_text() {
        let mut buf = GapBuffer::from_str("hello world");
        let removed = buf.remove_range(5..11);
        assert_eq!(removed, " world");
        assert_eq!(buf.to_string(), "hello");
    }

    #[test]
    fn remove_range_clamps_out_of_bounds() {
        let mut buf = GapBuffer::from_str("abc");
        assert_eq!(buf.remove_range(2..100), "c");
        assert_eq!(buf.remove_range(5..9), "");
        assert_eq!(buf.to_string(), "ab");
    }

    #[test]
    fn remove_then_insert_at_same_spot() {
        let mut buf = GapBuffer::from_str("one two three");
        buf.remove_range(4..8);
        buf.insert_text("2 ");
        assert_eq!(buf.to_string(), "one 2 three");
    }

    #[test]
    fn char_at_respects_gap_position() {
        let mut buf = GapBuffer::from_str("hello");
        buf.move_gap(2);
        for (i, expect) in "hello".chars().enumerate() {
            assert_eq!(buf.char_at(i), Some(expect));
        }
        assert_eq!(buf.char_at(5), None);
    }

    #[test]
    fn slice_clamps() {
        let buf = GapBuffer::from_str("hello world");
        assert_eq!(buf.slice(0..5), "hello");
        assert_eq!(buf.slice(6..999), "world");
        assert_eq!(buf.slice(4..2), "");
    }

    #[test]
    fn grows_past_initial_gap() {
        let mut buf = GapBuffer::new();
        for _ in 0..100 {
            buf.insert_text("abcdefghij");
        }
        assert_eq!(buf.len(), 1000);
    }

    #[test]
    fn unicode_content() {
        let mut buf = GapBuffer::from_str("héllo");
        assert_eq!(buf.len(), 5);
        buf.move_gap(1);
        buf.insert_text("é");
        assert_eq!(buf.to_string(), "hééllo");
    }
}
