//! Shared value types for the buffer crate.

/// Position in the buffer as (line, column), both 0-indexed.
///
/// Columns count Unicode scalar values, not bytes. Ordering is document
/// order: first by line, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A half-open `(start, end)` character-offset range over the buffer.
///
/// Used for search highlight spans: `start` is the offset of the first
/// matched character, `end` is one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `offset` falls inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Which lines changed as a result of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyLines {
    /// Nothing changed visually.
    #[default]
    None,
    /// A single line changed in place.
    Single(usize),
    /// Every line from this one to the end of the buffer changed
    /// (a line was split or two lines were joined).
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Merges two dirty reports into the smallest report covering both.
    pub fn merge(self, other: DirtyLines) -> DirtyLines {
        use DirtyLines::*;
        match (self, other) {
            (None, d) | (d, None) => d,
            (Single(a), Single(b)) if a == b => Single(a),
            (Single(a), Single(b)) => FromLineToEnd(a.min(b)),
            (FromLineToEnd(a), Single(b))
            | (Single(b), FromLineToEnd(a))
            | (FromLineToEnd(a), FromLineToEnd(b)) => FromLineToEnd(a.min(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_orders_by_line_then_col() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(1, 1), Position::new(1, 1));
    }

    #[test]
    fn span_contains_is_half_open() {
        let span = Span::new(2, 5);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn dirty_merge_prefers_wider_report() {
        use DirtyLines::*;
        assert_eq!(None.merge(Single(3)), Single(3));
        assert_eq!(Single(3).merge(Single(3)), Single(3));
        assert_eq!(Single(3).merge(Single(5)), FromLineToEnd(3));
        assert_eq!(FromLineToEnd(4).merge(Single(2)), FromLineToEnd(2));
        assert_eq!(FromLineToEnd(4).merge(FromLineToEnd(7)), FromLineToEnd(4));
    }
}
