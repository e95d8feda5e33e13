//! Grapheme cluster boundaries for cursor movement and deletion.
//!
//! The buffer stores Rust `char`s (Unicode scalar values), but what a user
//! perceives as one character can span several of them: combining accents,
//! ZWJ emoji sequences, regional indicator pairs. Horizontal cursor motion
//! and backspace must step over whole clusters, never land inside one.
//!
//! Columns here are char offsets within a single line's content.

use unicode_segmentation::UnicodeSegmentation;

/// Char offsets of every grapheme cluster boundary in `line`, including 0
/// and the line length.
fn cluster_boundaries(line: &str) -> Vec<usize> {
    let mut boundaries = Vec::with_capacity(line.len() + 1);
    let mut col = 0;
    for cluster in line.graphemes(true) {
        boundaries.push(col);
        col += cluster.chars().count();
    }
    boundaries.push(col);
    boundaries
}

/// The cluster boundary at or before `col - 1`: where the cursor lands when
/// moving left from `col`, and where a backspace at `col` starts deleting.
///
/// Returns 0 when `col` is 0.
pub fn prev_cluster_start(line: &str, col: usize) -> usize {
    if col == 0 || line.is_empty() {
        return 0;
    }
    // ASCII is always its own cluster; skip the segmentation walk.
    if line.chars().take(col).all(|ch| ch.is_ascii()) {
        return col - 1;
    }
    cluster_boundaries(line)
        .into_iter()
        .filter(|&b| b < col)
        .max()
        .unwrap_or(0)
}

/// The cluster boundary after `col`: where the cursor lands when moving
/// right, and where a forward delete at `col` stops deleting.
///
/// Returns the line length when `col` is already at or past the end.
pub fn next_cluster_end(line: &str, col: usize) -> usize {
    let total: usize = line.chars().count();
    if col >= total {
        return total;
    }
    cluster_boundaries(line)
        .into_iter()
        .find(|&b| b > col)
        .unwrap_or(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_steps_one_char() {
        assert_eq!(prev_cluster_start("hello", 3), 2);
        assert_eq!(next_cluster_end("hello", 3), 4);
        assert_eq!(prev_cluster_start("hello", 0), 0);
        assert_eq!(next_cluster_end("hello", 5), 5);
    }

    #[test]
    fn combining_accent_is_one_cluster() {
        // "e" + U+0301 combining acute: 2 chars, 1 cluster
        let line = "e\u{301}x";
        assert_eq!(prev_cluster_start(line, 2), 0);
        assert_eq!(next_cluster_end(line, 0), 2);
        assert_eq!(next_cluster_end(line, 2), 3);
    }

    #[test]
    fn zwj_emoji_is_one_cluster() {
        // Family emoji: 4 scalars joined by 3 ZWJs = 7 chars, 1 cluster
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let chars = family.chars().count();
        assert_eq!(chars, 7);
        assert_eq!(next_cluster_end(family, 0), chars);
        assert_eq!(prev_cluster_start(family, chars), 0);
    }

    #[test]
    fn mid_cluster_col_snaps_to_cluster_edge() {
        let line = "e\u{301}x";
        // Col 1 is inside the cluster; left goes to its start, right to its end.
        assert_eq!(prev_cluster_start(line, 1), 0);
        assert_eq!(next_cluster_end(line, 1), 2);
    }

    #[test]
    fn empty_line() {
        assert_eq!(prev_cluster_start("", 0), 0);
        assert_eq!(next_cluster_end("", 0), 0);
    }
}
