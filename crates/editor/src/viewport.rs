//! Line-granular viewport over the buffer.
//!
//! Tracks which buffer lines are on screen and exposes scrolling as a
//! normalized fraction so the text pane and the gutter can be moved in
//! lockstep from one scroll event.

use std::ops::Range;

/// A window of visible lines.
#[derive(Debug, Clone)]
pub struct Viewport {
    top_line: usize,
    visible_lines: usize,
}

impl Viewport {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            top_line: 0,
            visible_lines: visible_lines.max(1),
        }
    }

    /// First buffer line on screen.
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// Updates the window height, keeping the top line valid.
    pub fn set_visible_lines(&mut self, visible_lines: usize, line_count: usize) {
        self.visible_lines = visible_lines.max(1);
        self.top_line = self.top_line.min(self.max_top(line_count));
    }

    /// The buffer lines currently on screen.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let start = self.top_line.min(line_count);
        let end = (start + self.visible_lines).min(line_count);
        start..end
    }

    /// Greatest valid top line for the given buffer size.
    fn max_top(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.visible_lines)
    }

    /// Vertical position normalized to `0.0..=1.0`.
    pub fn scroll_fraction(&self, line_count: usize) -> f64 {
        let max_top = self.max_top(line_count);
        if max_top == 0 {
            0.0
        } else {
            self.top_line as f64 / max_top as f64
        }
    }

    /// Positions the window at a normalized vertical offset.
    pub fn set_scroll_fraction(&mut self, fraction: f64, line_count: usize) {
        let fraction = fraction.clamp(0.0, 1.0);
        let max_top = self.max_top(line_count);
        self.top_line = (fraction * max_top as f64).round() as usize;
    }

    /// Scrolls by a signed number of lines, clamped to the buffer.
    pub fn scroll_by(&mut self, delta: isize, line_count: usize) {
        let target = self.top_line as isize + delta;
        self.top_line = target.clamp(0, self.max_top(line_count) as isize) as usize;
    }

    /// Scrolls the minimum amount to bring `line` on screen.
    /// Returns true if the window moved.
    pub fn ensure_visible(&mut self, line: usize, line_count: usize) -> bool {
        let before = self.top_line;
        if line < self.top_line {
            self.top_line = line;
        } else if line >= self.top_line + self.visible_lines {
            self.top_line = line + 1 - self.visible_lines;
        }
        self.top_line = self.top_line.min(self.max_top(line_count));
        self.top_line != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_range_clamps_to_buffer() {
        let vp = Viewport::new(10);
        assert_eq!(vp.visible_range(3), 0..3);
        assert_eq!(vp.visible_range(25), 0..10);
    }

    #[test]
    fn scroll_fraction_round_trips() {
        let mut vp = Viewport::new(10);
        vp.set_scroll_fraction(0.5, 110);
        assert_eq!(vp.top_line(), 50);
        assert!((vp.scroll_fraction(110) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fraction_is_zero_when_everything_fits() {
        let mut vp = Viewport::new(10);
        vp.set_scroll_fraction(1.0, 5);
        assert_eq!(vp.top_line(), 0);
        assert_eq!(vp.scroll_fraction(5), 0.0);
    }

    #[test]
    fn scroll_by_clamps_at_both_ends() {
        let mut vp = Viewport::new(10);
        vp.scroll_by(-3, 100);
        assert_eq!(vp.top_line(), 0);
        vp.scroll_by(1000, 100);
        assert_eq!(vp.top_line(), 90);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut vp = Viewport::new(10);
        assert!(!vp.ensure_visible(5, 100));
        assert!(vp.ensure_visible(15, 100));
        assert_eq!(vp.top_line(), 6);
        assert!(vp.ensure_visible(2, 100));
        assert_eq!(vp.top_line(), 2);
    }

    #[test]
    fn shrinking_buffer_pulls_top_line_back() {
        let mut vp = Viewport::new(10);
        vp.scroll_by(90, 100);
        assert_eq!(vp.top_line(), 90);
        vp.set_visible_lines(10, 20);
        assert_eq!(vp.top_line(), 10);
    }
}
