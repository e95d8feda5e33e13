//! Line-number gutter: a read-only projection of the buffer.
//!
//! The gutter regenerates its label sequence after every content change and
//! scrolls in lockstep with the text pane through a shared normalized
//! scroll fraction. It is never independently editable.
//!
//! The label sequence is `1..N` *exclusive* where N is the line count, so
//! the final line carries no label (a 3-line buffer shows `1,2`). This
//! boundary is long-standing display behavior and is preserved exactly.

use crate::viewport::Viewport;

/// Display width of the gutter in columns, label plus padding.
pub const GUTTER_WIDTH: usize = 4;

/// The gutter's display state: the generated labels and its own viewport,
/// which the session keeps scroll-locked to the text pane.
#[derive(Debug)]
pub struct Gutter {
    labels: Vec<usize>,
    viewport: Viewport,
}

impl Gutter {
    pub fn new(visible_lines: usize) -> Self {
        let mut gutter = Self {
            labels: Vec::new(),
            viewport: Viewport::new(visible_lines),
        };
        gutter.refresh(1);
        gutter
    }

    /// Regenerates the label sequence for the given buffer line count.
    pub fn refresh(&mut self, line_count: usize) {
        self.labels = (1..line_count).collect();
    }

    /// The full label sequence, top to bottom.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// The label displayed next to buffer line `line`, if that line has one.
    pub fn label_at(&self, line: usize) -> Option<usize> {
        self.labels.get(line).copied()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }
}
