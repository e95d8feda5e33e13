//! plainpad-buffer: the text buffer for the plainpad editor.
//!
//! This crate provides a gap buffer-backed document with cursor tracking,
//! selection, an undo stack, and dirty line reporting. It has no knowledge
//! of rendering or of the terminal; the editor crate drives it through
//! commands and reads lines back out for display.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Character and string insertion at the cursor position
//! - Grapheme-aware deletion and cursor movement
//! - Selection (anchor + cursor), including whole-buffer selection
//! - A bounded snapshot undo stack
//! - Line-based access for rendering
//!
//! # Example
//!
//! ```
//! use plainpad_buffer::{TextBuffer, DirtyLines, Position};
//!
//! let mut buffer = TextBuffer::new();
//!
//! buffer.insert_str("Hello, world!");
//! assert_eq!(buffer.line_count(), 1);
//! assert_eq!(buffer.line_content(0), "Hello, world!");
//!
//! buffer.set_cursor(Position::new(0, 6));
//! let dirty = buffer.insert_newline();
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(buffer.line_count(), 2);
//! ```
//!
//! # Dirty Line Tracking
//!
//! Each mutation returns a [`DirtyLines`] value indicating which lines were
//! affected, so the frontend can redraw only what changed:
//!
//! - `DirtyLines::None` - no visual change (no-op at a buffer boundary)
//! - `DirtyLines::Single(line)` - only one line changed
//! - `DirtyLines::FromLineToEnd(line)` - all lines from `line` to the end
//!   changed (lines were split or joined)

mod gap_buffer;
mod grapheme;
mod line_index;
mod text_buffer;
mod types;
mod undo;

pub use text_buffer::TextBuffer;
pub use types::{DirtyLines, Position, Span};
pub use undo::{Snapshot, UndoStack};
