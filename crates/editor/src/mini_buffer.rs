//! MiniBuffer: a reusable single-line editing model.
//!
//! The find strip and both path prompts need a little line editor. Rather
//! than reimplementing editing, MiniBuffer wraps a [`TextBuffer`] and
//! filters out the events that would violate the single-line invariant
//! (Return and vertical movement); everything else is delegated, so cursor
//! movement, backspace, and grapheme handling come for free.

use plainpad_buffer::{Position, TextBuffer};
use plainpad_input::{Key, KeyEvent};

/// A single-line text input with full buffer affordances.
#[derive(Debug, Default)]
pub struct MiniBuffer {
    buffer: TextBuffer,
}

impl MiniBuffer {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
        }
    }

    /// The current input content.
    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Cursor column within the input.
    pub fn cursor_col(&self) -> usize {
        self.buffer.cursor().col
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.buffer.set_content("");
    }

    /// Replaces the input content, cursor at the end.
    pub fn set_content(&mut self, content: &str) {
        self.buffer.set_content(content);
        self.buffer
            .set_cursor(Position::new(0, content.chars().count()));
    }

    /// Handles one key event. Returns true if the content changed.
    ///
    /// Return, Up, and Down are filtered (single-line invariant); control
    /// chords are ignored so shortcut handling stays with the caller.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if event.modifiers.control || event.modifiers.alt {
            return false;
        }
        let before = self.buffer.content();
        match event.key {
            Key::Char(ch) => {
                self.buffer.insert_char(ch);
            }
            Key::Backspace => {
                self.buffer.delete_backward();
            }
            Key::Delete => {
                self.buffer.delete_forward();
            }
            Key::Left => self.buffer.move_left(),
            Key::Right => self.buffer.move_right(),
            Key::Home => self.buffer.move_to_line_start(),
            Key::End => self.buffer.move_to_line_end(),
            // Single-line invariant: no newlines, no vertical movement.
            Key::Return | Key::Up | Key::Down => {}
            _ => {}
        }
        self.buffer.content() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainpad_input::Modifiers;

    #[test]
    fn typing_builds_content() {
        let mut mb = MiniBuffer::new();
        assert!(mb.handle_key(KeyEvent::char('h')));
        assert!(mb.handle_key(KeyEvent::char('i')));
        assert_eq!(mb.content(), "hi");
        assert_eq!(mb.cursor_col(), 2);
    }

    #[test]
    fn return_is_filtered() {
        let mut mb = MiniBuffer::new();
        mb.handle_key(KeyEvent::char('a'));
        assert!(!mb.handle_key(KeyEvent::new(Key::Return, Modifiers::default())));
        assert_eq!(mb.content(), "a");
    }

    #[test]
    fn vertical_movement_is_filtered() {
        let mut mb = MiniBuffer::new();
        mb.handle_key(KeyEvent::char('a'));
        mb.handle_key(KeyEvent::new(Key::Up, Modifiers::default()));
        mb.handle_key(KeyEvent::new(Key::Down, Modifiers::default()));
        assert_eq!(mb.cursor_col(), 1);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut mb = MiniBuffer::new();
        mb.set_content("ac");
        mb.handle_key(KeyEvent::new(Key::Left, Modifiers::default()));
        mb.handle_key(KeyEvent::char('b'));
        assert_eq!(mb.content(), "abc");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut mb = MiniBuffer::new();
        mb.set_content("abc");
        assert!(mb.handle_key(KeyEvent::new(Key::Backspace, Modifiers::default())));
        assert_eq!(mb.content(), "ab");
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut mb = MiniBuffer::new();
        assert!(!mb.handle_key(KeyEvent::ctrl('s')));
        assert!(mb.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut mb = MiniBuffer::new();
        mb.set_content("something");
        mb.clear();
        assert!(mb.is_empty());
        assert_eq!(mb.cursor_col(), 0);
    }
}
