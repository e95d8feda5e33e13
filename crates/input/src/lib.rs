//! Input event types for keyboard handling.
//!
//! These types abstract over the terminal backend's event details and give
//! the editor a clean Rust-native interface. Keeping them in their own
//! crate lets the session and its tests construct events without touching
//! the terminal at all.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a character with ctrl held.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                ..Default::default()
            },
        }
    }

    /// Creates a KeyEvent for a character with ctrl and shift held.
    pub fn ctrl_shift(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                control: true,
                shift: true,
                ..Default::default()
            },
        }
    }
}

/// Modifier keys that can be held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key
    pub control: bool,
    /// Alt key
    pub alt: bool,
}

impl Modifiers {
    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control && !self.alt
    }

    /// Returns true if only shift is held (for uppercase letters).
    pub fn is_shift_only(&self) -> bool {
        self.shift && !self.control && !self.alt
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_constructor_has_no_modifiers() {
        let event = KeyEvent::char('a');
        assert_eq!(event.key, Key::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn ctrl_constructor_sets_only_control() {
        let event = KeyEvent::ctrl('s');
        assert!(event.modifiers.control);
        assert!(!event.modifiers.shift);
        assert!(!event.modifiers.alt);
    }

    #[test]
    fn ctrl_shift_constructor_sets_both() {
        let event = KeyEvent::ctrl_shift('s');
        assert!(event.modifiers.control);
        assert!(event.modifiers.shift);
    }

    #[test]
    fn shift_only_detection() {
        let shifted = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(shifted.is_shift_only());
        assert!(!Modifiers::default().is_shift_only());
        assert!(!KeyEvent::ctrl_shift('x').modifiers.is_shift_only());
    }
}
