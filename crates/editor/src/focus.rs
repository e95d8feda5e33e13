//! Focus target trait.
//!
//! While a modal surface (find strip, path prompt, font dialog, menu) is
//! open, it is the sole consumer of key events; nothing reaches the buffer
//! or the shortcut table underneath until it resolves. Each target
//! interprets its own input and records an outcome for the frontend to
//! collect after dispatch.

use plainpad_input::KeyEvent;

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was consumed by this focus target.
    Yes,
    /// The event was not handled and may propagate.
    No,
}

/// A modal surface that interprets its own key events.
pub trait FocusTarget {
    /// Handle a keyboard event, mutating internal state and recording a
    /// pending outcome where applicable.
    fn handle_key(&mut self, event: KeyEvent) -> Handled;
}
