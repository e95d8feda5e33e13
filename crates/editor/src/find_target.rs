//! Find strip focus target.
//!
//! Wraps a [`MiniBuffer`] for query entry. All key events are consumed
//! while the strip is open so nothing leaks to the buffer below. After
//! dispatch the frontend checks the pending outcome: Escape cancels with
//! no effect on the highlight set, Return submits the query.

use plainpad_input::{Key, KeyEvent};

use crate::focus::{FocusTarget, Handled};
use crate::mini_buffer::MiniBuffer;

/// What the user did with the find strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// Escape: close the strip, leave highlights untouched.
    Cancelled,
    /// Return: run the search with the current query.
    Accepted,
}

/// Focus target for the find strip.
#[derive(Debug, Default)]
pub struct FindTarget {
    mini_buffer: MiniBuffer,
    pending_outcome: Option<FindOutcome>,
}

impl FindTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query text.
    pub fn query(&self) -> String {
        self.mini_buffer.content()
    }

    pub fn mini_buffer(&self) -> &MiniBuffer {
        &self.mini_buffer
    }

    /// Takes and clears the pending outcome.
    pub fn take_outcome(&mut self) -> Option<FindOutcome> {
        self.pending_outcome.take()
    }
}

impl FocusTarget for FindTarget {
    fn handle_key(&mut self, event: KeyEvent) -> Handled {
        match event.key {
            Key::Escape => {
                self.pending_outcome = Some(FindOutcome::Cancelled);
            }
            Key::Return => {
                self.pending_outcome = Some(FindOutcome::Accepted);
            }
            _ => {
                self.mini_buffer.handle_key(event);
            }
        }
        // The strip is modal: every event stops here.
        Handled::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainpad_input::Modifiers;

    fn escape() -> KeyEvent {
        KeyEvent::new(Key::Escape, Modifiers::default())
    }

    fn ret() -> KeyEvent {
        KeyEvent::new(Key::Return, Modifiers::default())
    }

    #[test]
    fn escape_cancels() {
        let mut target = FindTarget::new();
        assert_eq!(target.handle_key(escape()), Handled::Yes);
        assert_eq!(target.take_outcome(), Some(FindOutcome::Cancelled));
        assert_eq!(target.take_outcome(), None);
    }

    #[test]
    fn return_accepts_with_query() {
        let mut target = FindTarget::new();
        for ch in "needle".chars() {
            target.handle_key(KeyEvent::char(ch));
        }
        assert_eq!(target.handle_key(ret()), Handled::Yes);
        assert_eq!(target.take_outcome(), Some(FindOutcome::Accepted));
        assert_eq!(target.query(), "needle");
    }

    #[test]
    fn typing_consumes_without_outcome() {
        let mut target = FindTarget::new();
        assert_eq!(target.handle_key(KeyEvent::char('x')), Handled::Yes);
        assert_eq!(target.take_outcome(), None);
        assert_eq!(target.query(), "x");
    }
}
