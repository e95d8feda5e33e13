//! Font options dialog.
//!
//! A modal list over the four font families. Opens with Arial selected,
//! and resolves either via Cancel (no effect) or Apply, which emits the
//! selected family for the session to consume. No shared mutable state
//! leaks out; the dialog's selection lives here until applied.

use plainpad_input::{Key, KeyEvent};

use crate::focus::{FocusTarget, Handled};
use crate::theme::FontFamily;

/// How the dialog resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontDialogOutcome {
    /// Escape: no effect.
    Cancelled,
    /// Return: apply this family.
    Applied(FontFamily),
}

/// Focus target for the font options dialog.
#[derive(Debug, Default)]
pub struct FontDialog {
    selected: usize,
    pending_outcome: Option<FontDialogOutcome>,
}

impl FontDialog {
    /// Opens with the default selection (Arial).
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently highlighted family.
    pub fn selected(&self) -> FontFamily {
        FontFamily::ALL[self.selected]
    }

    /// Index of the highlighted row, for rendering.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Takes and clears the pending outcome.
    pub fn take_outcome(&mut self) -> Option<FontDialogOutcome> {
        self.pending_outcome.take()
    }
}

impl FocusTarget for FontDialog {
    fn handle_key(&mut self, event: KeyEvent) -> Handled {
        match event.key {
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            Key::Down => {
                self.selected = (self.selected + 1).min(FontFamily::ALL.len() - 1);
            }
            Key::Escape => {
                self.pending_outcome = Some(FontDialogOutcome::Cancelled);
            }
            Key::Return => {
                self.pending_outcome = Some(FontDialogOutcome::Applied(self.selected()));
            }
            _ => {}
        }
        Handled::Yes
    }
}
