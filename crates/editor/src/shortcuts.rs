//! Keyboard shortcut routing.
//!
//! Shortcuts live in one declarative table built at session start and are
//! resolved centrally, rather than bound imperatively all over the UI. The
//! table is the authority on binding lifetime: it exists for the life of
//! the process and is never rebound.

use plainpad_input::{Key, KeyEvent};

use crate::command::Command;

/// One key combination: a base character plus required modifier state.
///
/// Shortcuts are ctrl-chords; `shift` distinguishes e.g. Ctrl+S from
/// Ctrl+Shift+S. The base character is compared case-insensitively because
/// shift changes the reported character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub ch: char,
    pub shift: bool,
}

impl Shortcut {
    const fn ctrl(ch: char) -> Self {
        Self { ch, shift: false }
    }

    const fn ctrl_shift(ch: char) -> Self {
        Self { ch, shift: true }
    }
}

/// The standard binding table.
///
/// Ctrl+S Save, Ctrl+O Open, Ctrl+N New, Ctrl+A Select-All, Ctrl+X Cut,
/// Ctrl+C Copy, Ctrl+V Paste, Ctrl+Shift+S Save-As, Ctrl+F Find,
/// Ctrl+Z Undo, and Ctrl+Q Quit for the terminal frontend.
const BINDINGS: &[(Shortcut, Command)] = &[
    (Shortcut::ctrl('s'), Command::Save),
    (Shortcut::ctrl('o'), Command::Open),
    (Shortcut::ctrl('n'), Command::New),
    (Shortcut::ctrl('a'), Command::SelectAll),
    (Shortcut::ctrl('x'), Command::Cut),
    (Shortcut::ctrl('c'), Command::Copy),
    (Shortcut::ctrl('v'), Command::Paste),
    (Shortcut::ctrl_shift('s'), Command::SaveAs),
    (Shortcut::ctrl('f'), Command::Find),
    (Shortcut::ctrl('z'), Command::Undo),
    (Shortcut::ctrl('q'), Command::Quit),
];

/// The `{key combination -> command}` table, registered once at startup.
#[derive(Debug)]
pub struct ShortcutTable {
    bindings: Vec<(Shortcut, Command)>,
}

impl ShortcutTable {
    /// The editor's standard bindings.
    pub fn standard() -> Self {
        Self {
            bindings: BINDINGS.to_vec(),
        }
    }

    /// Resolves a key event against the table.
    ///
    /// Only ctrl-chords participate; anything else returns `None` and falls
    /// through to ordinary text input handling.
    pub fn resolve(&self, event: &KeyEvent) -> Option<Command> {
        if !event.modifiers.control || event.modifiers.alt {
            return None;
        }
        let Key::Char(ch) = event.key else {
            return None;
        };
        let ch = ch.to_ascii_lowercase();
        let shift = event.modifiers.shift;
        self.bindings
            .iter()
            .find(|(shortcut, _)| shortcut.ch == ch && shortcut.shift == shift)
            .map(|&(_, command)| command)
    }
}

impl Default for ShortcutTable {
    fn default() -> Self {
        Self::standard()
    }
}
