//! The fixed command set.
//!
//! Every user-triggerable operation is one of these. Menu items and
//! keyboard shortcuts both resolve to a `Command`, and the session executes
//! them through one dispatch point. This decouples key recognition from
//! state mutation.

use crate::theme::{FontFamily, Theme};

/// A command the session can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Discard the buffer and the associated path. No unsaved-changes prompt.
    New,
    /// Prompt for a file and replace the buffer with its contents.
    Open,
    /// Write to the associated path, or fall through to SaveAs without one.
    Save,
    /// Prompt for a path and write the buffer there.
    SaveAs,
    /// Move the selection to the clipboard.
    Cut,
    /// Copy the selection to the clipboard.
    Copy,
    /// Insert the clipboard at the cursor.
    Paste,
    /// Select the whole buffer, cursor to the start.
    SelectAll,
    /// Revert the most recent edit.
    Undo,
    /// Prompt for a query and highlight every occurrence.
    Find,
    /// Report the whitespace-separated token count.
    WordCount,
    /// Open the font options dialog.
    FontOptions,
    /// Set the display font family.
    ApplyFont(FontFamily),
    /// Set the display theme.
    ApplyTheme(Theme),
    /// Leave the editor.
    Quit,
}
