//! A plain-text editor: one buffer, a line-number gutter, and a small fixed
//! command set reachable through menus and control-key shortcuts.
//!
//! The crate splits into a fully testable core and a thin terminal shell.
//! [`session::Session`] owns all editor state and executes every
//! [`command::Command`] through one dispatch point; commands that need user
//! input hand a [`session::UiRequest`] back to the frontend, which runs the
//! matching modal ([`find_target::FindTarget`], [`path_prompt::PathPrompt`],
//! [`font_dialog::FontDialog`], [`menu::MenuState`]) and feeds the outcome
//! back in. Nothing in the core blocks on the screen or the keyboard.

pub mod clipboard;
pub mod command;
pub mod error;
pub mod find_target;
pub mod focus;
pub mod font_dialog;
pub mod gutter;
pub mod menu;
pub mod mini_buffer;
pub mod path_prompt;
pub mod report;
pub mod search;
pub mod session;
pub mod shortcuts;
pub mod theme;
pub mod tui;
pub mod viewport;

pub use command::Command;
pub use error::EditorError;
pub use session::{Session, UiRequest};
pub use theme::{FontFamily, Theme};
