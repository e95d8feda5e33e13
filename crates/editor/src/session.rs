//! The editing session: one buffer, one associated file, one dispatch point.
//!
//! Every command funnels through [`Session::apply`]. Commands that need
//! user input return a [`UiRequest`] instead of blocking; the frontend opens
//! the matching modal, collects its outcome, and calls back into the
//! session (`open_file`, `save_file_as`, `run_search`, ...). The session
//! itself never touches the screen or waits on a dialog, which keeps all of
//! its behavior unit-testable.

use std::fs;
use std::path::{Path, PathBuf};

use plainpad_buffer::{DirtyLines, Position, Span, TextBuffer};
use plainpad_input::{Key, KeyEvent};

use crate::clipboard;
use crate::command::Command;
use crate::error::EditorError;
use crate::gutter::Gutter;
use crate::report::Report;
use crate::search;
use crate::theme::{FontFamily, Theme};
use crate::viewport::Viewport;

/// A modal the frontend must open on the session's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRequest {
    /// Prompt for a file to open.
    OpenPrompt,
    /// Prompt for a path to save to.
    SaveAsPrompt,
    /// Prompt for a search query.
    FindPrompt,
    /// Open the font options dialog.
    FontDialog,
}

pub struct Session {
    buffer: TextBuffer,
    /// The path `Save` writes to. `Save as` deliberately leaves this alone:
    /// it writes a copy and subsequent saves still target the original file.
    associated_file: Option<PathBuf>,
    highlights: Vec<Span>,
    theme: Theme,
    font: FontFamily,
    viewport: Viewport,
    gutter: Gutter,
    reports: Vec<Report>,
    should_quit: bool,
}

impl Session {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            associated_file: None,
            highlights: Vec::new(),
            theme: Theme::default(),
            font: FontFamily::default(),
            viewport: Viewport::new(visible_lines),
            gutter: Gutter::new(visible_lines),
            reports: Vec::new(),
            should_quit: false,
        }
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn associated_file(&self) -> Option<&Path> {
        self.associated_file.as_deref()
    }

    pub fn highlights(&self) -> &[Span] {
        &self.highlights
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn font(&self) -> FontFamily {
        self.font
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn gutter(&self) -> &Gutter {
        &self.gutter
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The associated file's name, or "Untitled" without one.
    pub fn window_title(&self) -> String {
        self.associated_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Drains the queued user-facing messages.
    pub fn take_reports(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }

    // ==================== Command dispatch ====================

    /// Executes a command. Returns the modal the frontend must open, if the
    /// command needs further input.
    pub fn apply(&mut self, command: Command) -> Option<UiRequest> {
        match command {
            Command::New => self.new_file(),
            Command::Open => return Some(UiRequest::OpenPrompt),
            Command::Save => return self.save(),
            Command::SaveAs => return Some(UiRequest::SaveAsPrompt),
            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::SelectAll => self.select_all(),
            Command::Undo => self.undo(),
            Command::Find => return Some(UiRequest::FindPrompt),
            Command::WordCount => self.word_count(),
            Command::FontOptions => return Some(UiRequest::FontDialog),
            Command::ApplyFont(font) => self.font = font,
            Command::ApplyTheme(theme) => self.theme = theme,
            Command::Quit => self.should_quit = true,
        }
        None
    }

    // ==================== File operations ====================

    /// Discards the buffer and the associated path without prompting.
    pub fn new_file(&mut self) {
        self.buffer.set_content("");
        self.associated_file = None;
        self.after_content_swap();
    }

    /// Replaces the buffer with the file's contents and associates its path.
    /// A failed read reports the error and leaves the session unchanged.
    pub fn open_file(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(content) => {
                self.buffer.set_content(&content);
                self.associated_file = Some(path.to_path_buf());
                self.after_content_swap();
                tracing::info!(path = %path.display(), chars = self.buffer.len(), "opened file");
            }
            Err(err) => {
                self.report_error(EditorError::read(path, err));
            }
        }
    }

    /// Writes to the associated path, or asks for one when there is none.
    pub fn save(&mut self) -> Option<UiRequest> {
        match self.associated_file.clone() {
            Some(path) => {
                self.write_to(&path);
                None
            }
            None => Some(UiRequest::SaveAsPrompt),
        }
    }

    /// Writes the buffer to `path` without adopting it: the associated file
    /// is left as it was, so `Save` keeps targeting the original path.
    pub fn save_file_as(&mut self, path: &Path) {
        self.write_to(path);
    }

    fn write_to(&mut self, path: &Path) {
        match fs::write(path, self.buffer.content()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), chars = self.buffer.len(), "saved file");
            }
            Err(err) => {
                self.report_error(EditorError::write(path, err));
            }
        }
    }

    // ==================== Clipboard ====================

    /// Moves the selection to the clipboard. No-op without a selection.
    pub fn cut(&mut self) {
        if let Some(text) = self.buffer.selected_text() {
            clipboard::copy_to_clipboard(&text);
            self.buffer.delete_selection();
            self.after_edit();
        }
    }

    /// Copies the selection to the clipboard. No-op without a selection.
    pub fn copy(&mut self) {
        if let Some(text) = self.buffer.selected_text() {
            clipboard::copy_to_clipboard(&text);
        }
    }

    /// Inserts the clipboard at the cursor, replacing any selection.
    /// No-op when the clipboard is empty or unavailable.
    pub fn paste(&mut self) {
        if let Some(text) = clipboard::paste_from_clipboard() {
            if !text.is_empty() {
                self.buffer.insert_str(&text);
                self.after_edit();
            }
        }
    }

    // ==================== Editing commands ====================

    /// Selects everything and scrolls to the cursor, which lands at the
    /// buffer start.
    pub fn select_all(&mut self) {
        self.buffer.select_all();
        self.scroll_cursor_into_view();
    }

    pub fn undo(&mut self) {
        if self.buffer.undo() != DirtyLines::None {
            self.after_edit();
        }
    }

    // ==================== Search ====================

    /// Highlights every occurrence of `query`. An empty query is a no-op:
    /// existing highlights stay untouched.
    pub fn run_search(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.highlights = search::find_all(&self.buffer.content(), query);
        tracing::debug!(query, matches = self.highlights.len(), "search complete");
        if let Some(first) = self.highlights.first() {
            let line = self.buffer.position_at(first.start).line;
            self.viewport.ensure_visible(line, self.buffer.line_count());
            self.sync_gutter_scroll();
        }
    }

    // ==================== Word count ====================

    /// Reports the number of whitespace-separated tokens in the buffer.
    pub fn word_count(&mut self) {
        let words = self.buffer.content().split_whitespace().count();
        self.reports
            .push(Report::info(format!("The document contains {words} words.")));
    }

    // ==================== Scrolling ====================

    /// Positions both the text pane and the gutter at a normalized vertical
    /// offset. One scrollbar drives both; they never drift apart.
    pub fn scroll_to_fraction(&mut self, fraction: f64) {
        let line_count = self.buffer.line_count();
        self.viewport.set_scroll_fraction(fraction, line_count);
        self.sync_gutter_scroll();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let line_count = self.buffer.line_count();
        self.viewport.scroll_by(delta, line_count);
        self.sync_gutter_scroll();
    }

    /// Updates the on-screen window height after a resize.
    pub fn set_visible_lines(&mut self, visible_lines: usize) {
        let line_count = self.buffer.line_count();
        self.viewport.set_visible_lines(visible_lines, line_count);
        self.gutter
            .viewport_mut()
            .set_visible_lines(visible_lines, line_count);
        self.sync_gutter_scroll();
    }

    fn scroll_cursor_into_view(&mut self) {
        let line_count = self.buffer.line_count();
        self.viewport
            .ensure_visible(self.buffer.cursor().line, line_count);
        self.sync_gutter_scroll();
    }

    fn sync_gutter_scroll(&mut self) {
        let line_count = self.buffer.line_count();
        let fraction = self.viewport.scroll_fraction(line_count);
        self.gutter
            .viewport_mut()
            .set_scroll_fraction(fraction, line_count);
    }

    // ==================== Key handling ====================

    /// Routes a key to the text pane: movement, selection, and direct edits.
    pub fn handle_buffer_key(&mut self, event: KeyEvent) {
        match event.key {
            // Control/alt chords are shortcut territory, not text.
            Key::Char(_) if event.modifiers.control || event.modifiers.alt => {}
            Key::Char(ch) => {
                self.buffer.insert_char(ch);
                self.after_edit();
            }
            Key::Return => {
                self.buffer.insert_newline();
                self.after_edit();
            }
            Key::Tab => {
                self.buffer.insert_char('\t');
                self.after_edit();
            }
            Key::Backspace => {
                if self.buffer.delete_backward() != DirtyLines::None {
                    self.after_edit();
                }
            }
            Key::Delete => {
                if self.buffer.delete_forward() != DirtyLines::None {
                    self.after_edit();
                }
            }
            Key::Left => self.move_cursor(event, TextBuffer::move_left),
            Key::Right => self.move_cursor(event, TextBuffer::move_right),
            Key::Up => self.move_cursor(event, TextBuffer::move_up),
            Key::Down => self.move_cursor(event, TextBuffer::move_down),
            Key::Home => self.move_cursor(event, TextBuffer::move_to_line_start),
            Key::End => self.move_cursor(event, TextBuffer::move_to_line_end),
            Key::PageUp => {
                let page = self.viewport.visible_lines() as isize;
                self.scroll_by(-page);
            }
            Key::PageDown => {
                let page = self.viewport.visible_lines() as isize;
                self.scroll_by(page);
            }
            Key::Escape => {}
        }
    }

    /// Runs a cursor motion, extending the selection when shift is held.
    fn move_cursor(&mut self, event: KeyEvent, motion: fn(&mut TextBuffer)) {
        let anchor: Option<Position> = if event.modifiers.shift {
            Some(
                self.buffer
                    .selection_anchor()
                    .unwrap_or_else(|| self.buffer.cursor()),
            )
        } else {
            None
        };
        motion(&mut self.buffer);
        if let Some(anchor) = anchor {
            self.buffer.set_selection_anchor(anchor);
        }
        self.scroll_cursor_into_view();
    }

    // ==================== Internals ====================

    /// Bookkeeping after any buffer mutation. Highlight spans refer to the
    /// old content, so they are dropped rather than left stale.
    fn after_edit(&mut self) {
        self.highlights.clear();
        self.gutter.refresh(self.buffer.line_count());
        self.scroll_cursor_into_view();
    }

    /// Bookkeeping after New/Open replace the document wholesale.
    fn after_content_swap(&mut self) {
        self.highlights.clear();
        self.gutter.refresh(self.buffer.line_count());
        let line_count = self.buffer.line_count();
        self.viewport.set_scroll_fraction(0.0, line_count);
        self.sync_gutter_scroll();
    }

    fn report_error(&mut self, err: EditorError) {
        tracing::error!(%err);
        self.reports.push(Report::error(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use plainpad_input::Modifiers;

    fn type_text(session: &mut Session, text: &str) {
        for ch in text.chars() {
            let key = if ch == '\n' {
                KeyEvent::new(Key::Return, Modifiers::default())
            } else {
                KeyEvent::char(ch)
            };
            session.handle_buffer_key(key);
        }
    }

    #[test]
    fn typing_reaches_the_buffer() {
        let mut session = Session::new(24);
        type_text(&mut session, "hi\nthere");
        assert_eq!(session.buffer().content(), "hi\nthere");
        assert_eq!(session.buffer().line_count(), 2);
    }

    #[test]
    fn new_file_discards_content_and_path() {
        let mut session = Session::new(24);
        session.associated_file = Some(PathBuf::from("/tmp/notes.txt"));
        type_text(&mut session, "unsaved");
        assert_eq!(session.apply(Command::New), None);
        assert_eq!(session.buffer().content(), "");
        assert_eq!(session.associated_file(), None);
        assert!(session.take_reports().is_empty());
    }

    #[test]
    fn open_associates_path_and_loads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "from disk").unwrap();

        let mut session = Session::new(24);
        session.open_file(&path);
        assert_eq!(session.buffer().content(), "from disk");
        assert_eq!(session.associated_file(), Some(path.as_path()));
        assert_eq!(session.window_title(), "notes.txt");
    }

    #[test]
    fn open_failure_reports_and_preserves_state() {
        let mut session = Session::new(24);
        type_text(&mut session, "keep me");
        session.open_file(Path::new("/nonexistent/nope.txt"));
        assert_eq!(session.buffer().content(), "keep me");
        assert_eq!(session.associated_file(), None);
        let reports = session.take_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
    }

    #[test]
    fn save_without_path_requests_save_as() {
        let mut session = Session::new(24);
        assert_eq!(session.apply(Command::Save), Some(UiRequest::SaveAsPrompt));
    }

    #[test]
    fn save_with_path_writes_silently() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut session = Session::new(24);
        type_text(&mut session, "content");
        session.associated_file = Some(path.clone());

        assert_eq!(session.apply(Command::Save), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
        assert!(session.take_reports().is_empty());
    }

    #[test]
    fn save_as_does_not_adopt_the_new_path() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("original.txt");
        let copy = dir.path().join("copy.txt");

        let mut session = Session::new(24);
        type_text(&mut session, "v1");
        session.associated_file = Some(original.clone());
        session.save_file_as(&copy);
        assert_eq!(fs::read_to_string(&copy).unwrap(), "v1");
        assert_eq!(session.associated_file(), Some(original.as_path()));

        // A later plain Save still targets the original path.
        type_text(&mut session, "!");
        session.apply(Command::Save);
        assert_eq!(fs::read_to_string(&original).unwrap(), "v1!");
        assert_eq!(fs::read_to_string(&copy).unwrap(), "v1");
    }

    #[test]
    fn save_failure_is_reported() {
        let mut session = Session::new(24);
        type_text(&mut session, "content");
        session.associated_file = Some(PathBuf::from("/nonexistent/dir/doc.txt"));
        session.apply(Command::Save);
        let reports = session.take_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
    }

    #[test]
    fn cut_copy_paste_round_trip() {
        clipboard::mock_set_clipboard(None);
        let mut session = Session::new(24);
        type_text(&mut session, "hello world");
        session.select_all();
        session.apply(Command::Cut);
        assert_eq!(session.buffer().content(), "");

        session.apply(Command::Paste);
        assert_eq!(session.buffer().content(), "hello world");
    }

    #[test]
    fn copy_keeps_the_selection_text_in_place() {
        clipboard::mock_set_clipboard(None);
        let mut session = Session::new(24);
        type_text(&mut session, "abc");
        session.select_all();
        session.apply(Command::Copy);
        assert_eq!(session.buffer().content(), "abc");
        assert_eq!(clipboard::paste_from_clipboard().as_deref(), Some("abc"));
    }

    #[test]
    fn cut_without_selection_leaves_clipboard_alone() {
        clipboard::mock_set_clipboard(Some("previous".to_string()));
        let mut session = Session::new(24);
        type_text(&mut session, "abc");
        session.apply(Command::Cut);
        assert_eq!(session.buffer().content(), "abc");
        assert_eq!(
            clipboard::paste_from_clipboard().as_deref(),
            Some("previous")
        );
    }

    #[test]
    fn select_all_scrolls_to_the_top() {
        let mut session = Session::new(3);
        type_text(&mut session, &"line\n".repeat(20));
        assert!(session.viewport().top_line() > 0);
        session.apply(Command::SelectAll);
        assert_eq!(session.viewport().top_line(), 0);
        assert_eq!(session.buffer().cursor(), Position::new(0, 0));
        assert!(session.buffer().has_selection());
    }

    #[test]
    fn undo_reverts_and_clears_highlights() {
        let mut session = Session::new(24);
        type_text(&mut session, "abab");
        session.run_search("ab");
        assert_eq!(session.highlights().len(), 2);

        session.apply(Command::Undo);
        assert_eq!(session.buffer().content(), "aba");
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn search_highlights_every_occurrence() {
        let mut session = Session::new(24);
        type_text(&mut session, "cat catalog cat");
        session.run_search("cat");
        let spans: Vec<(usize, usize)> = session
            .highlights()
            .iter()
            .map(|s| (s.start, s.end))
            .collect();
        assert_eq!(spans, vec![(0, 3), (4, 7), (12, 15)]);
    }

    #[test]
    fn empty_search_keeps_existing_highlights() {
        let mut session = Session::new(24);
        type_text(&mut session, "aaa");
        session.run_search("a");
        assert_eq!(session.highlights().len(), 3);
        session.run_search("");
        assert_eq!(session.highlights().len(), 3);
    }

    #[test]
    fn editing_drops_stale_highlights() {
        let mut session = Session::new(24);
        type_text(&mut session, "match match");
        session.run_search("match");
        assert_eq!(session.highlights().len(), 2);
        session.handle_buffer_key(KeyEvent::char('x'));
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        let mut session = Session::new(24);
        type_text(&mut session, "a b  c\n d");
        session.apply(Command::WordCount);
        let reports = session.take_reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message, "The document contains 4 words.");
        assert_eq!(reports[0].severity, Severity::Info);
    }

    #[test]
    fn word_count_of_empty_buffer_is_zero() {
        let mut session = Session::new(24);
        session.apply(Command::WordCount);
        assert_eq!(
            session.take_reports()[0].message,
            "The document contains 0 words."
        );
    }

    #[test]
    fn gutter_labels_track_line_count() {
        let mut session = Session::new(24);
        type_text(&mut session, "line1\nline2\nline3");
        assert_eq!(session.gutter().labels(), &[1, 2]);
    }

    #[test]
    fn scrollbar_moves_text_and_gutter_together() {
        let mut session = Session::new(5);
        type_text(&mut session, &"x\n".repeat(100));
        session.scroll_to_fraction(0.5);
        assert_eq!(
            session.viewport().top_line(),
            session.gutter().viewport().top_line()
        );
        assert!(session.viewport().top_line() > 0);
    }

    #[test]
    fn shift_arrows_extend_the_selection() {
        let mut session = Session::new(24);
        type_text(&mut session, "abc");
        session.handle_buffer_key(KeyEvent::new(Key::Home, Modifiers::default()));
        let shift = Modifiers {
            shift: true,
            ..Modifiers::default()
        };
        session.handle_buffer_key(KeyEvent::new(Key::Right, shift));
        session.handle_buffer_key(KeyEvent::new(Key::Right, shift));
        assert_eq!(session.buffer().selected_text().as_deref(), Some("ab"));
    }

    #[test]
    fn theme_and_font_apply() {
        let mut session = Session::new(24);
        assert_eq!(session.theme(), Theme::White);
        session.apply(Command::ApplyTheme(Theme::Dark));
        assert_eq!(session.theme(), Theme::Dark);
        session.apply(Command::ApplyFont(FontFamily::CourierNew));
        assert_eq!(session.font(), FontFamily::CourierNew);
    }

    #[test]
    fn modal_commands_request_their_dialogs() {
        let mut session = Session::new(24);
        assert_eq!(session.apply(Command::Open), Some(UiRequest::OpenPrompt));
        assert_eq!(session.apply(Command::SaveAs), Some(UiRequest::SaveAsPrompt));
        assert_eq!(session.apply(Command::Find), Some(UiRequest::FindPrompt));
        assert_eq!(
            session.apply(Command::FontOptions),
            Some(UiRequest::FontDialog)
        );
    }

    #[test]
    fn quit_flags_the_session() {
        let mut session = Session::new(24);
        assert!(!session.should_quit());
        session.apply(Command::Quit);
        assert!(session.should_quit());
    }
}
