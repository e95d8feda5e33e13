//! Open/save path prompts.
//!
//! Each prompt is a small modal state machine: it opens with an empty
//! input, and resolves either by Cancel (Escape or an empty submission —
//! no effect on the session) or by choosing a path. The Open prompt lists
//! the current directory filtered to `*.txt` by default, with an all-files
//! fallback toggled by Tab. The Save prompt appends the `.txt` default
//! extension when the entered name has none.

use std::io;
use std::path::{Path, PathBuf};

use plainpad_input::{Key, KeyEvent};

use crate::focus::{FocusTarget, Handled};
use crate::mini_buffer::MiniBuffer;

/// Which dialog this prompt is standing in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// File-open prompt with extension filtering.
    Open,
    /// Save-location prompt with a default extension.
    SaveAs,
}

/// File listing filter for the Open prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    /// Text files: `*.txt`. The default.
    Text,
    /// All files: `*.*`. The fallback.
    All,
}

impl FileFilter {
    pub fn label(self) -> &'static str {
        match self {
            FileFilter::Text => "Text Files (*.txt)",
            FileFilter::All => "All Files (*.*)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FileFilter::Text => FileFilter::All,
            FileFilter::All => FileFilter::Text,
        }
    }

    /// Whether `path` passes the filter.
    pub fn matches(self, path: &Path) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::Text => path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt")),
        }
    }
}

/// Files in `dir` passing `filter`, sorted by name. Directories are
/// excluded; the prompt takes a typed path, the listing is advisory.
pub fn matching_entries(dir: &Path, filter: FileFilter) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && filter.matches(path))
        .collect();
    entries.sort();
    Ok(entries)
}

/// How the prompt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Escape or empty submission: leave session state unchanged.
    Cancelled,
    /// A path was chosen.
    Chosen(PathBuf),
}

/// Focus target for a path prompt.
#[derive(Debug)]
pub struct PathPrompt {
    kind: PromptKind,
    mini_buffer: MiniBuffer,
    filter: FileFilter,
    pending_outcome: Option<PromptOutcome>,
}

impl PathPrompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            mini_buffer: MiniBuffer::new(),
            filter: FileFilter::Text,
            pending_outcome: None,
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// The active listing filter (Open prompt only).
    pub fn filter(&self) -> FileFilter {
        self.filter
    }

    pub fn mini_buffer(&self) -> &MiniBuffer {
        &self.mini_buffer
    }

    /// Takes and clears the pending outcome.
    pub fn take_outcome(&mut self) -> Option<PromptOutcome> {
        self.pending_outcome.take()
    }

    /// Resolves the typed text into the chosen path.
    ///
    /// Save prompts append `.txt` when the name carries no extension,
    /// matching the dialog's default-extension behavior.
    fn resolve(&self) -> PromptOutcome {
        let text = self.mini_buffer.content();
        if text.trim().is_empty() {
            return PromptOutcome::Cancelled;
        }
        let mut path = PathBuf::from(text.trim());
        if self.kind == PromptKind::SaveAs && path.extension().is_none() {
            path.set_extension("txt");
        }
        PromptOutcome::Chosen(path)
    }
}

impl FocusTarget for PathPrompt {
    fn handle_key(&mut self, event: KeyEvent) -> Handled {
        match event.key {
            Key::Escape => {
                self.pending_outcome = Some(PromptOutcome::Cancelled);
            }
            Key::Return => {
                self.pending_outcome = Some(self.resolve());
            }
            Key::Tab if self.kind == PromptKind::Open => {
                self.filter = self.filter.toggled();
            }
            _ => {
                self.mini_buffer.handle_key(event);
            }
        }
        Handled::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plainpad_input::Modifiers;
    use std::fs::File;

    fn key(k: Key) -> KeyEvent {
        KeyEvent::new(k, Modifiers::default())
    }

    fn type_text(prompt: &mut PathPrompt, text: &str) {
        for ch in text.chars() {
            prompt.handle_key(KeyEvent::char(ch));
        }
    }

    #[test]
    fn escape_cancels() {
        let mut prompt = PathPrompt::new(PromptKind::Open);
        type_text(&mut prompt, "notes.txt");
        prompt.handle_key(key(Key::Escape));
        assert_eq!(prompt.take_outcome(), Some(PromptOutcome::Cancelled));
    }

    #[test]
    fn empty_submission_cancels() {
        let mut prompt = PathPrompt::new(PromptKind::SaveAs);
        prompt.handle_key(key(Key::Return));
        assert_eq!(prompt.take_outcome(), Some(PromptOutcome::Cancelled));
    }

    #[test]
    fn open_returns_typed_path_verbatim() {
        let mut prompt = PathPrompt::new(PromptKind::Open);
        type_text(&mut prompt, "dir/readme.md");
        prompt.handle_key(key(Key::Return));
        assert_eq!(
            prompt.take_outcome(),
            Some(PromptOutcome::Chosen(PathBuf::from("dir/readme.md")))
        );
    }

    #[test]
    fn save_appends_default_extension() {
        let mut prompt = PathPrompt::new(PromptKind::SaveAs);
        type_text(&mut prompt, "notes");
        prompt.handle_key(key(Key::Return));
        assert_eq!(
            prompt.take_outcome(),
            Some(PromptOutcome::Chosen(PathBuf::from("notes.txt")))
        );
    }

    #[test]
    fn save_keeps_explicit_extension() {
        let mut prompt = PathPrompt::new(PromptKind::SaveAs);
        type_text(&mut prompt, "notes.md");
        prompt.handle_key(key(Key::Return));
        assert_eq!(
            prompt.take_outcome(),
            Some(PromptOutcome::Chosen(PathBuf::from("notes.md")))
        );
    }

    #[test]
    fn tab_toggles_open_filter() {
        let mut prompt = PathPrompt::new(PromptKind::Open);
        assert_eq!(prompt.filter(), FileFilter::Text);
        prompt.handle_key(key(Key::Tab));
        assert_eq!(prompt.filter(), FileFilter::All);
        prompt.handle_key(key(Key::Tab));
        assert_eq!(prompt.filter(), FileFilter::Text);
    }

    #[test]
    fn save_prompt_ignores_tab() {
        let mut prompt = PathPrompt::new(PromptKind::SaveAs);
        prompt.handle_key(key(Key::Tab));
        assert_eq!(prompt.filter(), FileFilter::Text);
    }

    #[test]
    fn filter_matches_txt_case_insensitively() {
        assert!(FileFilter::Text.matches(Path::new("a.txt")));
        assert!(FileFilter::Text.matches(Path::new("a.TXT")));
        assert!(!FileFilter::Text.matches(Path::new("a.md")));
        assert!(!FileFilter::Text.matches(Path::new("noext")));
        assert!(FileFilter::All.matches(Path::new("noext")));
    }

    #[test]
    fn matching_entries_respects_filter() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join("b.md")).unwrap();
        File::create(dir.path().join("c.txt")).unwrap();

        let text = matching_entries(dir.path(), FileFilter::Text).unwrap();
        let names: Vec<_> = text
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "c.txt"]);

        let all = matching_entries(dir.path(), FileFilter::All).unwrap();
        assert_eq!(all.len(), 3);
    }
}
