//! Terminal shell around the session.
//!
//! This is the only module that touches the screen or the raw keyboard. It
//! owns the event loop: translate a terminal key event, give it to whichever
//! focus target is active, collect modal outcomes, and redraw. All editing
//! behavior lives in [`Session`]; nothing here is worth unit testing beyond
//! the key translation and the caret placement math.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use plainpad_input::{Key, KeyEvent, Modifiers};

use crate::command::Command;
use crate::find_target::{FindOutcome, FindTarget};
use crate::focus::FocusTarget;
use crate::font_dialog::{FontDialog, FontDialogOutcome};
use crate::gutter::GUTTER_WIDTH;
use crate::menu::{MenuBar, MenuEntry, MenuOutcome, MenuState};
use crate::path_prompt::{self, PathPrompt, PromptKind, PromptOutcome};
use crate::report::{Report, Severity};
use crate::session::{Session, UiRequest};
use crate::shortcuts::ShortcutTable;
use crate::theme::{Rgb, FONT_SIZE, HIGHLIGHT_BG, HIGHLIGHT_FG};

/// Rows reserved outside the text area: menu bar above, status line below.
const CHROME_ROWS: u16 = 2;

/// Which component receives keys.
enum Focus {
    Buffer,
    Menu(MenuState),
    Find(FindTarget),
    Prompt(PathPrompt),
    Fonts(FontDialog),
}

/// Runs the editor until quit, restoring the terminal on the way out.
pub fn run(initial_file: Option<std::path::PathBuf>) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut stdout, initial_file);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(out: &mut impl Write, initial_file: Option<std::path::PathBuf>) -> io::Result<()> {
    let (_, rows) = terminal::size()?;
    let mut session = Session::new(text_rows(rows));
    if let Some(path) = initial_file {
        session.open_file(&path);
    }

    let shortcuts = ShortcutTable::standard();
    let mut focus = Focus::Buffer;
    let mut status: Option<Report> = None;

    loop {
        for report in session.take_reports() {
            status = Some(report);
        }
        draw(out, &session, &focus, status.as_ref())?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let Some(event) = translate_key(key.code, key.modifiers) else {
                    continue;
                };
                status = None;
                match &mut focus {
                    Focus::Buffer => {
                        if let Some(command) = shortcuts.resolve(&event) {
                            if let Some(request) = session.apply(command) {
                                focus = open_modal(request);
                            }
                        } else if event.key == Key::Escape {
                            focus = Focus::Menu(MenuState::new(MenuBar::standard()));
                        } else {
                            session.handle_buffer_key(event);
                        }
                    }
                    Focus::Menu(menu) => {
                        menu.handle_key(event);
                        match menu.take_outcome() {
                            Some(MenuOutcome::Closed) => focus = Focus::Buffer,
                            Some(MenuOutcome::Run(command)) => {
                                focus = match session.apply(command) {
                                    Some(request) => open_modal(request),
                                    None => Focus::Buffer,
                                };
                            }
                            None => {}
                        }
                    }
                    Focus::Find(find) => {
                        find.handle_key(event);
                        match find.take_outcome() {
                            Some(FindOutcome::Accepted) => {
                                let query = find.query();
                                session.run_search(&query);
                                focus = Focus::Buffer;
                            }
                            Some(FindOutcome::Cancelled) => focus = Focus::Buffer,
                            None => {}
                        }
                    }
                    Focus::Prompt(prompt) => {
                        let kind = prompt.kind();
                        prompt.handle_key(event);
                        match prompt.take_outcome() {
                            Some(PromptOutcome::Chosen(path)) => {
                                match kind {
                                    PromptKind::Open => session.open_file(&path),
                                    PromptKind::SaveAs => session.save_file_as(&path),
                                }
                                focus = Focus::Buffer;
                            }
                            Some(PromptOutcome::Cancelled) => focus = Focus::Buffer,
                            None => {}
                        }
                    }
                    Focus::Fonts(dialog) => {
                        dialog.handle_key(event);
                        match dialog.take_outcome() {
                            Some(FontDialogOutcome::Applied(font)) => {
                                session.apply(Command::ApplyFont(font));
                                focus = Focus::Buffer;
                            }
                            Some(FontDialogOutcome::Cancelled) => focus = Focus::Buffer,
                            None => {}
                        }
                    }
                }
            }
            Event::Resize(_, rows) => session.set_visible_lines(text_rows(rows)),
            _ => {}
        }

        if session.should_quit() {
            return Ok(());
        }
    }
}

fn open_modal(request: UiRequest) -> Focus {
    match request {
        UiRequest::OpenPrompt => Focus::Prompt(PathPrompt::new(PromptKind::Open)),
        UiRequest::SaveAsPrompt => Focus::Prompt(PathPrompt::new(PromptKind::SaveAs)),
        UiRequest::FindPrompt => Focus::Find(FindTarget::new()),
        UiRequest::FontDialog => Focus::Fonts(FontDialog::new()),
    }
}

fn text_rows(rows: u16) -> usize {
    rows.saturating_sub(CHROME_ROWS).max(1) as usize
}

fn translate_key(code: KeyCode, mods: KeyModifiers) -> Option<KeyEvent> {
    let key = match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Return,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(KeyEvent::new(
        key,
        Modifiers {
            shift: mods.contains(KeyModifiers::SHIFT),
            control: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        },
    ))
}

// ==================== Rendering ====================

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb;
    Color::Rgb { r, g, b }
}

fn draw(
    out: &mut impl Write,
    session: &Session,
    focus: &Focus,
    status: Option<&Report>,
) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let theme = session.theme();
    let base = Colors::new(color(theme.foreground()), color(theme.background()));

    queue!(
        out,
        cursor::Hide,
        cursor::MoveTo(0, 0),
        SetColors(base),
        Clear(ClearType::All)
    )?;
    draw_menu_bar(out, focus, cols)?;
    draw_text_area(out, session, rows)?;
    let input_caret = draw_status_line(out, session, focus, status, rows, cols)?;
    queue!(out, ResetColor)?;

    // Place the visible caret with whichever surface owns the insertion
    // point; menus and the font dialog have no caret.
    let caret = match focus {
        Focus::Buffer => buffer_caret(session, cols),
        Focus::Find(_) | Focus::Prompt(_) => {
            input_caret.map(|col| (col.min(cols.saturating_sub(1)), rows.saturating_sub(1)))
        }
        _ => None,
    };
    if let Some((x, y)) = caret {
        queue!(out, cursor::MoveTo(x, y), cursor::Show)?;
    }
    out.flush()
}

/// Screen cell for the insertion caret while the buffer has focus, or None
/// when the cursor's line is scrolled off screen.
fn buffer_caret(session: &Session, cols: u16) -> Option<(u16, u16)> {
    let cursor = session.buffer().cursor();
    let top = session.viewport().top_line();
    if cursor.line < top || cursor.line >= top + session.viewport().visible_lines() {
        return None;
    }
    let x = (GUTTER_WIDTH + cursor.col).min(cols.saturating_sub(1) as usize) as u16;
    let y = (cursor.line - top) as u16 + 1;
    Some((x, y))
}

fn draw_menu_bar(out: &mut impl Write, focus: &Focus, cols: u16) -> io::Result<()> {
    let bar = MenuBar::standard();
    let mut line = String::new();
    for (i, menu) in bar.menus.iter().enumerate() {
        let selected = matches!(focus, Focus::Menu(state) if state.menu_index() == i);
        if selected {
            line.push_str(&format!("[{}] ", menu.label));
        } else {
            line.push_str(&format!(" {}  ", menu.label));
        }
    }
    line.truncate(cols as usize);
    queue!(out, cursor::MoveTo(0, 0), Print(line))?;

    // Open menu: render its items inline under the bar.
    if let Focus::Menu(state) = focus {
        let menu = &state.bar().menus[state.menu_index()];
        let mut row = 1;
        for (i, item) in menu.items.iter().enumerate() {
            let marker = if i == state.item_index() { '>' } else { ' ' };
            queue!(
                out,
                cursor::MoveTo(2, row),
                Print(format!("{marker} {}", item.label))
            )?;
            row += 1;
            if i == state.item_index() {
                if let (MenuEntry::Submenu(items), Some(selected)) =
                    (&item.entry, state.submenu_index())
                {
                    for (j, sub) in items.iter().enumerate() {
                        let marker = if j == selected { '>' } else { ' ' };
                        queue!(
                            out,
                            cursor::MoveTo(6, row),
                            Print(format!("{marker} {}", sub.label))
                        )?;
                        row += 1;
                    }
                }
            }
        }
    }
    Ok(())
}

fn draw_text_area(out: &mut impl Write, session: &Session, rows: u16) -> io::Result<()> {
    let buffer = session.buffer();
    let theme = session.theme();
    let line_count = buffer.line_count();
    let gutter_colors = Colors::new(color(theme.foreground()), color(theme.gutter_background()));
    let text_colors = Colors::new(color(theme.foreground()), color(theme.background()));
    let highlight_colors = Colors::new(color(HIGHLIGHT_FG), color(HIGHLIGHT_BG));
    let selection = buffer
        .selection_range()
        .map(|(start, end)| (buffer.offset_at(start), buffer.offset_at(end)));

    let mut screen_row = 1u16;
    for line in session.viewport().visible_range(line_count) {
        if screen_row >= rows.saturating_sub(1) {
            break;
        }
        let label = match session.gutter().label_at(line) {
            Some(n) => format!("{n:>width$} ", width = GUTTER_WIDTH - 1),
            None => " ".repeat(GUTTER_WIDTH),
        };
        queue!(
            out,
            cursor::MoveTo(0, screen_row),
            SetColors(gutter_colors),
            Print(label),
            SetColors(text_colors)
        )?;

        let content = buffer.line_content(line);
        let line_start = buffer.offset_at(plainpad_buffer::Position::new(line, 0));
        let highlighted = |offset: usize| {
            session.highlights().iter().any(|span| span.contains(offset))
                || matches!(selection, Some((s, e)) if offset >= s && offset < e)
        };
        let mut in_highlight = false;
        for (col, ch) in content.chars().enumerate() {
            let hl = highlighted(line_start + col);
            if hl != in_highlight {
                queue!(
                    out,
                    SetColors(if hl { highlight_colors } else { text_colors })
                )?;
                in_highlight = hl;
            }
            queue!(out, Print(ch))?;
        }
        if in_highlight {
            queue!(out, SetColors(text_colors))?;
        }
        screen_row += 1;
    }
    Ok(())
}

/// Draws the bottom row. When an input strip is active, returns the column
/// its caret occupies so `draw` can park the terminal cursor there.
fn draw_status_line(
    out: &mut impl Write,
    session: &Session,
    focus: &Focus,
    status: Option<&Report>,
    rows: u16,
    cols: u16,
) -> io::Result<Option<u16>> {
    let row = rows.saturating_sub(1);
    let mut caret = None;
    let mut line = match focus {
        Focus::Find(find) => {
            let prefix = "Find: ";
            caret = Some((prefix.chars().count() + find.mini_buffer().cursor_col()) as u16);
            format!("{prefix}{}", find.mini_buffer().content())
        }
        Focus::Prompt(prompt) => {
            let verb = match prompt.kind() {
                PromptKind::Open => "Open",
                PromptKind::SaveAs => "Save as",
            };
            // Advisory listing of the working directory under the filter.
            let listing = match prompt.kind() {
                PromptKind::Open => std::env::current_dir()
                    .and_then(|dir| path_prompt::matching_entries(&dir, prompt.filter()))
                    .map(|entries| {
                        entries
                            .iter()
                            .filter_map(|p| p.file_name())
                            .map(|n| n.to_string_lossy().into_owned())
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .unwrap_or_default(),
                PromptKind::SaveAs => String::new(),
            };
            let prefix = format!("{verb} [{}]: ", prompt.filter().label());
            caret = Some((prefix.chars().count() + prompt.mini_buffer().cursor_col()) as u16);
            format!("{prefix}{}  {listing}", prompt.mini_buffer().content())
        }
        Focus::Fonts(dialog) => format!("Font: {}", dialog.selected().label()),
        _ => match status {
            Some(report) => {
                let prefix = match report.severity {
                    Severity::Info => "",
                    Severity::Error => "error: ",
                };
                format!("{prefix}{}", report.message)
            }
            None => format!(
                "{} | {} {FONT_SIZE} | {}",
                session.window_title(),
                session.font().label(),
                session.theme().label()
            ),
        },
    };
    line.truncate(cols as usize);
    queue!(
        out,
        cursor::MoveTo(0, row),
        Clear(ClearType::CurrentLine),
        Print(line)
    )?;
    Ok(caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_maps_printable_chars() {
        let event = translate_key(KeyCode::Char('s'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(event.key, Key::Char('s'));
        assert!(event.modifiers.control);
        assert!(!event.modifiers.shift);
    }

    #[test]
    fn translate_ignores_unmapped_keys() {
        assert!(translate_key(KeyCode::F(5), KeyModifiers::NONE).is_none());
    }

    #[test]
    fn text_rows_reserves_chrome() {
        assert_eq!(text_rows(24), 22);
        assert_eq!(text_rows(2), 1);
        assert_eq!(text_rows(0), 1);
    }

    #[test]
    fn caret_tracks_the_buffer_cursor() {
        let mut session = Session::new(10);
        session.handle_buffer_key(KeyEvent::char('a'));
        session.handle_buffer_key(KeyEvent::char('b'));
        session.handle_buffer_key(KeyEvent::new(Key::Return, Modifiers::default()));
        session.handle_buffer_key(KeyEvent::char('c'));
        // Line 1 col 1: one row below the menu bar, right of the gutter.
        assert_eq!(
            buffer_caret(&session, 80),
            Some((GUTTER_WIDTH as u16 + 1, 2))
        );
    }

    #[test]
    fn caret_hides_when_cursor_scrolls_off_screen() {
        let mut session = Session::new(3);
        for _ in 0..10 {
            session.handle_buffer_key(KeyEvent::new(Key::Return, Modifiers::default()));
        }
        assert!(buffer_caret(&session, 80).is_some());
        session.scroll_to_fraction(0.0);
        assert_eq!(buffer_caret(&session, 80), None);
    }
}
