//! Declarative menu bar.
//!
//! The menu surface is data: File{New, Open, Save, Save as},
//! Edit{Find, Word Count}, Options{Options..., Themes{Dark, White}}.
//! Items map straight to [`Command`]s; the frontend renders the bar and
//! drives [`MenuState`], a modal cursor over it. Nothing in here mutates
//! the session — activation emits one command for central dispatch.

use plainpad_input::{Key, KeyEvent};

use crate::command::Command;
use crate::focus::{FocusTarget, Handled};
use crate::theme::Theme;

/// One selectable row in a menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    pub entry: MenuEntry,
}

/// What a menu row does when activated.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Command(Command),
    Submenu(Vec<MenuItem>),
}

impl MenuItem {
    fn command(label: &'static str, command: Command) -> Self {
        Self {
            label,
            entry: MenuEntry::Command(command),
        }
    }

    fn submenu(label: &'static str, items: Vec<MenuItem>) -> Self {
        Self {
            label,
            entry: MenuEntry::Submenu(items),
        }
    }
}

/// A top-level menu.
#[derive(Debug, Clone)]
pub struct Menu {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

/// The whole menu bar.
#[derive(Debug, Clone)]
pub struct MenuBar {
    pub menus: Vec<Menu>,
}

impl MenuBar {
    /// The editor's menu surface.
    pub fn standard() -> Self {
        Self {
            menus: vec![
                Menu {
                    label: "File",
                    items: vec![
                        MenuItem::command("New", Command::New),
                        MenuItem::command("Open", Command::Open),
                        MenuItem::command("Save", Command::Save),
                        MenuItem::command("Save as", Command::SaveAs),
                    ],
                },
                Menu {
                    label: "Edit",
                    items: vec![
                        MenuItem::command("Find", Command::Find),
                        MenuItem::command("Word Count", Command::WordCount),
                    ],
                },
                Menu {
                    label: "Options",
                    items: vec![
                        MenuItem::command("Options...", Command::FontOptions),
                        MenuItem::submenu(
                            "Themes",
                            vec![
                                MenuItem::command("Dark", Command::ApplyTheme(Theme::Dark)),
                                MenuItem::command("White", Command::ApplyTheme(Theme::White)),
                            ],
                        ),
                    ],
                },
            ],
        }
    }
}

/// How an open menu resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Escape at the top level: close with no effect.
    Closed,
    /// An item was activated.
    Run(Command),
}

/// Modal cursor over the menu bar while it has focus.
#[derive(Debug)]
pub struct MenuState {
    bar: MenuBar,
    menu: usize,
    item: usize,
    /// Selected row within an open submenu, if one is open.
    submenu_item: Option<usize>,
    pending_outcome: Option<MenuOutcome>,
}

impl MenuState {
    pub fn new(bar: MenuBar) -> Self {
        Self {
            bar,
            menu: 0,
            item: 0,
            submenu_item: None,
            pending_outcome: None,
        }
    }

    pub fn bar(&self) -> &MenuBar {
        &self.bar
    }

    pub fn menu_index(&self) -> usize {
        self.menu
    }

    pub fn item_index(&self) -> usize {
        self.item
    }

    pub fn submenu_index(&self) -> Option<usize> {
        self.submenu_item
    }

    /// Takes and clears the pending outcome.
    pub fn take_outcome(&mut self) -> Option<MenuOutcome> {
        self.pending_outcome.take()
    }

    fn current_menu(&self) -> &Menu {
        &self.bar.menus[self.menu]
    }

    fn current_item(&self) -> &MenuItem {
        &self.current_menu().items[self.item]
    }

    fn activate(&mut self) {
        match (&self.current_item().entry, self.submenu_item) {
            (MenuEntry::Command(command), _) => {
                self.pending_outcome = Some(MenuOutcome::Run(*command));
            }
            (MenuEntry::Submenu(items), Some(row)) => {
                if let MenuEntry::Command(command) = items[row].entry {
                    self.pending_outcome = Some(MenuOutcome::Run(command));
                }
            }
            (MenuEntry::Submenu(_), None) => {
                self.submenu_item = Some(0);
            }
        }
    }
}

impl FocusTarget for MenuState {
    fn handle_key(&mut self, event: KeyEvent) -> Handled {
        match event.key {
            Key::Left => {
                self.menu = self.menu.checked_sub(1).unwrap_or(self.bar.menus.len() - 1);
                self.item = 0;
                self.submenu_item = None;
            }
            Key::Right => {
                self.menu = (self.menu + 1) % self.bar.menus.len();
                self.item = 0;
                self.submenu_item = None;
            }
            Key::Up => {
                let in_submenu = matches!(self.current_item().entry, MenuEntry::Submenu(_));
                match (in_submenu, &mut self.submenu_item) {
                    (true, Some(row)) => *row = row.saturating_sub(1),
                    _ => self.item = self.item.saturating_sub(1),
                }
            }
            Key::Down => match (&self.current_item().entry, self.submenu_item) {
                (MenuEntry::Submenu(items), Some(row)) => {
                    self.submenu_item = Some((row + 1).min(items.len() - 1));
                }
                _ => {
                    self.item = (self.item + 1).min(self.current_menu().items.len() - 1);
                }
            },
            Key::Return => self.activate(),
            Key::Escape => {
                if self.submenu_item.is_some() {
                    self.submenu_item = None;
                } else {
                    self.pending_outcome = Some(MenuOutcome::Closed);
                }
            }
            _ => {}
        }
        Handled::Yes
    }
}
