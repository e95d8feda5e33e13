//! Display themes and font options.
//!
//! Two named themes and four font families, matching the editor's Options
//! menu exactly. Both are process-lifetime display preferences: applying
//! one never touches buffer content and nothing is persisted across runs.

/// Point size applied with every font family selection.
pub const FONT_SIZE: u16 = 12;

/// RGB color as the terminal backend consumes it.
pub type Rgb = (u8, u8, u8);

/// Background color for search highlight spans.
pub const HIGHLIGHT_BG: Rgb = (255, 255, 0);
/// Foreground color over a search highlight.
pub const HIGHLIGHT_FG: Rgb = (0, 0, 0);

/// The two-color display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// White background, black text. The menu calls this "White".
    #[default]
    White,
    /// Black background, white text.
    Dark,
}

impl Theme {
    /// Menu label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::White => "White",
            Theme::Dark => "Dark",
        }
    }

    pub fn background(self) -> Rgb {
        match self {
            Theme::White => (255, 255, 255),
            Theme::Dark => (0, 0, 0),
        }
    }

    pub fn foreground(self) -> Rgb {
        match self {
            Theme::White => (0, 0, 0),
            Theme::Dark => (255, 255, 255),
        }
    }

    /// Gutter background: the light gray strip next to the text area.
    pub fn gutter_background(self) -> Rgb {
        match self {
            Theme::White => (211, 211, 211),
            Theme::Dark => (40, 40, 40),
        }
    }
}

/// The fixed set of selectable font families.
///
/// "Veranda" is the literal option string this editor has always offered;
/// it stays misspelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    CourierNew,
    Veranda,
}

impl FontFamily {
    /// Every option, in dialog order. Arial is the dialog default.
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Veranda,
    ];

    /// The option string shown in the font dialog.
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Veranda => "Veranda",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_is_black_on_white_inverted() {
        assert_eq!(Theme::Dark.background(), (0, 0, 0));
        assert_eq!(Theme::Dark.foreground(), (255, 255, 255));
        assert_eq!(Theme::White.background(), (255, 255, 255));
        assert_eq!(Theme::White.foreground(), (0, 0, 0));
    }

    #[test]
    fn font_list_matches_dialog_options() {
        let labels: Vec<&str> = FontFamily::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["Arial", "Times New Roman", "Courier New", "Veranda"]
        );
        assert_eq!(FontFamily::default(), FontFamily::Arial);
    }

    #[test]
    fn theme_labels_match_menu() {
        assert_eq!(Theme::Dark.label(), "Dark");
        assert_eq!(Theme::White.label(), "White");
    }
}
