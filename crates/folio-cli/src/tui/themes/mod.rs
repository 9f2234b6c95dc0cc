//! Theme system for the folio TUI
//!
//! A handful of palettes; `blossom` is the default and mirrors the site's
//! original colors (soft pink background, white landing label).

use once_cell::sync::Lazy;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    /// Canvas and page background
    pub bg: Color,
    /// Card background
    pub surface: Color,
    pub border: Color,
    pub title: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    /// Landing label ink
    pub label: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

/// All built-in themes, default first
pub static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            name: "blossom",
            bg: Color::Rgb(255, 234, 242),
            surface: Color::Rgb(255, 245, 249),
            border: Color::Rgb(243, 205, 223),
            title: Color::Rgb(59, 43, 66),
            text: Color::Rgb(59, 43, 66),
            text_muted: Color::Rgb(146, 117, 135),
            accent: Color::Rgb(219, 39, 119),
            label: Color::Rgb(255, 255, 255),
            selection_bg: Color::Rgb(249, 168, 212),
            selection_fg: Color::Rgb(59, 43, 66),
        },
        Theme {
            name: "midnight",
            bg: Color::Rgb(24, 20, 31),
            surface: Color::Rgb(35, 30, 44),
            border: Color::Rgb(62, 54, 76),
            title: Color::Rgb(240, 230, 246),
            text: Color::Rgb(222, 212, 230),
            text_muted: Color::Rgb(148, 138, 162),
            accent: Color::Rgb(244, 114, 182),
            label: Color::Rgb(255, 255, 255),
            selection_bg: Color::Rgb(88, 48, 77),
            selection_fg: Color::Rgb(244, 230, 240),
        },
        // inherits whatever the terminal's own palette does
        Theme {
            name: "terminal",
            bg: Color::Reset,
            surface: Color::Reset,
            border: Color::DarkGray,
            title: Color::White,
            text: Color::Reset,
            text_muted: Color::Gray,
            accent: Color::Magenta,
            label: Color::White,
            selection_bg: Color::Magenta,
            selection_fg: Color::Black,
        },
    ]
});

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Look up a theme by name, case-insensitively
pub fn by_name(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
