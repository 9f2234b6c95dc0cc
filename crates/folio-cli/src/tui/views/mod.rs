//! View renderers - every page builds a line document that the app scrolls
//!
//! Each view produces `Vec<Line<'static>>` for the current width; the app
//! owns scroll offsets and selection state and paints the lines through a
//! Paragraph. Keeping views as pure line builders makes them trivially
//! testable without a terminal.

pub mod about;
pub mod blog;
pub mod blog_post;
pub mod card;
pub mod feed;
pub mod project_detail;
pub mod projects;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Wrap a paragraph to `width` columns, one styled Line per visual row
pub fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(10))
        .into_iter()
        .map(|row| Line::from(Span::styled(row.into_owned(), style)))
        .collect()
}

/// Wrap a bullet with a hanging indent under its marker
pub fn bulleted(text: &str, width: usize, marker_style: Style, style: Style) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(2).max(10);
    textwrap::wrap(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let lead = if i == 0 { "• " } else { "  " };
            Line::from(vec![
                Span::styled(lead, marker_style),
                Span::styled(row.into_owned(), style),
            ])
        })
        .collect()
}

/// Tech tags as one line of pill-ish chips
pub fn tech_chips(tech: &[&'static str], chip_style: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(tech.len() * 2);
    for (i, t) in tech.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {t} "), chip_style));
    }
    Line::from(spans)
}
