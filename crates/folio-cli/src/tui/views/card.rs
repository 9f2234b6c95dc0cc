//! Feed card - collapsed summary row, expandable detail for experience
//!
//! Projects navigate to their own page (the card shows an arrow);
//! experience entries expand inline with bullets, tech tags, and links.

use folio_core::content::{Entry, EntryKind};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::{bulleted, tech_chips, wrapped};

/// Build the card's lines for the given width. `selected` draws the accent
/// gutter; `expanded` is only meaningful for experience cards.
pub fn card_lines(
    entry: &Entry,
    width: usize,
    selected: bool,
    expanded: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(2);
    let mut lines = Vec::new();

    let title_style = if selected {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
    };
    let muted = Style::default().fg(theme.text_muted);
    let chip = Style::default().fg(theme.selection_fg).bg(theme.selection_bg);

    let marker = match entry.kind {
        EntryKind::Project => " →",
        EntryKind::Experience => {
            if expanded {
                " ▾"
            } else {
                " ▸"
            }
        }
    };
    lines.push(Line::from(vec![
        Span::styled(entry.title.to_string(), title_style),
        Span::styled(marker, muted),
    ]));

    let byline = match entry.org {
        Some(org) => format!("{} · {}", org, entry.period),
        None => entry.period.to_string(),
    };
    lines.push(Line::from(Span::styled(byline, muted)));

    lines.extend(wrapped(entry.summary, inner, muted));

    match entry.kind {
        EntryKind::Project => {
            // collapsed preview: first three tags, like the site's cards
            if !entry.tech.is_empty() {
                let shown = &entry.tech[..entry.tech.len().min(3)];
                let mut line = tech_chips(shown, chip);
                if entry.tech.len() > 3 {
                    line.push_span(Span::styled(
                        format!(" +{} more", entry.tech.len() - 3),
                        muted,
                    ));
                }
                lines.push(line);
            }
        }
        EntryKind::Experience if expanded => {
            lines.push(Line::default());
            for bullet in entry.bullets {
                lines.extend(bulleted(
                    bullet,
                    inner,
                    Style::default().fg(theme.accent),
                    Style::default().fg(theme.text),
                ));
            }
            if !entry.tech.is_empty() {
                lines.push(Line::default());
                lines.push(tech_chips(entry.tech, chip));
            }
            if let Some(link) = entry.links.primary() {
                lines.push(Line::from(Span::styled(
                    format!("o open {link}"),
                    Style::default().fg(theme.accent),
                )));
            }
        }
        EntryKind::Experience => {}
    }

    // accent gutter down the card's left edge
    let gutter_style = if selected {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::styled("▌ ", gutter_style)];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes;
    use folio_core::content::{experience, projects};

    fn theme() -> &'static Theme {
        themes::default_theme()
    }

    #[test]
    fn test_project_card_shows_arrow_and_tag_preview() {
        let entry = &projects::ENTRIES[0];
        let lines = card_lines(entry, 80, false, false, theme());
        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect();
        assert!(flat.contains('→'));
        assert!(flat.contains(" TypeScript "));
    }

    #[test]
    fn test_experience_card_expands_with_bullets() {
        let entry = &experience::ENTRIES[0];
        let collapsed = card_lines(entry, 80, false, false, theme());
        let expanded = card_lines(entry, 80, false, true, theme());
        assert!(expanded.len() > collapsed.len());

        let flat: String = expanded
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect();
        assert!(flat.contains('•'));
        assert!(flat.contains('▾'));
    }

    #[test]
    fn test_tag_chips_use_selection_colors() {
        let entry = &projects::ENTRIES[0];
        let lines = card_lines(entry, 80, false, false, theme());
        let chip = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content == " TypeScript ")
            .unwrap();
        assert_eq!(chip.style.fg, Some(theme().selection_fg));
        assert_eq!(chip.style.bg, Some(theme().selection_bg));
    }

    #[test]
    fn test_selection_changes_gutter() {
        let entry = &projects::ENTRIES[0];
        let plain = card_lines(entry, 80, false, false, theme());
        let selected = card_lines(entry, 80, true, false, theme());
        assert_ne!(plain[0].spans[0].style, selected[0].spans[0].style);
    }
}
