//! Project detail page - long-form sections behind a project card

use folio_core::content;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::{tech_chips, wrapped};

/// Render the detail page for a project slug. Unknown slugs (impossible via
/// the UI, but the type allows it) render a short notice instead.
pub fn detail_lines(slug: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);
    let text = Style::default().fg(theme.text);
    let accent = Style::default().fg(theme.accent);
    let chip = Style::default().fg(theme.selection_fg).bg(theme.selection_bg);

    let (entry, detail) = match content::project(slug) {
        Ok(found) => found,
        Err(err) => {
            tracing::warn!(%err, "project detail lookup failed");
            return vec![Line::from(Span::styled(
                format!("No such project: {slug}"),
                muted,
            ))];
        }
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(entry.title.to_string(), title),
        Span::styled(format!("  {}", detail.status), muted),
    ])];
    lines.push(Line::from(Span::styled(entry.period.to_string(), muted)));
    for award in detail.awards {
        lines.push(Line::from(Span::styled(format!("★ {award}"), accent)));
    }
    lines.push(Line::default());
    lines.extend(wrapped(entry.summary, width, text));
    lines.push(Line::default());

    for (heading, body) in detail.sections {
        if !heading.is_empty() {
            lines.push(Line::from(Span::styled(heading.to_string(), title)));
        }
        lines.extend(wrapped(body, width, muted));
        lines.push(Line::default());
    }

    if !entry.tech.is_empty() {
        lines.push(tech_chips(entry.tech, chip));
    }
    if let Some(link) = entry.links.primary() {
        lines.push(Line::from(Span::styled(format!("o open {link}"), accent)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes;

    fn flat(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect()
    }

    #[test]
    fn test_detail_includes_sections_and_status() {
        let lines = detail_lines("spotify-mcp", 80, themes::default_theme());
        let text = flat(&lines);
        assert!(text.contains("In Progress"));
        assert!(text.contains("The Challenge"));
        assert!(text.contains("o open "));
    }

    #[test]
    fn test_unknown_slug_renders_notice() {
        let lines = detail_lines("missing", 80, themes::default_theme());
        assert!(flat(&lines).contains("No such project"));
    }
}
