//! About page - bio, skills by category, values, contact

use folio_core::content::about::{PROFILE, SKILLS, VALUES};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::{tech_chips, wrapped};

pub fn about_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);
    let text = Style::default().fg(theme.text);
    let chip = Style::default().fg(theme.selection_fg).bg(theme.selection_bg);

    let mut lines = vec![
        Line::from(Span::styled("About Me", title)),
        Line::from(Span::styled("#1 Computer Science fan!!", muted)),
        Line::default(),
        Line::from(Span::styled("Bio", title)),
    ];
    for paragraph in PROFILE.bio {
        lines.extend(wrapped(paragraph, width, text));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Skills", title)));
    for (category, skills) in SKILLS {
        lines.push(Line::from(Span::styled(*category, text)));
        lines.push(tech_chips(skills, chip));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Values", title)));
    for (name, description) in VALUES {
        lines.push(Line::from(Span::styled(
            *name,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrapped(description, width, muted));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Let's Work Together", title)));
    lines.extend(wrapped(
        "I'm always open to discussing new opportunities, collaborations, or just having a chat about technology. Whoever you are, feel free to reach out !!!",
        width,
        muted,
    ));
    lines.push(Line::from(Span::styled(
        PROFILE.email,
        Style::default().fg(theme.accent),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes;

    #[test]
    fn test_about_covers_every_skill_category() {
        let lines = about_lines(80, themes::default_theme());
        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect();
        for (category, _) in SKILLS {
            assert!(flat.contains(category), "missing {category}");
        }
        assert!(flat.contains(PROFILE.email));
    }
}
