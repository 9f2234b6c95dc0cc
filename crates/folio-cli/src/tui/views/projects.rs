//! Projects index - featured work first, then the rest

use folio_core::content::{projects, Entry, ProjectDetail};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::wrapped;

#[derive(Debug, Default)]
pub struct ProjectsState {
    pub selected: usize,
    pub scroll: u16,
}

impl ProjectsState {
    /// Featured projects first, preserving table order within each group
    pub fn ordered() -> Vec<(&'static Entry, &'static ProjectDetail)> {
        let mut all: Vec<_> = projects::ENTRIES
            .iter()
            .filter_map(|e| projects::DETAILS.iter().find(|d| d.slug == e.slug).map(|d| (e, d)))
            .collect();
        all.sort_by_key(|(_, d)| !d.featured);
        all
    }

    pub fn next(&mut self) {
        if self.selected + 1 < Self::ordered().len() {
            self.selected += 1;
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_slug(&self) -> &'static str {
        Self::ordered()[self.selected.min(Self::ordered().len() - 1)].0.slug
    }
}

/// Build the index document; returns the selected row's first line index
pub fn projects_lines(
    state: &ProjectsState,
    width: usize,
    theme: &Theme,
) -> (Vec<Line<'static>>, usize) {
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);
    let accent = Style::default().fg(theme.accent);

    let mut lines = vec![
        Line::from(Span::styled("All Projects", title)),
        Line::default(),
    ];
    let mut selected_at = 0;
    let mut seen_other = false;

    for (idx, (entry, detail)) in ProjectsState::ordered().into_iter().enumerate() {
        if !detail.featured && !seen_other {
            seen_other = true;
            lines.push(Line::from(Span::styled("Other", title)));
            lines.push(Line::default());
        }
        if idx == state.selected {
            selected_at = lines.len();
        }

        let name_style = if idx == state.selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            title
        };
        let mut head = vec![Span::styled(entry.title.to_string(), name_style)];
        head.push(Span::styled(format!("  {}", detail.status), muted));
        lines.push(Line::from(head));
        lines.push(Line::from(Span::styled(entry.period.to_string(), muted)));
        for award in detail.awards {
            lines.push(Line::from(Span::styled(format!("★ {award}"), accent)));
        }
        lines.extend(wrapped(entry.summary, width, muted));
        lines.push(Line::default());
    }

    (lines, selected_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes;

    #[test]
    fn test_featured_sort_is_stable() {
        let ordered = ProjectsState::ordered();
        assert_eq!(ordered.len(), projects::ENTRIES.len());
        // the single non-featured project lands last
        assert_eq!(ordered.last().unwrap().0.slug, "payroll-software");
        assert!(ordered[..ordered.len() - 1].iter().all(|(_, d)| d.featured));
    }

    #[test]
    fn test_selected_slug_follows_navigation() {
        let mut state = ProjectsState::default();
        let first = state.selected_slug();
        state.next();
        assert_ne!(state.selected_slug(), first);
        state.prev();
        assert_eq!(state.selected_slug(), first);
    }

    #[test]
    fn test_awards_render() {
        let state = ProjectsState::default();
        let (lines, _) = projects_lines(&state, 80, themes::default_theme());
        let flat: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone())
            .collect();
        assert!(flat.contains("Best UI/UX - Technova 2024"));
    }
}
