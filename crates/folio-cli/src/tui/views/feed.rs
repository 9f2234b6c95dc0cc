//! Main feed - profile sidebar plus the Projects and Experience sections

use std::collections::HashSet;

use folio_core::content::{about, experience, projects, Entry, EntryKind};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::{card::card_lines, wrapped};

/// What a key press on the feed asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    None,
    OpenProject(&'static str),
    OpenLink(&'static str),
}

/// Selection and expansion state for the feed
#[derive(Debug, Default)]
pub struct FeedState {
    pub selected: usize,
    pub expanded: HashSet<&'static str>,
    pub scroll: u16,
}

impl FeedState {
    pub fn entries() -> impl Iterator<Item = &'static Entry> {
        projects::ENTRIES.iter().chain(experience::ENTRIES)
    }

    pub fn len() -> usize {
        projects::ENTRIES.len() + experience::ENTRIES.len()
    }

    pub fn selected_entry(&self) -> &'static Entry {
        Self::entries()
            .nth(self.selected)
            .unwrap_or(&projects::ENTRIES[0])
    }

    pub fn next(&mut self) {
        if self.selected + 1 < Self::len() {
            self.selected += 1;
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the start of the other section
    pub fn toggle_section(&mut self) {
        if self.selected < projects::ENTRIES.len() {
            self.selected = projects::ENTRIES.len();
        } else {
            self.selected = 0;
        }
    }

    /// Enter on a card: projects navigate, experience expands inline
    pub fn activate(&mut self) -> FeedAction {
        let entry = self.selected_entry();
        match entry.kind {
            EntryKind::Project => FeedAction::OpenProject(entry.slug),
            EntryKind::Experience => {
                if !self.expanded.remove(entry.slug) {
                    self.expanded.insert(entry.slug);
                }
                FeedAction::None
            }
        }
    }

    pub fn open_link(&self) -> FeedAction {
        match self.selected_entry().links.primary() {
            Some(link) => FeedAction::OpenLink(link),
            None => FeedAction::None,
        }
    }
}

/// Section header line
fn header(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// The feed body as a flat line document. Also returns the first line index
/// of the selected card so the app can keep it scrolled into view.
pub fn feed_lines(state: &FeedState, width: usize, theme: &Theme) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut selected_at = 0;

    lines.push(header("Projects", theme));
    lines.push(Line::default());

    for (idx, entry) in FeedState::entries().enumerate() {
        if idx == projects::ENTRIES.len() {
            lines.push(header("Experience", theme));
            lines.push(Line::default());
        }
        if idx == state.selected {
            selected_at = lines.len();
        }
        let expanded = state.expanded.contains(entry.slug);
        lines.extend(card_lines(entry, width, idx == state.selected, expanded, theme));
        lines.push(Line::default());
    }

    (lines, selected_at)
}

/// Profile sidebar shown when the terminal is wide enough
pub fn sidebar_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let profile = &about::PROFILE;
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);
    let accent = Style::default().fg(theme.accent);

    let mut lines = vec![Line::from(Span::styled(profile.name, title))];
    lines.extend(wrapped(profile.tagline, width, muted));
    lines.push(Line::default());
    lines.extend(wrapped(profile.blurb, width, muted));
    lines.push(Line::default());

    for nav in ["a About", "p Projects", "b Blog", "q Quit"] {
        lines.push(Line::from(Span::styled(format!("→ {nav}"), accent)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Now", title)));
    lines.extend(wrapped(profile.now, width, muted));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(profile.email, accent)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes;

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut state = FeedState::default();
        state.prev();
        assert_eq!(state.selected, 0);
        for _ in 0..50 {
            state.next();
        }
        assert_eq!(state.selected, FeedState::len() - 1);
    }

    #[test]
    fn test_activate_project_navigates() {
        let mut state = FeedState::default();
        assert_eq!(
            state.activate(),
            FeedAction::OpenProject(projects::ENTRIES[0].slug)
        );
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn test_activate_experience_toggles() {
        let mut state = FeedState {
            selected: projects::ENTRIES.len(),
            ..Default::default()
        };
        let slug = state.selected_entry().slug;
        assert_eq!(state.activate(), FeedAction::None);
        assert!(state.expanded.contains(slug));
        state.activate();
        assert!(!state.expanded.contains(slug));
    }

    #[test]
    fn test_toggle_section_jumps() {
        let mut state = FeedState::default();
        state.toggle_section();
        assert_eq!(state.selected, projects::ENTRIES.len());
        state.toggle_section();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_feed_lines_tracks_selected_offset() {
        let state = FeedState::default();
        let theme = themes::default_theme();
        let (lines, at) = feed_lines(&state, 80, theme);
        assert!(!lines.is_empty());
        assert_eq!(at, 2, "first card sits right under the section header");

        let later = FeedState {
            selected: 3,
            ..Default::default()
        };
        let (_, at_later) = feed_lines(&later, 80, theme);
        assert!(at_later > at);
    }

    #[test]
    fn test_open_link_uses_primary() {
        let state = FeedState::default();
        assert_eq!(
            state.open_link(),
            FeedAction::OpenLink("https://github.com/albertred")
        );
        // experience entries have no links
        let exp = FeedState {
            selected: projects::ENTRIES.len(),
            ..Default::default()
        };
        assert_eq!(exp.open_link(), FeedAction::None);
    }
}
