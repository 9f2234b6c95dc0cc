//! Blog index

use folio_core::content::blog::POSTS;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::wrapped;

#[derive(Debug, Default)]
pub struct BlogState {
    pub selected: usize,
    pub scroll: u16,
}

impl BlogState {
    pub fn next(&mut self) {
        if self.selected + 1 < POSTS.len() {
            self.selected += 1;
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_slug(&self) -> &'static str {
        POSTS[self.selected.min(POSTS.len() - 1)].slug
    }
}

pub fn blog_lines(state: &BlogState, width: usize, theme: &Theme) -> (Vec<Line<'static>>, usize) {
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);

    let mut lines = vec![
        Line::from(Span::styled("Blog", title)),
        Line::from(Span::styled(
            "Thoughts on software development, machine learning, and technology.",
            muted,
        )),
        Line::default(),
    ];
    let mut selected_at = 0;

    for (idx, post) in POSTS.iter().enumerate() {
        if idx == state.selected {
            selected_at = lines.len();
        }
        let name_style = if idx == state.selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            title
        };
        lines.push(Line::from(Span::styled(post.title.to_string(), name_style)));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", post.date, post.read_time),
            muted,
        )));
        lines.extend(wrapped(post.excerpt, width, muted));
        lines.push(Line::default());
    }

    (lines, selected_at)
}
