//! Blog post page

use folio_core::content;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::themes::Theme;

use super::wrapped;

pub fn post_lines(slug: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let title = Style::default().fg(theme.title).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.text_muted);
    let text = Style::default().fg(theme.text);

    let post = match content::post(slug) {
        Ok(post) => post,
        Err(err) => {
            tracing::warn!(%err, "blog post lookup failed");
            return vec![Line::from(Span::styled(
                format!("No such post: {slug}"),
                muted,
            ))];
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(post.title.to_string(), title)),
        Line::from(Span::styled(
            format!("{} · {}", post.date, post.read_time),
            muted,
        )),
        Line::default(),
    ];

    for (heading, body) in post.sections {
        lines.push(Line::from(Span::styled(heading.to_string(), title)));
        lines.extend(wrapped(body, width, text));
        lines.push(Line::default());
    }

    lines
}
