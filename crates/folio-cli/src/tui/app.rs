//! Application state - views, key dispatch, and the intro handoff
//!
//! The intro sequencer signals completion over a channel; the app owns the
//! switch to the feed. Quitting mid-intro simply drops the sequencer,
//! which guarantees the completion callback never fires after teardown.

use std::sync::mpsc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tracing::{info, warn};

use crate::config::Config;
use crate::tui::intro::{IntroCanvas, IntroSequencer};
use crate::tui::themes::{self, Theme};
use crate::tui::views::blog::{blog_lines, BlogState};
use crate::tui::views::feed::{feed_lines, sidebar_lines, FeedAction, FeedState};
use crate::tui::views::projects::{projects_lines, ProjectsState};
use crate::tui::views::{about, blog_post, project_detail};

/// Sidebar appears at this width and wider
const TWO_COLUMN_MIN: u16 = 100;
const SIDEBAR_WIDTH: u16 = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Intro,
    Feed,
    About,
    Projects,
    ProjectDetail { slug: &'static str },
    Blog,
    BlogPost { slug: &'static str },
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    theme: &'static Theme,
    intro: Option<IntroSequencer>,
    intro_done: mpsc::Receiver<()>,
    feed: FeedState,
    projects: ProjectsState,
    blog: BlogState,
    /// Scroll offset for About / detail / post pages
    page_scroll: u16,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = themes::by_name(&config.theme).unwrap_or_else(themes::default_theme);
        let (tx, rx) = mpsc::channel();

        let (view, intro) = if config.skip_intro {
            (View::Feed, None)
        } else {
            let seq = IntroSequencer::new(config.reduced_motion, move || {
                let _ = tx.send(());
            });
            (View::Intro, Some(seq))
        };

        Self {
            view,
            should_quit: false,
            theme,
            intro,
            intro_done: rx,
            feed: FeedState::default(),
            projects: ProjectsState::default(),
            blog: BlogState::default(),
            page_scroll: 0,
        }
    }

    /// Process the completion signal; called once per tick
    pub fn on_tick(&mut self) {
        if self.intro_done.try_recv().is_ok() && self.view == View::Intro {
            info!("intro complete, showing feed");
            self.view = View::Feed;
            self.intro = None;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.view {
            View::Intro => {
                // Enter, Esc, or space skips straight to the feed; dropping
                // the sequencer means the completion callback never fires
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.view = View::Feed;
                    self.intro = None;
                }
            }
            View::Feed => self.on_feed_key(key),
            View::About => self.on_page_key(key, View::Feed),
            View::Projects => self.on_projects_key(key),
            View::ProjectDetail { slug } => {
                if key.code == KeyCode::Char('o') {
                    if let Ok((entry, _)) = folio_core::content::project(slug) {
                        if let Some(link) = entry.links.primary() {
                            open_link(link);
                        }
                    }
                    return;
                }
                self.on_page_key(key, View::Projects);
            }
            View::Blog => self.on_blog_key(key),
            View::BlogPost { .. } => self.on_page_key(key, View::Blog),
        }
    }

    fn on_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.feed.next(),
            KeyCode::Up | KeyCode::Char('k') => self.feed.prev(),
            KeyCode::Tab => self.feed.toggle_section(),
            KeyCode::Enter => match self.feed.activate() {
                FeedAction::OpenProject(slug) => self.goto(View::ProjectDetail { slug }),
                FeedAction::OpenLink(link) => open_link(link),
                FeedAction::None => {}
            },
            KeyCode::Char('o') => {
                if let FeedAction::OpenLink(link) = self.feed.open_link() {
                    open_link(link);
                }
            }
            KeyCode::Char('a') => self.goto(View::About),
            KeyCode::Char('p') => self.goto(View::Projects),
            KeyCode::Char('b') => self.goto(View::Blog),
            _ => {}
        }
    }

    fn on_projects_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.projects.next(),
            KeyCode::Up | KeyCode::Char('k') => self.projects.prev(),
            KeyCode::Enter => self.goto(View::ProjectDetail {
                slug: self.projects.selected_slug(),
            }),
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => self.goto(View::Feed),
            _ => {}
        }
    }

    fn on_blog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.blog.next(),
            KeyCode::Up | KeyCode::Char('k') => self.blog.prev(),
            KeyCode::Enter => self.goto(View::BlogPost {
                slug: self.blog.selected_slug(),
            }),
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => self.goto(View::Feed),
            _ => {}
        }
    }

    /// Scrollable static pages: j/k scroll, Esc/h goes back
    fn on_page_key(&mut self, key: KeyEvent, back: View) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.page_scroll = self.page_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.page_scroll = self.page_scroll.saturating_sub(1);
            }
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => self.goto(back),
            _ => {}
        }
    }

    fn goto(&mut self, view: View) {
        self.page_scroll = 0;
        self.view = view;
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, now: Instant) {
        let area = frame.area();
        frame.render_widget(Block::new().style(Style::default().bg(self.theme.bg)), area);

        if self.view == View::Intro {
            if let Some(seq) = self.intro.as_mut() {
                frame.render_stateful_widget(IntroCanvas::new(self.theme, now), area, seq);
            }
            return;
        }

        let (body, footer) = split_footer(area);
        match self.view {
            View::Intro => unreachable!("handled above"),
            View::Feed => self.render_feed(frame, body),
            View::About => {
                let lines = about::about_lines(text_width(body), self.theme);
                self.render_page(frame, body, lines);
            }
            View::Projects => {
                let (lines, selected_at) =
                    projects_lines(&self.projects, text_width(body), self.theme);
                self.projects.scroll =
                    scroll_into_view(self.projects.scroll, selected_at, body.height);
                let scroll = self.projects.scroll;
                self.render_scrolled(frame, body, lines, scroll);
            }
            View::ProjectDetail { slug } => {
                let lines = project_detail::detail_lines(slug, text_width(body), self.theme);
                self.render_page(frame, body, lines);
            }
            View::Blog => {
                let (lines, selected_at) = blog_lines(&self.blog, text_width(body), self.theme);
                self.blog.scroll = scroll_into_view(self.blog.scroll, selected_at, body.height);
                let scroll = self.blog.scroll;
                self.render_scrolled(frame, body, lines, scroll);
            }
            View::BlogPost { slug } => {
                let lines = blog_post::post_lines(slug, text_width(body), self.theme);
                self.render_page(frame, body, lines);
            }
        }
        self.render_footer(frame, footer);
    }

    fn render_feed(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let body = if area.width >= TWO_COLUMN_MIN {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(area);
            let sidebar = sidebar_lines(usize::from(SIDEBAR_WIDTH) - 4, self.theme);
            frame.render_widget(
                Paragraph::new(sidebar).block(Block::new().style(Style::default().bg(self.theme.bg))),
                pad(columns[0]),
            );
            columns[1]
        } else {
            area
        };

        let (lines, selected_at) = feed_lines(&self.feed, text_width(body), self.theme);
        self.feed.scroll = scroll_into_view(self.feed.scroll, selected_at, body.height);
        let scroll = self.feed.scroll;
        self.render_scrolled(frame, body, lines, scroll);
    }

    /// Free-scrolling page, offset clamped to the document length
    fn render_page(&mut self, frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
        let max = (lines.len() as u16).saturating_sub(area.height);
        self.page_scroll = self.page_scroll.min(max);
        let scroll = self.page_scroll;
        self.render_scrolled(frame, area, lines, scroll);
    }

    fn render_scrolled(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        lines: Vec<Line<'static>>,
        scroll: u16,
    ) {
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(self.theme.bg))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, pad(area));
    }

    fn render_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        let hints = match self.view {
            View::Intro => "",
            View::Feed => " j/k move · Enter open · Tab section · o link · a/p/b pages · q quit",
            View::Projects | View::Blog => " j/k move · Enter open · Esc back · q quit",
            _ => " j/k scroll · Esc back · o link · q quit",
        };
        let footer = Paragraph::new(hints).style(
            Style::default()
                .fg(self.theme.text_muted)
                .bg(self.theme.surface),
        );
        frame.render_widget(footer, area);
    }
}

fn open_link(link: &str) {
    info!(link, "opening in browser");
    if let Err(err) = open::that_detached(link) {
        warn!(%err, link, "failed to open link");
    }
}

fn split_footer(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (rows[0], rows[1])
}

fn pad(area: Rect) -> Rect {
    area.inner(ratatui::layout::Margin {
        horizontal: 2,
        vertical: 1,
    })
}

fn text_width(area: Rect) -> usize {
    usize::from(area.width.saturating_sub(6)).max(20)
}

/// Keep the selected row visible, with a small look-ahead margin
fn scroll_into_view(scroll: u16, selected_at: usize, viewport: u16) -> u16 {
    let selected = selected_at as u16;
    let margin = 3u16;
    if selected < scroll {
        selected
    } else if viewport > margin && selected >= scroll + viewport - margin {
        selected + margin - viewport + 1
    } else {
        scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn config(skip_intro: bool, reduced_motion: bool) -> Config {
        Config {
            theme: "blossom".into(),
            reduced_motion,
            skip_intro,
        }
    }

    #[test]
    fn test_skip_intro_starts_on_feed() {
        let app = App::new(&config(true, false));
        assert_eq!(app.view, View::Feed);
    }

    #[test]
    fn test_intro_completion_swaps_view_once() {
        let mut app = App::new(&config(false, true));
        assert_eq!(app.view, View::Intro);

        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let t0 = Instant::now();

        terminal.draw(|f| app.render(f, t0)).unwrap();
        app.on_tick();
        assert_eq!(app.view, View::Intro, "100ms delay not yet elapsed");

        terminal
            .draw(|f| app.render(f, t0 + Duration::from_millis(150)))
            .unwrap();
        app.on_tick();
        assert_eq!(app.view, View::Feed);
        assert!(app.intro.is_none());
    }

    #[test]
    fn test_quit_mid_intro_never_completes() {
        let mut app = App::new(&config(false, false));
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
        // the sequencer is dropped with the app; the channel stays silent
        drop(app.intro.take());
        assert!(app.intro_done.try_recv().is_err());
    }

    #[test]
    fn test_enter_skips_intro_without_callback() {
        let mut app = App::new(&config(false, false));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.view, View::Feed);
        assert!(app.intro.is_none());
        assert!(app.intro_done.try_recv().is_err());
    }

    #[test]
    fn test_feed_navigation_and_detail() {
        let mut app = App::new(&config(true, false));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(
            app.view,
            View::ProjectDetail {
                slug: "spotify-mcp"
            }
        );
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.view, View::Projects);
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.view, View::Feed);
    }

    #[test]
    fn test_page_keys_reach_blog_post() {
        let mut app = App::new(&config(true, false));
        app.on_key(key(KeyCode::Char('b')));
        assert_eq!(app.view, View::Blog);
        app.on_key(key(KeyCode::Char('j')));
        app.on_key(key(KeyCode::Enter));
        assert!(matches!(app.view, View::BlogPost { .. }));
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.view, View::Blog);
    }

    #[test]
    fn test_resize_mid_intro_keeps_clock() {
        let mut app = App::new(&config(false, false));
        let t0 = Instant::now();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.render(f, t0)).unwrap();

        // simulate a resize by drawing at a different size
        let mut small = Terminal::new(TestBackend::new(60, 16)).unwrap();
        small
            .draw(|f| app.render(f, t0 + Duration::from_millis(1000)))
            .unwrap();

        // back to full width at 3s: completion arrives on schedule
        terminal
            .draw(|f| app.render(f, t0 + Duration::from_millis(3000)))
            .unwrap();
        app.on_tick();
        assert_eq!(app.view, View::Feed);
    }

    #[test]
    fn test_scroll_into_view_bounds() {
        assert_eq!(scroll_into_view(10, 4, 20), 4);
        assert_eq!(scroll_into_view(0, 5, 20), 0);
        assert_eq!(scroll_into_view(0, 30, 20), 14);
    }
}
