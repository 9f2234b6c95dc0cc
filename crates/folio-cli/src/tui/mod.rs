//! Terminal UI - setup/teardown and the event loop
//!
//! One task drives everything: a frame tick and the crossterm event stream
//! multiplexed with `select!`. The intro advances inside its render pass,
//! so a dropped loop (quit, error) also cancels the sequence and its
//! completion callback.

pub mod app;
pub mod intro;
pub mod themes;
pub mod views;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::config::Config;
use app::App;

/// Frame cadence; the intro wants ~60fps and the rest doesn't mind
const TICK: Duration = Duration::from_millis(16);

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode on the alternate screen. Fails when no
/// usable tty is attached; callers fall back to the plain-text portfolio.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
    Ok(terminal)
}

/// Undo `setup_terminal`; safe to call on any exit path
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
}

pub async fn run(mut terminal: Tui, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal
            .draw(|frame| app.render(frame, Instant::now()))
            .context("drawing frame")?;

        tokio::select! {
            _ = tick.tick() => {
                app.on_tick();
            }
            Some(event) = events.next() => {
                match event.context("reading terminal event")? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                    Event::Resize(w, h) => {
                        // the next draw picks up the new size; the intro's
                        // clock is wall-anchored and unaffected
                        debug!(w, h, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
