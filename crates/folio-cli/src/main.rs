//! folio - Michelle Lu's portfolio as a terminal app

mod config;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Michelle Lu's portfolio, in your terminal")]
struct Cli {
    /// Theme name (blossom, midnight, terminal)
    #[arg(long)]
    theme: Option<String>,

    /// Skip the landing animation via the reduced-motion path
    #[arg(long)]
    reduced_motion: bool,

    /// Start directly on the feed, no landing sequence at all
    #[arg(long)]
    no_intro: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the portfolio to stdout instead of running the TUI
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    if let Some(Command::Export { format }) = cli.command {
        let rendered = match format {
            ExportFormat::Text => folio_core::export::to_text(),
            ExportFormat::Json => {
                folio_core::export::to_json().context("serializing portfolio")?
            }
        };
        print!("{rendered}");
        return Ok(());
    }

    let mut config = Config::load();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.reduced_motion |= cli.reduced_motion;
    config.skip_intro |= cli.no_intro;

    let terminal = match tui::setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            // no usable tty: still show the content, just unanimated
            warn!(%err, "terminal setup failed, printing plain text");
            print!("{}", folio_core::export::to_text());
            return Ok(());
        }
    };

    // restore on every exit path, panics included
    let _guard = scopeguard::guard((), |_| tui::restore_terminal());

    info!(theme = %config.theme, reduced_motion = config.reduced_motion, "starting");
    tui::run(terminal, &config).await
}

/// Log to a file under the cache dir; the TUI owns stdout. RUST_LOG
/// controls the filter, defaulting to info.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("folio")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();
}
