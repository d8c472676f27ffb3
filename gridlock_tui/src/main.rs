//! Terminal UI for gridlock tic-tac-toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod mode;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::{App, AppEvent, AppSignal};
use config::TuiConfig;
use mode::Mode;
use theme::Theme;

/// Tic-tac-toe in the terminal: two-player or vs CPU, with undo, score
/// tallying, and themes.
#[derive(Debug, Parser)]
#[command(name = "gridlock", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opponent mode (overrides the config file).
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Color theme (overrides the config file).
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Delay before a scheduled CPU move fires, in milliseconds.
    #[arg(long)]
    cpu_delay_ms: Option<u64>,

    /// Write logs to this file instead of stderr, keeping the screen clean.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolves the effective configuration: file first, flags on top.
    fn resolve_config(&self) -> Result<TuiConfig> {
        let mut config = match &self.config {
            Some(path) => TuiConfig::load(path)?,
            None => TuiConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(delay) = self.cpu_delay_ms {
            config.cpu_delay_ms = delay;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
    }

    let config = cli.resolve_config()?;
    info!(?config, "Starting gridlock TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.mode, config.theme);
    let res = run_app(&mut terminal, app, Duration::from_millis(config.cpu_delay_ms)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {}", err);
    }

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    cpu_delay: Duration,
) -> Result<()> {
    // Scheduled CPU moves come back through this channel after their delay.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Deliver any due CPU timers.
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Poll for input with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.handle_key(key) {
                AppSignal::Quit => return Ok(()),
                AppSignal::ScheduleCpu { epoch } => {
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(cpu_delay).await;
                        let _ = tx.send(AppEvent::CpuDue { epoch });
                    });
                }
                AppSignal::Continue => {}
            }
        }
    }
}
