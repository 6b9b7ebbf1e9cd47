//! Terminal UI for Neon Tic-Tac-Toe

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod frontend;
mod input;
mod ui;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_cli(&cli);

    // Log to a file so the output stays out of the UI.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(?config, "Starting Neon Tic-Tac-Toe");

    enable_raw_mode().context("Enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(&config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Draws, then waits briefly for input so the delayed banner can appear.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut cells = Vec::new();
        terminal
            .draw(|frame| cells = ui::draw(frame, &app, Instant::now()))
            .context("Drawing frame")?;
        app.set_cell_areas(cells);

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(action) = input::map_key(key, app.dialog_open()) {
                    debug!(?action, "Key action");
                    app.handle(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
