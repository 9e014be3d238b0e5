// ABOUTME: Main entry point for the Evol Jewels kiosk
//
// Binary: evol-kiosk
// Usage: evol-kiosk [COMMAND]
// - No command: runs the kiosk full screen
// - assets: report which screen images load

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::*};
use std::io::{self, IsTerminal};

use evol_kiosk::app::{App, AppEvent, EventHandler};
use evol_kiosk::assets::CellSize;
use evol_kiosk::cli::{self, Cli, Commands};
use evol_kiosk::components::{LayoutComponent, MIN_SCREEN};
use evol_kiosk::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = args.resolve_config()?;

    setup_logging(&config)?;
    setup_panic_handler();

    let result = match args.command {
        Some(Commands::Assets) => cli::assets::execute(&config),
        Some(Commands::Kiosk) | None => run_kiosk(&config),
    };

    if let Err(e) = &result {
        tracing::error!("Kiosk stopped with error: {:#}", e);
        cleanup_terminal();
    }

    result
}

fn run_kiosk(config: &AppConfig) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. The kiosk needs a terminal to draw on.\n\
             Run it directly on the kiosk display instead of redirecting output."
        ));
    }

    // Measured once; the kiosk display has a fixed resolution
    let (cols, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let screen = CellSize::new(cols, rows);
    if !screen.covers(MIN_SCREEN) {
        tracing::error!(
            "Screen {}x{} is below the {}x{} minimum",
            cols,
            rows,
            MIN_SCREEN.cols,
            MIN_SCREEN.rows
        );
        return Err(anyhow::anyhow!(
            "The kiosk needs a screen of at least {}x{} cells, found {}x{}",
            MIN_SCREEN.cols,
            MIN_SCREEN.rows,
            cols,
            rows
        ));
    }
    let mut app = App::new(config, screen);
    let layout = LayoutComponent::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut app, &layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

/// One event at a time: every transition finishes before the next tap is read
fn run_event_loop(
    app: &mut App,
    layout: &LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    while !app.state.should_quit {
        terminal.draw(|frame| {
            layout.render(frame, &app.state.scene);
        })?;

        match event::read()? {
            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    EventHandler::process_event(
                        AppEvent::MouseClick {
                            x: mouse_event.column,
                            y: mouse_event.row,
                        },
                        &mut app.state,
                    );
                }
            }
            Event::Key(key_event) => {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
            // Resolution is fixed at startup
            Event::Resize(_, _) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
    }

    tracing::info!("Kiosk exiting");
    Ok(())
}

fn setup_logging(config: &AppConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = config.resolved_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // JSONL log file with timestamp; the terminal itself belongs to the UI
    let log_file = log_dir.join(format!(
        "evol-kiosk-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Kiosk panicked: {}", panic_info);
        eprintln!("Kiosk panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
