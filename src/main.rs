// ABOUTME: Main entry point for the Flashcards TUI application

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    Terminal,
};
use std::{
    io,
    path::Path,
    time::Duration,
};

use flashcards::app::{App, EventHandler};
use flashcards::components::LayoutComponent;
use flashcards::config::{AppConfig, Cli};
use flashcards::storage::FileStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli).context("Failed to load configuration")?;

    setup_logging(&config.log_dir);
    setup_panic_handler();

    let store = FileStore::new(&config.data_dir)
        .with_context(|| format!("Cannot open data directory {:?}", config.data_dir))?;
    tracing::info!("Using deck storage at {:?}", store.path());

    let mut app = App::new(Box::new(store)).with_sidebar_key(config.sidebar_key);
    let mut layout = LayoutComponent::new();

    run_tui(&mut app, &mut layout, config.mouse)?;

    Ok(())
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent, mouse: bool) -> Result<()> {
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if crossterm::event::poll(tick_rate)? {
            let app_event = match event::read()? {
                Event::Key(key_event) => EventHandler::handle_key_event(key_event, &app.state),
                Event::Mouse(mouse_event) => {
                    EventHandler::handle_mouse_event(mouse_event, &app.state, layout.hit_map())
                }
                Event::Paste(text) => EventHandler::handle_paste(text, &app.state),
                Event::Resize(_, _) | Event::FocusGained | Event::FocusLost => None,
            };

            if let Some(app_event) = app_event {
                EventHandler::process_event(app_event, &mut app.state);
            }
        }

        if app.state.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn setup_logging(log_dir: &Path) {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    if std::fs::create_dir_all(log_dir).is_err() {
        return;
    }

    // Create log file with timestamp
    let log_file = log_dir.join(format!(
        "flashcards-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // The terminal belongs to the UI, so logging is skipped when the file cannot be opened
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false) // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashcards=info".into())
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableBracketedPaste,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
