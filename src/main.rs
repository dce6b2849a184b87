//! ticketpick - pick a JIRA issue from the terminal.
//!
//! Fetches one page of issues for a JQL query, narrows it with search text and
//! field filters, and opens the selected issue or copies a branch name for it.

mod actions;
mod api;
mod app;
mod cli;
mod commands;
mod config;
mod error;
mod events;
mod logging;
mod session;
mod tasks;
mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use crate::actions::SystemSideEffects;
use crate::api::JiraClient;
use crate::app::App;
use crate::cli::Cli;
use crate::config::{Config, Credentials};
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::create_task_channel;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Credentials are checked before anything touches the terminal.
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let result = run(cli, credentials).await;
    logging::shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Exiting with error");
            eprintln!("Error: {:#}", e);
            if let Some(dir) = logging::log_directory() {
                eprintln!("Logs: {}", dir.display());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, credentials: Credentials) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(AppError::from)
    .context("loading configuration")?;

    let mut settings = config.settings;
    cli.apply_to(&mut settings);
    settings
        .validate()
        .map_err(AppError::from)
        .context("validating settings")?;

    let client = JiraClient::new(&settings.base_url, &credentials, settings.request_timeout())
        .map_err(AppError::from)?;
    info!(base_url = %client.base_url(), "Client ready");

    if let Some(command) = &cli.command {
        let lines = commands::run(command, &client)
            .await
            .map_err(|e| anyhow::anyhow!(AppError::from(e).user_message()))?;
        for line in lines {
            println!("{}", line);
        }
        return Ok(());
    }

    let app = App::new(settings, cli.filters(), Box::new(SystemSideEffects::new()));
    run_tui(app, &client)
}

/// Restore the terminal even if the UI panics.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal_mode() {
            eprintln!("Failed to restore terminal during panic: {}", e);
        }
        original_hook(panic_info);
    }));
}

fn setup_terminal() -> anyhow::Result<Tui> {
    terminal::enable_raw_mode().map_err(|e| AppError::terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::terminal(e.to_string()))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal_mode() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn run_tui(mut app: App, client: &JiraClient) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (mut rx, spawner) = create_task_channel();
    app.start(&spawner, client);

    let events = EventHandler::new();
    let result = event_loop(&mut terminal, &mut app, &mut rx, &events);

    restore_terminal_mode()?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<tasks::ApiMessage>,
    events: &EventHandler,
) -> anyhow::Result<()> {
    loop {
        // Apply finished background work before drawing.
        while let Ok(message) = rx.try_recv() {
            app.handle_message(message);
        }

        terminal.draw(|frame| app.view(frame))?;

        let event = events.next()?;
        app.update(event);

        if app.should_quit() {
            info!("Leaving event loop");
            return Ok(());
        }
    }
}
