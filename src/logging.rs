//! Logging configuration using the tracing ecosystem.
//!
//! Output goes to a rotating file, never to the terminal the UI draws on.
//! A failure here is reported once on stderr and the program runs without logs.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "ticketpick=info,warn";

/// Initialize the logging system.
///
/// Logs go to a daily-rotated file under the platform data directory
/// (`~/.local/share/ticketpick/logs/` on Linux) so the terminal UI is never
/// written over. `RUST_LOG` overrides the default filter, e.g.
/// `RUST_LOG=ticketpick=debug`.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// until the program exits.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created, or
/// if a global subscriber is already installed.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ticketpick.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ticketpick starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(guard)
}

/// Get the log directory path.
///
/// Returns the platform-specific local data directory with `ticketpick/logs` appended.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("ticketpick").join("logs"))
}

/// Get the path where logs are stored, for the `--help` footer and startup
/// diagnostics.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log application shutdown.
///
/// Call this before the application exits to log a clean shutdown message.
pub fn shutdown() {
    tracing::info!("ticketpick shutting down");
}
