//! Logging configuration using tracing
//!
//! stdout belongs to the TUI, so logs go to a daily rolling file instead.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HENU_LOG";

const LOG_FILE_PREFIX: &str = "henu.log";

/// Initialize the logging subsystem
///
/// Logs are written to the platform data directory, e.g.
/// `~/.local/share/henu/logs/`. Log level is controlled by `HENU_LOG`.
///
/// # Examples
/// ```bash
/// HENU_LOG=debug henu --route /ide
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    // Default to info for this crate, allow override via HENU_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("henu=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("HENU PS starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// Directory the rolling log files live in.
pub fn log_directory() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "henu")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("logs"))
}
