//! Application logging
//!
//! Logs go to stderr through `tracing-subscriber`; stdout is reserved for
//! the run summary. With `--log-file` a copy is appended to a dated file in
//! the user's config directory.

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const APP_DIR: &str = "x11-font-importer";

/// Get the path to the importer's config directory
fn config_dir() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
    config_dir.join(APP_DIR)
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// File name of today's log
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    format!("{APP_DIR}-{timestamp}.log")
}

/// Default filter for a `-v` count
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "x11_font_importer=info",
        1 => "x11_font_importer=debug",
        _ => "x11_font_importer=trace",
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the verbosity. Keep the returned guard
/// alive for the whole run or buffered file logs are lost.
pub fn init(verbosity: u8, log_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(filter());

    if !log_file {
        tracing_subscriber::registry().with(stderr_layer).try_init()?;
        return Ok(None);
    }

    let dir = logs_dir();
    fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, current_log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(filter());

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!("Logging to {}", dir.join(current_log_file_name()).display());
    Ok(Some(guard))
}
