use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::model::LogConfig;

pub const LOG_FILE: &str = "focuslock.log";

/// Build the level filter. `RUST_LOG` only wins when `debug` is set, so a
/// stray variable in the environment cannot flood the output.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    if config.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new(&config.level)
    }
}

/// Log to focuslock.log in `dir`. The TUI owns the terminal and CLI
/// output is meant for scripts, so nothing goes to stderr.
/// Keep the returned guard alive until exit so buffered lines flush.
pub fn init(config: &LogConfig, dir: &Path) -> Option<WorkerGuard> {
    if std::fs::create_dir_all(dir).is_err() {
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
