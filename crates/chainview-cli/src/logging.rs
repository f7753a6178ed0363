//! Log initialization.
//!
//! The dashboard owns the terminal, so logs go to a daily-rolling file under
//! the chainview home instead of stderr. Filtering comes from the
//! `CHAINVIEW_LOG` environment variable, falling back to the config value.

use anyhow::{Context, Result};
use chainview_core::Config;
use chainview_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// The returned guard must be kept alive for the life of the process;
/// dropping it flushes and stops the background log writer.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let filter = EnvFilter::try_from_env("CHAINVIEW_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let appender = tracing_appender::rolling::daily(&logs_dir, "chainview.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
