//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chainview_core::{Config, EventBus};
use clap::Parser;
use tokio_util::sync::CancellationToken;

use crate::{feeds, logging};

#[derive(Parser)]
#[command(name = "chainview")]
#[command(version = "0.1")]
#[command(about = "Terminal blockchain explorer dashboard")]
struct Cli {
    /// Path to the config file (default: $CHAINVIEW_HOME/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rows kept in the block table (1-200)
    #[arg(long, value_name = "ROWS")]
    page_size: Option<usize>,

    /// Replay blocks from a JSON-lines file instead of simulating a chain
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Interval between feed blocks, in milliseconds
    #[arg(long, value_name = "MS")]
    block_interval_ms: Option<u64>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(interval) = cli.block_interval_ms {
        config.feed.block_interval_ms = interval;
    }
    if let Some(replay) = cli.replay {
        config.feed.replay_path = Some(replay);
    }
    let config = config.normalized();

    let _log_guard = logging::init(&config)?;
    tracing::info!(page_size = config.page_size, "starting dashboard");

    let bus = EventBus::new();
    let feed_done = CancellationToken::new();
    let shutdown = CancellationToken::new();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start feed runtime")?;
    let seed = feeds::spawn(
        &runtime,
        &config,
        bus.clone(),
        feed_done.clone(),
        shutdown.clone(),
    )?;

    let result = chainview_tui::run_dashboard(&config, bus, seed, feed_done);

    // Stop the feed before tearing the runtime down.
    shutdown.cancel();
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    result
}
