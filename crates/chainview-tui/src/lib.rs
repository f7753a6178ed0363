//! Full-screen dashboard for chainview.
//!
//! Elm-style split: `state` holds the model, `update` is the pure reducer,
//! `render` draws, and `runtime` owns the terminal, the event-bus
//! subscription, and effect execution.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use anyhow::Result;
use chainview_core::{Config, EventBus};
use chainview_types::BlockSummary;
pub use features::{blocks, chart, statusline};
pub use runtime::DashboardRuntime;
use tokio_util::sync::CancellationToken;

/// Runs the dashboard until the user quits.
///
/// `seed` is the initial page of blocks (newest first); the table needs at
/// least one row before live updates are accepted. `feed_done` is cancelled
/// by the caller when the block feed has no more blocks to deliver.
pub fn run_dashboard(
    config: &Config,
    bus: EventBus,
    seed: Vec<BlockSummary>,
    feed_done: CancellationToken,
) -> Result<()> {
    terminal::install_panic_hook();
    let mut runtime = DashboardRuntime::new(config, bus, seed, feed_done)?;
    runtime.run()
}
