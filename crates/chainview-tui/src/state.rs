//! Dashboard state composition.
//!
//! `AppState` combines the feature slices:
//! - `blocks`: the live block table (sliding window over the chain tip)
//! - `chart`: recent block sizes
//! - `status`: counters and feed status

use chainview_core::Config;
use chainview_types::{BlockSummary, ColumnLayout};
use chrono::{DateTime, Utc};

use crate::blocks::BlockTableState;
use crate::chart::SizeChartState;
use crate::statusline::StatusState;

/// Link style class applied to seeded rows; replacement rows inherit it
/// from the row they replace.
const DEFAULT_LINK_CLASS: &str = "primary";

/// Combined dashboard state.
pub struct AppState {
    pub blocks: BlockTableState,
    pub chart: SizeChartState,
    pub status: StatusState,
}

impl AppState {
    /// Builds the initial state from config and a seed page of blocks.
    pub fn new(config: &Config, seed: Vec<BlockSummary>, now: DateTime<Utc>) -> Self {
        let mut blocks = BlockTableState::new(
            ColumnLayout::standard(),
            config.page_size,
            DEFAULT_LINK_CLASS,
        );
        let mut chart = SizeChartState::new(config.chart_points);
        let mut oldest_first: Vec<&BlockSummary> = seed.iter().collect();
        oldest_first.sort_by_key(|block| block.height);
        for block in oldest_first {
            chart.record(block.height, block.size);
        }
        blocks.seed(seed, now);

        let status = StatusState {
            tip_height: blocks.tip_height(),
            rows: blocks.rows().len(),
            ..StatusState::default()
        };
        Self {
            blocks,
            chart,
            status,
        }
    }
}
