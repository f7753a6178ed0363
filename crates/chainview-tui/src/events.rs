//! UI event types.
//!
//! Events carry the instant they were observed so the reducer stays
//! deterministic; the runtime stamps them with `Utc::now()`.

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use chainview_types::BlockSummary;

/// Everything that can happen to the dashboard.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic timer; drives the relative-age refresher.
    Tick { now: DateTime<Utc> },
    /// A key press from the terminal.
    Key(KeyEvent),
    /// A block notification forwarded from the event bus.
    Block {
        block: BlockSummary,
        now: DateTime<Utc>,
    },
    /// The block feed has no more blocks to deliver.
    FeedClosed,
}
