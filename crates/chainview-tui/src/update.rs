//! Dashboard reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::blocks::RowUpdate;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { now } => {
            app.blocks.refresh_ages(now);
            vec![]
        }
        UiEvent::Key(key) => handle_key(key),
        UiEvent::Block { block, now } => {
            let outcome = app.blocks.on_block_received(&block, now);
            match outcome {
                RowUpdate::Advanced | RowUpdate::ReplacedTip => {
                    app.chart.record(block.height, block.size);
                    app.status.accepted += 1;
                    tracing::debug!(height = block.height, ?outcome, "block applied");
                }
                RowUpdate::OutOfSequence { tip, got } => {
                    app.status.rejected += 1;
                    tracing::debug!(tip, got, "out-of-sequence block rejected");
                }
                RowUpdate::Ignored => {
                    tracing::debug!(height = block.height, "block ignored: empty table");
                }
            }
            app.status.tip_height = app.blocks.tip_height();
            app.status.rows = app.blocks.rows().len();
            vec![]
        }
        UiEvent::FeedClosed => {
            app.status.feed_closed = true;
            vec![]
        }
    }
}

fn handle_key(key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use chainview_core::Config;
    use chainview_types::BlockSummary;
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(NOW, 0).unwrap()
    }

    fn block(height: u64) -> BlockSummary {
        BlockSummary::new(height, NOW - 30, 2048, 5.0)
    }

    fn app(heights: &[u64]) -> AppState {
        let config = Config {
            page_size: 3,
            ..Config::default()
        };
        AppState::new(&config, heights.iter().map(|&h| block(h)).collect(), now())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn quit_keys() {
        let mut state = app(&[100]);
        assert_eq!(update(&mut state, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
        assert_eq!(update(&mut state, key(KeyCode::Esc)), vec![UiEffect::Quit]);
        let ctrl_c = UiEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(update(&mut state, ctrl_c), vec![UiEffect::Quit]);
        assert!(update(&mut state, key(KeyCode::Char('x'))).is_empty());
    }

    #[test]
    fn accepted_block_updates_all_slices() {
        let mut state = app(&[100, 99, 98]);
        update(
            &mut state,
            UiEvent::Block {
                block: block(101),
                now: now(),
            },
        );
        assert_eq!(state.blocks.heights(), vec![101, 100, 99]);
        assert_eq!(state.status.accepted, 1);
        assert_eq!(state.status.tip_height, Some(101));
        assert_eq!(state.chart.points().last(), Some((101, 2048)));
    }

    #[test]
    fn rejected_block_only_bumps_counter() {
        let mut state = app(&[100, 99, 98]);
        let chart_len = state.chart.len();
        update(
            &mut state,
            UiEvent::Block {
                block: block(105),
                now: now(),
            },
        );
        assert_eq!(state.blocks.heights(), vec![100, 99, 98]);
        assert_eq!(state.status.rejected, 1);
        assert_eq!(state.status.accepted, 0);
        assert_eq!(state.chart.len(), chart_len);
    }

    #[test]
    fn tick_refreshes_ages() {
        let mut state = app(&[100]);
        let later = Utc.timestamp_opt(NOW + 7200, 0).unwrap();
        update(&mut state, UiEvent::Tick { now: later });
        let age = state.blocks.rows()[0]
            .cells
            .iter()
            .find_map(|cell| match &cell.content {
                crate::blocks::CellContent::Age { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(age, "2 hr");
    }

    #[test]
    fn feed_closed_flips_status() {
        let mut state = app(&[100]);
        update(&mut state, UiEvent::FeedClosed);
        assert!(state.status.feed_closed);
    }
}
