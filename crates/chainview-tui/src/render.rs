//! Pure view/render functions for the dashboard.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::state::AppState;
use crate::{blocks, chart, statusline};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Height of the block-size chart pane.
const CHART_HEIGHT: u16 = 10;

/// Renders the entire dashboard to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(CHART_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    blocks::render_table(&app.blocks, frame, areas[0]);
    chart::render_size_chart(&app.chart, frame, areas[1]);
    statusline::render_status_line(&app.status, frame, areas[2]);
}
