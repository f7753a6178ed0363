//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use super::state::StatusState;

/// Draws the one-line status bar into `area`.
pub fn render_status_line(state: &StatusState, frame: &mut Frame, area: Rect) {
    let style = if state.feed_closed {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(state.summary()).style(style), area);
}
