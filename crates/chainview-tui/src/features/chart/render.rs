//! Size chart rendering: maps samples through the plot geometry onto a
//! ratatui canvas.

use chainview_core::chart::{self, Axes, SeriesPoint};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::canvas::{Canvas, Rectangle};
use ratatui::widgets::{Block, Borders};

use super::state::SizeChartState;

/// Draws the block-size bar chart into `area`.
pub fn render_size_chart(state: &SizeChartState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Block sizes ");
    if state.len() < 2 {
        frame.render_widget(block, area);
        return;
    }

    let width = f64::from(area.width.saturating_sub(2));
    let height = f64::from(area.height.saturating_sub(2));

    // Pad the series half a height-bin on each side so edge bars are not
    // clipped against the plot border.
    let mut series: Vec<SeriesPoint> = state
        .points()
        .map(|(h, size)| SeriesPoint::new(h as f64, vec![size as f64]))
        .collect();
    chart::pad_points(&mut series, 1.0, false);

    let y_max = state.points().map(|(_, size)| size).max().unwrap_or(1) as f64;
    let axes = Axes {
        x_min: series.first().map_or(0.0, |p| p.x),
        x_max: series.last().map_or(1.0, |p| p.x),
        y_min: 0.0,
        y_max,
        width,
        height,
    };

    let canvas_points: Vec<(f64, f64)> = state
        .points()
        .map(|(h, size)| (axes.x_to_canvas(h as f64), axes.y_to_canvas(size as f64)))
        .collect();
    let xs: Vec<f64> = canvas_points.iter().map(|&(x, _)| x).collect();
    let bar_width = chart::fit_width(&xs).max(1.0);
    let y_bottom = axes.y_to_canvas(0.0);
    let bars = chart::plot_bars(&canvas_points, bar_width, y_bottom);

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for bar in &bars {
                // Plot geometry is y-down; the canvas is y-up.
                ctx.draw(&Rectangle {
                    x: bar.x,
                    y: height - (bar.y + bar.height),
                    width: bar.width,
                    height: bar.height,
                    color: Color::Cyan,
                });
            }
        });
    frame.render_widget(canvas, area);
}
