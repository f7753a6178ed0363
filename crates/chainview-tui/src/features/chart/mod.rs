//! Block-size bar chart over recent heights.

mod render;
mod state;

pub use render::render_size_chart;
pub use state::SizeChartState;
