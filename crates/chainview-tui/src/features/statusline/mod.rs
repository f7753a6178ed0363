//! Status line: tip height, window size, feed counters.

mod render;
mod state;

pub use render::render_status_line;
pub use state::StatusState;
