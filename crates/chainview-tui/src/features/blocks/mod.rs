//! Live block table: a bounded, descending-height sliding window over the
//! chain tip, kept in sync with the block notification stream.

mod render;
mod state;

pub use render::render_table;
pub use state::{BlockRow, BlockTableState, CellContent, RowCell, RowUpdate};
