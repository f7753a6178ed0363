//! Plain data types shared across chainview crates.

pub mod block;
pub mod columns;

pub use block::BlockSummary;
pub use columns::{ColumnKind, ColumnLayout, ColumnSpec};
