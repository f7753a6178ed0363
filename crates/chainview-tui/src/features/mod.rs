//! Dashboard feature slices: block table, size chart, status line.

pub mod blocks;
pub mod chart;
pub mod statusline;
