//! Column descriptions for the block table.
//!
//! A column's kind decides how a [`crate::BlockSummary`] field is projected
//! into cell text. Kinds are a closed enum so adding a column type is a
//! compile-time-checked change rather than a stringly-typed dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a block field is projected into a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Relative time since the block's timestamp; kept current by a
    /// periodic refresher.
    Age,
    /// The block height, rendered as a link to the block's detail target.
    Height,
    /// Byte count, humanized.
    Size,
    /// Total-sent amount, three significant figures.
    Value,
    /// Generic passthrough: the block field with this tag, stringified as-is.
    #[serde(untagged)]
    Field(String),
}

impl ColumnKind {
    /// Parses a wire tag (`age`, `height`, `size`, `value`, or any other
    /// field name) into a kind.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "age" => Self::Age,
            "height" => Self::Height,
            "size" => Self::Size,
            "value" => Self::Value,
            other => Self::Field(other.to_string()),
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Age => f.write_str("age"),
            Self::Height => f.write_str("height"),
            Self::Size => f.write_str("size"),
            Self::Value => f.write_str("value"),
            Self::Field(tag) => f.write_str(tag),
        }
    }
}

/// One column of the block table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    /// Header title shown above the column.
    pub title: String,
    /// Preferred rendered width in terminal cells.
    pub width: u16,
}

impl ColumnSpec {
    pub fn new(kind: ColumnKind, title: impl Into<String>, width: u16) -> Self {
        Self {
            kind,
            title: title.into(),
            width,
        }
    }
}

/// Ordered column layout for the block table, supplied once at mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub columns: Vec<ColumnSpec>,
}

impl ColumnLayout {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// The default explorer layout: height, age, txs, size, value.
    pub fn standard() -> Self {
        Self::new(vec![
            ColumnSpec::new(ColumnKind::Height, "Height", 10),
            ColumnSpec::new(ColumnKind::Age, "Age", 12),
            ColumnSpec::new(ColumnKind::Field("txs".to_string()), "Txs", 6),
            ColumnSpec::new(ColumnKind::Size, "Size", 12),
            ColumnSpec::new(ColumnKind::Value, "Sent", 14),
        ])
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
