//! Block summary records as delivered by the notification stream.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One blockchain block as displayed in a list.
///
/// Immutable once received. `height` is strictly an ordering key; the table
/// never displays two rows with the same height.
///
/// Beyond the fixed fields, a block carries an open set of extra named
/// fields (transaction counts, vote counts, and whatever else the feed
/// includes) addressable by a column tag via [`BlockSummary::field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Block height (chain position, newest = highest).
    pub height: u64,
    /// Block timestamp, seconds since the Unix epoch.
    pub unix_stamp: i64,
    /// Serialized block size in bytes.
    pub size: u64,
    /// Total amount sent in the block, in the chain's base unit.
    pub total_sent: f64,
    /// Extra named fields, addressable by column tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl BlockSummary {
    pub fn new(height: u64, unix_stamp: i64, size: u64, total_sent: f64) -> Self {
        Self {
            height,
            unix_stamp,
            size,
            total_sent,
            extra: BTreeMap::new(),
        }
    }

    /// Adds an extra named field (builder style).
    #[must_use]
    pub fn with_field(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(tag.into(), value.into());
        self
    }

    /// Resolves a column tag against this block's fields.
    ///
    /// Fixed fields are stringified as-is; anything else is looked up in
    /// `extra`. Returns `None` for tags the block does not carry.
    pub fn field(&self, tag: &str) -> Option<String> {
        match tag {
            "height" => Some(self.height.to_string()),
            "unix_stamp" => Some(self.unix_stamp.to_string()),
            "size" => Some(self.size.to_string()),
            "total_sent" => Some(self.total_sent.to_string()),
            _ => self.extra.get(tag).cloned(),
        }
    }
}
