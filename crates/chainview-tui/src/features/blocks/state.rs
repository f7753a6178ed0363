//! Block table state and the row replacement contract.
//!
//! The table is a fixed-capacity, most-recent-N view of the chain: rows are
//! held in strictly descending height order, newest first. Each accepted
//! notification removes exactly one row and inserts exactly one row; every
//! precondition failure is a silent no-op, on the premise that a stale row
//! beats a broken page.

use chainview_core::humanize;
use chainview_types::{BlockSummary, ColumnKind, ColumnLayout, ColumnSpec};
use chrono::{DateTime, Utc};

/// Outcome of one [`BlockTableState::on_block_received`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowUpdate {
    /// New chain tip: oldest row evicted, new row at the head.
    Advanced,
    /// Same height as the current head (re-org or duplicate delivery):
    /// the head row was rebuilt from the new payload.
    ReplacedTip,
    /// Height fits neither the head nor head + 1; table untouched.
    OutOfSequence { tip: u64, got: u64 },
    /// No rows to update (empty table).
    Ignored,
}

/// One cell's rendered content.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    /// A link cell: visible text plus the navigation target it encodes.
    Link { target: String, text: String },
    /// A relative-age cell; keeps the raw stamp so the periodic refresher
    /// can recompute the text.
    Age { stamp: i64, text: String },
}

impl CellContent {
    /// The visible text of the cell.
    pub fn text(&self) -> &str {
        match self {
            CellContent::Text(text)
            | CellContent::Link { text, .. }
            | CellContent::Age { text, .. } => text,
        }
    }
}

/// One cell of a block row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCell {
    pub spec: ColumnSpec,
    pub content: CellContent,
}

/// One table row, bound 1:1 to the block it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRow {
    /// Ordering/identity key.
    pub height: u64,
    /// Link style class, inherited from sibling rows.
    pub link_class: String,
    pub cells: Vec<RowCell>,
}

/// The live block table.
#[derive(Debug)]
pub struct BlockTableState {
    layout: ColumnLayout,
    page_size: usize,
    link_class: String,
    rows: Vec<BlockRow>,
}

impl BlockTableState {
    pub fn new(layout: ColumnLayout, page_size: usize, link_class: impl Into<String>) -> Self {
        Self {
            layout,
            page_size: page_size.max(1),
            link_class: link_class.into(),
            rows: Vec::new(),
        }
    }

    /// Fills the initial page from a snapshot. Blocks are sorted newest
    /// first and truncated to the page size; rows are built from the
    /// explicit column layout.
    pub fn seed(&mut self, mut blocks: Vec<BlockSummary>, now: DateTime<Utc>) {
        blocks.sort_by(|a, b| b.height.cmp(&a.height));
        blocks.dedup_by_key(|b| b.height);
        blocks.truncate(self.page_size);
        let specs = self.layout.columns.clone();
        let link_class = self.link_class.clone();
        self.rows = blocks
            .iter()
            .map(|block| build_row(block, &specs, &link_class, now))
            .collect();
    }

    /// Applies one block notification to the table.
    ///
    /// Accepts only a block at the current tip height (head replacement) or
    /// one past it (window advance); anything else is rejected without
    /// touching the table. The replacement row copies its column layout and
    /// link style from the row currently at the head, so formatting survives
    /// even if the mounted layout has since changed.
    pub fn on_block_received(&mut self, block: &BlockSummary, now: DateTime<Utc>) -> RowUpdate {
        let Some(head) = self.rows.first() else {
            return RowUpdate::Ignored;
        };
        let tip = head.height;
        let template = if block.height == tip {
            // Re-org or duplicate delivery: the head itself is replaced.
            self.rows.remove(0)
        } else if block.height == tip + 1 {
            // New chain tip: evict the oldest row to keep the window size.
            let template = head.clone();
            self.rows.pop();
            template
        } else {
            // Gaps and out-of-order blocks are never patched in.
            return RowUpdate::OutOfSequence {
                tip,
                got: block.height,
            };
        };

        let specs: Vec<ColumnSpec> = template.cells.iter().map(|cell| cell.spec.clone()).collect();
        let row = build_row(block, &specs, &template.link_class, now);
        self.rows.insert(0, row);

        if block.height == tip {
            RowUpdate::ReplacedTip
        } else {
            RowUpdate::Advanced
        }
    }

    /// Recomputes the text of every age cell against `now`.
    pub fn refresh_ages(&mut self, now: DateTime<Utc>) {
        for row in &mut self.rows {
            for cell in &mut row.cells {
                if let CellContent::Age { stamp, text } = &mut cell.content {
                    *text = humanize::time_since(*stamp, now);
                }
            }
        }
    }

    pub fn rows(&self) -> &[BlockRow] {
        &self.rows
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Height of the current head row, if any.
    pub fn tip_height(&self) -> Option<u64> {
        self.rows.first().map(|row| row.height)
    }

    /// Row heights, newest first. Test and status-line helper.
    pub fn heights(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.height).collect()
    }
}

/// Projects a block into a row, one cell per column spec.
fn build_row(
    block: &BlockSummary,
    specs: &[ColumnSpec],
    link_class: &str,
    now: DateTime<Utc>,
) -> BlockRow {
    let cells = specs
        .iter()
        .map(|spec| RowCell {
            spec: spec.clone(),
            content: render_cell(block, &spec.kind, now),
        })
        .collect();
    BlockRow {
        height: block.height,
        link_class: link_class.to_string(),
        cells,
    }
}

/// Computes one cell's content from its column kind.
fn render_cell(block: &BlockSummary, kind: &ColumnKind, now: DateTime<Utc>) -> CellContent {
    match kind {
        ColumnKind::Age => CellContent::Age {
            stamp: block.unix_stamp,
            text: humanize::time_since(block.unix_stamp, now),
        },
        ColumnKind::Height => CellContent::Link {
            target: format!("/block/{}", block.height),
            text: block.height.to_string(),
        },
        ColumnKind::Size => CellContent::Text(humanize::bytes(block.size)),
        ColumnKind::Value => CellContent::Text(humanize::three_sig_figs(block.total_sent)),
        ColumnKind::Field(tag) => CellContent::Text(block.field(tag).unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(NOW, 0).unwrap()
    }

    fn block(height: u64) -> BlockSummary {
        BlockSummary::new(height, NOW - 60 * (101 - height as i64), 2048, 12.5)
            .with_field("txs", "7")
    }

    fn seeded(heights: &[u64]) -> BlockTableState {
        let mut table = BlockTableState::new(ColumnLayout::standard(), 3, "primary");
        table.seed(heights.iter().map(|&h| block(h)).collect(), now());
        table
    }

    fn cell_text(table: &BlockTableState, row: usize, kind: &ColumnKind) -> String {
        table.rows()[row]
            .cells
            .iter()
            .find(|cell| &cell.spec.kind == kind)
            .map(|cell| cell.content.text().to_string())
            .unwrap()
    }

    #[test]
    fn new_tip_advances_window() {
        let mut table = seeded(&[100, 99, 98]);
        let update = table.on_block_received(&block(101), now());
        assert_eq!(update, RowUpdate::Advanced);
        assert_eq!(table.heights(), vec![101, 100, 99]);
    }

    #[test]
    fn accepted_update_preserves_count_and_order() {
        let mut table = seeded(&[100, 99, 98]);
        table.on_block_received(&block(101), now());
        let heights = table.heights();
        assert_eq!(heights.len(), 3);
        assert!(heights.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(table.tip_height(), Some(101));
    }

    #[test]
    fn duplicate_height_replaces_head_contents() {
        let mut table = seeded(&[100, 99, 98]);
        let mut replacement = block(100);
        replacement.size = 4096;
        let update = table.on_block_received(&replacement, now());
        assert_eq!(update, RowUpdate::ReplacedTip);
        assert_eq!(table.heights(), vec![100, 99, 98]);
        // The head row reflects the new payload, not the old one.
        assert_eq!(cell_text(&table, 0, &ColumnKind::Size), "4.00 kB");
    }

    #[test]
    fn gap_is_rejected_unchanged() {
        let mut table = seeded(&[100, 99, 98]);
        let before: Vec<BlockRow> = table.rows().to_vec();
        let update = table.on_block_received(&block(105), now());
        assert_eq!(update, RowUpdate::OutOfSequence { tip: 100, got: 105 });
        assert_eq!(table.rows(), &before[..]);
    }

    #[test]
    fn older_block_is_rejected() {
        let mut table = seeded(&[100, 99, 98]);
        let update = table.on_block_received(&block(99), now());
        assert_eq!(update, RowUpdate::OutOfSequence { tip: 100, got: 99 });
        assert_eq!(table.heights(), vec![100, 99, 98]);
    }

    #[test]
    fn empty_table_is_a_noop() {
        let mut table = BlockTableState::new(ColumnLayout::standard(), 3, "primary");
        let update = table.on_block_received(&block(101), now());
        assert_eq!(update, RowUpdate::Ignored);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn size_cell_is_humanized() {
        let table = seeded(&[100]);
        assert_eq!(cell_text(&table, 0, &ColumnKind::Size), "2.00 kB");
    }

    #[test]
    fn height_cell_is_a_link() {
        let mut table = seeded(&[100, 99, 98]);
        table.on_block_received(&block(101), now());
        let head = &table.rows()[0];
        let link = head
            .cells
            .iter()
            .find_map(|cell| match &cell.content {
                CellContent::Link { target, text } => Some((target.clone(), text.clone())),
                _ => None,
            })
            .unwrap();
        assert_eq!(link, ("/block/101".to_string(), "101".to_string()));
        assert_eq!(head.link_class, "primary");
    }

    #[test]
    fn generic_field_passes_through() {
        let table = seeded(&[100]);
        assert_eq!(
            cell_text(&table, 0, &ColumnKind::Field("txs".to_string())),
            "7"
        );
    }

    #[test]
    fn missing_generic_field_renders_empty() {
        let mut table = seeded(&[100, 99, 98]);
        let mut next = block(101);
        next.extra.clear();
        table.on_block_received(&next, now());
        assert_eq!(
            cell_text(&table, 0, &ColumnKind::Field("txs".to_string())),
            ""
        );
    }

    #[test]
    fn refresh_ages_recomputes_text() {
        let mut table = seeded(&[100]);
        let before = cell_text(&table, 0, &ColumnKind::Age);
        let later = Utc.timestamp_opt(NOW + 3600, 0).unwrap();
        table.refresh_ages(later);
        let after = cell_text(&table, 0, &ColumnKind::Age);
        assert_ne!(before, after);
        assert!(after.ends_with("hr"), "unexpected age text: {after}");
    }

    #[test]
    fn seed_sorts_and_truncates() {
        let mut table = BlockTableState::new(ColumnLayout::standard(), 2, "primary");
        table.seed(vec![block(98), block(100), block(99)], now());
        assert_eq!(table.heights(), vec![100, 99]);
    }
}
