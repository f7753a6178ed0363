//! Block feeds: tasks that publish block notifications onto the event bus.
//!
//! Two sources: a simulated chain (deterministic synthetic blocks, with an
//! occasional duplicate tip re-delivery, the way real gossip repeats itself)
//! and a JSON-lines replay file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use chainview_core::{BusEvent, Config, EventBus, Topic};
use chainview_types::BlockSummary;
use chrono::Utc;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

/// Spawns the configured feed onto `runtime` and returns the seed page for
/// the table (newest first).
///
/// `feed_done` is cancelled when the feed has no more blocks to deliver;
/// `shutdown` stops the feed early.
pub fn spawn(
    runtime: &Runtime,
    config: &Config,
    bus: EventBus,
    feed_done: CancellationToken,
    shutdown: CancellationToken,
) -> Result<Vec<BlockSummary>> {
    let interval = Duration::from_millis(config.feed.block_interval_ms);
    let interval_secs = interval.as_secs().max(1) as i64;
    let now = Utc::now().timestamp();

    if let Some(path) = &config.feed.replay_path {
        let blocks = parse_replay(path)?;
        let first_height = blocks[0].height;
        // Seed a page ending just below the first replayed block so the
        // replay starts as a clean tip advance.
        let seed = seed_page(
            first_height.saturating_sub(1),
            config.page_size,
            interval_secs,
            now,
        );
        runtime.spawn(replay(bus, blocks, interval, feed_done, shutdown));
        Ok(seed)
    } else {
        let tip = config.feed.start_height;
        let seed = seed_page(tip, config.page_size, interval_secs, now);
        runtime.spawn(simulate(bus, tip + 1, interval, shutdown));
        Ok(seed)
    }
}

/// Reads a JSON-lines file of block summaries.
pub fn parse_replay(path: &Path) -> Result<Vec<BlockSummary>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay file {}", path.display()))?;
    let mut blocks = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let block: BlockSummary = serde_json::from_str(line)
            .with_context(|| format!("Bad block on line {} of {}", idx + 1, path.display()))?;
        blocks.push(block);
    }
    ensure!(!blocks.is_empty(), "Replay file {} has no blocks", path.display());
    Ok(blocks)
}

/// Builds the initial page: `len` synthetic blocks from `tip` downward,
/// newest first, with stamps spaced one block interval apart.
pub fn seed_page(tip: u64, len: usize, interval_secs: i64, now: i64) -> Vec<BlockSummary> {
    (0..len as u64)
        .take_while(|offset| *offset <= tip)
        .map(|offset| synth_block(tip - offset, now - offset as i64 * interval_secs))
        .collect()
}

/// Deterministic synthetic block for a height.
pub fn synth_block(height: u64, unix_stamp: i64) -> BlockSummary {
    let mix = height.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let size = 2_000 + mix % 48_000;
    let total_sent = ((mix >> 16) % 900_000) as f64 / 100.0;
    let txs = 1 + mix % 40;
    BlockSummary::new(height, unix_stamp, size, total_sent).with_field("txs", txs.to_string())
}

/// Publishes a synthetic chain, one block per interval, re-delivering every
/// seventh tip with a changed payload.
async fn simulate(bus: EventBus, start: u64, interval: Duration, shutdown: CancellationToken) {
    let mut height = start;
    loop {
        tokio::select! {
            () = shutdown.cancelled() => break,
            () = tokio::time::sleep(interval) => {}
        }
        let block = synth_block(height, Utc::now().timestamp());
        tracing::debug!(height, "publishing simulated block");
        bus.publish(Topic::NewBlock, &BusEvent::Block(block));

        if height % 7 == 0 {
            tokio::select! {
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(interval / 2) => {}
            }
            let mut dup = synth_block(height, Utc::now().timestamp());
            dup.size += 512;
            tracing::debug!(height, "re-delivering tip");
            bus.publish(Topic::NewBlock, &BusEvent::Block(dup));
        }
        height += 1;
    }
}

/// Publishes blocks from a replay file, then signals that the feed is done.
async fn replay(
    bus: EventBus,
    blocks: Vec<BlockSummary>,
    interval: Duration,
    feed_done: CancellationToken,
    shutdown: CancellationToken,
) {
    for block in blocks {
        tokio::select! {
            () = shutdown.cancelled() => return,
            () = tokio::time::sleep(interval) => {}
        }
        tracing::debug!(height = block.height, "replaying block");
        bus.publish(Topic::NewBlock, &BusEvent::Block(block));
    }
    tracing::info!("replay finished");
    feed_done.cancel();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn seed_page_is_descending() {
        let seed = seed_page(100, 5, 60, 1_700_000_000);
        let heights: Vec<u64> = seed.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![100, 99, 98, 97, 96]);
        assert!(seed.windows(2).all(|p| p[0].unix_stamp > p[1].unix_stamp));
    }

    #[test]
    fn seed_page_stops_at_genesis() {
        let seed = seed_page(2, 10, 60, 1_700_000_000);
        let heights: Vec<u64> = seed.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![2, 1, 0]);
    }

    #[test]
    fn synth_block_is_deterministic() {
        let a = synth_block(1234, 1_700_000_000);
        let b = synth_block(1234, 1_700_000_000);
        assert_eq!(a, b);
        assert!(a.size >= 2_000);
        assert!(a.field("txs").is_some());
    }

    #[test]
    fn parse_replay_reads_json_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"height":10,"unix_stamp":1700000000,"size":2048,"total_sent":1.5}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"height":11,"unix_stamp":1700000060,"size":1024,"total_sent":0.5}}"#
        )
        .unwrap();
        let blocks = parse_replay(file.path()).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].height, 11);
    }

    #[test]
    fn parse_replay_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(parse_replay(file.path()).is_err());
    }

    #[test]
    fn parse_replay_rejects_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(parse_replay(file.path()).is_err());
    }
}
