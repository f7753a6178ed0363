//! Status line state.

/// Counters and feed status shown on the bottom line.
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// Height of the current head row, if any.
    pub tip_height: Option<u64>,
    /// Rows currently held in the table.
    pub rows: usize,
    /// Notifications applied to the table.
    pub accepted: u64,
    /// Notifications rejected as out of sequence.
    pub rejected: u64,
    /// The feed reported that no more blocks are coming.
    pub feed_closed: bool,
}

impl StatusState {
    /// One-line summary for the renderer.
    pub fn summary(&self) -> String {
        let tip = self
            .tip_height
            .map_or_else(|| "-".to_string(), |h| h.to_string());
        let feed = if self.feed_closed { "closed" } else { "live" };
        format!(
            "tip {tip} | rows {} | accepted {} | rejected {} | feed {feed} | q to quit",
            self.rows, self.accepted, self.rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_with_no_tip() {
        let status = StatusState::default();
        assert!(status.summary().starts_with("tip - | rows 0"));
    }

    #[test]
    fn summary_reflects_counters() {
        let status = StatusState {
            tip_height: Some(101),
            rows: 25,
            accepted: 3,
            rejected: 1,
            feed_closed: true,
        };
        let line = status.summary();
        assert!(line.contains("tip 101"));
        assert!(line.contains("rejected 1"));
        assert!(line.contains("feed closed"));
    }
}
