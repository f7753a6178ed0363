//! Configuration management for chainview.
//!
//! Loads configuration from ${CHAINVIEW_HOME}/config.toml with sensible
//! defaults. A missing file is not an error; a malformed one is.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Block feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Interval between simulated blocks, in milliseconds.
    pub block_interval_ms: u64,
    /// Starting tip height for the simulated chain.
    pub start_height: u64,
    /// Path to a JSON-lines block file to replay instead of simulating.
    pub replay_path: Option<PathBuf>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            block_interval_ms: 5000,
            start_height: 1_000_000,
            replay_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows kept in the block table (the sliding window over the chain tip).
    pub page_size: usize,
    /// Points kept in the block-size chart.
    pub chart_points: usize,
    /// Interval between relative-age refreshes, in milliseconds.
    pub age_refresh_ms: u64,
    /// Log filter directive (overridden by `CHAINVIEW_LOG`).
    pub log_filter: String,
    pub feed: FeedConfig,
}

impl Config {
    /// Page size bounds, matching the explorer's row limits.
    pub const MIN_PAGE_SIZE: usize = 1;
    pub const MAX_PAGE_SIZE: usize = 200;

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            Ok(config.normalized())
        } else {
            Ok(Config::default())
        }
    }

    /// Clamps out-of-range values into their supported bounds.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.page_size = self
            .page_size
            .clamp(Self::MIN_PAGE_SIZE, Self::MAX_PAGE_SIZE);
        self.chart_points = self.chart_points.max(2);
        self.age_refresh_ms = self.age_refresh_ms.max(100);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 25,
            chart_points: 50,
            age_refresh_ms: 1000,
            log_filter: "info".to_string(),
            feed: FeedConfig::default(),
        }
    }
}

pub mod paths {
    //! Path resolution for chainview configuration and data directories.
    //!
    //! CHAINVIEW_HOME resolution order:
    //! 1. CHAINVIEW_HOME environment variable (if set)
    //! 2. ~/.chainview (default)

    use std::path::PathBuf;

    /// Returns the chainview home directory.
    pub fn chainview_home() -> PathBuf {
        if let Ok(home) = std::env::var("CHAINVIEW_HOME") {
            return PathBuf::from(home);
        }
        std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".chainview"))
            .unwrap_or_else(|_| PathBuf::from(".chainview"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        chainview_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        chainview_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.chart_points, 50);
        assert_eq!(config.feed.block_interval_ms, 5000);
        assert!(config.feed.replay_path.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.page_size, Config::default().page_size);
    }

    #[test]
    fn parses_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "page_size = 50\n[feed]\nblock_interval_ms = 250").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.feed.block_interval_ms, 250);
        // Unspecified fields keep their defaults.
        assert_eq!(config.chart_points, 50);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = \"lots\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn normalized_clamps_page_size() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        }
        .normalized();
        assert_eq!(config.page_size, Config::MIN_PAGE_SIZE);

        let config = Config {
            page_size: 10_000,
            ..Config::default()
        }
        .normalized();
        assert_eq!(config.page_size, Config::MAX_PAGE_SIZE);
    }
}
