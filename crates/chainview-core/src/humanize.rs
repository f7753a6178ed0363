//! Display formatters for raw numeric block fields.
//!
//! All functions are pure; `time_since` takes the current instant as an
//! argument so callers (and tests) control the clock.

use chrono::{DateTime, Utc};

/// Coarse relative age of a Unix timestamp ("47 sec", "5 min", "3 hr",
/// "2 days"). Future stamps clamp to "0 sec".
pub fn time_since(unix_secs: i64, now: DateTime<Utc>) -> String {
    let elapsed = (now.timestamp() - unix_secs).max(0);
    if elapsed < 60 {
        format!("{elapsed} sec")
    } else if elapsed < 3600 {
        format!("{} min", elapsed / 60)
    } else if elapsed < 86_400 {
        format!("{} hr", elapsed / 3600)
    } else {
        format!("{} days", elapsed / 86_400)
    }
}

/// Byte count with a binary-prefix unit, two decimals above bytes
/// (2048 -> "2.00 kB").
pub fn bytes(n: u64) -> String {
    const UNITS: [&str; 5] = ["kB", "MB", "GB", "TB", "PB"];
    if n < 1024 {
        return format!("{n} B");
    }
    // UNITS[0] is kB, so start with one division already applied.
    let mut value = n as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Renders a non-negative amount with three significant figures
/// (0.123456 -> "0.123", 12.3456 -> "12.3", 1234.6 -> "1235").
pub fn three_sig_figs(v: f64) -> String {
    if v == 0.0 {
        return "0.00".to_string();
    }
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    format!("{v:.decimals$}")
}
