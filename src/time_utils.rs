// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Seconds per unit, largest first.
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "y"),
    (2_592_000, "mo"),
    (86_400, "d"),
    (3_600, "h"),
    (60, "m"),
];

/// Bucket an elapsed duration into a coarse "3d ago" style label.
///
/// Picks the largest unit whose magnitude exceeds 1, falling back to seconds.
pub fn time_ago(elapsed_seconds: i64) -> String {
    for (unit_seconds, suffix) in UNITS {
        if elapsed_seconds > unit_seconds {
            return format!("{}{} ago", elapsed_seconds / unit_seconds, suffix);
        }
    }
    format!("{}s ago", elapsed_seconds.max(0))
}
