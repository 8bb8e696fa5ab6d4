// src/extract/timestamp.rs
use chrono::{Local, TimeZone};

/// Render an epoch-seconds value either verbatim (`keep_unix`) or as a
/// `YYYY-MM-DD HH:MM:SS` string in the host's local timezone. Local time is
/// deliberate: the artifacts this replaces were produced that way.
pub fn convert_timestamp(epoch: i64, keep_unix: bool) -> String {
    if keep_unix {
        return epoch.to_string();
    }
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
