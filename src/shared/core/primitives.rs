// Primitive value types shared by every module.
//
// Timestamps
// - Stored as UTC, rendered in local time with second resolution.

use chrono::{DateTime, Local, Utc};

pub type ProcessId = i16;

pub type Timestamp = DateTime<Utc>;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
