//! Time and timestamp utilities

use chrono::{SecondsFormat, Utc};

/// Current Unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
