use chrono::{DateTime, Utc};

/// Current time as an RFC 3339 string, the format every stored record uses
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Current time in epoch milliseconds, the unit token claims carry
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a datetime for display
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
