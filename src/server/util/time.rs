//! Timestamp formatting for API responses.

use chrono::{Local, NaiveDateTime, TimeZone};

/// Format used for timestamps returned by the API
pub static DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a stored UTC timestamp in the server's local time zone.
///
/// Timestamps are stored as naive UTC values; clients receive them as local wall-clock
/// time with second precision.
pub fn format_local(utc: NaiveDateTime) -> String {
    Local
        .from_utc_datetime(&utc)
        .format(DISPLAY_FORMAT)
        .to_string()
}
