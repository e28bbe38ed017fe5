use chrono::{DateTime, Utc};

const SUITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current time as stamped on a new suite: ISO 8601, whole seconds, UTC,
/// without zone suffix.
pub fn suite_timestamp() -> String {
    format_suite_timestamp(Utc::now())
}

pub fn format_suite_timestamp(at: DateTime<Utc>) -> String {
    at.format(SUITE_TIMESTAMP_FORMAT).to_string()
}
