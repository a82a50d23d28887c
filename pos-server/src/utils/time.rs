//! 时间工具函数
//!
//! 所有时间戳均为 UTC ISO-8601 字符串 (毫秒精度，`Z` 后缀)。

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC instant as `2024-05-01T12:30:00.000Z`
pub fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current UTC time as an ISO-8601 string
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

/// Date portion (`YYYY-MM-DD`) of an ISO-8601 timestamp
///
/// Text before the first `T`; a timestamp without `T` is returned whole.
pub fn date_portion(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

/// `YYYY-MM-DD` form of a date
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
