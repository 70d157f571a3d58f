use chrono::{DateTime, Local, NaiveDate};

/// Formats a date as a day-key, e.g. "August 30, 2026". Full month name,
/// unpadded day, four-digit year; en-US regardless of locale so that
/// persisted keys stay stable across machines.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a moment as the entry clock time, e.g. "9:05 AM". Unpadded
/// 12-hour hour, zero-padded minutes.
pub fn clock_time(moment: &DateTime<Local>) -> String {
    moment.format("%-I:%M %p").to_string()
}

/// Inverse of `day_key`, used only to sort keys for display.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%B %d, %Y").ok()
}
