//! Timestamp formatting for the leads table.
//!
//! Renders `Mon Dth YY` (e.g. `Jan 2nd 24`). Offsets are honored as written:
//! the date shown is the calendar date in the timestamp's own offset, and
//! naive backend timestamps are shown as-is.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid date";

/// Format a raw `date_last_updated` value for display.
pub fn format_last_updated(raw: &str) -> String {
    parse_date(raw).map_or_else(|| INVALID_DATE.to_owned(), format_short)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    // Space-separated, as some backends serialize naive timestamps.
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    raw.parse::<NaiveDate>().ok()
}

fn format_short(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {day}{} {}", date.format("%b"), ordinal_suffix(day), date.format("%y"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
