//! Wall-clock display helpers for the header clock and post dates.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{NaiveDate, NaiveTime};

/// Authored post date format.
const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// `02:05 PM` style, 12-hour with two-digit hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// `Jul 14, 2025` for an authored `2025-07-14`; anything unparseable is shown
/// as written.
pub fn format_post_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), POST_DATE_FORMAT)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}

/// Current local time formatted for the header.
pub fn local_clock() -> String {
    format_clock(chrono::Local::now().time())
}
