//! Clock message formatting
//!
//! The display fits exactly four characters, so the time is rendered as
//! `HHMM` and the separator is left to the indicator dots.

/// Format a time of day as `HHMM`.
#[must_use]
pub fn format_time_message(hour: u32, minute: u32) -> String {
    format!("{hour:02}{minute:02}")
}
