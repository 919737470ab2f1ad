//! Date formatting for frame copy

use chrono::{DateTime, Datelike, Utc};

/// Format unix seconds as a long month and ordinal day, e.g. `March 5th`
///
/// Dates are rendered in UTC. Returns `None` for empty or unparseable
/// input.
///
/// # Example
///
/// ```rust
/// use yeet_core::dates::format_short_date;
///
/// assert_eq!(format_short_date("1709640000").as_deref(), Some("March 5th"));
/// assert_eq!(format_short_date(""), None);
/// ```
pub fn format_short_date(seconds: &str) -> Option<String> {
    let secs = seconds.trim().parse::<f64>().ok()?;
    if !secs.is_finite() {
        return None;
    }
    let date = DateTime::<Utc>::from_timestamp_millis((secs * 1000.0) as i64)?;
    Some(format!(
        "{} {}",
        date.format("%B"),
        ordinal(date.day())
    ))
}

/// `1` to `1st`, `12` to `12th`, `22` to `22nd`
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
