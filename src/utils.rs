//! Common utility functions shared across the codebase.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp the way JavaScript's `Date.prototype.toISOString` does.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use regkit::utils::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
/// assert_eq!(format_timestamp(at), "2026-10-19T08:30:00.000Z");
/// ```
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Picks the singular or plural form of a noun for `count`.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
