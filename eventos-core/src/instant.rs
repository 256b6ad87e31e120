//! Strict ISO-8601 UTC instants (`YYYY-MM-DDTHH:mm:ss[.sss]Z`).
//!
//! Event targets are accepted in exactly one shape: a UTC timestamp with a
//! literal `Z`, second precision and optional milliseconds. Anything chrono
//! would otherwise tolerate (offsets, lowercase separators, fractional digits
//! other than three) is rejected before it ever reaches the calendar.
//! `T24:00:00Z` is the end of its day and reads as the next midnight.

use std::sync::LazyLock;

use chrono::{DateTime, Days, NaiveDate, Timelike, Utc};
use regex::Regex;

use crate::error::TargetError;

static STRICT_UTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?Z$")
        .expect("static pattern is valid")
});

/// Whether `text` has the strict `YYYY-MM-DDTHH:mm:ss[.sss]Z` shape.
///
/// Only checks the grammar; `2025-13-40T99:00:00Z` matches.
pub fn is_strict_utc(text: &str) -> bool {
    STRICT_UTC.is_match(text)
}

/// Parse a target instant, distinguishing absent, malformed and impossible input.
pub fn parse_target(text: Option<&str>) -> Result<DateTime<Utc>, TargetError> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Err(TargetError::MissingTarget),
    };

    if !is_strict_utc(text) {
        return Err(TargetError::InvalidFormat(text.to_string()));
    }

    if let Some(end_of_day) = end_of_day(text) {
        return end_of_day.ok_or_else(|| TargetError::UnparsableInstant(text.to_string()));
    }

    let parsed = DateTime::parse_from_rfc3339(text)
        .map_err(|_| TargetError::UnparsableInstant(text.to_string()))?;

    // chrono represents `:60` as a leap second; a plain UTC clock has no such instant
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TargetError::UnparsableInstant(text.to_string()));
    }

    Ok(parsed.with_timezone(&Utc))
}

/// `Some` when `text` is `YYYY-MM-DDT24:00:00[.000]Z`, holding the following
/// midnight if the date exists.
fn end_of_day(text: &str) -> Option<Option<DateTime<Utc>>> {
    let (date, time) = text.split_once('T')?;
    if !matches!(time, "24:00:00Z" | "24:00:00.000Z") {
        return None;
    }

    let midnight = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.checked_add_days(Days::new(1)))
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc());
    Some(midnight)
}

/// Parse a stored `dateTime` value.
pub fn parse_utc(text: &str) -> Result<DateTime<Utc>, TargetError> {
    parse_target(Some(text))
}
