//! core::calendar
//!
//! Calendar text in both directions.
//!
//! # Parsing
//!
//! Accepted spellings, tried in order:
//!
//! 1. RFC 3339 (`2023-03-18T12:32:21Z`, `2023-03-18T14:32:21.5+02:00`)
//! 2. Date-time with offset but without seconds (`2023-03-18T14:32+02:00`)
//! 3. Date-time without offset, read as UTC, optional trailing `Z`
//!    (`2023-03-18T12:32:21.1234567`, `2023-03-18 12:32`)
//! 4. Bare date at midnight UTC, optional trailing `Z` (`2023-03-18Z`)
//!
//! Surrounding whitespace is ignored; anything else left over is an error.
//! Precision below one tick is truncated.
//!
//! # Rendering
//!
//! Instants render as `YYYY-MM-DDTHH:MM:SS.fffffffZ` and then shed trailing
//! zeros in whole steps:
//!
//! | Instant                | Text                          |
//! |------------------------|-------------------------------|
//! | midnight               | `2023-03-18Z`                 |
//! | whole second           | `2023-03-18T12:32:21Z`        |
//! | whole millisecond      | `2023-03-18T12:32:21.123Z`    |
//! | anything else          | `2023-03-18T12:32:21.1234567Z`|
//!
//! Every rendered form parses back to the instant it came from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::bounds::TICKS_PER_SECOND;
use super::types::{Instant, ParseError};

/// Offset-carrying layouts not covered by RFC 3339.
const ZONED_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Offset-free layouts, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Suffixes dropped from the full rendering, most compact first.
const COLLAPSIBLE_SUFFIXES: [&str; 3] = ["T00:00:00.0000000Z", ".0000000Z", "0000Z"];

/// Parse calendar text into an instant.
///
/// # Errors
///
/// - [`ParseError::MalformedText`] if no accepted spelling matches
/// - [`ParseError::OutOfRange`] if the date lies outside years 1 to 9999
pub fn parse(text: &str) -> Result<Instant, ParseError> {
    let text = text.trim();
    let datetime = parse_zoned(text)
        .or_else(|| parse_naive(strip_zulu(text)))
        .ok_or(ParseError::MalformedText)?;
    Instant::from_datetime(datetime).ok_or(ParseError::OutOfRange)
}

fn parse_zoned(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .or_else(|| {
            ZONED_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(text, format).ok())
        })
        .map(|datetime| datetime.with_timezone(&Utc))
}

fn parse_naive(text: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn strip_zulu(text: &str) -> &str {
    text.strip_suffix('Z')
        .or_else(|| text.strip_suffix('z'))
        .unwrap_or(text)
}

/// Render an instant as compact UTC calendar text.
pub fn render(instant: Instant) -> String {
    let datetime = instant.to_datetime();
    let fraction = instant.ticks() % TICKS_PER_SECOND;
    let full = format!("{}.{:07}Z", datetime.format("%Y-%m-%dT%H:%M:%S"), fraction);
    collapse(full)
}

fn collapse(full: String) -> String {
    for suffix in COLLAPSIBLE_SUFFIXES {
        if let Some(head) = full.strip_suffix(suffix) {
            return format!("{head}Z");
        }
    }
    full
}
