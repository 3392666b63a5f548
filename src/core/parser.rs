//! core::parser
//!
//! Turns input text into a [`ParseResult`].
//!
//! # Dispatch
//!
//! A specific [`Kind`] attempts exactly one interpretation. [`Kind::Guess`]
//! tries, in order, and stops at the first success:
//!
//! 1. calendar text
//! 2. an integer, disambiguated over every numeric format
//! 3. a version 1 UUID
//!
//! Only the numeric step compares alternatives; across steps the first
//! match wins. A numeric kind never falls back to calendar parsing.
//!
//! # Example
//!
//! ```
//! use timechko::core::parser::parse;
//! use timechko::core::types::{Format, Kind};
//!
//! let result = parse("1679142741", Kind::Guess).unwrap();
//! assert_eq!(result.format(), Format::UnixTimeSeconds);
//!
//! assert!(parse("1679142741", Kind::DateTime).is_none());
//! assert!(parse("not-a-time", Kind::Guess).is_none());
//! ```

use super::calendar;
use super::format::NumericFormat;
use super::guess::disambiguate;
use super::time_guid::TimeGuid;
use super::types::{Format, Instant, Kind, ParseError};

/// A successful interpretation.
///
/// Carries the identifier only when the input was one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseResult {
    format: Format,
    instant: Instant,
    time_guid: Option<TimeGuid>,
}

impl ParseResult {
    /// A result read from calendar text or an integer.
    pub fn new(format: Format, instant: Instant) -> Self {
        Self {
            format,
            instant,
            time_guid: None,
        }
    }

    /// A result read from a time-based UUID.
    pub fn from_time_guid(time_guid: TimeGuid) -> Self {
        Self {
            format: Format::TimeGuid,
            instant: time_guid.instant(),
            time_guid: Some(time_guid),
        }
    }

    /// The format that produced this result.
    pub fn format(&self) -> Format {
        self.format
    }

    /// The resolved instant.
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// The identifier the input was parsed from, if any.
    pub fn time_guid(&self) -> Option<TimeGuid> {
        self.time_guid
    }
}

/// Interpret `text` as `kind`, or report absence.
pub fn parse(text: &str, kind: Kind) -> Option<ParseResult> {
    try_parse(text, kind).ok()
}

/// Interpret `text` as `kind`, keeping the reason for failure.
///
/// # Errors
///
/// Specific kinds report why their one attempt failed. [`Kind::Guess`]
/// reports [`ParseError::NoCandidate`] once every strategy has failed.
pub fn try_parse(text: &str, kind: Kind) -> Result<ParseResult, ParseError> {
    match kind {
        Kind::DateTime => parse_date_time(text),
        Kind::UnixTimeSeconds => parse_numeric(text, &[NumericFormat::UnixSeconds]),
        Kind::UnixTimeMilliseconds => parse_numeric(text, &[NumericFormat::UnixMilliseconds]),
        Kind::UnixTimeMicroseconds => parse_numeric(text, &[NumericFormat::UnixMicroseconds]),
        Kind::UnixTimeGuess => parse_numeric(text, &NumericFormat::UNIX),
        Kind::Ticks => parse_numeric(text, &[NumericFormat::Ticks]),
        Kind::TimeGuid => parse_time_guid(text),
        Kind::Guess => parse_date_time(text)
            .or_else(|_| parse_numeric(text, &NumericFormat::ALL))
            .or_else(|_| parse_time_guid(text))
            .map_err(|_| ParseError::NoCandidate),
    }
}

fn parse_date_time(text: &str) -> Result<ParseResult, ParseError> {
    calendar::parse(text).map(|instant| ParseResult::new(Format::DateTime, instant))
}

fn parse_numeric(text: &str, candidates: &[NumericFormat]) -> Result<ParseResult, ParseError> {
    let value = parse_integer(text)?;
    disambiguate(value, candidates)
        .map(|found| ParseResult::new(found.format.format(), found.instant))
        .ok_or(ParseError::OutOfRange)
}

fn parse_time_guid(text: &str) -> Result<ParseResult, ParseError> {
    TimeGuid::parse(text).map(ParseResult::from_time_guid)
}

/// Base-10 signed 64-bit integer, optionally surrounded by whitespace.
fn parse_integer(text: &str) -> Result<i64, ParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::MalformedText)
}
