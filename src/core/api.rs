//! core::api
//!
//! Text-in, text-out surface for embedding front ends.
//!
//! Every failure collapses to the literal `null`; callers that need the
//! reason use [`crate::core::parser::try_parse`] instead.
//!
//! # Example
//!
//! ```
//! use timechko::core::api;
//!
//! let json = api::parse("1679142741", "UnixTimeSeconds");
//! assert!(json.contains(r#""dateTime":"2023-03-18T12:32:21Z""#));
//!
//! assert_eq!(api::parse("not-a-time", "Guess"), "null");
//! ```

use chrono::{DateTime, Utc};

use super::calendar;
use super::parser;
use super::projection::Projection;
use super::types::{Instant, Kind};

/// JSON for "no interpretation".
pub const NULL: &str = "null";

/// The current time, truncated to whole seconds, as calendar text.
pub fn now() -> String {
    now_at(Utc::now())
}

/// `at`, truncated to whole seconds, as calendar text.
pub fn now_at(at: DateTime<Utc>) -> String {
    calendar::render(Instant::saturating_from_datetime(at).truncate_to_seconds())
}

/// Interpret `text` as the kind named by `kind` and return the projection
/// as compact JSON, or `null`.
///
/// Unrecognized kind names are treated as `Guess`.
pub fn parse(text: &str, kind: &str) -> String {
    parser::parse(text, Kind::from_name_or_guess(kind))
        .map(|result| Projection::project(&result))
        .and_then(|projection| projection.to_json().ok())
        .unwrap_or_else(|| NULL.to_string())
}
