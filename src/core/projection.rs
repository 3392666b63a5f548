//! core::projection
//!
//! Every representation of a resolved instant.
//!
//! # Fields
//!
//! A [`Projection`] carries the format that produced the result plus the
//! instant rendered six ways. All values are decimal or canonical text so
//! the JSON form is stable across platforms:
//!
//! ```json
//! {
//!   "type": "UnixTimeSeconds",
//!   "dateTime": "2023-03-18T12:32:21Z",
//!   "unixTimeSeconds": "1679142741",
//!   "unixTimeMilliseconds": "1679142741000",
//!   "unixTimeMicroseconds": "1679142741000000",
//!   "ticks": "638147395410000000",
//!   "timeGuid": "ed8cb880-c588-11ed-0000-000000000000"
//! }
//! ```
//!
//! `timeGuid` is the parsed identifier when the input was one, otherwise
//! the earliest version 1 identifier for the instant, and the empty string
//! when the instant cannot be carried by one (before 1582-10-15 or after
//! 5236-03-31).

use serde::{Deserialize, Serialize};

use super::calendar;
use super::format::NumericFormat;
use super::parser::ParseResult;
use super::time_guid::TimeGuid;
use super::types::Format;

/// The full set of representations of one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Format the input was read as.
    #[serde(rename = "type")]
    pub format: Format,
    pub date_time: String,
    pub unix_time_seconds: String,
    pub unix_time_milliseconds: String,
    pub unix_time_microseconds: String,
    pub ticks: String,
    #[serde(with = "empty_as_none")]
    pub time_guid: Option<String>,
}

/// An absent identifier is written as `""` so every field stays a string.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|text| !text.is_empty()))
    }
}

impl Projection {
    /// Compute every representation of `result`.
    pub fn project(result: &ParseResult) -> Self {
        let instant = result.instant();
        let time_guid = result
            .time_guid()
            .or_else(|| TimeGuid::min_for_instant(instant));

        Self {
            format: result.format(),
            date_time: calendar::render(instant),
            unix_time_seconds: NumericFormat::UnixSeconds.encode(instant).to_string(),
            unix_time_milliseconds: NumericFormat::UnixMilliseconds.encode(instant).to_string(),
            unix_time_microseconds: NumericFormat::UnixMicroseconds.encode(instant).to_string(),
            ticks: NumericFormat::Ticks.encode(instant).to_string(),
            time_guid: time_guid.map(|guid| guid.to_string()),
        }
    }

    /// The text this projection shows for `format`.
    ///
    /// Parsing that text as `format` yields the same instant, which is what
    /// stored history relies on.
    pub fn value_of(&self, format: Format) -> Option<&str> {
        match format {
            Format::UnixTimeSeconds => Some(&self.unix_time_seconds),
            Format::UnixTimeMilliseconds => Some(&self.unix_time_milliseconds),
            Format::UnixTimeMicroseconds => Some(&self.unix_time_microseconds),
            Format::Ticks => Some(&self.ticks),
            Format::DateTime => Some(&self.date_time),
            Format::TimeGuid => self.time_guid.as_deref(),
        }
    }

    /// The text for the format this projection was read as.
    pub fn source_value(&self) -> Option<&str> {
        self.value_of(self.format)
    }

    /// Compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
