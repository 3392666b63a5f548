//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Instant`] - Point in time as a count of 100-nanosecond ticks
//! - [`Format`] - Encoding an interpretation was produced from
//! - [`Kind`] - Interpretation requested by the caller
//! - [`UtcTimestamp`] - RFC3339 timestamp
//!
//! # Validation
//!
//! An [`Instant`] can only be constructed inside the representable range,
//! so every downstream conversion (calendar rendering, Unix projections,
//! identifier encoding) works on a value known to be valid.
//!
//! # Examples
//!
//! ```
//! use timechko::core::types::{Format, Instant, Kind};
//!
//! let origin = Instant::from_ticks(0).unwrap();
//! assert_eq!(origin, Instant::MIN);
//! assert!(Instant::from_ticks(-1).is_none());
//!
//! assert_eq!("UnixTimeSeconds".parse::<Format>().unwrap(), Format::UnixTimeSeconds);
//! assert_eq!(Kind::from_name_or_guess("whatever"), Kind::Guess);
//! ```

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bounds::{MAX_TICKS, NANOS_PER_TICK, TICKS_BOUNDS, TICKS_PER_SECOND, UNIX_EPOCH_TICKS};

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("unknown kind: {0}")]
    UnknownKind(String),
}

/// Why an input could not be interpreted.
///
/// These stay distinguishable inside the parser so that each attempt can be
/// evaluated on its own; at the text boundary all of them become `null`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A numeric value or calendar date outside the representable window.
    #[error("value is outside the representable range")]
    OutOfRange,

    /// The text is not a valid integer, calendar or identifier literal.
    #[error("text is not a recognizable literal")]
    MalformedText,

    /// A well-formed 128-bit literal that is not a version 1 UUID.
    #[error("identifier is not a time-based (version 1) UUID")]
    WrongVersion,

    /// Guess mode exhausted every strategy.
    #[error("no interpretation matched the input")]
    NoCandidate,
}

/// A point in time, counted in 100-nanosecond ticks since
/// 0001-01-01T00:00:00Z (proleptic Gregorian, UTC).
///
/// Valid values lie in `[0, MAX_TICKS]`.
///
/// # Example
///
/// ```
/// use timechko::core::types::Instant;
///
/// let epoch = Instant::from_ticks(621_355_968_000_000_000).unwrap();
/// assert_eq!(epoch.unix_ticks(), 0);
/// assert_eq!(epoch.to_datetime().timestamp(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// 0001-01-01T00:00:00Z.
    pub const MIN: Instant = Instant(0);

    /// 9999-12-31T23:59:59.9999999Z.
    pub const MAX: Instant = Instant(MAX_TICKS);

    /// Create an instant from a raw tick count.
    ///
    /// Returns `None` outside `[0, MAX_TICKS]`.
    pub fn from_ticks(ticks: i64) -> Option<Self> {
        TICKS_BOUNDS.contains(ticks).then_some(Self(ticks))
    }

    /// Create an instant from a tick count already known to be in range.
    pub(crate) const fn from_ticks_in_range(ticks: i64) -> Self {
        debug_assert!(ticks >= 0 && ticks <= MAX_TICKS);
        Self(ticks)
    }

    /// Convert a chrono datetime, truncating below tick precision.
    ///
    /// Returns `None` if the datetime falls outside the representable range.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Option<Self> {
        let sub_second = i64::from(datetime.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        datetime
            .timestamp()
            .checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(sub_second))
            .and_then(|ticks| ticks.checked_add(UNIX_EPOCH_TICKS))
            .and_then(Self::from_ticks)
    }

    /// Convert a chrono datetime, clamping to the representable range.
    pub fn saturating_from_datetime(datetime: DateTime<Utc>) -> Self {
        let sub_second = i64::from(datetime.timestamp_subsec_nanos()) / NANOS_PER_TICK;
        let ticks = datetime
            .timestamp()
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(sub_second)
            .saturating_add(UNIX_EPOCH_TICKS);
        Self(ticks.clamp(0, MAX_TICKS))
    }

    /// Raw tick count.
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Ticks relative to 1970-01-01T00:00:00Z (negative before the epoch).
    pub const fn unix_ticks(self) -> i64 {
        self.0 - UNIX_EPOCH_TICKS
    }

    /// Drop everything below whole seconds.
    pub const fn truncate_to_seconds(self) -> Self {
        Self(self.0 - self.0 % TICKS_PER_SECOND)
    }

    /// Absolute distance to another instant, in ticks.
    pub const fn distance(self, other: Instant) -> u64 {
        self.0.abs_diff(other.0)
    }

    /// The same instant as a chrono UTC datetime.
    pub fn to_datetime(self) -> DateTime<Utc> {
        let unix = self.unix_ticks();
        let seconds = unix.div_euclid(TICKS_PER_SECOND);
        // at most 999_999_900, fits u32
        let nanos = (unix.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        // chrono covers years well beyond 1..=9999, so this never falls back
        DateTime::<Utc>::from_timestamp(seconds, nanos).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The encoding an interpretation was produced from.
///
/// The serialized names are the ones used in JSON output and in stored
/// history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    UnixTimeSeconds,
    UnixTimeMilliseconds,
    UnixTimeMicroseconds,
    Ticks,
    DateTime,
    TimeGuid,
}

impl Format {
    /// Every format, in registry order followed by the textual formats.
    pub const ALL: [Format; 6] = [
        Format::UnixTimeSeconds,
        Format::UnixTimeMilliseconds,
        Format::UnixTimeMicroseconds,
        Format::Ticks,
        Format::DateTime,
        Format::TimeGuid,
    ];

    /// The wire name of this format.
    pub const fn name(self) -> &'static str {
        match self {
            Format::UnixTimeSeconds => "UnixTimeSeconds",
            Format::UnixTimeMilliseconds => "UnixTimeMilliseconds",
            Format::UnixTimeMicroseconds => "UnixTimeMicroseconds",
            Format::Ticks => "Ticks",
            Format::DateTime => "DateTime",
            Format::TimeGuid => "TimeGuid",
        }
    }
}

impl FromStr for Format {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s.trim())
            .ok_or_else(|| TypeError::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The interpretation a caller asks for.
///
/// Each format has its own kind; `UnixTimeGuess` disambiguates between the
/// three Unix formats and `Guess` tries everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    DateTime,
    UnixTimeSeconds,
    UnixTimeMilliseconds,
    UnixTimeMicroseconds,
    UnixTimeGuess,
    Ticks,
    TimeGuid,
    #[default]
    Guess,
}

impl Kind {
    /// Every kind, in the order they are listed to users.
    pub const ALL: [Kind; 8] = [
        Kind::DateTime,
        Kind::UnixTimeSeconds,
        Kind::UnixTimeMilliseconds,
        Kind::UnixTimeMicroseconds,
        Kind::UnixTimeGuess,
        Kind::Ticks,
        Kind::TimeGuid,
        Kind::Guess,
    ];

    /// The wire name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::DateTime => "DateTime",
            Kind::UnixTimeSeconds => "UnixTimeSeconds",
            Kind::UnixTimeMilliseconds => "UnixTimeMilliseconds",
            Kind::UnixTimeMicroseconds => "UnixTimeMicroseconds",
            Kind::UnixTimeGuess => "UnixTimeGuess",
            Kind::Ticks => "Ticks",
            Kind::TimeGuid => "TimeGuid",
            Kind::Guess => "Guess",
        }
    }

    /// Resolve a kind name, falling back to [`Kind::Guess`] for anything
    /// unrecognized.
    pub fn from_name_or_guess(name: &str) -> Self {
        name.parse().unwrap_or(Kind::Guess)
    }
}

impl From<Format> for Kind {
    fn from(format: Format) -> Self {
        match format {
            Format::UnixTimeSeconds => Kind::UnixTimeSeconds,
            Format::UnixTimeMilliseconds => Kind::UnixTimeMilliseconds,
            Format::UnixTimeMicroseconds => Kind::UnixTimeMicroseconds,
            Format::Ticks => Kind::Ticks,
            Format::DateTime => Kind::DateTime,
            Format::TimeGuid => Kind::TimeGuid,
        }
    }
}

impl FromStr for Kind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| TypeError::UnknownKind(s.to_string()))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use timechko::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    mod instant {
        use super::*;

        #[test]
        fn range_is_enforced() {
            assert!(Instant::from_ticks(0).is_some());
            assert!(Instant::from_ticks(MAX_TICKS).is_some());
            assert!(Instant::from_ticks(-1).is_none());
            assert!(Instant::from_ticks(MAX_TICKS + 1).is_none());
        }

        #[test]
        fn origin_is_year_one() {
            let dt = Instant::MIN.to_datetime();
            assert_eq!(dt, Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());
        }

        #[test]
        fn max_is_end_of_year_9999() {
            let dt = Instant::MAX.to_datetime();
            assert_eq!(dt.timestamp(), 253_402_300_799);
            assert_eq!(dt.timestamp_subsec_nanos(), 999_999_900);
        }

        #[test]
        fn datetime_roundtrip_before_unix_epoch() {
            let instant = Instant::from_ticks(UNIX_EPOCH_TICKS - 1).unwrap();
            let dt = instant.to_datetime();
            assert_eq!(dt.timestamp(), -1);
            assert_eq!(dt.timestamp_subsec_nanos(), 999_999_900);
            assert_eq!(Instant::from_datetime(dt), Some(instant));
        }

        #[test]
        fn from_datetime_truncates_below_a_tick() {
            let dt = Utc.timestamp_opt(0, 199).unwrap();
            let instant = Instant::from_datetime(dt).unwrap();
            assert_eq!(instant.ticks(), UNIX_EPOCH_TICKS + 1);
        }

        #[test]
        fn from_datetime_rejects_year_zero() {
            let dt = Utc.with_ymd_and_hms(0, 12, 31, 23, 59, 59).unwrap();
            assert!(Instant::from_datetime(dt).is_none());
            assert_eq!(Instant::saturating_from_datetime(dt), Instant::MIN);
        }

        #[test]
        fn truncate_to_seconds() {
            let instant = Instant::from_ticks(UNIX_EPOCH_TICKS + 12_345_678).unwrap();
            assert_eq!(
                instant.truncate_to_seconds().ticks(),
                UNIX_EPOCH_TICKS + TICKS_PER_SECOND
            );
        }

        #[test]
        fn distance_is_symmetric() {
            let a = Instant::from_ticks(10).unwrap();
            let b = Instant::from_ticks(25).unwrap();
            assert_eq!(a.distance(b), 15);
            assert_eq!(b.distance(a), 15);
        }
    }

    mod names {
        use super::*;

        #[test]
        fn format_names_roundtrip() {
            for format in Format::ALL {
                assert_eq!(format.name().parse::<Format>(), Ok(format));
            }
        }

        #[test]
        fn kind_names_roundtrip() {
            for kind in Kind::ALL {
                assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
            }
        }

        #[test]
        fn kind_name_is_trimmed() {
            assert_eq!(Kind::from_name_or_guess("  Ticks\n"), Kind::Ticks);
        }

        #[test]
        fn unknown_kind_falls_back_to_guess() {
            assert_eq!(Kind::from_name_or_guess("ticks"), Kind::Guess);
            assert_eq!(Kind::from_name_or_guess(""), Kind::Guess);
            assert!("Bogus".parse::<Kind>().is_err());
        }

        #[test]
        fn format_serializes_as_name() {
            let json = serde_json::to_string(&Format::UnixTimeMilliseconds).unwrap();
            assert_eq!(json, "\"UnixTimeMilliseconds\"");
        }
    }
}
