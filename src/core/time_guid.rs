//! core::time_guid
//!
//! Time-based (version 1) UUIDs and the 60-bit timestamp they carry.
//!
//! # Layout
//!
//! The timestamp counts 100-nanosecond intervals since the Gregorian epoch
//! (1582-10-15T00:00:00Z) and is split across the first eight octets:
//!
//! | Timestamp bits | Octets                         |
//! |----------------|--------------------------------|
//! | 0..=31         | 3, 2, 1, 0 (least significant first) |
//! | 32..=47        | 5, 4                           |
//! | 48..=55        | 7                              |
//! | 56..=59        | low nibble of 6                |
//!
//! The high nibble of octet 6 is the version and must be `0001`. Clock
//! sequence, variant and node bits are carried through untouched when an
//! identifier is parsed, and left at zero when one is constructed from an
//! instant.
//!
//! # Example
//!
//! ```
//! use timechko::core::time_guid::TimeGuid;
//!
//! let guid: TimeGuid = "ED8CB880-C588-11ED-8F3A-0242AC120002".parse().unwrap();
//! assert_eq!(guid.to_string(), "ed8cb880-c588-11ed-8f3a-0242ac120002");
//!
//! let minimal = TimeGuid::min_for_instant(guid.instant()).unwrap();
//! assert_eq!(minimal.to_string(), "ed8cb880-c588-11ed-0000-000000000000");
//! assert_eq!(minimal.instant(), guid.instant());
//! ```

use std::str::FromStr;

use uuid::Uuid;

use super::bounds::GREGORIAN_EPOCH_TICKS;
use super::types::{Instant, ParseError};

/// Number of octets in an identifier.
const SIZE: usize = 16;

/// Octet holding the version nibble.
const VERSION_OCTET: usize = 6;

const VERSION_MASK: u8 = 0b1111_0000;

const VERSION_1: u8 = 0b0001_0000;

/// Largest value of the 60-bit timestamp field.
const MAX_TIMESTAMP: i64 = (1 << 60) - 1;

/// `00000000-0000-1000-0000-000000000000`
const EMPTY: [u8; SIZE] = [0, 0, 0, 0, 0, 0, VERSION_1, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// A version 1 UUID.
///
/// Construction always checks the version nibble, so every `TimeGuid`
/// carries a meaningful timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeGuid {
    bytes: [u8; SIZE],
}

impl TimeGuid {
    /// Wrap 16 octets, rejecting anything that is not version 1.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::WrongVersion`] if the high nibble of octet 6 is
    /// not `0001`.
    pub fn from_bytes(bytes: [u8; SIZE]) -> Result<Self, ParseError> {
        if bytes[VERSION_OCTET] & VERSION_MASK != VERSION_1 {
            return Err(ParseError::WrongVersion);
        }
        Ok(Self { bytes })
    }

    /// Parse a 128-bit literal.
    ///
    /// Accepts the hyphenated, simple, braced and `urn:uuid:` spellings in
    /// any letter case, with surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MalformedText`] if the text is not a 128-bit literal
    /// - [`ParseError::WrongVersion`] if it is, but not a version 1 UUID
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let uuid = Uuid::parse_str(text.trim()).map_err(|_| ParseError::MalformedText)?;
        Self::from_bytes(*uuid.as_bytes())
    }

    /// The earliest version 1 identifier carrying `instant`.
    ///
    /// Every bit outside the timestamp and version is zero. This is a
    /// representative identifier for display, not one that was ever issued.
    ///
    /// Returns `None` if `instant` precedes the Gregorian epoch or lies more
    /// than `2^60 - 1` ticks after it.
    pub fn min_for_instant(instant: Instant) -> Option<Self> {
        let timestamp = instant.ticks().checked_sub(GREGORIAN_EPOCH_TICKS)?;
        let mut guid = Self { bytes: EMPTY };
        guid.set_timestamp(timestamp).then_some(guid)
    }

    /// The 60-bit timestamp field.
    pub fn timestamp(&self) -> i64 {
        let b = &self.bytes;
        i64::from(b[3])
            | i64::from(b[2]) << 8
            | i64::from(b[1]) << 16
            | i64::from(b[0]) << 24
            | i64::from(b[5]) << 32
            | i64::from(b[4]) << 40
            | i64::from(b[7]) << 48
            | i64::from(b[6] & !VERSION_MASK) << 56
    }

    /// Write the 60-bit timestamp field, leaving every other bit alone.
    ///
    /// Returns `false` (and changes nothing) if `value` does not fit.
    fn set_timestamp(&mut self, value: i64) -> bool {
        if !(0..=MAX_TIMESTAMP).contains(&value) {
            return false;
        }

        let [b0, b1, b2, b3, b4, b5, b6, b7] = (value as u64).to_le_bytes();
        let bytes = &mut self.bytes;
        bytes[3] = b0;
        bytes[2] = b1;
        bytes[1] = b2;
        bytes[0] = b3;
        bytes[5] = b4;
        bytes[4] = b5;
        bytes[7] = b6;
        bytes[6] = (bytes[6] & VERSION_MASK) | (b7 & !VERSION_MASK);
        true
    }

    /// The instant this identifier encodes.
    pub fn instant(&self) -> Instant {
        // A 60-bit offset from 1582 ends in the year 5236, well inside the range
        Instant::from_ticks_in_range(GREGORIAN_EPOCH_TICKS + self.timestamp())
    }

    /// The raw octets.
    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.bytes
    }

    /// The identifier as a [`Uuid`].
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes(self.bytes)
    }
}

impl FromStr for TimeGuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TimeGuid {
    /// Canonical lowercase hyphenated form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_uuid().hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bounds::{TICKS_PER_SECOND, UNIX_EPOCH_TICKS};

    /// 2023-03-18T12:32:21Z
    const KNOWN_TICKS: i64 = 638_147_395_410_000_000;

    #[test]
    fn decodes_known_identifier() {
        let guid = TimeGuid::parse("ed8cb880-c588-11ed-8f3a-0242ac120002").unwrap();
        assert_eq!(guid.timestamp(), 138_984_355_410_000_000);
        assert_eq!(guid.instant().ticks(), KNOWN_TICKS);
    }

    #[test]
    fn encodes_known_instant() {
        let instant = Instant::from_ticks(KNOWN_TICKS).unwrap();
        let guid = TimeGuid::min_for_instant(instant).unwrap();
        assert_eq!(guid.to_string(), "ed8cb880-c588-11ed-0000-000000000000");
    }

    #[test]
    fn minimal_identifier_keeps_timestamp_and_zeroes_the_rest() {
        let parsed = TimeGuid::parse("ed8cb880-c588-11ed-8f3a-0242ac120002").unwrap();
        let minimal = TimeGuid::min_for_instant(parsed.instant()).unwrap();

        assert_eq!(minimal.timestamp(), parsed.timestamp());
        assert_eq!(&minimal.as_bytes()[..8], &parsed.as_bytes()[..8]);
        assert!(minimal.as_bytes()[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn gregorian_epoch_is_the_all_zero_timestamp() {
        let instant = Instant::from_ticks(GREGORIAN_EPOCH_TICKS).unwrap();
        let guid = TimeGuid::min_for_instant(instant).unwrap();
        assert_eq!(guid.to_string(), "00000000-0000-1000-0000-000000000000");
        assert_eq!(guid.timestamp(), 0);
    }

    #[test]
    fn largest_timestamp_sets_every_timestamp_bit() {
        let instant = Instant::from_ticks(GREGORIAN_EPOCH_TICKS + MAX_TIMESTAMP).unwrap();
        let guid = TimeGuid::min_for_instant(instant).unwrap();
        assert_eq!(guid.to_string(), "ffffffff-ffff-1fff-0000-000000000000");
        assert_eq!(guid.instant(), instant);
    }

    #[test]
    fn instants_outside_the_field_have_no_identifier() {
        let before = Instant::from_ticks(GREGORIAN_EPOCH_TICKS - 1).unwrap();
        assert!(TimeGuid::min_for_instant(before).is_none());

        let after = Instant::from_ticks(GREGORIAN_EPOCH_TICKS + MAX_TIMESTAMP + 1).unwrap();
        assert!(TimeGuid::min_for_instant(after).is_none());

        assert!(TimeGuid::min_for_instant(Instant::MIN).is_none());
        assert!(TimeGuid::min_for_instant(Instant::MAX).is_none());
    }

    #[test]
    fn unix_epoch_identifier() {
        let epoch = Instant::from_ticks(UNIX_EPOCH_TICKS).unwrap();
        let guid = TimeGuid::min_for_instant(epoch).unwrap();
        assert_eq!(guid.to_string(), "13814000-1dd2-11b2-0000-000000000000");

        let next = Instant::from_ticks(UNIX_EPOCH_TICKS + TICKS_PER_SECOND).unwrap();
        let next_guid = TimeGuid::min_for_instant(next).unwrap();
        assert_eq!(next_guid.timestamp(), guid.timestamp() + TICKS_PER_SECOND);
    }

    #[test]
    fn rejects_other_versions() {
        for version in ["0", "2", "3", "4", "5", "7", "8", "f"] {
            let text = format!("ed8cb880-c588-{version}1ed-8f3a-0242ac120002");
            assert_eq!(TimeGuid::parse(&text), Err(ParseError::WrongVersion), "{text}");
        }
    }

    #[test]
    fn rejects_malformed_literals() {
        for text in [
            "",
            "not-a-guid",
            "ed8cb880-c588-11ed-8f3a-0242ac12000",
            "ed8cb880-c588-11ed-8f3a-0242ac1200022",
            "gd8cb880-c588-11ed-8f3a-0242ac120002",
        ] {
            assert_eq!(TimeGuid::parse(text), Err(ParseError::MalformedText), "{text:?}");
        }
    }

    #[test]
    fn accepts_other_spellings() {
        let expected = TimeGuid::parse("ed8cb880-c588-11ed-8f3a-0242ac120002").unwrap();
        for text in [
            "ED8CB880-C588-11ED-8F3A-0242AC120002",
            "ed8cb880c58811ed8f3a0242ac120002",
            "{ed8cb880-c588-11ed-8f3a-0242ac120002}",
            "urn:uuid:ed8cb880-c588-11ed-8f3a-0242ac120002",
            "  ed8cb880-c588-11ed-8f3a-0242ac120002\n",
        ] {
            assert_eq!(TimeGuid::parse(text), Ok(expected), "{text:?}");
        }
    }

    #[test]
    fn from_bytes_checks_only_the_version_nibble() {
        let mut bytes = [0xff; SIZE];
        assert_eq!(TimeGuid::from_bytes(bytes), Err(ParseError::WrongVersion));

        bytes[VERSION_OCTET] = 0x1f;
        let guid = TimeGuid::from_bytes(bytes).unwrap();
        assert_eq!(guid.timestamp(), MAX_TIMESTAMP);
    }
}
