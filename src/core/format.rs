//! core::format
//!
//! The numeric format registry.
//!
//! # Formats
//!
//! A raw integer can be read as one of four encodings. Each one knows its
//! scale (ticks per unit) and its valid window, and can attempt to turn an
//! integer into an [`Instant`]:
//!
//! - [`NumericFormat::UnixSeconds`]
//! - [`NumericFormat::UnixMilliseconds`]
//! - [`NumericFormat::UnixMicroseconds`]
//! - [`NumericFormat::Ticks`]
//!
//! Out-of-window integers are an expected outcome, so decoding reports
//! absence rather than an error.
//!
//! # Example
//!
//! ```
//! use timechko::core::format::NumericFormat;
//!
//! let instant = NumericFormat::UnixSeconds.try_decode(0).unwrap();
//! assert_eq!(instant.unix_ticks(), 0);
//! assert_eq!(NumericFormat::UnixMilliseconds.encode(instant), 0);
//!
//! assert!(NumericFormat::Ticks.try_decode(-1).is_none());
//! ```

use super::bounds::{
    unix_bounds, Bounds, TICKS_BOUNDS, TICKS_PER_MICROSECOND, TICKS_PER_MILLISECOND,
    TICKS_PER_SECOND, UNIX_EPOCH_TICKS,
};
use super::types::{Format, Instant};

/// An integer encoding of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericFormat {
    /// Seconds since 1970-01-01T00:00:00Z.
    UnixSeconds,
    /// Milliseconds since 1970-01-01T00:00:00Z.
    UnixMilliseconds,
    /// Microseconds since 1970-01-01T00:00:00Z.
    UnixMicroseconds,
    /// 100-nanosecond ticks since 0001-01-01T00:00:00Z.
    Ticks,
}

impl NumericFormat {
    /// Registry order. Disambiguation breaks ties in this order.
    pub const ALL: [NumericFormat; 4] = [
        NumericFormat::UnixSeconds,
        NumericFormat::UnixMilliseconds,
        NumericFormat::UnixMicroseconds,
        NumericFormat::Ticks,
    ];

    /// The Unix-relative formats, in registry order.
    pub const UNIX: [NumericFormat; 3] = [
        NumericFormat::UnixSeconds,
        NumericFormat::UnixMilliseconds,
        NumericFormat::UnixMicroseconds,
    ];

    /// Ticks per unit of this format.
    pub const fn scale(self) -> i64 {
        match self {
            NumericFormat::UnixSeconds => TICKS_PER_SECOND,
            NumericFormat::UnixMilliseconds => TICKS_PER_MILLISECOND,
            NumericFormat::UnixMicroseconds => TICKS_PER_MICROSECOND,
            NumericFormat::Ticks => 1,
        }
    }

    /// The inclusive window of integers this format accepts.
    pub const fn bounds(self) -> Bounds {
        match self {
            NumericFormat::Ticks => TICKS_BOUNDS,
            unix => unix_bounds(unix.scale()),
        }
    }

    /// The output format tag for results decoded with this format.
    pub const fn format(self) -> Format {
        match self {
            NumericFormat::UnixSeconds => Format::UnixTimeSeconds,
            NumericFormat::UnixMilliseconds => Format::UnixTimeMilliseconds,
            NumericFormat::UnixMicroseconds => Format::UnixTimeMicroseconds,
            NumericFormat::Ticks => Format::Ticks,
        }
    }

    /// The numeric format behind an output format tag, if it has one.
    pub const fn from_format(format: Format) -> Option<Self> {
        match format {
            Format::UnixTimeSeconds => Some(NumericFormat::UnixSeconds),
            Format::UnixTimeMilliseconds => Some(NumericFormat::UnixMilliseconds),
            Format::UnixTimeMicroseconds => Some(NumericFormat::UnixMicroseconds),
            Format::Ticks => Some(NumericFormat::Ticks),
            Format::DateTime | Format::TimeGuid => None,
        }
    }

    /// Interpret `value` in this format.
    ///
    /// Returns `None` if `value` lies outside [`NumericFormat::bounds`].
    pub fn try_decode(self, value: i64) -> Option<Instant> {
        if !self.bounds().contains(value) {
            return None;
        }

        let ticks = match self {
            NumericFormat::Ticks => value,
            // Inside the window this cannot overflow
            unix => UNIX_EPOCH_TICKS + value * unix.scale(),
        };
        Instant::from_ticks(ticks)
    }

    /// Express `instant` in this format, truncating toward zero.
    pub const fn encode(self, instant: Instant) -> i64 {
        match self {
            NumericFormat::Ticks => instant.ticks(),
            unix => instant.unix_ticks() / unix.scale(),
        }
    }
}

impl std::fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.format(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bounds::MAX_TICKS;

    #[test]
    fn ticks_apply_no_scale() {
        let instant = NumericFormat::Ticks.try_decode(42).unwrap();
        assert_eq!(instant.ticks(), 42);
    }

    #[test]
    fn unix_formats_offset_from_epoch() {
        let seconds = NumericFormat::UnixSeconds.try_decode(1).unwrap();
        assert_eq!(seconds.ticks(), UNIX_EPOCH_TICKS + 10_000_000);

        let millis = NumericFormat::UnixMilliseconds.try_decode(-1).unwrap();
        assert_eq!(millis.ticks(), UNIX_EPOCH_TICKS - 10_000);

        let micros = NumericFormat::UnixMicroseconds.try_decode(3).unwrap();
        assert_eq!(micros.ticks(), UNIX_EPOCH_TICKS + 30);
    }

    #[test]
    fn boundaries_are_accepted_and_neighbours_rejected() {
        for format in NumericFormat::ALL {
            let bounds = format.bounds();
            assert!(format.try_decode(bounds.min).is_some(), "{format} min");
            assert!(format.try_decode(bounds.max).is_some(), "{format} max");
            assert!(format.try_decode(bounds.min - 1).is_none(), "{format} min-1");
            assert!(format.try_decode(bounds.max + 1).is_none(), "{format} max+1");
        }
    }

    #[test]
    fn extreme_integers_do_not_overflow() {
        for format in NumericFormat::ALL {
            assert!(format.try_decode(i64::MIN).is_none());
            assert!(format.try_decode(i64::MAX).is_none());
        }
    }

    #[test]
    fn minimum_unix_values_land_on_origin() {
        for format in NumericFormat::UNIX {
            let instant = format.try_decode(format.bounds().min).unwrap();
            assert_eq!(instant, Instant::MIN, "{format}");
        }
    }

    #[test]
    fn encode_truncates_toward_zero() {
        let instant = Instant::from_ticks(UNIX_EPOCH_TICKS + 15_000_000).unwrap();
        assert_eq!(NumericFormat::UnixSeconds.encode(instant), 1);

        let before = Instant::from_ticks(UNIX_EPOCH_TICKS - 15_000_000).unwrap();
        assert_eq!(NumericFormat::UnixSeconds.encode(before), -1);
    }

    #[test]
    fn encode_max_instant_is_window_max() {
        let max = Instant::from_ticks(MAX_TICKS).unwrap();
        for format in NumericFormat::ALL {
            assert_eq!(format.encode(max), format.bounds().max, "{format}");
        }
    }

    #[test]
    fn format_tags_roundtrip() {
        for format in NumericFormat::ALL {
            assert_eq!(NumericFormat::from_format(format.format()), Some(format));
        }
        assert_eq!(NumericFormat::from_format(Format::DateTime), None);
        assert_eq!(NumericFormat::from_format(Format::TimeGuid), None);
    }
}
