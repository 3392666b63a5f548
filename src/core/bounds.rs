//! core::bounds
//!
//! Representable range and the integer windows derived from it.
//!
//! # Ranges
//!
//! Every instant lies in `[0, MAX_TICKS]`, where tick 0 is
//! 0001-01-01T00:00:00Z and `MAX_TICKS` is 9999-12-31T23:59:59.9999999Z.
//! The windows of the numeric formats are derived from that range and are
//! computed at compile time:
//!
//! | Format       | Scale (ticks/unit) | Window                                      |
//! |--------------|--------------------|---------------------------------------------|
//! | Ticks        | 1                  | `[0, MAX_TICKS]`                            |
//! | Unix seconds | 10 000 000         | `[-62135596800, 253402300799]`              |
//! | Unix millis  | 10 000             | `[-62135596800000, 253402300799999]`        |
//! | Unix micros  | 10                 | `[-62135596800000000, 253402300799999999]`  |

/// 100-nanosecond ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// 100-nanosecond ticks in one millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

/// 100-nanosecond ticks in one microsecond.
pub const TICKS_PER_MICROSECOND: i64 = 10;

/// Nanoseconds in one tick.
pub const NANOS_PER_TICK: i64 = 100;

/// Tick count of 9999-12-31T23:59:59.9999999Z, the latest representable instant.
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

/// Tick count of 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Tick count of 1582-10-15T00:00:00Z, the origin of version 1 UUID timestamps.
pub const GREGORIAN_EPOCH_TICKS: i64 = 499_163_040_000_000_000;

/// An inclusive integer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl Bounds {
    /// Check whether `value` lies inside the window (both ends inclusive).
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Window of raw tick counts.
pub const TICKS_BOUNDS: Bounds = Bounds {
    min: 0,
    max: MAX_TICKS,
};

/// Window of tick counts relative to the Unix epoch.
const UNIX_TICKS_BOUNDS: Bounds = Bounds {
    min: TICKS_BOUNDS.min - UNIX_EPOCH_TICKS,
    max: TICKS_BOUNDS.max - UNIX_EPOCH_TICKS,
};

/// Window of a Unix-relative count expressed in units of `scale` ticks.
///
/// Division truncates toward zero, so both ends stay inside the tick range.
pub const fn unix_bounds(scale: i64) -> Bounds {
    Bounds {
        min: UNIX_TICKS_BOUNDS.min / scale,
        max: UNIX_TICKS_BOUNDS.max / scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epochs_are_whole_days() {
        let ticks_per_day = TICKS_PER_SECOND * 86_400;
        assert_eq!(UNIX_EPOCH_TICKS % ticks_per_day, 0);
        assert_eq!(GREGORIAN_EPOCH_TICKS % ticks_per_day, 0);
        assert_eq!((MAX_TICKS + 1) % ticks_per_day, 0);
    }

    #[test]
    fn unix_seconds_window() {
        let bounds = unix_bounds(TICKS_PER_SECOND);
        assert_eq!(bounds.min, -62_135_596_800);
        assert_eq!(bounds.max, 253_402_300_799);
    }

    #[test]
    fn unix_milliseconds_window() {
        let bounds = unix_bounds(TICKS_PER_MILLISECOND);
        assert_eq!(bounds.min, -62_135_596_800_000);
        assert_eq!(bounds.max, 253_402_300_799_999);
    }

    #[test]
    fn unix_microseconds_window() {
        let bounds = unix_bounds(TICKS_PER_MICROSECOND);
        assert_eq!(bounds.min, -62_135_596_800_000_000);
        assert_eq!(bounds.max, 253_402_300_799_999_999);
    }

    #[test]
    fn contains_is_inclusive() {
        assert!(TICKS_BOUNDS.contains(0));
        assert!(TICKS_BOUNDS.contains(MAX_TICKS));
        assert!(!TICKS_BOUNDS.contains(-1));
        assert!(!TICKS_BOUNDS.contains(MAX_TICKS + 1));
    }
}
