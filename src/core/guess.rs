//! core::guess
//!
//! Disambiguation of raw integers.
//!
//! # Heuristic
//!
//! Most integers people paste are recent wall-clock timestamps, so the
//! candidate whose instant lies closest to [`REFERENCE`]
//! (2023-01-01T00:00:00Z) wins. Candidates that cannot decode the integer
//! are dropped first. When two candidates are equally close the one listed
//! first wins, so callers control precedence through the order of the
//! candidate slice (normally [`NumericFormat::ALL`]).
//!
//! # Example
//!
//! ```
//! use timechko::core::format::NumericFormat;
//! use timechko::core::guess::disambiguate;
//!
//! let found = disambiguate(1_679_142_741, &NumericFormat::ALL).unwrap();
//! assert_eq!(found.format, NumericFormat::UnixSeconds);
//!
//! let found = disambiguate(1_679_142_741_000, &NumericFormat::ALL).unwrap();
//! assert_eq!(found.format, NumericFormat::UnixMilliseconds);
//! ```

use super::format::NumericFormat;
use super::types::Instant;

/// 2023-01-01T00:00:00Z, the point candidates are measured against.
pub const REFERENCE: Instant = Instant::from_ticks_in_range(638_081_280_000_000_000);

/// The winning reading of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Format that decoded the integer.
    pub format: NumericFormat,
    /// The decoded instant.
    pub instant: Instant,
}

/// Pick the most plausible reading of `value` among `candidates`.
///
/// Returns `None` if no candidate can decode `value`.
pub fn disambiguate(value: i64, candidates: &[NumericFormat]) -> Option<Interpretation> {
    candidates
        .iter()
        .filter_map(|&format| {
            format
                .try_decode(value)
                .map(|instant| Interpretation { format, instant })
        })
        // min_by_key keeps the first of equal minima
        .min_by_key(|candidate| candidate.instant.distance(REFERENCE))
}
