//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Results go to stdout; diagnostics (`[debug]`, `warning:`, `error:`) go
//! to stderr. When `--json` is enabled, results are machine-readable JSON.

use std::fmt::Display;
use std::str::FromStr;

use crate::core::history::HistoryEntry;
use crate::core::projection::Projection;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Aligned `name value` lines
    #[default]
    Table,
    /// Compact JSON, one document per result
    Json,
}

impl OutputMode {
    /// Names accepted in config files.
    pub const NAMES: [&'static str; 2] = ["table", "json"];

    /// The config name of this mode.
    pub const fn name(self) -> &'static str {
        match self {
            OutputMode::Table => "table",
            OutputMode::Json => "json",
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "table" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a result. Results are the point of the command, so quiet mode
/// does not suppress them.
pub fn result(message: impl Display) {
    println!("{}", message);
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Shown in place of an identifier the instant cannot carry.
const NO_TIME_GUID: &str = "(none)";

/// Format a projection as aligned `name value` lines.
pub fn format_projection(projection: &Projection) -> String {
    let rows = [
        ("type", projection.format.name()),
        ("dateTime", projection.date_time.as_str()),
        ("unixTimeSeconds", projection.unix_time_seconds.as_str()),
        ("unixTimeMilliseconds", projection.unix_time_milliseconds.as_str()),
        ("unixTimeMicroseconds", projection.unix_time_microseconds.as_str()),
        ("ticks", projection.ticks.as_str()),
        (
            "timeGuid",
            projection.time_guid.as_deref().unwrap_or(NO_TIME_GUID),
        ),
    ];

    rows.iter()
        .map(|(name, value)| format!("{:<22}{}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a history entry header line.
pub fn format_history_entry(entry: &HistoryEntry) -> String {
    format!("#{} {} {}", entry.index, entry.format, entry.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse;
    use crate::core::types::{Format, Kind};

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn output_mode_names() {
        for name in OutputMode::NAMES {
            assert_eq!(name.parse::<OutputMode>().unwrap().name(), name);
        }
        assert!("yaml".parse::<OutputMode>().is_err());
    }

    #[test]
    fn projection_table() {
        let result = parse("0", Kind::Ticks).unwrap();
        let table = format_projection(&Projection::project(&result));
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "type                  Ticks");
        assert_eq!(lines[1], "dateTime              0001-01-01Z");
        assert_eq!(lines[6], "timeGuid              (none)");
    }

    #[test]
    fn history_entry_header() {
        let entry = HistoryEntry {
            index: 4,
            format: Format::UnixTimeSeconds,
            value: "1679142741".to_string(),
            saved_at: None,
        };
        assert_eq!(format_history_entry(&entry), "#4 UnixTimeSeconds 1679142741");
    }
}
