//! Timechko - convert timestamps between the common machine encodings
//!
//! Timechko reads a timestamp written as ISO-8601 calendar text, a Unix
//! count (seconds, milliseconds or microseconds), a 100-nanosecond tick
//! count, or a time-based (version 1) UUID, and shows the same instant in
//! every one of those encodings.
//!
//! # Architecture
//!
//! - [`core`] - Parsing, disambiguation, projection, config and history
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`ui`] - Output formatting and verbosity
//!
//! # Example
//!
//! ```
//! use timechko::core::parser::parse;
//! use timechko::core::projection::Projection;
//! use timechko::core::types::Kind;
//!
//! let result = parse("1679142741", Kind::Guess).unwrap();
//! let projection = Projection::project(&result);
//! assert_eq!(projection.date_time, "2023-03-18T12:32:21Z");
//! ```

pub mod cli;
pub mod core;
pub mod ui;
