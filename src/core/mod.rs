//! core
//!
//! Core domain types and operations for Timechko.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Instant, Format, Kind, ParseError
//! - [`bounds`] - Tick constants and valid input windows
//! - [`format`] - Numeric encodings of an instant
//! - [`calendar`] - ISO-8601 parsing and rendering
//! - [`time_guid`] - Version 1 UUID timestamp codec
//! - [`guess`] - Disambiguation of bare integers
//! - [`parser`] - Kind dispatch and guess mode
//! - [`projection`] - Every representation of a result
//! - [`api`] - Text-in, text-out surface
//! - [`config`] - Configuration schema and loading
//! - [`history`] - Saved parse results
//!
//! # Design Principles
//!
//! - An [`types::Instant`] is always in range, so conversions cannot fail
//! - Parsing is pure; only [`config`] and [`history`] touch the filesystem
//! - Guessing is deterministic

pub mod api;
pub mod bounds;
pub mod calendar;
pub mod config;
pub mod format;
pub mod guess;
pub mod history;
pub mod parser;
pub mod projection;
pub mod time_guid;
pub mod types;
