//! core::history
//!
//! Saved parse results.
//!
//! # Storage
//!
//! - `$TIMECHKO_HISTORY` if set, otherwise `~/.timechko/history.json`
//! - `<history file>.lock` serializes writers (see [`lock`])
//!
//! The file is a JSON array of records:
//!
//! ```json
//! [{"index": 1, "type": "UnixTimeSeconds", "value": "1679142741"}]
//! ```
//!
//! `value` is the text the entry shows for its own format, so replaying a
//! record means parsing `value` as `type`.
//!
//! # Invariants
//!
//! - Indices are unique; a new entry gets the largest index plus one
//! - Writes go to a temp file that is synced and renamed into place
//! - A missing file is an empty history
//! - An unreadable or corrupt file loads as empty history with a warning
//!
//! # Example
//!
//! ```no_run
//! use timechko::core::history::HistoryStore;
//! use timechko::core::parser::parse;
//! use timechko::core::projection::Projection;
//! use timechko::core::types::Kind;
//!
//! let store = HistoryStore::open_default().unwrap();
//! let result = parse("1679142741", Kind::Guess).unwrap();
//! let entry = store.record(&Projection::project(&result), 100).unwrap();
//! println!("saved #{}", entry.index);
//! ```

pub mod lock;

pub use lock::{HistoryLock, LockError};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::parser::parse;
use crate::core::projection::Projection;
use crate::core::types::{Format, Kind, UtcTimestamp};

/// Environment variable naming an explicit history file.
pub const HISTORY_ENV: &str = "TIMECHKO_HISTORY";

/// Errors from history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// I/O error writing the history file.
    #[error("failed to write history file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("history json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The history file is locked by another process.
    #[error(transparent)]
    Lock(#[from] LockError),

    /// The result has no text for its own format.
    #[error("a {0} result has no value to record")]
    NothingToRecord(Format),

    #[error("home directory not found")]
    NoHomeDir,
}

/// One saved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Stable identifier, unique within the file.
    pub index: u64,

    /// Format `value` is written in.
    #[serde(rename = "type")]
    pub format: Format,

    /// The saved text.
    pub value: String,

    /// When the entry was saved. Absent in hand-written files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<UtcTimestamp>,
}

impl HistoryEntry {
    /// Re-parse the saved value under its recorded format.
    ///
    /// Returns `None` if the value no longer parses (e.g. an edited file).
    pub fn replay(&self) -> Option<Projection> {
        parse(&self.value, Kind::from(self.format)).map(|result| Projection::project(&result))
    }
}

/// The outcome of reading the history file.
#[derive(Debug, Default)]
pub struct HistoryLoad {
    /// Entries in file order (oldest first).
    pub entries: Vec<HistoryEntry>,

    /// Why the file was treated as empty, if it was unusable.
    pub warning: Option<String>,
}

/// Handle to a history file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// A store backed by `path`. Nothing is read until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at `$TIMECHKO_HISTORY` or `~/.timechko/history.json`.
    pub fn open_default() -> Result<Self, HistoryError> {
        if let Ok(path) = std::env::var(HISTORY_ENV) {
            return Ok(Self::new(path));
        }
        let home = dirs::home_dir().ok_or(HistoryError::NoHomeDir)?;
        Ok(Self::new(home.join(".timechko/history.json")))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry.
    ///
    /// Never fails: problems reading the file are reported through
    /// [`HistoryLoad::warning`] and the history is treated as empty.
    pub fn load(&self) -> HistoryLoad {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HistoryLoad::default(),
            Err(e) => {
                return HistoryLoad {
                    entries: Vec::new(),
                    warning: Some(format!(
                        "cannot read history file '{}': {}",
                        self.path.display(),
                        e
                    )),
                }
            }
        };

        if contents.trim().is_empty() {
            return HistoryLoad::default();
        }

        match serde_json::from_str(&contents) {
            Ok(entries) => HistoryLoad {
                entries,
                warning: None,
            },
            Err(e) => HistoryLoad {
                entries: Vec::new(),
                warning: Some(format!(
                    "ignoring corrupt history file '{}': {}",
                    self.path.display(),
                    e
                )),
            },
        }
    }

    /// Save `projection` under its own format.
    ///
    /// Drops the oldest entries so that at most `max_entries` remain.
    ///
    /// # Errors
    ///
    /// - [`HistoryError::NothingToRecord`] if the projection has no text for
    ///   its own format
    /// - [`HistoryError::Lock`] if another process is writing
    /// - [`HistoryError::Io`] if the file cannot be written
    pub fn record(
        &self,
        projection: &Projection,
        max_entries: usize,
    ) -> Result<HistoryEntry, HistoryError> {
        let value = projection
            .source_value()
            .ok_or(HistoryError::NothingToRecord(projection.format))?;

        let _lock = HistoryLock::acquire(&self.path)?;
        let mut entries = self.load().entries;

        let index = entries.iter().map(|entry| entry.index).max().unwrap_or(0) + 1;
        let entry = HistoryEntry {
            index,
            format: projection.format,
            value: value.to_string(),
            saved_at: Some(UtcTimestamp::now()),
        };
        entries.push(entry.clone());

        let excess = entries.len().saturating_sub(max_entries.max(1));
        let entries = entries.split_off(excess);

        self.write(&entries)?;
        Ok(entry)
    }

    /// Remove the entry with `index`, returning it if it existed.
    pub fn remove(&self, index: u64) -> Result<Option<HistoryEntry>, HistoryError> {
        let _lock = HistoryLock::acquire(&self.path)?;
        let mut entries = self.load().entries;

        let Some(position) = entries.iter().position(|entry| entry.index == index) else {
            return Ok(None);
        };
        let removed = entries.remove(position);

        self.write(&entries)?;
        Ok(Some(removed))
    }

    /// Remove every entry, returning how many there were.
    pub fn clear(&self) -> Result<usize, HistoryError> {
        let _lock = HistoryLock::acquire(&self.path)?;
        let count = self.load().entries.len();
        self.write(&[])?;
        Ok(count)
    }

    /// Atomically replace the file with `entries`.
    fn write(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let content = serde_json::to_string_pretty(entries)?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(io_error(&temp_path))?;
        file.write_all(content.as_bytes())
            .map_err(io_error(&temp_path))?;
        file.sync_all().map_err(io_error(&temp_path))?;

        fs::rename(&temp_path, &self.path).map_err(io_error(&self.path))?;
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> HistoryError {
    let path = path.to_path_buf();
    move |source| HistoryError::Io { path, source }
}
