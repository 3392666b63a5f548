//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! 1. `$TIMECHKO_CONFIG` if set (nothing else is searched)
//! 2. `$XDG_CONFIG_HOME/timechko/config.toml`
//! 3. `~/.timechko/config.toml` (write location when no file exists)
//!
//! Writes go back to the file that was loaded.
//!
//! # Example
//!
//! ```no_run
//! use timechko::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Default kind: {}", config.default_kind());
//! println!("History kept: {}", config.history_max_entries());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, HistoryConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::Kind;
use crate::ui::output::OutputMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TIMECHKO_CONFIG";

/// Default cap on stored history entries.
pub const DEFAULT_HISTORY_MAX_ENTRIES: usize = 100;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything not configured.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. A missing file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let config = Self::load_unchecked()?;
        config.global.validate()?;
        Ok(config)
    }

    /// Load configuration without validating values.
    ///
    /// The `config` commands use this so a file holding a bad value can
    /// still be listed and repaired.
    pub fn load_unchecked() -> Result<Config, ConfigError> {
        let path = Self::find_config_file();
        let global = match &path {
            Some(path) => Self::read_config(path)?,
            None => GlobalConfig::default(),
        };
        Ok(Config { global, path })
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let global = Self::read_config(path)?;
        global.validate()?;
        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn find_config_file() -> Option<PathBuf> {
        // 1. $TIMECHKO_CONFIG is authoritative, even when the file is missing
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            return path.exists().then_some(path);
        }

        // 2. Check $XDG_CONFIG_HOME/timechko/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("timechko/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.timechko/config.toml
        dirs::home_dir()
            .map(|home| home.join(".timechko/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path a new config file is written to.
    ///
    /// `$TIMECHKO_CONFIG` if set, otherwise `~/.timechko/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".timechko/config.toml"))
    }

    /// Write `global` atomically to the file this config was loaded from,
    /// or to [`Config::config_path`] if none was.
    ///
    /// Returns the path written.
    pub fn write(&self, global: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = match self.loaded_from() {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };
        Self::write_to(&path, global)?;
        Ok(path)
    }

    /// Write config atomically to `path`.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Write to temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Kind used when none is requested.
    ///
    /// Defaults to `Guess`.
    pub fn default_kind(&self) -> Kind {
        self.global
            .default_kind
            .as_deref()
            .map(Kind::from_name_or_guess)
            .unwrap_or_default()
    }

    /// Output mode.
    ///
    /// Defaults to `table`.
    pub fn output(&self) -> OutputMode {
        self.global
            .output
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    /// Whether `parse --save` records entries.
    ///
    /// Defaults to `true`.
    pub fn history_enabled(&self) -> bool {
        self.global
            .history
            .as_ref()
            .and_then(|h| h.enabled)
            .unwrap_or(true)
    }

    /// Maximum number of stored history entries.
    ///
    /// Defaults to [`DEFAULT_HISTORY_MAX_ENTRIES`].
    pub fn history_max_entries(&self) -> usize {
        self.global
            .history
            .as_ref()
            .and_then(|h| h.max_entries)
            .unwrap_or(DEFAULT_HISTORY_MAX_ENTRIES)
    }

    /// Get the path of the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_kind(), Kind::Guess);
        assert_eq!(config.output(), OutputMode::Table);
        assert!(config.history_enabled());
        assert_eq!(config.history_max_entries(), DEFAULT_HISTORY_MAX_ENTRIES);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
            default_kind = "Ticks"
            output = "json"

            [history]
            enabled = false
            max_entries = 5
            "#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.default_kind(), Kind::Ticks);
        assert_eq!(config.output(), OutputMode::Json);
        assert!(!config.history_enabled());
        assert_eq!(config.history_max_entries(), 5);
        assert_eq!(config.loaded_from(), Some(config_path.as_path()));
    }

    #[test]
    fn parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "default_kind = [").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_values_rejected_on_load() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        fs::write(&config_path, "default_kind = \"Seconds\"").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn write_then_load() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/config.toml");

        let global = GlobalConfig {
            default_kind: Some("UnixTimeGuess".to_string()),
            ..Default::default()
        };
        Config::write_to(&config_path, &global).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.default_kind(), Kind::UnixTimeGuess);
        assert!(!config_path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn write_goes_back_to_the_loaded_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("xdg/timechko/config.toml");
        Config::write_to(&config_path, &GlobalConfig::default()).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        let global = GlobalConfig {
            default_kind: Some("Ticks".to_string()),
            ..Default::default()
        };
        let written = config.write(&global).unwrap();

        assert_eq!(written, config_path);
        let reloaded = Config::load_from(&config_path).unwrap();
        assert_eq!(reloaded.default_kind(), Kind::Ticks);
    }

    #[test]
    fn write_refuses_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");

        let global = GlobalConfig {
            output: Some("xml".to_string()),
            ..Default::default()
        };
        assert!(Config::write_to(&config_path, &global).is_err());
        assert!(!config_path.exists());
    }
}
