//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$TIMECHKO_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/timechko/config.toml`
//! 3. `~/.timechko/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing so that a typo in a kind name
//! is reported instead of silently falling back to guessing.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Kind;
use crate::ui::output::OutputMode;

/// User configuration.
///
/// # Example
///
/// ```toml
/// default_kind = "UnixTimeGuess"
/// output = "json"
///
/// [history]
/// enabled = true
/// max_entries = 50
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Kind used by `parse` when `--kind` is not given
    pub default_kind: Option<String>,

    /// Output mode ("table" or "json")
    pub output: Option<String>,

    /// History settings
    pub history: Option<HistoryConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(kind) = &self.default_kind {
            kind.parse::<Kind>().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "invalid default_kind '{}', must be one of: {}",
                    kind,
                    Kind::ALL.map(Kind::name).join(", ")
                ))
            })?;
        }

        if let Some(output) = &self.output {
            output.parse::<OutputMode>().map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "invalid output '{}', must be one of: {}",
                    output,
                    OutputMode::NAMES.join(", ")
                ))
            })?;
        }

        if let Some(history) = &self.history {
            history.validate()?;
        }

        Ok(())
    }
}

/// History settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// Whether `parse --save` records anything
    pub enabled: Option<bool>,

    /// Oldest entries are dropped beyond this many
    pub max_entries: Option<usize>,
}

impl HistoryConfig {
    /// Validate the history configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == Some(0) {
            return Err(ConfigError::InvalidValue(
                "history.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
