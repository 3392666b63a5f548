//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::{Config, HistoryConfig};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Keys accepted by `config get` and `config set`.
const KEYS: [&str; 4] = [
    "default_kind",
    "output",
    "history.enabled",
    "history.max_entries",
];

/// Effective value of `key`, with defaults applied.
fn effective(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "default_kind" => config.default_kind().to_string(),
        "output" => config.output().name().to_string(),
        "history.enabled" => config.history_enabled().to_string(),
        "history.max_entries" => config.history_max_entries().to_string(),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    output::result(effective(&ctx.config, key)?);
    Ok(())
}

/// Set a configuration value.
///
/// Updates the loaded config file in place, or creates
/// `$TIMECHKO_CONFIG` / `~/.timechko/config.toml` if none exists.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut global = ctx.config.global.clone();

    match key {
        "default_kind" => global.default_kind = Some(value.to_string()),
        "output" => global.output = Some(value.to_string()),
        "history.enabled" => {
            let enabled = value
                .parse::<bool>()
                .with_context(|| format!("history.enabled must be true or false, got '{}'", value))?;
            global
                .history
                .get_or_insert_with(HistoryConfig::default)
                .enabled = Some(enabled);
        }
        "history.max_entries" => {
            let max = value
                .parse::<usize>()
                .with_context(|| format!("history.max_entries must be a number, got '{}'", value))?;
            global
                .history
                .get_or_insert_with(HistoryConfig::default)
                .max_entries = Some(max);
        }
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }

    let path = ctx
        .config
        .write(&global)
        .context("Failed to write config")?;
    output::debug(format!("wrote {}", path.display()), ctx.verbosity());
    output::success(format!("Set {} = {}", key, value), ctx.verbosity());

    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let source = ctx
        .config
        .loaded_from()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    output::print(format!("# Configuration ({})", source), ctx.verbosity());

    for key in KEYS {
        output::result(format!("{} = {}", key, effective(&ctx.config, key)?));
    }

    Ok(())
}
