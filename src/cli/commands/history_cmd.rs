//! history command - List, remove, or clear saved results

use crate::cli::Context;
use crate::core::history::HistoryStore;
use crate::ui::output;
use anyhow::{bail, Result};

/// Print every saved result, newest first.
///
/// Each entry is re-parsed under its recorded format. Entries that no
/// longer parse are reported and skipped.
pub fn list(ctx: &Context) -> Result<()> {
    let verbosity = ctx.verbosity();
    let store = HistoryStore::open_default()?;
    output::debug(format!("history file: {}", store.path().display()), verbosity);

    let load = store.load();
    if let Some(warning) = load.warning {
        output::warn(warning, verbosity);
    }

    let mut projections = Vec::new();
    for entry in load.entries.iter().rev() {
        match entry.replay() {
            Some(projection) => projections.push((entry, projection)),
            None => output::warn(
                format!(
                    "entry #{} ({} '{}') no longer parses",
                    entry.index, entry.format, entry.value
                ),
                verbosity,
            ),
        }
    }

    if ctx.json() {
        let items: Vec<_> = projections
            .into_iter()
            .map(|(entry, projection)| {
                serde_json::json!({
                    "index": entry.index,
                    "projection": projection,
                })
            })
            .collect();
        output::result(serde_json::to_string(&items)?);
        return Ok(());
    }

    if projections.is_empty() {
        output::print("No saved results.", verbosity);
        return Ok(());
    }

    let blocks: Vec<_> = projections
        .iter()
        .map(|(entry, projection)| {
            format!(
                "{}\n{}",
                output::format_history_entry(entry),
                output::format_projection(projection)
            )
        })
        .collect();
    output::result(blocks.join("\n\n"));

    Ok(())
}

/// Remove the entry with `index`.
pub fn remove(ctx: &Context, index: u64) -> Result<()> {
    let store = HistoryStore::open_default()?;
    match store.remove(index)? {
        Some(entry) => {
            output::success(
                format!("Removed {}", output::format_history_entry(&entry)),
                ctx.verbosity(),
            );
            Ok(())
        }
        None => bail!("no history entry #{}", index),
    }
}

/// Remove every entry.
pub fn clear(ctx: &Context) -> Result<()> {
    let store = HistoryStore::open_default()?;
    let count = store.clear()?;
    output::success(
        format!(
            "Removed {} entr{}",
            count,
            if count == 1 { "y" } else { "ies" }
        ),
        ctx.verbosity(),
    );
    Ok(())
}
