//! parse command - Show a timestamp in every encoding

use crate::cli::Context;
use crate::core::api::NULL;
use crate::core::history::HistoryStore;
use crate::core::parser::try_parse;
use crate::core::projection::Projection;
use crate::core::types::Kind;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Interpret `input` and print its projection.
///
/// `kind` overrides the configured default and must name a known kind.
pub fn parse(ctx: &Context, input: &str, kind: Option<&str>, save: bool) -> Result<()> {
    let verbosity = ctx.verbosity();

    let kind = match kind {
        Some(name) => name.parse::<Kind>().with_context(|| {
            format!(
                "expected one of: {}",
                Kind::ALL.map(Kind::name).join(", ")
            )
        })?,
        None => ctx.config.default_kind(),
    };
    output::debug(format!("parsing {:?} as {}", input, kind), verbosity);

    let result = match try_parse(input, kind) {
        Ok(result) => result,
        Err(err) => {
            output::debug(format!("rejected: {}", err), verbosity);
            if ctx.json() {
                output::result(NULL);
            }
            bail!("no interpretation for '{}'", input);
        }
    };
    output::debug(
        format!("read as {} ({} ticks)", result.format(), result.instant()),
        verbosity,
    );

    let projection = Projection::project(&result);
    if ctx.json() {
        output::result(projection.to_json()?);
    } else {
        output::result(output::format_projection(&projection));
    }

    if save {
        save_to_history(ctx, &projection)?;
    }

    Ok(())
}

fn save_to_history(ctx: &Context, projection: &Projection) -> Result<()> {
    let verbosity = ctx.verbosity();

    if !ctx.config.history_enabled() {
        output::warn("history is disabled in config; not saved", verbosity);
        return Ok(());
    }

    let store = HistoryStore::open_default()?;
    if let Some(warning) = store.load().warning {
        output::warn(warning, verbosity);
    }

    let entry = store
        .record(projection, ctx.config.history_max_entries())
        .with_context(|| format!("Failed to save to {}", store.path().display()))?;

    // stdout carries the result; keep it parseable in JSON mode
    if ctx.json() {
        output::debug(format!("saved as #{}", entry.index), verbosity);
    } else {
        output::success(format!("Saved as #{}", entry.index), verbosity);
    }
    Ok(())
}
