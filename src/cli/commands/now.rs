//! now command - Print the current time

use crate::cli::Context;
use crate::core::api;
use crate::ui::output;
use anyhow::Result;

/// Print the current UTC time as calendar text.
///
/// In JSON mode the text is printed as a JSON string.
pub fn now(ctx: &Context) -> Result<()> {
    let text = api::now();
    if ctx.json() {
        output::result(serde_json::to_string(&text)?);
    } else {
        output::result(text);
    }
    Ok(())
}
