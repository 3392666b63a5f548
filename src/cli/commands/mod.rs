//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into [`crate::core`]
//! 3. Formats and displays output through [`crate::ui::output`]

mod completion;
mod config_cmd;
mod history_cmd;
mod now;
mod parse_cmd;

// Re-export command functions for testing and direct invocation
pub use completion::{completion, write_completion};
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use history_cmd::{clear as history_clear, list as history_list, remove as history_remove};
pub use now::now;
pub use parse_cmd::parse;

use crate::cli::args::{Command, ConfigAction, HistoryAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Now => now(ctx),
        Command::Parse { input, kind, save } => parse(ctx, &input, kind.as_deref(), save),
        Command::History { action } => match action {
            HistoryAction::List => history_list(ctx),
            HistoryAction::Remove { index } => history_remove(ctx, index),
            HistoryAction::Clear => history_clear(ctx),
        },
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
