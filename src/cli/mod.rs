//! cli
//!
//! Command-line interface layer for Timechko.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and merge it with flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Interpretation happens in [`crate::core`]; the
//! handlers only pick the kind, call the parser and print.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::{self, OutputMode, Verbosity};

/// Execution context shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Enable debug output
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
    /// How results are printed
    pub output: OutputMode,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Whether results are printed as JSON.
    pub fn json(&self) -> bool {
        self.output == OutputMode::Json
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // config commands tolerate invalid values so they can be repaired
    let config = match cli.command {
        Command::Config { .. } => Config::load_unchecked(),
        _ => Config::load(),
    }
    .context("Failed to load config")?;

    // --json always wins over the configured output mode
    let output = if cli.json {
        OutputMode::Json
    } else {
        config.output()
    };

    let ctx = Context {
        debug: cli.debug,
        quiet: cli.quiet,
        output,
        config,
    };

    if let Some(path) = ctx.config.loaded_from() {
        output::debug(
            format!("loaded config from {}", path.display()),
            ctx.verbosity(),
        );
    }

    commands::dispatch(cli.command, &ctx)
}
