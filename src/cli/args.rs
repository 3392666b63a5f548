//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};

/// Timechko - convert timestamps between calendar text, Unix counts, ticks
/// and version 1 UUIDs
#[derive(Parser, Debug)]
#[command(name = "timechko")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the current time
    #[command(
        name = "now",
        long_about = "Print the current UTC time, truncated to whole seconds, \
            as ISO-8601 calendar text."
    )]
    Now,

    /// Show a timestamp in every encoding
    #[command(
        name = "parse",
        long_about = "Interpret a timestamp and show it in every encoding.\n\n\
            The input may be ISO-8601 calendar text, a Unix count in seconds, \
            milliseconds or microseconds, a count of 100-nanosecond ticks since \
            0001-01-01, or a version 1 UUID. Without --kind the input is guessed: \
            calendar text first, then integers (the reading closest to 2023-01-01 \
            wins), then UUIDs.",
        after_help = "\
EXAMPLES:
    # Guess what a number is
    timechko parse 1679142741

    # Force a reading
    timechko parse 1679142741 --kind UnixTimeMilliseconds

    # Decode the timestamp inside a UUID
    timechko parse ed8cb880-c588-11ed-8f3a-0242ac120002

    # Keep the result in history
    timechko parse 2023-03-18T12:32:21Z --save

KINDS:
    DateTime, UnixTimeSeconds, UnixTimeMilliseconds, UnixTimeMicroseconds,
    UnixTimeGuess, Ticks, TimeGuid, Guess"
    )]
    Parse {
        /// Text to interpret
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Interpretation to use (defaults to config default_kind, else Guess)
        #[arg(short, long)]
        kind: Option<String>,

        /// Save the result to history
        #[arg(long)]
        save: bool,
    },

    /// Manage saved results
    #[command(
        name = "history",
        after_help = "\
EXAMPLES:
    # Show saved results, newest first
    timechko history list

    # Forget one entry
    timechko history remove 3

    # Forget everything
    timechko history clear"
    )]
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        after_help = "\
EXAMPLES:
    # Show every value, including defaults
    timechko config list

    # Always read bare numbers as Unix time
    timechko config set default_kind UnixTimeGuess

    # Keep at most 20 history entries
    timechko config set history.max_entries 20

KEYS:
    default_kind, output, history.enabled, history.max_entries"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for timechko commands.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    timechko completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    timechko completion zsh >> ~/.zshrc

    # Fish
    timechko completion fish > ~/.config/fish/completions/timechko.fish

    # PowerShell
    timechko completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryAction {
    /// Show saved results, newest first
    List,
    /// Remove one saved result
    Remove {
        /// Index shown by `history list`
        index: u64,
    },
    /// Remove every saved result
    Clear,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_with_kind_and_save() {
        let cli = Cli::try_parse_from(["timechko", "parse", "0", "--kind", "Ticks", "--save"])
            .unwrap();
        match cli.command {
            Command::Parse { input, kind, save } => {
                assert_eq!(input, "0");
                assert_eq!(kind.as_deref(), Some("Ticks"));
                assert!(save);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_input_is_not_a_flag() {
        let cli = Cli::try_parse_from(["timechko", "parse", "-62135596800"]).unwrap();
        assert!(matches!(cli.command, Command::Parse { input, .. } if input == "-62135596800"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["timechko", "now", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn history_remove_takes_an_index() {
        assert!(Cli::try_parse_from(["timechko", "history", "remove", "x"]).is_err());
        let cli = Cli::try_parse_from(["timechko", "history", "remove", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::History {
                action: HistoryAction::Remove { index: 3 }
            }
        ));
    }
}
