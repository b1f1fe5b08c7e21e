//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// iflist: network interface lister
///
/// Enumerates host network interfaces and their IP addresses, filtered
/// by name patterns and up/down status.
#[derive(Debug, Parser)]
#[command(name = "iflist")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Substring of interface name or display name to exclude (can be specified multiple times)
    #[arg(
        long = "exclude",
        short = 'e',
        value_name = "PATTERN",
        conflicts_with = "include_patterns"
    )]
    pub exclude_patterns: Vec<String>,

    /// Substring of interface name or display name to include (can be specified multiple times).
    /// Switches to include mode: only matching interfaces are listed.
    #[arg(long = "include", short = 'i', value_name = "PATTERN")]
    pub include_patterns: Vec<String>,

    /// Drop interfaces that are not up
    #[arg(long = "exclude-down", conflicts_with = "include_down")]
    pub exclude_down: bool,

    /// Keep interfaces that are not up
    #[arg(long = "include-down")]
    pub include_down: bool,

    /// Which view of the filtered interfaces to print
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level used by the `log` view
    #[arg(long = "summary-level", value_enum)]
    pub summary_level: Option<LevelArg>,

    /// Log level for per-interface include/exclude decisions
    #[arg(long = "decision-level", value_enum)]
    pub decision_level: Option<LevelArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for iflist
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "iflist.toml")]
        output: PathBuf,
    },
}

/// View of the filtered interface list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interfaces with status and addresses
    Interfaces,
    /// Interface names only
    Names,
    /// All addresses, flattened
    Addresses,
    /// Interface name to addresses
    Map,
    /// Log each interface and address through the logger
    Log,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interfaces => "interfaces",
            Self::Names => "names",
            Self::Addresses => "addresses",
            Self::Map => "map",
            Self::Log => "log",
        };
        f.write_str(name)
    }
}

/// Log level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    /// TRACE level
    Trace,
    /// DEBUG level
    Debug,
    /// INFO level
    Info,
    /// WARN level
    Warn,
    /// ERROR level
    Error,
}

impl From<LevelArg> for tracing::Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Trace => Self::TRACE,
            LevelArg::Debug => Self::DEBUG,
            LevelArg::Info => Self::INFO,
            LevelArg::Warn => Self::WARN,
            LevelArg::Error => Self::ERROR,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap errors instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or conflicting arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns the explicit down-interface policy, if any flag was given.
    #[must_use]
    pub const fn down_policy(&self) -> Option<bool> {
        if self.exclude_down {
            Some(true)
        } else if self.include_down {
            Some(false)
        } else {
            None
        }
    }
}
