//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use tracing::Level;

use super::cli::OutputFormat;

/// Default view printed by the CLI.
pub const FORMAT: OutputFormat = OutputFormat::Interfaces;

/// Default level for the `log` view.
///
/// The library default is TRACE; the CLI uses INFO so the summary is
/// visible under the default log filter.
pub const SUMMARY_LEVEL: Level = Level::INFO;

/// Default directive for the log subscriber without `--verbose`.
pub const LOG_LEVEL: Level = Level::INFO;

/// Default level for per-interface decision messages.
pub const DECISION_LEVEL: Level = Level::TRACE;

/// Whether down interfaces are dropped when neither CLI nor TOML says otherwise.
///
/// The `log` view keeps them so the summary shows every interface.
#[must_use]
pub const fn exclude_down(format: OutputFormat) -> bool {
    !matches!(format, OutputFormat::Log)
}
