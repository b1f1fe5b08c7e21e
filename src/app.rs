//! Process-level plumbing for the `iflist` binary: exit codes, config
//! error hints and the log subscriber.

use iflist::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Exit codes reported by `iflist`.
pub mod exit_code {
    use std::process::ExitCode;

    /// Output written.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, unreadable or invalid config file, failed `init`.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The selected view could not be written to stdout.
    pub fn output_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints a follow-up hint for config errors the user can fix directly.
pub fn print_config_hint(error: &ConfigError) {
    let hint = match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => {
            "Run 'iflist init' to generate a configuration template."
        }
        ConfigError::ConflictingPatterns => {
            "Use --include or --exclude on the command line to override the file."
        }
        ConfigError::JsonUnsupported => "Pick another --format, or drop --json.",
        _ => return,
    };
    eprintln!("\n{hint}");
}

/// Installs a stderr subscriber with `level` as its default directive.
///
/// `RUST_LOG` still takes precedence when set.
pub fn setup_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
