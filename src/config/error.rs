//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Include and exclude patterns were both configured.
    #[error("filter.include and filter.exclude are mutually exclusive; set only one")]
    ConflictingPatterns,

    /// A pattern was the empty string, which would match every interface.
    #[error("Empty pattern in {field}: an empty substring matches every interface")]
    EmptyPattern {
        /// Name of the field holding the pattern
        field: &'static str,
    },

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected interfaces, names, addresses, map, or log")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },

    /// Invalid log level value.
    #[error("Invalid log level '{value}' for {field}: expected trace, debug, info, warn, or error")]
    InvalidLevel {
        /// Name of the field
        field: &'static str,
        /// The invalid value provided
        value: String,
    },

    /// JSON output requested for a view that only logs.
    #[error("JSON output is not available for the log view")]
    JsonUnsupported,
}

/// Well-known field names used in error messages.
pub mod field {
    /// Include patterns.
    pub const INCLUDE: &str = "include";
    /// Exclude patterns.
    pub const EXCLUDE: &str = "exclude";
    /// Summary level for the `log` view.
    pub const SUMMARY_LEVEL: &str = "summary_level";
    /// Level for decision messages.
    pub const DECISION_LEVEL: &str = "decision_level";
}
