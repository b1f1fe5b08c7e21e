//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Interface filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,

    /// Diagnostic logging configuration
    #[serde(default)]
    pub log: LogSection,
}

/// Interface filter configuration section.
///
/// `None` means "not set"; `Some(vec![])` is an explicit empty list.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Substring patterns for interfaces to include (switches to include mode)
    pub include: Option<Vec<String>>,

    /// Substring patterns for interfaces to exclude
    pub exclude: Option<Vec<String>>,

    /// Drop interfaces that are not up
    pub exclude_down: Option<bool>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// View to print: "interfaces", "names", "addresses", "map", or "log"
    pub format: Option<String>,

    /// Print the view as JSON
    #[serde(default)]
    pub json: bool,
}

/// Diagnostic logging configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Level used by the `log` view
    pub summary_level: Option<String>,

    /// Level for per-interface include/exclude decisions
    pub decision_level: Option<String>,

    /// Warn when the OS supplies no interface list
    pub log_warning: Option<bool>,

    /// Report OS enumeration failures
    pub log_error: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# iflist Configuration File

[filter]
# Substring patterns matched against interface name and display name.
# include and exclude are mutually exclusive.
# Note: CLI patterns REPLACE these entirely (not merged)

# Interfaces to exclude (default: docker, virbr, veth, tailscale, dummy, tun, lo)
# exclude = ["docker", "virbr", "veth", "tailscale", "dummy", "tun", "lo"]

# Interfaces to include; only matching interfaces are listed
# include = ["eth", "wlan"]

# Drop interfaces that are not up (default: true, false for the log view)
# exclude_down = true

[output]
# View to print: "interfaces", "names", "addresses", "map", or "log"
format = "interfaces"

# Print the view as JSON (not available for the log view)
# json = false

[log]
# Level used by the log view (default: info)
# summary_level = "info"

# Level for per-interface include/exclude decisions (default: trace)
# decision_level = "trace"

# Warn when the OS supplies no interface list
# log_warning = true

# Report OS enumeration failures
# log_error = true
"#
    .to_string()
}
