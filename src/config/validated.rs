//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use tracing::Level;

use crate::network::LogOptions;
use crate::network::filter::{DEFAULT_EXCLUDE_PATTERNS, FilterCriteria, PatternFilter};

use super::cli::{Cli, LevelArg, OutputFormat};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Interface filter applied before printing
    pub criteria: FilterCriteria,

    /// View to print
    pub format: OutputFormat,

    /// Print the view as JSON
    pub json: bool,

    /// Level used by the `log` view
    pub summary_level: Level,

    /// Enumerator diagnostics settings
    pub log_options: LogOptions,

    /// Default directive for the log subscriber.
    ///
    /// Raised to the summary level for the `log` view and to an explicitly
    /// chosen decision level, so the requested records are not filtered out.
    pub log_level: Level,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ filter: {}, format: {}, json: {}, summary_level: {}, decision_level: {}, log_level: {} }}",
            self.criteria,
            self.format,
            self.json,
            self.summary_level,
            self.log_options.decision_level,
            self.log_level,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - TOML sets both `filter.include` and `filter.exclude`
    /// - A pattern is the empty string
    /// - A format or level string is not recognized
    /// - JSON output is requested for the `log` view
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let format = Self::resolve_format(cli, toml)?;

        let json = cli.json || toml.is_some_and(|t| t.output.json);
        if json && format == OutputFormat::Log {
            return Err(ConfigError::JsonUnsupported);
        }

        let patterns = Self::resolve_patterns(cli, toml)?;

        // Priority: CLI flag > TOML > per-format default
        let exclude_down = cli
            .down_policy()
            .or_else(|| toml.and_then(|t| t.filter.exclude_down))
            .unwrap_or_else(|| defaults::exclude_down(format));

        let summary_level = resolve_level(
            cli.summary_level,
            toml.and_then(|t| t.log.summary_level.as_deref()),
            field::SUMMARY_LEVEL,
        )?
        .unwrap_or(defaults::SUMMARY_LEVEL);

        let log_options = Self::build_log_options(cli, toml)?;

        let decision_chosen =
            cli.decision_level.is_some() || toml.is_some_and(|t| t.log.decision_level.is_some());
        let log_level = subscriber_level(
            cli.verbose,
            [
                (format == OutputFormat::Log).then_some(summary_level),
                decision_chosen.then_some(log_options.decision_level),
            ]
            .into_iter()
            .flatten(),
        );

        Ok(Self {
            criteria: FilterCriteria {
                patterns,
                exclude_down,
            },
            format,
            json,
            summary_level,
            log_options,
            log_level,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format);
        }

        toml.and_then(|t| t.output.format.as_deref())
            .map_or(Ok(defaults::FORMAT), parse_format)
    }

    /// Resolves the pattern filter.
    ///
    /// CLI patterns replace TOML patterns entirely. Without any patterns,
    /// exclude mode with the built-in list applies.
    fn resolve_patterns(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<PatternFilter, ConfigError> {
        if !cli.include_patterns.is_empty() {
            validate_patterns(&cli.include_patterns, field::INCLUDE)?;
            return Ok(PatternFilter::include(cli.include_patterns.iter().cloned()));
        }

        if !cli.exclude_patterns.is_empty() {
            validate_patterns(&cli.exclude_patterns, field::EXCLUDE)?;
            return Ok(PatternFilter::exclude(cli.exclude_patterns.iter().cloned()));
        }

        let section = toml.map(|t| &t.filter);
        let include = section.and_then(|s| s.include.as_ref());
        let exclude = section.and_then(|s| s.exclude.as_ref());

        match (include, exclude) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingPatterns),
            (Some(patterns), None) => {
                validate_patterns(patterns, field::INCLUDE)?;
                Ok(PatternFilter::include(patterns.iter().cloned()))
            }
            (None, Some(patterns)) => {
                validate_patterns(patterns, field::EXCLUDE)?;
                Ok(PatternFilter::exclude(patterns.iter().cloned()))
            }
            (None, None) => Ok(PatternFilter::exclude(DEFAULT_EXCLUDE_PATTERNS)),
        }
    }

    fn build_log_options(cli: &Cli, toml: Option<&TomlConfig>) -> Result<LogOptions, ConfigError> {
        let section = toml.map(|t| &t.log);

        let decision_level = resolve_level(
            cli.decision_level,
            section.and_then(|s| s.decision_level.as_deref()),
            field::DECISION_LEVEL,
        )?
        .unwrap_or(defaults::DECISION_LEVEL);

        let defaults = LogOptions::default();

        Ok(defaults
            .with_decision_level(decision_level)
            .with_warning(
                section
                    .and_then(|s| s.log_warning)
                    .unwrap_or(defaults.log_warning),
            )
            .with_error(section.and_then(|s| s.log_error).unwrap_or(defaults.log_error)))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn validate_patterns(patterns: &[String], field: &'static str) -> Result<(), ConfigError> {
    if patterns.iter().any(String::is_empty) {
        return Err(ConfigError::EmptyPattern { field });
    }
    Ok(())
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    OutputFormat::from_str(s.trim(), true).map_err(|_| ConfigError::InvalidFormat {
        value: s.to_string(),
    })
}

/// Most verbose of the base level and every level whose records must be shown.
fn subscriber_level(verbose: bool, shown: impl IntoIterator<Item = Level>) -> Level {
    let base = if verbose {
        Level::DEBUG
    } else {
        defaults::LOG_LEVEL
    };
    shown.into_iter().fold(base, Ord::max)
}

/// Priority: CLI explicit > TOML > caller default (`None`).
fn resolve_level(
    cli: Option<LevelArg>,
    toml: Option<&str>,
    field: &'static str,
) -> Result<Option<Level>, ConfigError> {
    if let Some(level) = cli {
        return Ok(Some(level.into()));
    }

    toml.map(|s| {
        LevelArg::from_str(s.trim(), true)
            .map(Level::from)
            .map_err(|_| ConfigError::InvalidLevel {
                field,
                value: s.to_string(),
            })
    })
    .transpose()
}
