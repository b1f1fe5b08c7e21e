//! Configuration layer for iflist.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! # Pattern Semantics
//!
//! CLI patterns (`--include`, `--exclude`) **replace** TOML patterns entirely
//! (not merged). Include and exclude are mutually exclusive in both sources.
//! When no patterns are configured anywhere, exclude mode with
//! [`DEFAULT_EXCLUDE_PATTERNS`](crate::network::filter::DEFAULT_EXCLUDE_PATTERNS)
//! applies. An explicit `exclude = []` in TOML means "exclude nothing".
//!
//! # Down Interfaces
//!
//! `--exclude-down` / `--include-down` override `filter.exclude_down`. Without
//! either, down interfaces are dropped for every view except `log`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, LevelArg, OutputFormat};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
