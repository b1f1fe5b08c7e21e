//! Application execution logic.
//!
//! Enumerates interfaces with the configured filter and prints the
//! selected view, either as plain text or as JSON.

use std::io::{self, Write};

use thiserror::Error;

use iflist::config::{OutputFormat, ValidatedConfig};
use iflist::network::platform::PlatformFetcher;
use iflist::network::{InterfaceEnumerator, InterfaceFetcher, NetworkInterface, TracingSink};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),

    /// Failed to serialize JSON output.
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Prints the configured view of the host's interfaces to stdout.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with(PlatformFetcher::new(), config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Prints the configured view using the given fetcher and writer.
///
/// # Errors
///
/// Returns an error if writing or JSON serialization fails.
pub fn execute_with<F, W>(fetcher: F, config: &ValidatedConfig, out: &mut W) -> Result<(), RunError>
where
    F: InterfaceFetcher,
    W: Write,
{
    let enumerator = InterfaceEnumerator::new(fetcher)
        .with_sink(TracingSink)
        .with_options(config.log_options);
    let criteria = &config.criteria;

    match config.format {
        OutputFormat::Log => {
            enumerator.log_summary(criteria, config.summary_level);
            Ok(())
        }
        OutputFormat::Interfaces => {
            let interfaces = enumerator.interfaces(criteria);
            if config.json {
                write_json(out, &interfaces)
            } else {
                write_interfaces(out, &interfaces)
            }
        }
        OutputFormat::Names => write_lines(out, &enumerator.names(criteria), config.json),
        OutputFormat::Addresses => write_lines(out, &enumerator.addresses(criteria), config.json),
        OutputFormat::Map => {
            let map = enumerator.addresses_by_interface(criteria);
            if config.json {
                return write_json(out, &map);
            }
            for (name, addresses) in &map {
                if addresses.is_empty() {
                    writeln!(out, "{name}:")?;
                } else {
                    writeln!(out, "{name}: {}", addresses.join(", "))?;
                }
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: &[String], json: bool) -> Result<(), RunError> {
    if json {
        return write_json(out, lines);
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_interfaces<W: Write>(out: &mut W, interfaces: &[NetworkInterface]) -> Result<(), RunError> {
    for iface in interfaces {
        let status = if iface.is_up { "up" } else { "down" };
        writeln!(out, "{iface} {status}")?;
        for addr in &iface.addresses {
            writeln!(out, "  {addr}")?;
        }
    }
    Ok(())
}
