//! Filtered enumeration of host network interfaces.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::Level;

use super::filter::{Decision, FilterCriteria};
use super::sink::{LogOptions, LogSink, NoopSink};
use super::{FetchError, InterfaceFetcher, NetworkInterface, projection};

/// Message logged when the OS supplies no interface list.
pub const NO_INTERFACES_MESSAGE: &str = "No network interfaces found";

/// Error type for strict enumeration via [`InterfaceEnumerator::try_interfaces`].
#[derive(Debug, Error)]
pub enum EnumerationError {
    /// The OS supplied no interface enumeration.
    #[error("No network interface enumeration available")]
    Unavailable,

    /// The OS call to enumerate interfaces failed.
    #[error("Error getting network interfaces: {0}")]
    Fetch(#[from] FetchError),
}

/// Enumerates, filters and projects the host's network interfaces.
///
/// Every call fetches a fresh list; nothing is cached between calls.
///
/// # Failure Policy
///
/// The list-returning methods fail open: when the fetcher errors or supplies
/// no enumeration, they return an empty result and report the condition
/// through the [`LogSink`]. Use [`try_interfaces`](Self::try_interfaces) to
/// receive the failure instead.
///
/// # Examples
///
/// ```no_run
/// use iflist::network::InterfaceEnumerator;
/// use iflist::network::filter::FilterCriteria;
/// use iflist::network::platform::PlatformFetcher;
///
/// let enumerator = InterfaceEnumerator::new(PlatformFetcher::new());
/// let addresses = enumerator.addresses(&FilterCriteria::exclude(["lo"]));
/// println!("{addresses:?}");
/// ```
#[derive(Debug)]
pub struct InterfaceEnumerator<F, S = NoopSink> {
    fetcher: F,
    sink: S,
    options: LogOptions,
}

impl<F: InterfaceFetcher> InterfaceEnumerator<F> {
    /// Creates an enumerator that discards its diagnostics.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            sink: NoopSink,
            options: LogOptions::default(),
        }
    }
}

impl<F: InterfaceFetcher, S: LogSink> InterfaceEnumerator<F, S> {
    /// Replaces the log sink (builder pattern).
    #[must_use]
    pub fn with_sink<T: LogSink>(self, sink: T) -> InterfaceEnumerator<F, T> {
        InterfaceEnumerator {
            fetcher: self.fetcher,
            sink,
            options: self.options,
        }
    }

    /// Replaces the logging options (builder pattern).
    #[must_use]
    pub fn with_options(mut self, options: LogOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the interfaces that survive `criteria`, in OS order.
    ///
    /// Fetch failures and missing enumerations yield an empty list.
    #[must_use]
    pub fn interfaces(&self, criteria: &FilterCriteria) -> Vec<NetworkInterface> {
        match self.try_interfaces(criteria) {
            Ok(interfaces) => interfaces,
            Err(EnumerationError::Unavailable) => {
                if self.options.log_warning {
                    self.sink.log(Level::WARN, NO_INTERFACES_MESSAGE);
                }
                Vec::new()
            }
            Err(e) => {
                if self.options.log_error {
                    self.sink.log(Level::ERROR, &e.to_string());
                }
                Vec::new()
            }
        }
    }

    /// Returns the interfaces that survive `criteria`, surfacing fetch failures.
    ///
    /// Per-interface decisions are still logged at the decision level.
    ///
    /// # Errors
    ///
    /// - [`EnumerationError::Unavailable`] if the OS supplied no enumeration
    /// - [`EnumerationError::Fetch`] if the OS call failed
    pub fn try_interfaces(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<NetworkInterface>, EnumerationError> {
        let all = self.fetcher.fetch()?.ok_or(EnumerationError::Unavailable)?;

        Ok(all
            .into_iter()
            .filter(|iface| {
                let decision = criteria.evaluate(iface);
                self.sink
                    .log(self.options.decision_level, &describe(iface, decision));
                decision.is_included()
            })
            .collect())
    }

    /// Names of the surviving interfaces.
    #[must_use]
    pub fn names(&self, criteria: &FilterCriteria) -> Vec<String> {
        projection::names(&self.interfaces(criteria))
    }

    /// Addresses of the surviving interfaces, concatenated in interface order.
    #[must_use]
    pub fn addresses(&self, criteria: &FilterCriteria) -> Vec<String> {
        projection::addresses_flat(&self.interfaces(criteria))
    }

    /// Name → addresses mapping of the surviving interfaces.
    #[must_use]
    pub fn addresses_by_interface(
        &self,
        criteria: &FilterCriteria,
    ) -> BTreeMap<String, Vec<String>> {
        projection::name_to_addresses(&self.interfaces(criteria))
    }

    /// Logs every surviving interface and its addresses at `level`.
    pub fn log_summary(&self, criteria: &FilterCriteria, level: Level) {
        for iface in self.interfaces(criteria) {
            self.sink.log(level, &format!("Interface {iface}"));
            if iface.has_addresses() {
                for addr in &iface.addresses {
                    self.sink.log(level, &format!("  IP {addr}"));
                }
            } else {
                self.sink.log(level, "  No ips");
            }
        }
    }
}

/// Renders a filter decision as a diagnostic line.
fn describe(iface: &NetworkInterface, decision: Decision<'_>) -> String {
    match decision {
        Decision::Included { pattern: None } => format!("Including interface {iface}"),
        Decision::Included {
            pattern: Some(pattern),
        } => format!("Including matched interface {iface} - matches inclusion pattern '{pattern}'"),
        Decision::Excluded { pattern } => {
            format!("Excluding interface {iface} - matches exclusion pattern '{pattern}'")
        }
        Decision::NotMatched => {
            format!("Skipping interface {iface} - no matching inclusion pattern")
        }
        Decision::Down => format!("Excluding interface {iface} - interface is down"),
    }
}

#[cfg(test)]
#[path = "enumerator_tests.rs"]
mod tests;
