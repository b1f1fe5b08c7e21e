//! Core network types for interface representation.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// A network interface as reported by the operating system.
///
/// The enumerator only reads and filters these values; they are produced
/// entirely by an [`InterfaceFetcher`](super::InterfaceFetcher).
///
/// # Equality
///
/// Two interfaces are equal if they have the same name, display name,
/// status, and addresses. Address order matters for equality comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Short identifier (e.g., "eth0", "wlan0", "Ethernet").
    pub name: String,
    /// Human-readable label (e.g., "Intel(R) Ethernet Connection").
    pub display_name: String,
    /// Whether the OS reports the interface as operationally up.
    pub is_up: bool,
    /// All IP addresses bound to this interface, in OS order.
    pub addresses: Vec<IpAddr>,
}

impl NetworkInterface {
    /// Creates a new interface description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        is_up: bool,
        addresses: Vec<IpAddr>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            is_up,
            addresses,
        }
    }

    /// Returns true if either the name or the display name contains `pattern`.
    ///
    /// Matching is a case-sensitive substring test.
    #[must_use]
    pub fn matches_pattern(&self, pattern: &str) -> bool {
        self.display_name.contains(pattern) || self.name.contains(pattern)
    }

    /// Returns true if this interface has any addresses.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        !self.addresses.is_empty()
    }

    /// Returns the addresses in their textual form.
    #[must_use]
    pub fn address_strings(&self) -> Vec<String> {
        self.addresses.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_interface() -> NetworkInterface {
        NetworkInterface::new(
            "eth0",
            "Ethernet",
            true,
            vec!["192.168.1.1".parse().unwrap(), "fe80::1".parse().unwrap()],
        )
    }

    mod matching {
        use super::*;

        #[test]
        fn matches_substring_of_name() {
            let iface = NetworkInterface::new("p2p-p2p0-0", "Wi-Fi Direct", true, vec![]);
            assert!(iface.matches_pattern("p2p"));
        }

        #[test]
        fn matches_substring_of_display_name() {
            let iface = NetworkInterface::new("wlan0", "Wi-Fi Direct", true, vec![]);
            assert!(iface.matches_pattern("Direct"));
        }

        #[test]
        fn matching_is_case_sensitive() {
            let iface = make_interface();
            assert!(!iface.matches_pattern("ETH"));
            assert!(!iface.matches_pattern("ethernet"));
        }

        #[test]
        fn no_match_when_neither_field_contains_pattern() {
            assert!(!make_interface().matches_pattern("docker"));
        }

        #[test]
        fn empty_pattern_matches_everything() {
            assert!(make_interface().matches_pattern(""));
        }
    }

    mod addresses {
        use super::*;

        #[test]
        fn has_addresses_true_when_bound() {
            assert!(make_interface().has_addresses());
        }

        #[test]
        fn has_addresses_false_when_empty() {
            let iface = NetworkInterface::new("eth0", "Ethernet", true, vec![]);
            assert!(!iface.has_addresses());
        }

        #[test]
        fn address_strings_preserve_order() {
            assert_eq!(
                make_interface().address_strings(),
                vec!["192.168.1.1".to_string(), "fe80::1".to_string()]
            );
        }
    }

    #[test]
    fn display_shows_name_and_display_name() {
        assert_eq!(make_interface().to_string(), "eth0 (Ethernet)");
    }

    #[test]
    fn equality_requires_same_status() {
        let up = make_interface();
        let mut down = make_interface();
        down.is_up = false;

        assert_ne!(up, down);
    }

    #[test]
    fn serializes_addresses_as_strings() {
        let json = serde_json::to_value(make_interface()).unwrap();

        assert_eq!(json["name"], "eth0");
        assert_eq!(json["display_name"], "Ethernet");
        assert_eq!(json["is_up"], true);
        assert_eq!(json["addresses"][0], "192.168.1.1");
        assert_eq!(json["addresses"][1], "fe80::1");
    }
}
