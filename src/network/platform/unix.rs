//! Unix network interface fetching via the `getifaddrs` crate.

use std::net::IpAddr;

use getifaddrs::{Address, InterfaceFlags};

use crate::network::{FetchError, InterfaceFetcher, NetworkInterface};

/// Unix implementation of [`InterfaceFetcher`] using `getifaddrs`.
///
/// `getifaddrs` reports one entry per (interface, address) pair; entries are
/// grouped by interface name in first-seen order. Unix has no separate
/// human-readable label, so the display name equals the name.
///
/// # Example
///
/// ```no_run
/// use iflist::network::{InterfaceFetcher, platform::UnixFetcher};
///
/// let fetcher = UnixFetcher::new();
/// let interfaces = fetcher.fetch().expect("Failed to fetch interfaces");
///
/// for iface in interfaces.unwrap_or_default() {
///     println!("{}: {:?}", iface.name, iface.addresses);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnixFetcher {
    _private: (),
}

impl UnixFetcher {
    /// Creates a new Unix interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for UnixFetcher {
    fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError> {
        fetch_interfaces().map(Some)
    }
}

/// Reads the `getifaddrs` entries and groups them by interface.
fn fetch_interfaces() -> Result<Vec<NetworkInterface>, FetchError> {
    let mut interfaces: Vec<NetworkInterface> = Vec::new();

    for ifaddr in getifaddrs::getifaddrs()? {
        let is_up = flags_up(ifaddr.flags);
        let address = entry_address(&ifaddr.address);
        merge_entry(&mut interfaces, ifaddr.name, is_up, address);
    }

    Ok(interfaces)
}

/// Adds one `getifaddrs` entry to the grouped interface list.
fn merge_entry(
    interfaces: &mut Vec<NetworkInterface>,
    name: String,
    is_up: bool,
    address: Option<IpAddr>,
) {
    if let Some(existing) = interfaces.iter_mut().find(|iface| iface.name == name) {
        existing.is_up |= is_up;
        existing.addresses.extend(address);
        return;
    }

    let display_name = name.clone();
    interfaces.push(NetworkInterface::new(
        name,
        display_name,
        is_up,
        address.into_iter().collect(),
    ));
}

fn flags_up(flags: InterfaceFlags) -> bool {
    flags.contains(InterfaceFlags::UP)
}

/// Link-layer entries carry no IP and yield `None`.
const fn entry_address(address: &Address) -> Option<IpAddr> {
    match address {
        Address::V4(v4) => Some(IpAddr::V4(v4.address)),
        Address::V6(v6) => Some(IpAddr::V6(v6.address)),
        Address::Mac(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    mod merge {
        use super::*;

        #[test]
        fn first_entry_creates_interface() {
            let mut interfaces = Vec::new();
            merge_entry(
                &mut interfaces,
                "eth0".to_string(),
                true,
                Some("10.0.0.1".parse().unwrap()),
            );

            assert_eq!(interfaces.len(), 1);
            assert_eq!(interfaces[0].name, "eth0");
            assert_eq!(interfaces[0].display_name, "eth0");
            assert_eq!(interfaces[0].addresses, vec!["10.0.0.1".parse::<IpAddr>().unwrap()]);
        }

        #[test]
        fn later_entries_append_addresses_in_order() {
            let mut interfaces = Vec::new();
            merge_entry(&mut interfaces, "eth0".to_string(), true, None);
            merge_entry(
                &mut interfaces,
                "eth0".to_string(),
                true,
                Some("10.0.0.1".parse().unwrap()),
            );
            merge_entry(
                &mut interfaces,
                "eth0".to_string(),
                true,
                Some("fe80::1".parse().unwrap()),
            );

            assert_eq!(interfaces.len(), 1);
            assert_eq!(interfaces[0].address_strings(), vec!["10.0.0.1", "fe80::1"]);
        }

        #[test]
        fn interfaces_keep_first_seen_order() {
            let mut interfaces = Vec::new();
            merge_entry(&mut interfaces, "lo".to_string(), true, None);
            merge_entry(&mut interfaces, "eth0".to_string(), false, None);
            merge_entry(&mut interfaces, "lo".to_string(), true, None);

            let names: Vec<_> = interfaces.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["lo", "eth0"]);
            assert!(!interfaces[1].is_up);
        }

        #[test]
        fn entry_without_ip_keeps_interface_without_addresses() {
            let mut interfaces = Vec::new();
            merge_entry(&mut interfaces, "wlan0".to_string(), false, None);

            assert!(!interfaces[0].has_addresses());
        }
    }

    #[test]
    fn flags_up_reads_up_bit() {
        assert!(flags_up(InterfaceFlags::UP | InterfaceFlags::RUNNING));
        assert!(!flags_up(InterfaceFlags::LOOPBACK));
        assert!(!flags_up(InterfaceFlags::empty()));
    }

    #[test]
    fn unix_fetcher_new_creates_instance() {
        let _fetcher = UnixFetcher::new();
        let _default = UnixFetcher::default();
    }

    // Integration test: actually enumerates interfaces from the system
    #[test]
    fn fetch_returns_loopback() {
        let interfaces = UnixFetcher::new()
            .fetch()
            .expect("fetch() failed")
            .expect("getifaddrs always yields a list");

        let has_loopback = interfaces.iter().any(|iface| {
            iface.addresses.contains(&IpAddr::V4(Ipv4Addr::LOCALHOST))
                || iface.addresses.contains(&IpAddr::V6(Ipv6Addr::LOCALHOST))
        });

        assert!(
            has_loopback,
            "Expected a loopback address, got interfaces: {interfaces:?}"
        );
    }

    #[test]
    fn fetched_names_are_unique_and_not_empty() {
        let interfaces = UnixFetcher::new().fetch().unwrap().unwrap();

        for (i, iface) in interfaces.iter().enumerate() {
            assert!(!iface.name.is_empty(), "Interface name should not be empty");
            assert!(
                interfaces[i + 1..].iter().all(|other| other.name != iface.name),
                "Duplicate interface {}",
                iface.name
            );
        }
    }
}
