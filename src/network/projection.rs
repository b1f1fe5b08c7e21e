//! Derived views over a filtered interface list.
//!
//! Each function is a deterministic transform that preserves interface order.

use std::collections::BTreeMap;

use super::NetworkInterface;

/// Interface names, in order.
#[must_use]
pub fn names(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces.iter().map(|iface| iface.name.clone()).collect()
}

/// All addresses, concatenated in interface order.
#[must_use]
pub fn addresses_flat(interfaces: &[NetworkInterface]) -> Vec<String> {
    interfaces
        .iter()
        .flat_map(|iface| iface.addresses.iter().map(ToString::to_string))
        .collect()
}

/// Maps each interface name to its addresses.
///
/// Names must be unique keys: a later interface with a duplicate name
/// replaces the earlier entry.
#[must_use]
pub fn name_to_addresses(interfaces: &[NetworkInterface]) -> BTreeMap<String, Vec<String>> {
    interfaces
        .iter()
        .map(|iface| (iface.name.clone(), iface.address_strings()))
        .collect()
}
