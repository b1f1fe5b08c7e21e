//! Windows-specific network interface fetching using `GetAdaptersAddresses`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::network::{FetchError, InterfaceFetcher, NetworkInterface};
use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, ERROR_NO_DATA, NO_ERROR, WIN32_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::NetworkManagement::Ndis::{IF_OPER_STATUS, IfOperStatusUp};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6,
};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Upper bound on `GetAdaptersAddresses` calls per fetch.
const MAX_ATTEMPTS: usize = 3;

/// Windows implementation of [`InterfaceFetcher`] using `GetAdaptersAddresses`.
///
/// The adapter's friendly name (e.g. "Ethernet") becomes the interface name
/// and its description (e.g. "Intel(R) Ethernet Connection") the display name.
///
/// # Example
///
/// ```no_run
/// use iflist::network::{InterfaceFetcher, platform::WindowsFetcher};
///
/// let fetcher = WindowsFetcher::new();
/// let interfaces = fetcher.fetch().expect("Failed to fetch interfaces");
///
/// for iface in interfaces.unwrap_or_default() {
///     println!("{}: {:?}", iface.name, iface.addresses);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsFetcher {
    _private: (),
}

impl WindowsFetcher {
    /// Creates a new Windows interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceFetcher for WindowsFetcher {
    fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError> {
        let Some(raw_adapters) = get_adapter_addresses()? else {
            return Ok(None);
        };
        Ok(Some(parse_adapters(&raw_adapters)))
    }
}

/// Walks the adapter linked list stored in `raw_adapters`.
fn parse_adapters(raw_adapters: &[u8]) -> Vec<NetworkInterface> {
    let mut interfaces = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(iface) = parse_adapter(adapter) {
            interfaces.push(iface);
        }

        current = adapter.Next;
    }

    interfaces
}

/// Calls `GetAdaptersAddresses` until the buffer is large enough.
///
/// Returns `Ok(None)` when the system reports no adapters at all
/// (`ERROR_NO_DATA`).
fn get_adapter_addresses() -> Result<Option<Vec<u8>>, FetchError> {
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut size = INITIAL_BUFFER_SIZE;
    let mut buffer: Vec<u8> = Vec::new();

    // Adapters can appear between calls, so the required size may grow more than once.
    for _ in 0..MAX_ATTEMPTS {
        buffer.resize(size as usize, 0);

        // SAFETY: We provide a valid buffer and its size. The function writes adapter
        // information to the buffer and updates `size` with the required length.
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut size,
            )
        };

        match result {
            r if r == NO_ERROR.0 => return Ok(Some(buffer)),
            r if r == ERROR_NO_DATA.0 => return Ok(None),
            r if r == ERROR_BUFFER_OVERFLOW.0 => {}
            r => return Err(windows::core::Error::from(WIN32_ERROR(r)).into()),
        }
    }

    Err(FetchError::Platform {
        message: format!("adapter list kept growing after {MAX_ATTEMPTS} attempts"),
    })
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into a [`NetworkInterface`].
///
/// Returns `None` if the adapter name cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<NetworkInterface> {
    // SAFETY: FriendlyName and Description are NUL-terminated wide strings
    // owned by the adapter buffer.
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };
    let display_name = unsafe { adapter.Description.to_string() }.unwrap_or_else(|_| name.clone());

    Some(NetworkInterface::new(
        name,
        display_name,
        is_oper_up(adapter.OperStatus),
        collect_addresses(adapter),
    ))
}

fn is_oper_up(status: IF_OPER_STATUS) -> bool {
    status == IfOperStatusUp
}

/// Collects unicast addresses from an adapter in API order.
#[allow(clippy::cast_ptr_alignment)]
fn collect_addresses(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Vec<IpAddr> {
    let mut addresses = Vec::new();

    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let addr_entry = unsafe { &*unicast };

        // SAFETY: The Address field contains a valid SOCKET_ADDRESS structure
        // pointing to either SOCKADDR_IN (IPv4) or SOCKADDR_IN6 (IPv6).
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            match sockaddr.sa_family {
                f if f == AF_INET => {
                    // SAFETY: We verified the family is AF_INET, so this is a valid cast.
                    let sockaddr_in =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
                    // SAFETY: sin_addr contains the IPv4 address bytes in network order.
                    let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
                    addresses.push(IpAddr::V4(Ipv4Addr::new(
                        octets.s_b1,
                        octets.s_b2,
                        octets.s_b3,
                        octets.s_b4,
                    )));
                }
                f if f == AF_INET6 => {
                    // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
                    let sockaddr_in6 =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
                    // SAFETY: We verified this is an IPv6 address, so the union field is valid.
                    let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
                    addresses.push(IpAddr::V6(Ipv6Addr::from(octets)));
                }
                _ => {}
            }
        }

        unicast = addr_entry.Next;
    }

    addresses
}
