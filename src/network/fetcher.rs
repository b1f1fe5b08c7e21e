//! Interface fetching trait and error types.

use super::NetworkInterface;
use thiserror::Error;

/// Error type for interface fetching operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A socket-layer or system call failed.
    #[error("System call failed: {0}")]
    Io(#[from] std::io::Error),

    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for fetching the host's network interfaces.
///
/// # Design
///
/// - All platform access goes through this trait
/// - Enables dependency injection for testing with mock implementations
/// - Platform-specific implementations provided in [`platform`](super::platform)
///
/// # Example
///
/// ```
/// use iflist::network::{FetchError, InterfaceFetcher, NetworkInterface};
///
/// struct StaticFetcher(Vec<NetworkInterface>);
///
/// impl InterfaceFetcher for StaticFetcher {
///     fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError> {
///         Ok(Some(self.0.clone()))
///     }
/// }
///
/// let fetcher = StaticFetcher(vec![NetworkInterface::new("lo", "lo", true, vec![])]);
/// assert_eq!(fetcher.fetch().unwrap().unwrap().len(), 1);
/// ```
pub trait InterfaceFetcher: Send + Sync {
    /// Fetches the current list of network interfaces.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(list))`: the OS enumeration, possibly empty
    /// - `Ok(None)`: the OS supplied no enumeration at all
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the platform call fails.
    ///
    /// # Implementation Notes
    ///
    /// - Implementations should return ALL interfaces; filtering is done by the caller
    /// - Interface and address order must follow the OS enumeration order
    fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError>;
}

impl<T: InterfaceFetcher + ?Sized> InterfaceFetcher for &T {
    fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError> {
        (*self).fetch()
    }
}

impl<T: InterfaceFetcher + ?Sized> InterfaceFetcher for Box<T> {
    fn fetch(&self) -> Result<Option<Vec<NetworkInterface>>, FetchError> {
        self.as_ref().fetch()
    }
}
