//! Platform-specific network interface fetcher implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`InterfaceFetcher`](super::InterfaceFetcher) trait.
//!
//! # Platform Support
//!
//! - **Unix** (Linux, macOS, BSD): Uses the `getifaddrs` crate.
//! - **Windows**: Uses `GetAdaptersAddresses` API via the `windows` crate.

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::UnixFetcher;

#[cfg(windows)]
pub use self::windows::WindowsFetcher;

// Re-export platform-specific fetcher as PlatformFetcher for convenience
#[cfg(unix)]
pub use unix::UnixFetcher as PlatformFetcher;

#[cfg(windows)]
pub use self::windows::WindowsFetcher as PlatformFetcher;
