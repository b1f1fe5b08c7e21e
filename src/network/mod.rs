//! Network layer for fetching, filtering and projecting interface information.
//!
//! This module provides types and traits for:
//! - Representing OS network interfaces ([`NetworkInterface`])
//! - Fetching interface information ([`InterfaceFetcher`])
//! - Pattern and up/down filtering ([`filter`])
//! - Filtered enumeration and derived views ([`InterfaceEnumerator`], [`projection`])
//! - Diagnostic output ([`LogSink`])
//! - Platform-specific implementations ([`platform`])

mod enumerator;
mod fetcher;
pub mod filter;
mod interface;
pub mod platform;
pub mod projection;
mod sink;


pub use enumerator::{EnumerationError, InterfaceEnumerator, NO_INTERFACES_MESSAGE};
pub use fetcher::{FetchError, InterfaceFetcher};
pub use interface::NetworkInterface;
pub use sink::{LogOptions, LogSink, NoopSink, TracingSink};
