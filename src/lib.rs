//! iflist: network interface lister
//!
//! A library for enumerating host network interfaces and their IP
//! addresses, filtered by name patterns and up/down status.
//!
//! # Example
//!
//! ```no_run
//! use iflist::network::filter::FilterCriteria;
//! use iflist::network::platform::PlatformFetcher;
//! use iflist::network::{InterfaceEnumerator, TracingSink};
//!
//! let enumerator = InterfaceEnumerator::new(PlatformFetcher::new()).with_sink(TracingSink);
//!
//! let by_name = enumerator.addresses_by_interface(&FilterCriteria::default());
//! for (name, addresses) in by_name {
//!     println!("{name}: {addresses:?}");
//! }
//! ```

pub mod config;
pub mod network;
