//! Fixed-width IP address primitives consumed by the sequential range algorithms.
//!
//! This crate models just enough of an IP address to let range code work segment by
//! segment without knowing the address family:
//!
//! - [`SegmentedAddress`] - capability trait (segment access, construction from segments,
//!   numeric value, increment) implemented for [`std::net::Ipv4Addr`] and
//!   [`std::net::Ipv6Addr`]
//! - [`prefix`] - mapping of prefix lengths onto segment indices
//! - [`SegmentRange`] - an inclusive sub-range of values of a single segment
//! - [`AddressSpan`] - anything with a lower and an upper address
//! - [`PrefixBlock`] - a single prefix-aligned subnet

pub mod address;
pub mod block;
pub mod prefix;
pub mod segment;
pub mod span;

pub use address::{IpFamily, MAX_SEGMENTS, SegInt, SegmentValues, SegmentedAddress};
pub use block::PrefixBlock;
pub use segment::SegmentRange;
pub use span::AddressSpan;
