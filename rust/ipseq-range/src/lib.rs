//! Sequential ranges of IP addresses.
//!
//! A sequential range is any contiguous span of addresses between a lower and an upper
//! bound, such as `1.2.3.4 -> 1.2.4.5`, including spans that no single subnet can
//! express. This crate provides:
//!
//! - **The range value**: [`SeqRange`], generic over the address family, with
//!   cardinality, membership and prefix-block queries
//! - **Set algebra**: intersection, joining (pairwise and in batches), extension and
//!   subtraction
//! - **Lazy enumeration**: ascending iterators over every address or every prefix block,
//!   using state proportional to the number of address segments rather than to the
//!   size of the range
//! - **Bisection**: splitting a range into two halves for divide-and-conquer traversal,
//!   with rayon parallel iterators built on top of it
//!
//! # Key Types
//!
//! - [`SeqRange`] - an immutable range of addresses of one family
//! - [`IpSeqRange`] - a range of either family, for callers working with [`std::net::IpAddr`]
//! - [`AddressIter`], [`PrefixBlockIter`], [`PrefixRangeIter`] - sequential enumerators
//! - [`ParAddressIter`], [`ParPrefixBlockIter`] - parallel enumerators

pub mod any;
pub mod iter;
pub mod par;
mod prefix_block;
pub mod seq_range;
pub mod set_ops;
mod split;


pub use any::IpSeqRange;
pub use iter::{AddressIter, PrefixBlockIter, PrefixRangeIter};
pub use par::{ParAddressIter, ParPrefixBlockIter};
pub use seq_range::{DEFAULT_SEPARATOR, SeqRange};
