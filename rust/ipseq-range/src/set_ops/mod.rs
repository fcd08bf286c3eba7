//! Set algebra over sequential ranges of one address family.
//!
//! All operations compare bounds by their low value, so single addresses and
//! prefix blocks can stand in for ranges wherever an [`AddressSpan`] is accepted.
//!
//! - [`SeqRange::intersect`] - the addresses in both ranges
//! - [`SeqRange::join`] / [`SeqRange::join_ranges`] - unions of overlapping or adjacent ranges
//! - [`SeqRange::extend`] - the smallest range spanning two spans
//! - [`SeqRange::subtract`] - the addresses of one range not in another
//!
//! [`AddressSpan`]: ipseq_addr::AddressSpan
//! [`SeqRange::intersect`]: crate::SeqRange::intersect
//! [`SeqRange::join`]: crate::SeqRange::join
//! [`SeqRange::join_ranges`]: crate::SeqRange::join_ranges
//! [`SeqRange::extend`]: crate::SeqRange::extend
//! [`SeqRange::subtract`]: crate::SeqRange::subtract

mod extend;
mod intersection;
mod join;
mod subtraction;
