//! Ranges of either address family.

use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use ipseq_addr::IpFamily;
use ipseq_common::{Error, Result};
use itertools::{Either, Itertools};
use num_bigint::BigUint;

use crate::SeqRange;

/// A sequential range of IPv4 or IPv6 addresses.
///
/// Operations combining two ranges of different families have no result: they return
/// `None` (or `false` for predicates) rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IpSeqRange {
    V4(SeqRange<Ipv4Addr>),
    V6(SeqRange<Ipv6Addr>),
}

/// Applies `$op` to the ranges of a pair of `IpSeqRange`s of the same family, and
/// evaluates to `$mixed` when the families differ.
macro_rules! same_family {
    ($one:expr, $two:expr, |$a:ident, $b:ident| $op:expr, $mixed:expr) => {
        match ($one, $two) {
            (IpSeqRange::V4($a), IpSeqRange::V4($b)) => $op,
            (IpSeqRange::V6($a), IpSeqRange::V6($b)) => $op,
            _ => $mixed,
        }
    };
}

impl IpSeqRange {
    /// Creates the range between two addresses, given in either order.
    ///
    /// # Errors
    ///
    /// Fails with a mixed-families error when one address is IPv4 and the other IPv6.
    pub fn new(first: IpAddr, second: IpAddr) -> Result<IpSeqRange> {
        match (first, second) {
            (IpAddr::V4(a), IpAddr::V4(b)) => Ok(IpSeqRange::V4(SeqRange::new(a, b))),
            (IpAddr::V6(a), IpAddr::V6(b)) => Ok(IpSeqRange::V6(SeqRange::new(a, b))),
            _ => Err(Error::mixed_families(first, second)),
        }
    }

    pub fn single(address: IpAddr) -> IpSeqRange {
        match address {
            IpAddr::V4(a) => IpSeqRange::V4(SeqRange::single(a)),
            IpAddr::V6(a) => IpSeqRange::V6(SeqRange::single(a)),
        }
    }

    pub fn family(&self) -> IpFamily {
        match self {
            IpSeqRange::V4(_) => IpFamily::V4,
            IpSeqRange::V6(_) => IpFamily::V6,
        }
    }

    pub fn lower(&self) -> IpAddr {
        match self {
            IpSeqRange::V4(r) => r.lower().into(),
            IpSeqRange::V6(r) => r.lower().into(),
        }
    }

    pub fn upper(&self) -> IpAddr {
        match self {
            IpSeqRange::V4(r) => r.upper().into(),
            IpSeqRange::V6(r) => r.upper().into(),
        }
    }

    pub fn count(&self) -> &BigUint {
        match self {
            IpSeqRange::V4(r) => r.count(),
            IpSeqRange::V6(r) => r.count(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        match self {
            IpSeqRange::V4(r) => r.is_multiple(),
            IpSeqRange::V6(r) => r.is_multiple(),
        }
    }

    pub fn overlaps(&self, other: &IpSeqRange) -> bool {
        same_family!(self, other, |a, b| a.overlaps(b), false)
    }

    pub fn contains_range(&self, other: &IpSeqRange) -> bool {
        same_family!(self, other, |a, b| a.contains(b), false)
    }

    pub fn contains_addr(&self, address: &IpAddr) -> bool {
        match (self, address) {
            (IpSeqRange::V4(r), IpAddr::V4(a)) => r.contains(a),
            (IpSeqRange::V6(r), IpAddr::V6(a)) => r.contains(a),
            _ => false,
        }
    }

    pub fn intersect(&self, other: &IpSeqRange) -> Option<IpSeqRange> {
        same_family!(self, other, |a, b| a.intersect(b).map(Into::into), None)
    }

    pub fn join(&self, other: &IpSeqRange) -> Option<IpSeqRange> {
        same_family!(self, other, |a, b| a.join(b).map(Into::into), None)
    }

    /// The smallest range spanning both ranges, or `None` when their families differ.
    pub fn extend(&self, other: &IpSeqRange) -> Option<IpSeqRange> {
        same_family!(self, other, |a, b| Some(a.extend(b).into()), None)
    }

    /// The smallest range spanning the range and `address`, or `None` when their
    /// families differ.
    pub fn extend_addr(&self, address: &IpAddr) -> Option<IpSeqRange> {
        match (self, address) {
            (IpSeqRange::V4(r), IpAddr::V4(a)) => Some(r.extend(a).into()),
            (IpSeqRange::V6(r), IpAddr::V6(a)) => Some(r.extend(a).into()),
            _ => None,
        }
    }

    /// The parts of `self` not in `other`, or `None` when their families differ.
    pub fn subtract(&self, other: &IpSeqRange) -> Option<Vec<IpSeqRange>> {
        same_family!(
            self,
            other,
            |a, b| Some(a.subtract(b).into_iter().map(Into::into).collect()),
            None
        )
    }

    /// Joins a batch of ranges of both families.
    ///
    /// Each family is joined on its own; IPv4 results come first, followed by IPv6
    /// results, each group in ascending order.
    pub fn join_all<I>(ranges: I) -> Vec<IpSeqRange>
    where
        I: IntoIterator,
        I::Item: Into<Option<IpSeqRange>>,
    {
        let (v4, v6): (Vec<_>, Vec<_>) = ranges
            .into_iter()
            .filter_map(Into::into)
            .partition_map(|range| match range {
                IpSeqRange::V4(r) => Either::Left(r),
                IpSeqRange::V6(r) => Either::Right(r),
            });
        SeqRange::join_ranges(v4)
            .into_iter()
            .map(IpSeqRange::from)
            .chain(SeqRange::join_ranges(v6).into_iter().map(IpSeqRange::from))
            .collect()
    }

    pub fn to_canonical_string_with(&self, separator: &str) -> String {
        match self {
            IpSeqRange::V4(r) => r.to_canonical_string_with(separator),
            IpSeqRange::V6(r) => r.to_canonical_string_with(separator),
        }
    }

    pub fn to_normalized_string_with(&self, separator: &str) -> String {
        match self {
            IpSeqRange::V4(r) => r.to_normalized_string_with(separator),
            IpSeqRange::V6(r) => r.to_normalized_string_with(separator),
        }
    }
}

impl From<SeqRange<Ipv4Addr>> for IpSeqRange {
    fn from(range: SeqRange<Ipv4Addr>) -> Self {
        IpSeqRange::V4(range)
    }
}

impl From<SeqRange<Ipv6Addr>> for IpSeqRange {
    fn from(range: SeqRange<Ipv6Addr>) -> Self {
        IpSeqRange::V6(range)
    }
}

impl fmt::Display for IpSeqRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpSeqRange::V4(r) => fmt::Display::fmt(r, f),
            IpSeqRange::V6(r) => fmt::Display::fmt(r, f),
        }
    }
}
