//! Prefix blocks: the set of addresses sharing a network prefix.

use std::fmt;

use ipseq_common::Result;

use crate::{AddressSpan, SegmentedAddress, prefix::check_prefix_len};

/// A single prefix block (subnet), such as `10.1.0.0/16`.
///
/// The stored network address always has its host bits cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixBlock<A> {
    network: A,
    prefix_len: u32,
}

impl<A: SegmentedAddress> PrefixBlock<A> {
    /// Creates the block of length `prefix_len` containing `address`.
    ///
    /// Host bits of `address` are truncated. Fails when `prefix_len` exceeds the
    /// bit count of the family.
    pub fn new(address: A, prefix_len: u32) -> Result<Self> {
        check_prefix_len::<A>(prefix_len)?;
        Ok(Self::containing(address, prefix_len))
    }

    /// Same as [`new`](Self::new) for a prefix length already known to be valid.
    #[inline]
    pub fn containing(address: A, prefix_len: u32) -> Self {
        debug_assert!(prefix_len <= A::BIT_COUNT);
        PrefixBlock {
            network: A::from_value(address.to_value() & A::network_mask(prefix_len)),
            prefix_len,
        }
    }

    /// The single-address block `/BIT_COUNT`.
    #[inline]
    pub fn host(address: A) -> Self {
        PrefixBlock {
            network: address,
            prefix_len: A::BIT_COUNT,
        }
    }

    #[inline]
    pub fn prefix_len(&self) -> u32 {
        self.prefix_len
    }

    /// Lowest address of the block (the network address).
    #[inline]
    pub fn lower(&self) -> A {
        self.network
    }

    /// Highest address of the block.
    #[inline]
    pub fn upper(&self) -> A {
        A::from_value(self.network.to_value() | A::host_mask(self.prefix_len))
    }

    #[inline]
    pub fn contains(&self, address: &A) -> bool {
        address.to_value() & A::network_mask(self.prefix_len) == self.network.to_value()
    }

    /// Whether the block holds more than one address.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.prefix_len < A::BIT_COUNT
    }
}

impl<A: SegmentedAddress> AddressSpan<A> for PrefixBlock<A> {
    #[inline]
    fn span_lower(&self) -> A {
        self.lower()
    }

    #[inline]
    fn span_upper(&self) -> A {
        self.upper()
    }
}

impl<A: SegmentedAddress> fmt::Display for PrefixBlock<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}
