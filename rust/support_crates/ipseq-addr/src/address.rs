//! The [`SegmentedAddress`] capability trait and its IPv4/IPv6 implementations.

use std::{
    fmt,
    hash::Hash,
    net::{Ipv4Addr, Ipv6Addr},
};

use tinyvec::ArrayVec;

/// Value of a single address segment (an IPv4 octet or an IPv6 group).
pub type SegInt = u32;

/// Largest segment count of any supported family (IPv6).
pub const MAX_SEGMENTS: usize = 8;

/// Segment values of one address, most significant segment first.
pub type SegmentValues = ArrayVec<[SegInt; MAX_SEGMENTS]>;

/// IP address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn bit_count(self) -> u32 {
        match self {
            IpFamily::V4 => 32,
            IpFamily::V6 => 128,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => f.write_str("IPv4"),
            IpFamily::V6 => f.write_str("IPv6"),
        }
    }
}

/// A fixed-width address made of equally sized unsigned segments.
///
/// `Ord` must agree with the numeric (big-endian, unsigned) value of the address,
/// which is what range code relies on when it compares "low values". For a single
/// address the low value is the address itself.
///
/// Implementors only provide segment access, conversion to and from the numeric value,
/// and the normalized string form; everything else (masks, increments, host checks)
/// is derived from those.
pub trait SegmentedAddress:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const FAMILY: IpFamily;
    const SEGMENT_COUNT: usize;
    const BITS_PER_SEGMENT: u32;
    const BIT_COUNT: u32 = Self::SEGMENT_COUNT as u32 * Self::BITS_PER_SEGMENT;
    const MAX_SEGMENT_VALUE: SegInt = (1 << Self::BITS_PER_SEGMENT) - 1;

    /// Returns the value of the segment at `index` (0 is the most significant).
    fn segment(&self, index: usize) -> SegInt;

    /// Builds an address from exactly [`Self::SEGMENT_COUNT`] segment values.
    ///
    /// Values wider than [`Self::BITS_PER_SEGMENT`] are truncated.
    fn from_segment_values(segments: &[SegInt]) -> Self;

    /// Returns the numeric value of the address.
    fn to_value(&self) -> u128;

    /// Builds an address from its numeric value; bits above [`Self::BIT_COUNT`] are ignored.
    fn from_value(value: u128) -> Self;

    /// Renders every segment without compression.
    fn to_normalized_string(&self) -> String;

    /// Renders the canonical (shortest standard) form.
    fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn segment_values(&self) -> SegmentValues {
        (0..Self::SEGMENT_COUNT).map(|i| self.segment(i)).collect()
    }

    /// Mask covering every value bit of the family.
    #[inline]
    fn value_mask() -> u128 {
        low_bits_mask(Self::BIT_COUNT)
    }

    #[inline]
    fn zero() -> Self {
        Self::from_value(0)
    }

    #[inline]
    fn max_value() -> Self {
        Self::from_value(Self::value_mask())
    }

    /// Host bits for `prefix_len`, as a numeric mask.
    ///
    /// `prefix_len` must not exceed [`Self::BIT_COUNT`].
    #[inline]
    fn host_mask(prefix_len: u32) -> u128 {
        debug_assert!(prefix_len <= Self::BIT_COUNT);
        low_bits_mask(Self::BIT_COUNT - prefix_len.min(Self::BIT_COUNT))
    }

    /// Network bits for `prefix_len`, as a numeric mask.
    #[inline]
    fn network_mask(prefix_len: u32) -> u128 {
        Self::value_mask() & !Self::host_mask(prefix_len)
    }

    /// Adds `delta` to the address value.
    ///
    /// Returns `None` when the result would leave the value domain of the family,
    /// i.e. stepping below zero or above the all-ones address.
    fn increment(&self, delta: i128) -> Option<Self> {
        let value = self.to_value();
        let next = if delta >= 0 {
            value.checked_add(delta.unsigned_abs())?
        } else {
            value.checked_sub(delta.unsigned_abs())?
        };
        (next <= Self::value_mask()).then(|| Self::from_value(next))
    }

    /// Whether all host bits for `prefix_len` are zero.
    #[inline]
    fn includes_zero_host(&self, prefix_len: u32) -> bool {
        self.to_value() & Self::host_mask(prefix_len) == 0
    }

    /// Whether all host bits for `prefix_len` are ones.
    #[inline]
    fn includes_max_host(&self, prefix_len: u32) -> bool {
        let host = Self::host_mask(prefix_len);
        self.to_value() & host == host
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.to_value() == 0
    }

    #[inline]
    fn is_max(&self) -> bool {
        self.to_value() == Self::value_mask()
    }
}

/// Mask of the `bits` least significant bits.
#[inline]
pub fn low_bits_mask(bits: u32) -> u128 {
    if bits >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

impl SegmentedAddress for Ipv4Addr {
    const FAMILY: IpFamily = IpFamily::V4;
    const SEGMENT_COUNT: usize = 4;
    const BITS_PER_SEGMENT: u32 = 8;

    #[inline]
    fn segment(&self, index: usize) -> SegInt {
        self.octets()[index] as SegInt
    }

    fn from_segment_values(segments: &[SegInt]) -> Self {
        debug_assert_eq!(segments.len(), Self::SEGMENT_COUNT);
        Ipv4Addr::new(
            segments[0] as u8,
            segments[1] as u8,
            segments[2] as u8,
            segments[3] as u8,
        )
    }

    #[inline]
    fn to_value(&self) -> u128 {
        u32::from(*self) as u128
    }

    #[inline]
    fn from_value(value: u128) -> Self {
        Ipv4Addr::from(value as u32)
    }

    fn to_normalized_string(&self) -> String {
        self.to_string()
    }
}

impl SegmentedAddress for Ipv6Addr {
    const FAMILY: IpFamily = IpFamily::V6;
    const SEGMENT_COUNT: usize = 8;
    const BITS_PER_SEGMENT: u32 = 16;

    #[inline]
    fn segment(&self, index: usize) -> SegInt {
        self.segments()[index] as SegInt
    }

    fn from_segment_values(segments: &[SegInt]) -> Self {
        debug_assert_eq!(segments.len(), Self::SEGMENT_COUNT);
        let mut groups = [0u16; 8];
        for (group, &value) in groups.iter_mut().zip(segments) {
            *group = value as u16;
        }
        Ipv6Addr::from(groups)
    }

    #[inline]
    fn to_value(&self) -> u128 {
        u128::from(*self)
    }

    #[inline]
    fn from_value(value: u128) -> Self {
        Ipv6Addr::from(value)
    }

    fn to_normalized_string(&self) -> String {
        let groups = self.segments().map(|g| format!("{g:x}"));
        groups.join(":")
    }
}
