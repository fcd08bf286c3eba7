//! Inclusive sub-ranges of the values of a single segment.

use crate::SegInt;

/// An inclusive range `[low, high]` of values of one segment.
///
/// Used both for the degenerate single value of an address segment and for the
/// multi-valued segments that appear while iterating prefix blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SegmentRange {
    pub low: SegInt,
    pub high: SegInt,
}

impl SegmentRange {
    #[inline]
    pub fn new(low: SegInt, high: SegInt) -> SegmentRange {
        debug_assert!(low <= high);
        SegmentRange { low, high }
    }

    #[inline]
    pub fn single(value: SegInt) -> SegmentRange {
        SegmentRange {
            low: value,
            high: value,
        }
    }

    /// The full value domain `[0, max]`.
    #[inline]
    pub fn full(max: SegInt) -> SegmentRange {
        SegmentRange { low: 0, high: max }
    }

    #[inline]
    pub fn is_multiple(&self) -> bool {
        self.low != self.high
    }

    #[inline]
    pub fn includes_zero(&self) -> bool {
        self.low == 0
    }

    #[inline]
    pub fn includes_max(&self, max: SegInt) -> bool {
        self.high == max
    }

    #[inline]
    pub fn is_full(&self, max: SegInt) -> bool {
        self.includes_zero() && self.includes_max(max)
    }

    /// Whether `[low, high]` is a union of whole blocks for a segment prefix of
    /// `prefix_len` bits out of `bit_count`.
    #[inline]
    pub fn contains_prefix_block(&self, prefix_len: u32, bit_count: u32) -> bool {
        let host = host_bits(prefix_len, bit_count);
        self.low & host == 0 && self.high & host == host
    }

    /// Whether `[low, high]` is exactly one block for a segment prefix of
    /// `prefix_len` bits out of `bit_count`.
    #[inline]
    pub fn contains_single_prefix_block(&self, prefix_len: u32, bit_count: u32) -> bool {
        let shift = bit_count - prefix_len;
        self.contains_prefix_block(prefix_len, bit_count)
            && self.low >> shift == self.high >> shift
    }

    /// The block of `shift` host bits with network part `network`.
    #[inline]
    pub fn block(network: SegInt, shift: u32) -> SegmentRange {
        let low = network << shift;
        SegmentRange {
            low,
            high: low | host_mask(shift),
        }
    }
}

/// Mask of the `shift` low bits of a segment value.
#[inline]
pub fn host_mask(shift: u32) -> SegInt {
    debug_assert!(shift < SegInt::BITS);
    (1 << shift) - 1
}

#[inline]
fn host_bits(prefix_len: u32, bit_count: u32) -> SegInt {
    debug_assert!(prefix_len <= bit_count);
    host_mask(bit_count - prefix_len)
}
