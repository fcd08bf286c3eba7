//! Per-segment traversal layout.

use ipseq_addr::{
    MAX_SEGMENTS, SegmentedAddress,
    prefix::{host_segment_index, network_segment_index, segment_prefix_length},
};
use tinyvec::ArrayVec;

/// Describes how a range is walked: which segments are enumerated value by value,
/// which in blocks of host bits, and which are not enumerated at all.
///
/// - segments before `network_segment_index` are enumerated value by value
/// - the segment at `network_segment_index` is enumerated in blocks of `shift` bits
/// - segments after it are supplied once, as blocks covering all their values
///
/// For plain address enumeration every shift is zero and the network segment is the
/// last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SegmentLayout {
    shifts: ArrayVec<[u32; MAX_SEGMENTS]>,
    network_segment_index: usize,
    host_segment_index: usize,
    prefix_len: Option<u32>,
}

impl SegmentLayout {
    /// Layout enumerating individual addresses.
    pub fn addresses<A: SegmentedAddress>() -> SegmentLayout {
        SegmentLayout {
            shifts: std::iter::repeat_n(0, A::SEGMENT_COUNT).collect(),
            network_segment_index: A::SEGMENT_COUNT - 1,
            host_segment_index: A::SEGMENT_COUNT,
            prefix_len: None,
        }
    }

    /// Layout enumerating blocks of `prefix_len`, which must be valid for `A`.
    pub fn prefix_blocks<A: SegmentedAddress>(prefix_len: u32) -> SegmentLayout {
        debug_assert!(prefix_len <= A::BIT_COUNT);
        let bits = A::BITS_PER_SEGMENT;
        let network = network_segment_index(prefix_len, bits);
        let shifts = (0..A::SEGMENT_COUNT)
            .map(|i| {
                if i < network {
                    0
                } else {
                    bits - segment_prefix_length(bits, prefix_len, i).unwrap_or(bits)
                }
            })
            .collect();
        SegmentLayout {
            shifts,
            network_segment_index: network,
            host_segment_index: host_segment_index(prefix_len, bits),
            prefix_len: Some(prefix_len),
        }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.shifts.len()
    }

    /// Number of host bits of the segment at `index` that are not enumerated.
    #[inline]
    pub fn shift(&self, index: usize) -> u32 {
        self.shifts[index]
    }

    #[inline]
    pub fn network_segment_index(&self) -> usize {
        self.network_segment_index
    }

    #[inline]
    pub fn host_segment_index(&self) -> usize {
        self.host_segment_index
    }

    #[inline]
    pub fn prefix_len(&self) -> Option<u32> {
        self.prefix_len
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    #[test]
    fn test_address_layout() {
        let layout = SegmentLayout::addresses::<Ipv4Addr>();
        assert_eq!(layout.segment_count(), 4);
        assert_eq!(layout.network_segment_index(), 3);
        assert_eq!(layout.host_segment_index(), 4);
        assert!((0..4).all(|i| layout.shift(i) == 0));
        assert_eq!(layout.prefix_len(), None);
    }

    #[test]
    fn test_prefix_layout_inside_segment() {
        let layout = SegmentLayout::prefix_blocks::<Ipv4Addr>(20);
        assert_eq!(layout.network_segment_index(), 2);
        assert_eq!(layout.host_segment_index(), 2);
        assert_eq!(layout.shift(0), 0);
        assert_eq!(layout.shift(1), 0);
        assert_eq!(layout.shift(2), 4);
        assert_eq!(layout.shift(3), 8);
    }

    #[test]
    fn test_prefix_layout_on_boundary() {
        let layout = SegmentLayout::prefix_blocks::<Ipv4Addr>(8);
        assert_eq!(layout.network_segment_index(), 0);
        assert_eq!(layout.host_segment_index(), 1);
        assert_eq!(layout.shift(0), 0);
        assert_eq!(layout.shift(1), 8);

        let layout = SegmentLayout::prefix_blocks::<Ipv4Addr>(0);
        assert_eq!(layout.network_segment_index(), 0);
        assert_eq!(layout.host_segment_index(), 0);
        assert_eq!(layout.shift(0), 8);

        let layout = SegmentLayout::prefix_blocks::<Ipv6Addr>(128);
        assert_eq!(layout.network_segment_index(), 7);
        assert_eq!(layout.host_segment_index(), 8);
        assert!((0..8).all(|i| layout.shift(i) == 0));
    }
}
