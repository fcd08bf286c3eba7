//! Range bisection.
//!
//! A range is split at the first segment, up to the host boundary of the traversal
//! layout, in which its bounds differ. That segment's values are halved at
//! `mid = low + (high - low) / 2`; the left half ends at `mid` followed by maximal
//! segments and the right half starts at `mid + 1` followed by zero segments.
//!
//! For prefix traversal, when all segments before the host boundary agree, the
//! network bits of the boundary segment are halved instead, so that both halves
//! still start and end on prefix block boundaries.
//!
//! Splitting fails when the range is a single item at the traversal granularity:
//! one address, or one prefix block. Repeated bisection therefore terminates after
//! at most one level per network bit, regardless of the range size.

use std::iter::repeat_n;

use ipseq_addr::{
    SegInt, SegmentValues, SegmentedAddress, prefix::check_prefix_len, segment::host_mask,
};
use ipseq_common::Result;

use crate::{SeqRange, iter::layout::SegmentLayout};

/// Returns the upper bound of the left half and the lower bound of the right half of
/// `[lower, upper]`, or `None` when the range cannot be split under `layout`.
pub(crate) fn split_segments(
    lower: &[SegInt],
    upper: &[SegInt],
    max_segment_value: SegInt,
    layout: &SegmentLayout,
) -> Option<(SegmentValues, SegmentValues)> {
    let count = layout.segment_count();
    let host = layout.host_segment_index().min(count);
    let network = layout.network_segment_index();

    let (index, mid, next) = match (0..host).find(|&i| lower[i] != upper[i]) {
        Some(i) => {
            let mid = lower[i] + ((upper[i] - lower[i]) >> 1);
            (i, mid, mid + 1)
        }
        None if host == network => {
            let shift = layout.shift(network);
            let (low, high) = (lower[network] >> shift, upper[network] >> shift);
            if low == high {
                return None;
            }
            let mid = low + ((high - low) >> 1);
            (network, (mid << shift) | host_mask(shift), (mid + 1) << shift)
        }
        None => return None,
    };

    let trailing = count - index - 1;
    let mut left_upper: SegmentValues = lower[..index].iter().copied().collect();
    left_upper.push(mid);
    left_upper.extend(repeat_n(max_segment_value, trailing));
    let mut right_lower: SegmentValues = lower[..index].iter().copied().collect();
    right_lower.push(next);
    right_lower.extend(repeat_n(0, trailing));
    Some((left_upper, right_lower))
}

impl<A: SegmentedAddress> SeqRange<A> {
    /// Splits the range into two adjacent, disjoint halves whose union is the range.
    ///
    /// Returns `None` for a single-address range.
    pub fn split(&self) -> Option<(SeqRange<A>, SeqRange<A>)> {
        self.split_with(&SegmentLayout::addresses::<A>())
    }

    /// Splits the range into two halves that each start and end on boundaries of
    /// prefix blocks of length `prefix_len`, so that no block intersecting the range
    /// is shared between the halves.
    ///
    /// Returns `Ok(None)` when the range intersects a single such block.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn split_prefix(&self, prefix_len: u32) -> Result<Option<(SeqRange<A>, SeqRange<A>)>> {
        check_prefix_len::<A>(prefix_len)?;
        Ok(self.split_with(&SegmentLayout::prefix_blocks::<A>(prefix_len)))
    }

    /// Bisects the range recursively, `depth` levels deep, and returns the resulting
    /// partition in ascending order.
    ///
    /// Parts that cannot be split any further are kept as they are, so the result holds
    /// at most `2^depth` ranges.
    pub fn split_to_depth(&self, depth: usize) -> Vec<SeqRange<A>> {
        let mut parts = vec![self.clone()];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(parts.len() * 2);
            let mut any_split = false;
            for part in parts {
                match part.split() {
                    Some((left, right)) => {
                        next.push(left);
                        next.push(right);
                        any_split = true;
                    }
                    None => next.push(part),
                }
            }
            parts = next;
            if !any_split {
                break;
            }
        }
        parts
    }

    pub(crate) fn split_with(&self, layout: &SegmentLayout) -> Option<(SeqRange<A>, SeqRange<A>)> {
        let (left_upper, right_lower) = split_segments(
            &self.lower().segment_values(),
            &self.upper().segment_values(),
            A::MAX_SEGMENT_VALUE,
            layout,
        )?;
        let left = SeqRange::from_ordered(self.lower(), A::from_segment_values(&left_upper));
        let right = SeqRange::from_ordered(A::from_segment_values(&right_lower), self.upper());
        log::trace!("split {self} into {left} and {right}");
        Some((left, right))
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use ipseq_addr::SegmentedAddress;
    use num_traits::ToPrimitive;

    use crate::SeqRange;

    fn v4(lower: [u8; 4], upper: [u8; 4]) -> SeqRange<Ipv4Addr> {
        SeqRange::new(Ipv4Addr::from(lower), Ipv4Addr::from(upper))
    }

    #[test]
    fn test_split_last_segment() {
        let (left, right) = v4([1, 2, 3, 0], [1, 2, 3, 255]).split().unwrap();
        assert_eq!(left, v4([1, 2, 3, 0], [1, 2, 3, 127]));
        assert_eq!(right, v4([1, 2, 3, 128], [1, 2, 3, 255]));
    }

    #[test]
    fn test_split_fills_trailing_segments() {
        let (left, right) = v4([1, 2, 3, 4], [1, 2, 4, 5]).split().unwrap();
        assert_eq!(left, v4([1, 2, 3, 4], [1, 2, 3, 255]));
        assert_eq!(right, v4([1, 2, 4, 0], [1, 2, 4, 5]));

        let (left, right) = v4([1, 0, 0, 9], [9, 0, 0, 0]).split().unwrap();
        assert_eq!(left.upper(), Ipv4Addr::new(5, 255, 255, 255));
        assert_eq!(right.lower(), Ipv4Addr::new(6, 0, 0, 0));
    }

    #[test]
    fn test_split_single_fails() {
        assert!(v4([1, 2, 3, 4], [1, 2, 3, 4]).split().is_none());
        let (left, right) = v4([1, 2, 3, 4], [1, 2, 3, 5]).split().unwrap();
        assert!(!left.is_multiple() && !right.is_multiple());
    }

    #[test]
    fn test_split_prefix_on_segment_boundary() {
        let r = v4([1, 2, 3, 4], [1, 2, 6, 5]);
        let (left, right) = r.split_prefix(24).unwrap().unwrap();
        assert_eq!(left, v4([1, 2, 3, 4], [1, 2, 4, 255]));
        assert_eq!(right, v4([1, 2, 5, 0], [1, 2, 6, 5]));

        // one /24 block only
        assert!(v4([1, 2, 3, 4], [1, 2, 3, 200]).split_prefix(24).unwrap().is_none());
        assert!(r.split_prefix(0).unwrap().is_none());
        assert!(r.split_prefix(33).is_err());
    }

    #[test]
    fn test_split_prefix_inside_segment() {
        // /20: blocks of 16 in the third segment
        let r = v4([10, 0, 0x0f, 1], [10, 0, 0x31, 0]);
        let (left, right) = r.split_prefix(20).unwrap().unwrap();
        assert_eq!(left, v4([10, 0, 0x0f, 1], [10, 0, 0x1f, 255]));
        assert_eq!(right, v4([10, 0, 0x20, 0], [10, 0, 0x31, 0]));
        assert!(
            v4([10, 0, 0x10, 0], [10, 0, 0x1f, 9])
                .split_prefix(20)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_split_ipv6_full_space() {
        let all = SeqRange::new(Ipv6Addr::zero(), Ipv6Addr::max_value());
        let (left, right) = all.split().unwrap();
        assert_eq!(left.upper_value(), u128::MAX >> 1);
        assert_eq!(right.lower_value(), 1u128 << 127);
        assert_eq!(left.count(), right.count());
    }

    #[test]
    fn test_split_halves_are_adjacent() {
        let mut rng = fastrand::Rng::with_seed(31);
        for _ in 0..1000 {
            let r = SeqRange::new(Ipv6Addr::from(rng.u128(..)), Ipv6Addr::from(rng.u128(..)));
            let Some((left, right)) = r.split() else {
                assert!(!r.is_multiple());
                continue;
            };
            assert_eq!(left.lower(), r.lower());
            assert_eq!(right.upper(), r.upper());
            assert_eq!(left.upper().increment(1), Some(right.lower()));
            assert_eq!(left.join(&right), Some(r.clone()));
            assert_eq!(left.count() + right.count(), *r.count());
        }
    }

    #[test]
    fn test_bisect_to_exhaustion() {
        let r = v4([1, 2, 3, 250], [1, 2, 4, 20]);
        let parts = r.split_to_depth(64);
        assert_eq!(parts.len(), r.count().to_usize().unwrap());
        assert!(parts.iter().all(|p| !p.is_multiple()));
        assert_eq!(SeqRange::join_ranges(parts), vec![r.clone()]);

        let parts = r.split_to_depth(2);
        assert_eq!(parts.len(), 4);
        assert_eq!(SeqRange::join_ranges(parts), vec![r]);
    }

    /// Index of the prefix block holding `value` when `host_bits` bits are host bits.
    fn block_index(value: u128, host_bits: u32) -> u128 {
        value.checked_shr(host_bits).unwrap_or(0)
    }

    fn check_prefix_split<A: SegmentedAddress>(range: &SeqRange<A>, prefix_len: u32) {
        let host_bits = A::BIT_COUNT - prefix_len;
        let first = block_index(range.lower_value(), host_bits);
        let last = block_index(range.upper_value(), host_bits);
        let Some((left, right)) = range.split_prefix(prefix_len).unwrap() else {
            assert_eq!(first, last, "{range}/{prefix_len}");
            return;
        };
        assert_eq!(left.lower(), range.lower());
        assert_eq!(right.upper(), range.upper());
        assert_eq!(left.upper().increment(1), Some(right.lower()));
        assert!(left.upper().includes_max_host(prefix_len), "{range}/{prefix_len}");
        assert!(right.lower().includes_zero_host(prefix_len), "{range}/{prefix_len}");
        let left_last = block_index(left.upper_value(), host_bits);
        let right_first = block_index(right.lower_value(), host_bits);
        assert!(left_last < right_first, "{range}/{prefix_len}");
    }

    #[test]
    fn test_prefix_halves_do_not_share_blocks() {
        let mut rng = fastrand::Rng::with_seed(37);
        for _ in 0..20_000 {
            let r = v4(rng.u32(..).to_be_bytes(), rng.u32(..).to_be_bytes());
            check_prefix_split(&r, rng.u32(0..=32));
        }
        for _ in 0..20_000 {
            let r = SeqRange::new(Ipv6Addr::from(rng.u128(..)), Ipv6Addr::from(rng.u128(..)));
            check_prefix_split(&r, rng.u32(0..=128));
        }
    }

    #[test]
    fn test_prefix_halves_of_narrow_range() {
        // bounds inside neighbouring /24 blocks
        let r = v4([10, 0, 3, 200], [10, 0, 4, 10]);
        let (left, right) = r.split_prefix(24).unwrap().unwrap();
        assert_eq!(left, v4([10, 0, 3, 200], [10, 0, 3, 255]));
        assert_eq!(right, v4([10, 0, 4, 0], [10, 0, 4, 10]));
        check_prefix_split(&r, 24);
    }
}
