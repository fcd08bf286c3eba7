//! Segment-wise enumeration state machine shared by all range enumerators.
//!
//! The engine walks a range `[lower, upper]` as an odometer over segments. Each segment
//! owns a [`SegmentCursor`] that is re-supplied whenever the segment before it advances.
//! Which values the cursor covers depends on where the segment stands relative to the
//! first segment at which `lower` and `upper` differ (call its index `k`):
//!
//! - before `k` the segment is fixed to its single shared value
//! - at `k` it runs from the lower to the upper value, once
//! - after `k` it first runs from the lower value to the segment maximum, then over the
//!   full domain, and finally, once every preceding segment has produced its last value,
//!   from zero to the upper value
//!
//! The "last value" knowledge is propagated through `final_value`: entry `i` is set once
//! segment `i - 1` has yielded the final value of its final cursor, so segment `i` knows
//! that its next cursor is bounded by the upper address.
//!
//! Segments after the layout's network segment are supplied exactly once, at
//! construction; their single block value is kept for every yielded item.

use ipseq_addr::{MAX_SEGMENTS, SegInt, SegmentRange};
use tinyvec::ArrayVec;

use super::{cursor::SegmentCursor, layout::SegmentLayout};

/// Segment values of one enumerated item, most significant first.
pub(crate) type SegmentRanges = ArrayVec<[SegmentRange; MAX_SEGMENTS]>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Stage {
    /// Shares its value between the bounds; supplied once with that value.
    #[default]
    Fixed,
    /// First differing segment; supplied once with `lower..=upper`.
    Ranging,
    /// Later segment, not yet supplied; next cursor is `lower..=max`.
    FirstOfTail,
    /// Later segment; next cursor is `0..=max`, or `0..=upper` once the preceding
    /// segment reached its final value.
    FullDomain,
    /// Later segment whose `0..=upper` cursor has been supplied.
    Tail,
}

#[derive(Debug, Clone, Copy, Default)]
struct SegmentSlot {
    stage: Stage,
    lower: SegInt,
    upper: SegInt,
    shift: u32,
    cursor: SegmentCursor,
    /// The current cursor is the last one this segment gets; its last value is final.
    last_cursor: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct SegmentsEngine {
    slots: ArrayVec<[SegmentSlot; MAX_SEGMENTS]>,
    current: SegmentRanges,
    final_value: [bool; MAX_SEGMENTS + 1],
    max_segment_value: SegInt,
    network_segment_index: usize,
    done: bool,
}

impl SegmentsEngine {
    /// Creates an engine positioned on the first item of `[lower, upper]`.
    ///
    /// # Arguments
    ///
    /// * `lower`, `upper` - segment values of the bounds, `lower <= upper` as addresses
    /// * `max_segment_value` - largest value a segment can hold
    /// * `layout` - which segments are enumerated and with which block size
    pub fn new(
        lower: &[SegInt],
        upper: &[SegInt],
        max_segment_value: SegInt,
        layout: &SegmentLayout,
    ) -> SegmentsEngine {
        debug_assert_eq!(lower.len(), layout.segment_count());
        debug_assert_eq!(upper.len(), layout.segment_count());

        let mut final_value = [false; MAX_SEGMENTS + 1];
        final_value[0] = true;
        let mut slots = ArrayVec::new();
        let mut differing = false;
        for (i, (&low, &high)) in lower.iter().zip(upper).enumerate() {
            let shift = layout.shift(i);
            let stage = if differing {
                Stage::FirstOfTail
            } else if low >> shift == high >> shift {
                final_value[i + 1] = true;
                Stage::Fixed
            } else {
                differing = true;
                Stage::Ranging
            };
            slots.push(SegmentSlot {
                stage,
                lower: low,
                upper: high,
                shift,
                ..Default::default()
            });
        }

        let mut engine = SegmentsEngine {
            current: std::iter::repeat_n(SegmentRange::default(), slots.len()).collect(),
            slots,
            final_value,
            max_segment_value,
            network_segment_index: layout.network_segment_index(),
            done: false,
        };
        engine.refill(0);
        for i in engine.network_segment_index + 1..engine.slots.len() {
            engine.supply(i);
            engine.pull_into_current(i);
        }
        engine
    }

    /// Whether every item has been yielded.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the current item and advances to the next one.
    pub fn next_segments(&mut self) -> Option<SegmentRanges> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.advance();
        Some(item)
    }

    fn advance(&mut self) {
        for j in (0..=self.network_segment_index).rev() {
            if let Some(value) = self.pull(j) {
                self.current[j] = value;
                self.refill(j + 1);
                return;
            }
        }
        self.done = true;
    }

    /// Re-supplies and positions every enumerated segment from `start` on.
    fn refill(&mut self, start: usize) {
        for i in start..=self.network_segment_index {
            self.supply(i);
            self.pull_into_current(i);
        }
    }

    fn pull_into_current(&mut self, index: usize) {
        let value = self.pull(index);
        debug_assert!(value.is_some(), "freshly supplied cursor is empty");
        if let Some(value) = value {
            self.current[index] = value;
        }
    }

    fn supply(&mut self, index: usize) {
        let max = self.max_segment_value;
        let preceding_final = self.final_value[index];
        let slot = &mut self.slots[index];
        let (range, last_cursor) = match slot.stage {
            Stage::Fixed => (SegmentRange::single(slot.lower), false),
            Stage::Ranging => (SegmentRange::new(slot.lower, slot.upper), true),
            Stage::FirstOfTail => {
                slot.stage = Stage::FullDomain;
                (SegmentRange::new(slot.lower, max), false)
            }
            Stage::FullDomain | Stage::Tail if preceding_final => {
                slot.stage = Stage::Tail;
                (SegmentRange::new(0, slot.upper), true)
            }
            Stage::FullDomain | Stage::Tail => (SegmentRange::full(max), false),
        };
        slot.cursor = SegmentCursor::new(range, slot.shift);
        slot.last_cursor = last_cursor;
    }

    fn pull(&mut self, index: usize) -> Option<SegmentRange> {
        let slot = &mut self.slots[index];
        let value = slot.cursor.next()?;
        if slot.last_cursor && slot.cursor.is_exhausted() {
            self.final_value[index + 1] = true;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use ipseq_addr::SegmentedAddress;

    use super::*;

    fn values(lower: Ipv4Addr, upper: Ipv4Addr) -> Vec<u32> {
        let layout = SegmentLayout::addresses::<Ipv4Addr>();
        let mut engine = SegmentsEngine::new(
            &lower.segment_values(),
            &upper.segment_values(),
            Ipv4Addr::MAX_SEGMENT_VALUE,
            &layout,
        );
        let mut out = Vec::new();
        while let Some(segments) = engine.next_segments() {
            assert!(segments.iter().all(|s| !s.is_multiple()));
            let lows: Vec<SegInt> = segments.iter().map(|s| s.low).collect();
            out.push(u32::from(Ipv4Addr::from_segment_values(&lows)));
        }
        assert!(engine.is_done());
        out
    }

    fn blocks(lower: Ipv4Addr, upper: Ipv4Addr, prefix_len: u32) -> Vec<(u32, u32)> {
        let layout = SegmentLayout::prefix_blocks::<Ipv4Addr>(prefix_len);
        let mut engine = SegmentsEngine::new(
            &lower.segment_values(),
            &upper.segment_values(),
            Ipv4Addr::MAX_SEGMENT_VALUE,
            &layout,
        );
        let mut out = Vec::new();
        while let Some(segments) = engine.next_segments() {
            let lows: Vec<SegInt> = segments.iter().map(|s| s.low).collect();
            let highs: Vec<SegInt> = segments.iter().map(|s| s.high).collect();
            out.push((
                u32::from(Ipv4Addr::from_segment_values(&lows)),
                u32::from(Ipv4Addr::from_segment_values(&highs)),
            ));
        }
        out
    }

    #[test]
    fn test_single_address() {
        let a = Ipv4Addr::new(1, 2, 3, 4);
        assert_eq!(values(a, a), vec![u32::from(a)]);
    }

    #[test]
    fn test_carry_across_segments() {
        let lower = Ipv4Addr::new(1, 2, 3, 250);
        let upper = Ipv4Addr::new(1, 2, 4, 5);
        let expected: Vec<u32> = (u32::from(lower)..=u32::from(upper)).collect();
        assert_eq!(values(lower, upper), expected);
    }

    #[test]
    fn test_carry_into_zero_tail() {
        let lower = Ipv4Addr::new(1, 2, 255, 254);
        let upper = Ipv4Addr::new(1, 3, 0, 0);
        let expected: Vec<u32> = (u32::from(lower)..=u32::from(upper)).collect();
        assert_eq!(values(lower, upper), expected);
    }

    #[test]
    fn test_random_ranges_match_counting() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            let lower = rng.u32(..);
            let upper = lower.saturating_add(rng.u32(0..3000));
            let expected: Vec<u32> = (lower..=upper).collect();
            assert_eq!(
                values(Ipv4Addr::from(lower), Ipv4Addr::from(upper)),
                expected,
                "range {lower:#x}..={upper:#x}"
            );
        }
    }

    #[test]
    fn test_top_of_space() {
        let lower = Ipv4Addr::new(255, 255, 255, 253);
        let out = values(lower, Ipv4Addr::max_value());
        assert_eq!(out, vec![0xffff_fffd, 0xffff_fffe, 0xffff_ffff]);
    }

    #[test]
    fn test_prefix_blocks() {
        let out = blocks(Ipv4Addr::new(1, 2, 3, 4), Ipv4Addr::new(1, 2, 5, 6), 24);
        assert_eq!(
            out,
            vec![
                (0x0102_0300, 0x0102_03ff),
                (0x0102_0400, 0x0102_04ff),
                (0x0102_0500, 0x0102_05ff),
            ]
        );
    }

    #[test]
    fn test_prefix_blocks_inside_segment() {
        let out = blocks(Ipv4Addr::new(10, 0, 0x0f, 0), Ipv4Addr::new(10, 0, 0x31, 0), 20);
        assert_eq!(
            out,
            vec![
                (0x0a00_0000, 0x0a00_0fff),
                (0x0a00_1000, 0x0a00_1fff),
                (0x0a00_2000, 0x0a00_2fff),
                (0x0a00_3000, 0x0a00_3fff),
            ]
        );
    }

    #[test]
    fn test_prefix_blocks_random_match_counting() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..200 {
            let prefix_len = rng.u32(0..=32);
            let lower = rng.u32(..);
            let upper = lower.saturating_add(rng.u32(..1 << 12));
            let host = 32 - prefix_len;
            let (first, last) = if host == 32 {
                (0u64, 0u64)
            } else {
                ((lower >> host) as u64, (upper >> host) as u64)
            };
            let expected: Vec<(u32, u32)> = (first..=last)
                .map(|n| {
                    if host == 32 {
                        (0, u32::MAX)
                    } else {
                        let low = (n as u32) << host;
                        (low, low | ((1u64 << host) - 1) as u32)
                    }
                })
                .collect();
            assert_eq!(
                blocks(Ipv4Addr::from(lower), Ipv4Addr::from(upper), prefix_len),
                expected,
                "range {lower:#x}..={upper:#x}/{prefix_len}"
            );
        }
    }
}
