//! Enumeration of the prefix blocks intersecting a range.

use std::{iter::FusedIterator, marker::PhantomData};

use ipseq_addr::{PrefixBlock, SegmentValues, SegmentedAddress};

use super::{Remaining, engine::SegmentsEngine, layout::SegmentLayout};

/// Iterator over the prefix blocks of a fixed length that intersect a range.
///
/// Blocks are complete: the first and last one may extend beyond the range bounds.
/// Use [`PrefixRangeIter`](super::PrefixRangeIter) for blocks trimmed to the range.
///
/// Created by [`SeqRange::prefix_block_iter`](crate::SeqRange::prefix_block_iter).
#[derive(Debug, Clone)]
pub struct PrefixBlockIter<A> {
    engine: SegmentsEngine,
    prefix_len: u32,
    remaining: Remaining,
    _marker: PhantomData<A>,
}

impl<A: SegmentedAddress> PrefixBlockIter<A> {
    /// `prefix_len` must already be validated against `A`.
    pub(crate) fn new(lower: A, upper: A, prefix_len: u32) -> PrefixBlockIter<A> {
        debug_assert!(lower <= upper);
        let layout = SegmentLayout::prefix_blocks::<A>(prefix_len);
        let host_bits = A::BIT_COUNT - prefix_len;
        let remaining = if host_bits >= u128::BITS {
            Remaining::between(0, 0)
        } else {
            Remaining::between(lower.to_value() >> host_bits, upper.to_value() >> host_bits)
        };
        PrefixBlockIter {
            engine: SegmentsEngine::new(
                &lower.segment_values(),
                &upper.segment_values(),
                A::MAX_SEGMENT_VALUE,
                &layout,
            ),
            prefix_len,
            remaining,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn prefix_len(&self) -> u32 {
        self.prefix_len
    }

    /// Whether another block will be yielded.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.engine.is_done()
    }
}

impl<A: SegmentedAddress> Iterator for PrefixBlockIter<A> {
    type Item = PrefixBlock<A>;

    fn next(&mut self) -> Option<PrefixBlock<A>> {
        let segments = self.engine.next_segments()?;
        self.remaining.consume_one();
        let network: SegmentValues = segments.iter().map(|s| s.low).collect();
        Some(PrefixBlock::containing(
            A::from_segment_values(&network),
            self.prefix_len,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.engine.is_done() {
            (0, Some(0))
        } else {
            self.remaining.size_hint()
        }
    }
}

impl<A: SegmentedAddress> FusedIterator for PrefixBlockIter<A> {}
