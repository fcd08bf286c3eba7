//! Enumeration of the individual addresses of a range.

use std::{iter::FusedIterator, marker::PhantomData};

use ipseq_addr::{SegmentValues, SegmentedAddress};

use super::{Remaining, engine::SegmentsEngine, layout::SegmentLayout};

/// Iterator over every address of a sequential range, in ascending order.
///
/// Created by [`SeqRange::iter`](crate::SeqRange::iter). The iterator state is a handful
/// of segment cursors, independent of the size of the range.
#[derive(Debug, Clone)]
pub struct AddressIter<A> {
    engine: SegmentsEngine,
    remaining: Remaining,
    _marker: PhantomData<A>,
}

impl<A: SegmentedAddress> AddressIter<A> {
    pub(crate) fn new(lower: A, upper: A) -> AddressIter<A> {
        debug_assert!(lower <= upper);
        let layout = SegmentLayout::addresses::<A>();
        AddressIter {
            engine: SegmentsEngine::new(
                &lower.segment_values(),
                &upper.segment_values(),
                A::MAX_SEGMENT_VALUE,
                &layout,
            ),
            remaining: Remaining::between(lower.to_value(), upper.to_value()),
            _marker: PhantomData,
        }
    }
}

impl<A: SegmentedAddress> Iterator for AddressIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let segments = self.engine.next_segments()?;
        self.remaining.consume_one();
        let values: SegmentValues = segments.iter().map(|s| s.low).collect();
        Some(A::from_segment_values(&values))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.engine.is_done() {
            (0, Some(0))
        } else {
            self.remaining.size_hint()
        }
    }
}

impl<A: SegmentedAddress> FusedIterator for AddressIter<A> {}
