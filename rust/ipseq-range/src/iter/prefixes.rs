//! Prefix-block enumeration trimmed to the bounds of a range.

use std::iter::FusedIterator;

use ipseq_addr::{AddressSpan, SegmentedAddress};

use super::PrefixBlockIter;
use crate::SeqRange;

/// Iterator over the prefix blocks of a fixed length that intersect a range, each
/// clipped to the range bounds.
///
/// Interior items are whole prefix blocks. The first item starts at the range's lower
/// bound and the last one ends at its upper bound, so the items tile the range exactly.
/// A single-address range yields itself once.
///
/// Created by [`SeqRange::prefix_iter`](crate::SeqRange::prefix_iter).
#[derive(Debug, Clone)]
pub struct PrefixRangeIter<A: SegmentedAddress> {
    inner: Inner<A>,
}

#[derive(Debug, Clone)]
enum Inner<A: SegmentedAddress> {
    Single(Option<SeqRange<A>>),
    Blocks {
        blocks: PrefixBlockIter<A>,
        lower: A,
        upper: A,
        yielded_first: bool,
    },
}

impl<A: SegmentedAddress> PrefixRangeIter<A> {
    pub(crate) fn new(range: &SeqRange<A>, prefix_len: u32) -> PrefixRangeIter<A> {
        let inner = if range.is_multiple() {
            Inner::Blocks {
                blocks: PrefixBlockIter::new(range.lower(), range.upper(), prefix_len),
                lower: range.lower(),
                upper: range.upper(),
                yielded_first: false,
            }
        } else {
            Inner::Single(Some(range.clone()))
        };
        PrefixRangeIter { inner }
    }
}

impl<A: SegmentedAddress> Iterator for PrefixRangeIter<A> {
    type Item = SeqRange<A>;

    fn next(&mut self) -> Option<SeqRange<A>> {
        match &mut self.inner {
            Inner::Single(range) => range.take(),
            Inner::Blocks {
                blocks,
                lower,
                upper,
                yielded_first,
            } => {
                let block = blocks.next()?;
                let prefix_len = block.prefix_len();
                let is_last = !blocks.has_next();
                let low = if *yielded_first || lower.includes_zero_host(prefix_len) {
                    block.span_lower()
                } else {
                    *lower
                };
                let high = if is_last && !upper.includes_max_host(prefix_len) {
                    *upper
                } else {
                    block.span_upper()
                };
                *yielded_first = true;
                Some(SeqRange::new(low, high))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Single(range) => {
                let n = usize::from(range.is_some());
                (n, Some(n))
            }
            Inner::Blocks { blocks, .. } => blocks.size_hint(),
        }
    }
}

impl<A: SegmentedAddress> FusedIterator for PrefixRangeIter<A> {}
