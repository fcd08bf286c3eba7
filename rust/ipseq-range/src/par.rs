//! Parallel traversal of a range with rayon.
//!
//! The producers behind [`ParAddressIter`] and [`ParPrefixBlockIter`] split work with
//! the range bisector and fold each piece with the sequential enumerators, so rayon's
//! work stealing decides how deep a range gets divided.

use ipseq_addr::{PrefixBlock, SegmentedAddress, prefix::check_prefix_len};
use ipseq_common::Result;
use rayon::iter::{
    IntoParallelIterator, ParallelIterator,
    plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed},
};

use crate::{
    SeqRange,
    iter::{PrefixBlockIter, layout::SegmentLayout},
};

/// Parallel iterator over every address of a range.
///
/// Created by [`SeqRange::par_iter`]. Collecting preserves ascending order.
#[derive(Debug, Clone)]
pub struct ParAddressIter<A: SegmentedAddress> {
    range: SeqRange<A>,
}

/// Parallel iterator over the prefix blocks of a fixed length intersecting a range.
///
/// Created by [`SeqRange::par_prefix_blocks`].
#[derive(Debug, Clone)]
pub struct ParPrefixBlockIter<A: SegmentedAddress> {
    range: SeqRange<A>,
    prefix_len: u32,
}

impl<A: SegmentedAddress> SeqRange<A> {
    /// Returns a parallel iterator over every address of the range.
    pub fn par_iter(&self) -> ParAddressIter<A> {
        ParAddressIter {
            range: self.clone(),
        }
    }

    /// Returns a parallel iterator over every prefix block of length `prefix_len`
    /// intersecting the range.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn par_prefix_blocks(&self, prefix_len: u32) -> Result<ParPrefixBlockIter<A>> {
        check_prefix_len::<A>(prefix_len)?;
        Ok(ParPrefixBlockIter {
            range: self.clone(),
            prefix_len,
        })
    }
}

impl<A: SegmentedAddress> ParallelIterator for ParAddressIter<A> {
    type Item = A;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(RangeProducer { range: self.range }, consumer)
    }
}

impl<A: SegmentedAddress> ParallelIterator for ParPrefixBlockIter<A> {
    type Item = PrefixBlock<A>;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        let producer = PrefixBlockProducer {
            layout: SegmentLayout::prefix_blocks::<A>(self.prefix_len),
            range: self.range,
            prefix_len: self.prefix_len,
        };
        bridge_unindexed(producer, consumer)
    }
}

impl<'a, A: SegmentedAddress> IntoParallelIterator for &'a SeqRange<A> {
    type Iter = ParAddressIter<A>;
    type Item = A;

    fn into_par_iter(self) -> ParAddressIter<A> {
        self.par_iter()
    }
}

/// Splits a range of addresses with the bisector.
struct RangeProducer<A: SegmentedAddress> {
    range: SeqRange<A>,
}

impl<A: SegmentedAddress> UnindexedProducer for RangeProducer<A> {
    type Item = A;

    fn split(self) -> (Self, Option<Self>) {
        match self.range.split() {
            Some((left, right)) => (
                RangeProducer { range: left },
                Some(RangeProducer { range: right }),
            ),
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.range.iter())
    }
}

/// Splits a range along prefix block boundaries, so that each block is produced by
/// exactly one piece.
struct PrefixBlockProducer<A: SegmentedAddress> {
    range: SeqRange<A>,
    prefix_len: u32,
    layout: SegmentLayout,
}

impl<A: SegmentedAddress> UnindexedProducer for PrefixBlockProducer<A> {
    type Item = PrefixBlock<A>;

    fn split(self) -> (Self, Option<Self>) {
        match self.range.split_with(&self.layout) {
            Some((left, right)) => {
                let right = PrefixBlockProducer {
                    range: right,
                    prefix_len: self.prefix_len,
                    layout: self.layout.clone(),
                };
                (PrefixBlockProducer { range: left, ..self }, Some(right))
            }
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(PrefixBlockIter::new(
            self.range.lower(),
            self.range.upper(),
            self.prefix_len,
        ))
    }
}
