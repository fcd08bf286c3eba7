use ipseq_addr::{SegmentedAddress, span::compare_low_values};

use crate::SeqRange;

impl<A: SegmentedAddress> SeqRange<A> {
    /// Joins `self` and `other` into a single range when they overlap or are adjacent
    /// (one range's upper bound plus one is the other's lower bound).
    ///
    /// Returns `None` when a gap separates the two ranges.
    pub fn join(&self, other: &SeqRange<A>) -> Option<SeqRange<A>> {
        let (first, second) = if self.lower() <= other.lower() {
            (self, other)
        } else {
            (other, self)
        };
        if !first.overlaps(second) && !is_adjacent(first.upper(), second.lower()) {
            return None;
        }
        if first.upper() >= second.upper() {
            return Some(first.clone());
        }
        Some(SeqRange::from_ordered(first.lower(), second.upper()))
    }

    /// Joins a batch of ranges into the minimal ascending list of ranges covering
    /// the same addresses.
    ///
    /// The input may be unordered and may contain `None` placeholders, which are
    /// dropped. Every pair of neighbouring output ranges is separated by a gap of at
    /// least one address.
    pub fn join_ranges<I>(ranges: I) -> Vec<SeqRange<A>>
    where
        I: IntoIterator,
        I::Item: Into<Option<SeqRange<A>>>,
    {
        let mut ranges: Vec<SeqRange<A>> = ranges.into_iter().filter_map(Into::into).collect();
        let input_len = ranges.len();
        ranges.sort_by(|a, b| compare_low_values::<A, _, _>(a, b));
        ranges.dedup_by(|next, joined| {
            let absorbed =
                next.lower() <= joined.upper() || is_adjacent(joined.upper(), next.lower());
            if absorbed && next.upper() > joined.upper() {
                *joined = SeqRange::from_ordered(joined.lower(), next.upper());
            }
            absorbed
        });
        log::trace!("joined {input_len} ranges into {}", ranges.len());
        ranges
    }
}

/// Whether `next` immediately follows `upper`.
#[inline]
fn is_adjacent<A: SegmentedAddress>(upper: A, next: A) -> bool {
    upper.increment(1) == Some(next)
}
