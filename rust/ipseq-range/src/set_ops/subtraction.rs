use ipseq_addr::SegmentedAddress;

use crate::SeqRange;

impl<A: SegmentedAddress> SeqRange<A> {
    /// Returns the addresses of `self` that are not in `other`, as zero, one or two
    /// ranges in ascending order.
    ///
    /// The placements of `other` relative to `self` are:
    ///
    /// - entirely below or above: `self` is returned unchanged
    /// - covering `self` (including equal): nothing remains
    /// - strictly inside: the parts below and above `other` remain
    /// - overlapping the lower end only: the part above `other` remains
    /// - overlapping the upper end only: the part below `other` remains
    pub fn subtract(&self, other: &SeqRange<A>) -> Vec<SeqRange<A>> {
        let (lower, upper) = (self.lower(), self.upper());
        let (other_lower, other_upper) = (other.lower(), other.upper());

        if other_upper < lower || other_lower > upper {
            return vec![self.clone()];
        }
        if other_lower <= lower && other_upper >= upper {
            return Vec::new();
        }
        // below: lower ..= other_lower - 1, above: other_upper + 1 ..= upper
        let below = (lower < other_lower)
            .then(|| other_lower.increment(-1))
            .flatten()
            .map(|end| SeqRange::from_ordered(lower, end));
        let above = (other_upper < upper)
            .then(|| other_upper.increment(1))
            .flatten()
            .map(|start| SeqRange::from_ordered(start, upper));
        below.into_iter().chain(above).collect()
    }
}
