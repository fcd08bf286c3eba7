use ipseq_addr::{AddressSpan, SegmentedAddress};

use crate::SeqRange;

impl<A: SegmentedAddress> SeqRange<A> {
    /// Returns the smallest range spanning both `self` and `other`.
    ///
    /// Unlike [`join`](Self::join) this never fails: any gap between the two spans is
    /// included. `other` can be a single address, a prefix block or a range of the same
    /// family. Mixed families go through [`IpSeqRange::extend`](crate::IpSeqRange::extend),
    /// which reports them as `None`.
    pub fn extend<O: AddressSpan<A> + ?Sized>(&self, other: &O) -> SeqRange<A> {
        let lower_grows = other.span_lower() < self.lower();
        let upper_grows = other.span_upper() > self.upper();
        match (lower_grows, upper_grows) {
            (false, false) => self.clone(),
            (true, true) => SeqRange::from_ordered(other.span_lower(), other.span_upper()),
            (true, false) => SeqRange::from_ordered(other.span_lower(), self.upper()),
            (false, true) => SeqRange::from_ordered(self.lower(), other.span_upper()),
        }
    }
}
