//! Prefix-block queries over a sequential range.

use ipseq_addr::{
    PrefixBlock, SegmentRange, SegmentedAddress,
    address::low_bits_mask,
    prefix::{check_prefix_len, host_segment_index, segment_prefix_length},
};
use ipseq_common::Result;

use crate::SeqRange;

impl<A: SegmentedAddress> SeqRange<A> {
    /// Whether the range is a union of whole prefix blocks of length `prefix_len`.
    ///
    /// The segment holding the first host bit must cover whole blocks of its segment
    /// prefix, and every later segment must span its full value domain. Segments before
    /// it are unconstrained.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn contains_prefix_block(&self, prefix_len: u32) -> Result<bool> {
        check_prefix_len::<A>(prefix_len)?;
        let bits = A::BITS_PER_SEGMENT;
        let index = host_segment_index(prefix_len, bits);
        if index >= A::SEGMENT_COUNT {
            return Ok(true);
        }
        let segment_prefix = segment_prefix_length(bits, prefix_len, index).unwrap_or(bits);
        if !self
            .segment_pair(index)
            .contains_prefix_block(segment_prefix, bits)
        {
            return Ok(false);
        }
        Ok(self.is_full_from(index + 1))
    }

    /// Whether the range is exactly one prefix block of length `prefix_len`.
    ///
    /// Segments fully inside the prefix must be identical in both bounds, the segment
    /// holding the prefix boundary must be one block of its segment prefix, and every
    /// later segment must span its full value domain.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn contains_single_prefix_block(&self, prefix_len: u32) -> Result<bool> {
        check_prefix_len::<A>(prefix_len)?;
        let bits = A::BITS_PER_SEGMENT;
        let mut preceding = 0;
        for index in 0..A::SEGMENT_COUNT {
            let total = preceding + bits;
            let pair = self.segment_pair(index);
            if prefix_len >= total {
                if pair.is_multiple() {
                    return Ok(false);
                }
            } else {
                let segment_prefix = prefix_len.saturating_sub(preceding);
                if !pair.contains_single_prefix_block(segment_prefix, bits) {
                    return Ok(false);
                }
                return Ok(self.is_full_from(index + 1));
            }
            preceding = total;
        }
        Ok(true)
    }

    /// The prefix length for which the range is exactly one prefix block, if any.
    pub fn prefix_len_for_single_block(&self) -> Option<u32> {
        let diff = self.upper_value() - self.lower_value();
        // diff must be all ones below some bit, and lower aligned to it
        if diff & diff.wrapping_add(1) != 0 || self.lower_value() & diff != 0 {
            return None;
        }
        let host_bits = u128::BITS - diff.leading_zeros();
        Some(A::BIT_COUNT - host_bits)
    }

    /// The smallest prefix length for which the range is a union of whole prefix blocks.
    ///
    /// Returns the bit count of the family when no shorter prefix qualifies.
    pub fn min_prefix_len_for_block(&self) -> u32 {
        let host_bits = self
            .lower_value()
            .trailing_zeros()
            .min(self.upper_value().trailing_ones())
            .min(A::BIT_COUNT);
        A::BIT_COUNT - host_bits
    }

    /// The smallest prefix block containing the whole range.
    pub fn cover_with_prefix_block(&self) -> PrefixBlock<A> {
        let differing = self.lower_value() ^ self.upper_value();
        let host_bits = u128::BITS - differing.leading_zeros();
        PrefixBlock::containing(self.lower(), A::BIT_COUNT - host_bits)
    }

    /// The minimal ascending list of prefix blocks whose union is exactly the range.
    pub fn span_with_prefix_blocks(&self) -> Vec<PrefixBlock<A>> {
        let upper = self.upper_value();
        let mut current = self.lower_value();
        let mut blocks = Vec::new();
        loop {
            let remaining = upper - current;
            let fitting_bits = match remaining.checked_add(1) {
                Some(len) => u128::BITS - 1 - len.leading_zeros(),
                None => u128::BITS,
            };
            let host_bits = fitting_bits
                .min(current.trailing_zeros())
                .min(A::BIT_COUNT);
            blocks.push(PrefixBlock::containing(
                A::from_value(current),
                A::BIT_COUNT - host_bits,
            ));
            let end = current | low_bits_mask(host_bits);
            if end >= upper {
                break;
            }
            current = end + 1;
        }
        log::trace!("{self} spans {} prefix blocks", blocks.len());
        blocks
    }

    /// Segment values of both bounds at `index`, which need not be ordered.
    #[inline]
    fn segment_pair(&self, index: usize) -> SegmentRange {
        SegmentRange {
            low: self.lower().segment(index),
            high: self.upper().segment(index),
        }
    }

    /// Whether every segment from `start` on spans its full value domain.
    fn is_full_from(&self, start: usize) -> bool {
        (start..A::SEGMENT_COUNT).all(|i| self.segment_pair(i).is_full(A::MAX_SEGMENT_VALUE))
    }
}
