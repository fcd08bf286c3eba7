//! Pull cursor over the values, or value blocks, of one segment.

use ipseq_addr::{SegInt, SegmentRange};

/// Enumerates `range` in steps of `1 << shift`.
///
/// With a zero shift every value is yielded as a single-valued [`SegmentRange`]; with a
/// positive shift each yielded item is the whole block of `shift` host bits containing
/// the current value.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SegmentCursor {
    /// Network part of the next block.
    next: SegInt,
    /// Network part of the last block.
    last: SegInt,
    shift: u32,
    exhausted: bool,
}

impl SegmentCursor {
    #[inline]
    pub fn new(range: SegmentRange, shift: u32) -> SegmentCursor {
        SegmentCursor {
            next: range.low >> shift,
            last: range.high >> shift,
            shift,
            exhausted: false,
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[inline]
    pub fn next(&mut self) -> Option<SegmentRange> {
        if self.exhausted {
            return None;
        }
        let network = self.next;
        if network == self.last {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        Some(SegmentRange::block(network, self.shift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut cursor: SegmentCursor) -> Vec<SegmentRange> {
        let mut out = Vec::new();
        while let Some(r) = cursor.next() {
            out.push(r);
        }
        out
    }

    #[test]
    fn test_values() {
        let out = drain(SegmentCursor::new(SegmentRange::new(3, 6), 0));
        let lows: Vec<_> = out.iter().map(|r| r.low).collect();
        assert_eq!(lows, vec![3, 4, 5, 6]);
        assert!(out.iter().all(|r| !r.is_multiple()));
    }

    #[test]
    fn test_single_value() {
        let mut cursor = SegmentCursor::new(SegmentRange::single(9), 0);
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.next(), Some(SegmentRange::single(9)));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_blocks() {
        // 0x13..=0x41 in blocks of 16 touches four blocks
        let out = drain(SegmentCursor::new(SegmentRange::new(0x13, 0x41), 4));
        assert_eq!(
            out,
            vec![
                SegmentRange::new(0x10, 0x1f),
                SegmentRange::new(0x20, 0x2f),
                SegmentRange::new(0x30, 0x3f),
                SegmentRange::new(0x40, 0x4f),
            ]
        );
    }

    #[test]
    fn test_whole_segment_block() {
        let out = drain(SegmentCursor::new(SegmentRange::new(7, 200), 8));
        assert_eq!(out, vec![SegmentRange::full(255)]);
    }

    #[test]
    fn test_max_value_does_not_overflow() {
        let out = drain(SegmentCursor::new(SegmentRange::new(0xfffe, 0xffff), 0));
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], SegmentRange::single(0xffff));
    }
}
