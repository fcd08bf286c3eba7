//! Lazy, ascending enumeration of the members of a sequential range.
//!
//! All enumerators are driven by [`SegmentsEngine`](engine::SegmentsEngine), which walks the
//! address space segment by segment, like an odometer whose wheels have different start and
//! stop positions. It keeps one small cursor per segment plus a "final value" flag per
//! segment, so its state is `O(segment count)` regardless of how many addresses the range
//! holds (up to 2^128).
//!
//! # Provided Enumerators
//!
//! - [`AddressIter`]: every individual address of the range.
//! - [`PrefixBlockIter`]: every prefix block of a given length that intersects the range.
//! - [`PrefixRangeIter`]: the same blocks, with the first and last one trimmed to the range.
//!
//! Enumerators are finite and cannot be restarted; obtain a new one from the range
//! (which is immutable and reusable) for another traversal.

mod cursor;
pub(crate) mod engine;
pub(crate) mod layout;

pub mod addresses;
pub mod prefix_blocks;
pub mod prefixes;

pub use addresses::AddressIter;
pub use prefix_blocks::PrefixBlockIter;
pub use prefixes::PrefixRangeIter;

/// Number of items left in an enumeration; `None` stands for 2^128, which only the
/// complete IPv6 space reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Remaining(Option<u128>);

impl Remaining {
    /// Items in the inclusive span `first..=last` of item ordinals.
    #[inline]
    pub fn between(first: u128, last: u128) -> Remaining {
        debug_assert!(first <= last);
        Remaining((last - first).checked_add(1))
    }

    #[inline]
    pub fn consume_one(&mut self) {
        self.0 = match self.0 {
            Some(n) => Some(n.saturating_sub(1)),
            None => Some(u128::MAX),
        };
    }

    pub fn size_hint(&self) -> (usize, Option<usize>) {
        match self.0.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}
