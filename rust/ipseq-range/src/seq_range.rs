//! The sequential range value.
//!
//! A [`SeqRange`] is an immutable pair of addresses `(lower, upper)` with `lower <= upper`.
//! Every address between the two bounds (inclusive) is a member, so a range can describe
//! spans that no single prefix block can, such as `1.2.3.4 -> 1.2.4.5`.
//!
//! The cardinality of a range can reach 2^128 and is therefore reported as a
//! [`BigUint`]; it is computed on first use and cached, as is the hash of the range.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::OnceLock,
};

use ipseq_addr::{AddressSpan, PrefixBlock, SegmentedAddress, prefix::check_prefix_len, span};
use ipseq_common::Result;
use num_bigint::BigUint;
use num_traits::One;

use crate::iter::{AddressIter, PrefixBlockIter, PrefixRangeIter};

/// Separator placed between the two bounds by the string renderings of a range.
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Seeds for the bound hasher; fixed so that range hashes are stable across runs.
const HASH_SEEDS: [u64; 4] = [0x2f0a_61c7, 0x5b3e_90d1, 0x7a19_c4e5, 0x1d84_b6f3];

/// A contiguous, inclusive range of addresses of family `A`.
///
/// Equality and hashing consider only the two bounds.
#[derive(Clone)]
pub struct SeqRange<A> {
    lower: A,
    upper: A,
    count: OnceLock<BigUint>,
    hash: OnceLock<u64>,
}

impl<A: SegmentedAddress> SeqRange<A> {
    /// Creates the range between two addresses, given in either order.
    pub fn new(first: A, second: A) -> SeqRange<A> {
        if first <= second {
            Self::from_ordered(first, second)
        } else {
            Self::from_ordered(second, first)
        }
    }

    /// Creates the single-address range `[address, address]`.
    pub fn single(address: A) -> SeqRange<A> {
        Self::from_ordered(address, address)
    }

    /// Creates the smallest range covering two spans, which may overlap or nest.
    ///
    /// When one span contains the other, the container's bounds are used. Otherwise
    /// the lower bound is the one of the span with the smaller low value, and the upper
    /// bound the larger of the two upper bounds. Spans are typically single addresses
    /// or [`PrefixBlock`]s; the prefix length of a block is not retained.
    pub fn from_spans<F, O>(first: &F, other: &O) -> SeqRange<A>
    where
        F: AddressSpan<A> + ?Sized,
        O: AddressSpan<A> + ?Sized,
    {
        if first.span_contains(other) {
            Self::from_ordered(first.span_lower(), first.span_upper())
        } else if other.span_contains(first) {
            Self::from_ordered(other.span_lower(), other.span_upper())
        } else {
            let lower = match span::compare_low_values::<A, F, O>(first, other) {
                Ordering::Greater => other.span_lower(),
                _ => first.span_lower(),
            };
            let upper = first.span_upper().max(other.span_upper());
            Self::from_ordered(lower, upper)
        }
    }

    /// Creates a range from bounds already known to be ordered.
    #[inline]
    pub(crate) fn from_ordered(lower: A, upper: A) -> SeqRange<A> {
        debug_assert!(lower <= upper);
        SeqRange {
            lower,
            upper,
            count: OnceLock::new(),
            hash: OnceLock::new(),
        }
    }

    /// The lowest address of the range.
    #[inline]
    pub fn lower(&self) -> A {
        self.lower
    }

    /// The highest address of the range.
    #[inline]
    pub fn upper(&self) -> A {
        self.upper
    }

    #[inline]
    pub fn lower_value(&self) -> u128 {
        self.lower.to_value()
    }

    #[inline]
    pub fn upper_value(&self) -> u128 {
        self.upper.to_value()
    }

    /// Number of bits of an address of the range's family.
    #[inline]
    pub fn bit_count(&self) -> u32 {
        A::BIT_COUNT
    }

    /// Number of addresses in the range, `upper - lower + 1`.
    ///
    /// Computed on first call and cached.
    pub fn count(&self) -> &BigUint {
        self.count
            .get_or_init(|| BigUint::from(self.upper_value() - self.lower_value()) + 1u32)
    }

    /// Whether the range holds more than one address.
    ///
    /// Uses the cached count when one is available, and a comparison of the bounds
    /// otherwise.
    #[inline]
    pub fn is_multiple(&self) -> bool {
        match self.count.get() {
            Some(count) => !count.is_one(),
            None => self.lower != self.upper,
        }
    }

    /// Whether this range holds more addresses than `other`.
    ///
    /// The two ranges may belong to different address families.
    pub fn is_more<B: SegmentedAddress>(&self, other: &SeqRange<B>) -> bool {
        self.compare_size(other) == Ordering::Greater
    }

    /// Compares the number of addresses of this range and `other`.
    pub fn compare_size<B: SegmentedAddress>(&self, other: &SeqRange<B>) -> Ordering {
        self.count().cmp(other.count())
    }

    /// Whether the range contains the zero address.
    #[inline]
    pub fn includes_zero(&self) -> bool {
        self.lower.is_zero()
    }

    /// Whether the range is exactly the zero address.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.includes_zero() && !self.is_multiple()
    }

    /// Whether the range contains the all-ones address.
    #[inline]
    pub fn includes_max(&self) -> bool {
        self.upper.is_max()
    }

    /// Whether the range is exactly the all-ones address.
    #[inline]
    pub fn is_max(&self) -> bool {
        self.includes_max() && !self.is_multiple()
    }

    /// Whether every address of `other` belongs to this range.
    ///
    /// `other` can be a single address, a [`PrefixBlock`] or another range.
    #[inline]
    pub fn contains<O: AddressSpan<A> + ?Sized>(&self, other: &O) -> bool {
        self.span_contains(other)
    }

    /// Whether this range and `other` share at least one address.
    #[inline]
    pub fn overlaps<O: AddressSpan<A> + ?Sized>(&self, other: &O) -> bool {
        self.span_overlaps(other)
    }

    /// Returns an iterator over every address of the range, in ascending order.
    pub fn iter(&self) -> AddressIter<A> {
        AddressIter::new(self.lower, self.upper)
    }

    /// Returns an iterator over every prefix block of length `prefix_len` that
    /// intersects the range, in ascending order.
    ///
    /// The first and last blocks are complete blocks and may reach beyond the range.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn prefix_block_iter(&self, prefix_len: u32) -> Result<PrefixBlockIter<A>> {
        check_prefix_len::<A>(prefix_len)?;
        Ok(PrefixBlockIter::new(self.lower, self.upper, prefix_len))
    }

    /// Returns an iterator over the prefix blocks of length `prefix_len` that intersect
    /// the range, with the first and last block trimmed to the range bounds.
    ///
    /// The yielded ranges are disjoint, ascending, and their union is this range.
    ///
    /// # Errors
    ///
    /// Fails when `prefix_len` exceeds the bit count of the family.
    pub fn prefix_iter(&self, prefix_len: u32) -> Result<PrefixRangeIter<A>> {
        check_prefix_len::<A>(prefix_len)?;
        Ok(PrefixRangeIter::new(self, prefix_len))
    }

    /// Renders both bounds in canonical form, separated by `separator`.
    pub fn to_canonical_string_with(&self, separator: &str) -> String {
        self.to_string_with(A::to_canonical_string, separator, A::to_canonical_string)
    }

    /// Renders both bounds in normalized form, separated by `separator`.
    pub fn to_normalized_string_with(&self, separator: &str) -> String {
        self.to_string_with(A::to_normalized_string, separator, A::to_normalized_string)
    }

    pub fn to_canonical_string(&self) -> String {
        self.to_canonical_string_with(DEFAULT_SEPARATOR)
    }

    pub fn to_normalized_string(&self) -> String {
        self.to_normalized_string_with(DEFAULT_SEPARATOR)
    }

    /// Renders the range as `<lower><separator><upper>`, formatting each bound with
    /// its own function.
    pub fn to_string_with<L, U>(&self, lower_fmt: L, separator: &str, upper_fmt: U) -> String
    where
        L: FnOnce(&A) -> String,
        U: FnOnce(&A) -> String,
    {
        let lower = lower_fmt(&self.lower);
        let upper = upper_fmt(&self.upper);
        let mut out = String::with_capacity(lower.len() + separator.len() + upper.len());
        out.push_str(&lower);
        out.push_str(separator);
        out.push_str(&upper);
        out
    }

    /// Memoized hash of the two bounds.
    fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let [k0, k1, k2, k3] = HASH_SEEDS;
            let state = ahash::RandomState::with_seeds(k0, k1, k2, k3);
            31u64
                .wrapping_mul(state.hash_one(self.lower))
                .wrapping_add(state.hash_one(self.upper))
        })
    }
}

impl<A: SegmentedAddress> AddressSpan<A> for SeqRange<A> {
    #[inline]
    fn span_lower(&self) -> A {
        self.lower
    }

    #[inline]
    fn span_upper(&self) -> A {
        self.upper
    }
}

impl<A: SegmentedAddress> From<PrefixBlock<A>> for SeqRange<A> {
    fn from(block: PrefixBlock<A>) -> Self {
        SeqRange::from_ordered(block.lower(), block.upper())
    }
}

impl<A: SegmentedAddress> PartialEq for SeqRange<A> {
    fn eq(&self, other: &Self) -> bool {
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<A: SegmentedAddress> Eq for SeqRange<A> {}

impl<A: SegmentedAddress> Hash for SeqRange<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<A: SegmentedAddress> fmt::Debug for SeqRange<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqRange")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<A: SegmentedAddress> fmt::Display for SeqRange<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DEFAULT_SEPARATOR}{}",
            self.lower.to_canonical_string(),
            self.upper.to_canonical_string()
        )
    }
}

impl<'a, A: SegmentedAddress> IntoIterator for &'a SeqRange<A> {
    type Item = A;
    type IntoIter = AddressIter<A>;

    fn into_iter(self) -> AddressIter<A> {
        self.iter()
    }
}
