//! Spans of addresses described by their lowest and highest member.

use std::{
    cmp::Ordering,
    net::{Ipv4Addr, Ipv6Addr},
};

use crate::SegmentedAddress;

/// A contiguous span of addresses of family `A`, described by its bounds.
///
/// Single addresses are degenerate spans whose lower and upper bound coincide.
pub trait AddressSpan<A: SegmentedAddress> {
    /// Lowest address of the span.
    fn span_lower(&self) -> A;

    /// Highest address of the span.
    fn span_upper(&self) -> A;

    /// Whether every address of `other` is also in `self`.
    fn span_contains<O>(&self, other: &O) -> bool
    where
        O: AddressSpan<A> + ?Sized,
    {
        other.span_lower() >= self.span_lower() && other.span_upper() <= self.span_upper()
    }

    /// Whether `self` and `other` share at least one address.
    fn span_overlaps<O>(&self, other: &O) -> bool
    where
        O: AddressSpan<A> + ?Sized,
    {
        other.span_lower() <= self.span_upper() && other.span_upper() >= self.span_lower()
    }
}

/// Compares two spans by their low values, ignoring the upper bounds.
#[inline]
pub fn compare_low_values<A, L, R>(one: &L, two: &R) -> Ordering
where
    A: SegmentedAddress,
    L: AddressSpan<A> + ?Sized,
    R: AddressSpan<A> + ?Sized,
{
    one.span_lower().cmp(&two.span_lower())
}

macro_rules! impl_single_address_span {
    ($addr:ty) => {
        impl AddressSpan<$addr> for $addr {
            #[inline]
            fn span_lower(&self) -> $addr {
                *self
            }

            #[inline]
            fn span_upper(&self) -> $addr {
                *self
            }
        }
    };
}

impl_single_address_span!(Ipv4Addr);
impl_single_address_span!(Ipv6Addr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_address_span() {
        let a = Ipv4Addr::new(1, 2, 3, 4);
        let b = Ipv4Addr::new(1, 2, 3, 5);
        assert!(a.span_contains(&a));
        assert!(!a.span_contains(&b));
        assert!(!a.span_overlaps(&b));
        assert_eq!(compare_low_values::<Ipv4Addr, _, _>(&a, &b), Ordering::Less);
        assert_eq!(compare_low_values::<Ipv4Addr, _, _>(&b, &b), Ordering::Equal);
    }
}
