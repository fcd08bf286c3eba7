use ipseq_addr::SegmentedAddress;

use crate::SeqRange;

impl<A: SegmentedAddress> SeqRange<A> {
    /// Returns the range of addresses that belong to both `self` and `other`, or `None`
    /// when they do not overlap.
    ///
    /// When the intersection equals one of the operands, that operand is returned
    /// (as a clone, keeping any cached count).
    pub fn intersect(&self, other: &SeqRange<A>) -> Option<SeqRange<A>> {
        if self.lower() <= other.lower() {
            if self.upper() >= other.upper() {
                Some(other.clone())
            } else if self.upper() < other.lower() {
                None
            } else {
                Some(SeqRange::from_ordered(other.lower(), self.upper()))
            }
        } else if other.upper() >= self.upper() {
            Some(self.clone())
        } else if other.upper() < self.lower() {
            None
        } else {
            Some(SeqRange::from_ordered(self.lower(), other.upper()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use crate::SeqRange;

    fn r(lower: u32, upper: u32) -> SeqRange<Ipv4Addr> {
        SeqRange::new(Ipv4Addr::from(lower), Ipv4Addr::from(upper))
    }

    #[test]
    fn test_intersect_cases() {
        assert_eq!(r(10, 20).intersect(&r(12, 15)), Some(r(12, 15)));
        assert_eq!(r(12, 15).intersect(&r(10, 20)), Some(r(12, 15)));
        assert_eq!(r(10, 20).intersect(&r(15, 30)), Some(r(15, 20)));
        assert_eq!(r(15, 30).intersect(&r(10, 20)), Some(r(15, 20)));
        assert_eq!(r(10, 20).intersect(&r(20, 30)), Some(r(20, 20)));
        assert_eq!(r(10, 20).intersect(&r(21, 30)), None);
        assert_eq!(r(21, 30).intersect(&r(10, 20)), None);
    }

    #[test]
    fn test_intersect_commutative_idempotent() {
        let mut rng = fastrand::Rng::with_seed(19);
        for _ in 0..1000 {
            let a = r(rng.u32(..1000), rng.u32(..1000));
            let b = r(rng.u32(..1000), rng.u32(..1000));
            assert_eq!(a.intersect(&b), b.intersect(&a));
            assert_eq!(a.intersect(&a).as_ref(), Some(&a));
            if let Some(both) = a.intersect(&b) {
                assert!(a.contains(&both) && b.contains(&both));
            } else {
                assert!(!a.overlaps(&b));
            }
        }
    }
}
