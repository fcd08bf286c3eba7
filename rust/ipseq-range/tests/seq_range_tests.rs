use std::{
    collections::HashSet,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use ipseq_addr::{PrefixBlock, SegmentedAddress};
use ipseq_range::{IpSeqRange, SeqRange};
use num_bigint::BigUint;
use rayon::prelude::*;

fn v4(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

fn range(lower: &str, upper: &str) -> SeqRange<Ipv4Addr> {
    SeqRange::new(v4(lower), v4(upper))
}

#[test]
fn test_single_address_range() {
    let r = range("1.2.3.4", "1.2.3.4");
    assert_eq!(*r.count(), BigUint::from(1u32));
    assert!(!r.is_multiple());
    assert_eq!(r.iter().collect::<Vec<_>>(), vec![v4("1.2.3.4")]);
}

#[test]
fn test_range_spanning_blocks() {
    let r = range("1.2.3.4", "1.2.4.5");
    let items: Vec<_> = r.prefix_iter(8).unwrap().collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], r);
    assert!(r.prefix_len_for_single_block().is_none());
    assert_eq!(r.cover_with_prefix_block().prefix_len(), 21);
}

#[test]
fn test_join_adjacent_blocks() {
    let a = range("1.2.3.0", "1.2.3.255");
    let b = range("1.2.4.0", "1.2.4.255");
    assert_eq!(a.join(&b), Some(range("1.2.3.0", "1.2.4.255")));
    assert_eq!(b.join(&a), Some(range("1.2.3.0", "1.2.4.255")));
    assert!(!a.overlaps(&b));
}

#[test]
fn test_subtract_nested() {
    let a = range("1.2.3.0", "1.2.3.255");
    let b = range("1.2.3.100", "1.2.3.200");
    assert_eq!(
        a.subtract(&b),
        vec![range("1.2.3.0", "1.2.3.99"), range("1.2.3.201", "1.2.3.255")]
    );
}

#[test]
fn test_split_block() {
    let (left, right) = range("1.2.3.0", "1.2.3.255").split().unwrap();
    assert_eq!(left, range("1.2.3.0", "1.2.3.127"));
    assert_eq!(right, range("1.2.3.128", "1.2.3.255"));
}

#[test]
fn test_join_is_associative_over_adjacent_ranges() {
    let a = range("10.0.0.0", "10.0.0.9");
    let b = range("10.0.0.10", "10.0.0.19");
    let c = range("10.0.0.20", "10.0.0.29");
    let left = a.join(&b).and_then(|ab| ab.join(&c));
    let right = b.join(&c).and_then(|bc| a.join(&bc));
    assert_eq!(left, right);
    assert_eq!(left, Some(range("10.0.0.0", "10.0.0.29")));
    assert_eq!(SeqRange::join_ranges([c, a, b]), vec![range("10.0.0.0", "10.0.0.29")]);
}

#[test]
fn test_recursive_bisection_partitions_range() {
    fastrand::seed(2_458_331);
    for _ in 0..20 {
        let lower = fastrand::u32(..);
        let upper = lower.saturating_add(fastrand::u32(..2000));
        let r = SeqRange::new(Ipv4Addr::from(lower), Ipv4Addr::from(upper));
        let parts = r.split_to_depth(usize::MAX);
        assert!(parts.iter().all(|p| !p.is_multiple()));
        let addresses: Vec<_> = parts.iter().map(|p| p.lower()).collect();
        assert_eq!(addresses, r.iter().collect::<Vec<_>>());
        assert_eq!(SeqRange::join_ranges(parts), vec![r]);
    }
}

#[test]
fn test_parallel_enumeration_visits_each_address_once() {
    let r = range("172.16.250.0", "172.17.3.255");
    let seen: HashSet<Ipv4Addr> = r.par_iter().collect();
    assert_eq!(seen.len(), r.iter().count());
    let total: u64 = r.par_iter().map(|a| u32::from(a) as u64).sum();
    let expected: u64 = r.iter().map(|a| u32::from(a) as u64).sum();
    assert_eq!(total, expected);
}

#[test]
fn test_span_and_blocks_agree() {
    let r = range("192.168.0.7", "192.168.3.200");
    let blocks = r.span_with_prefix_blocks();
    let rebuilt = SeqRange::join_ranges(blocks.iter().copied().map(SeqRange::from));
    assert_eq!(rebuilt, vec![r.clone()]);
    let widest = blocks.iter().map(PrefixBlock::prefix_len).min().unwrap();
    assert!(r.contains_prefix_block(widest).is_ok());
}

#[test]
fn test_ipv6_counts_beyond_native_integers() {
    let r = SeqRange::new(Ipv6Addr::zero(), Ipv6Addr::max_value());
    assert_eq!(r.count().bits(), 129);
    assert!(r.contains_single_prefix_block(0).unwrap());
    let (left, right) = r.split().unwrap();
    assert_eq!(left.count() + right.count(), r.count().clone());
    assert_eq!(r.iter().take(3).count(), 3);
}

#[test]
fn test_family_erased_ranges() {
    let a: IpAddr = "10.0.0.1".parse().unwrap();
    let b: IpAddr = "fe80::1".parse().unwrap();
    assert!(IpSeqRange::new(a, b).is_err());
    let v4 = IpSeqRange::new(a, a).unwrap();
    let v6 = IpSeqRange::new(b, b).unwrap();
    assert_eq!(v4.join(&v6), None);
    assert_eq!(IpSeqRange::join_all([Some(v6.clone()), Some(v4.clone())]), vec![v4, v6]);
}
