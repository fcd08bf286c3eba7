use std::io::Write;

use anyhow::{Context, Result};
use ipseq_addr::SegmentedAddress;
use ipseq_range::SeqRange;
use rayon::prelude::*;

use crate::utils::parse_bounds;

/// Counts the addresses of the range, or its prefix blocks of length `prefix_len`,
/// by traversing it on a pool of `threads` workers.
pub fn run(
    lower: &str,
    upper: &str,
    prefix_len: Option<u32>,
    threads: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("ipseq_worker_{i}"));
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build().context("Failed to build thread pool")?;
    let count = pool.install(|| with_range!(&range, |r| count_items(r, prefix_len)))?;
    log::debug!(
        "counted {count} items of {range} on {} threads",
        pool.current_num_threads()
    );
    writeln!(out, "{count}")?;
    Ok(())
}

fn count_items<A: SegmentedAddress>(range: &SeqRange<A>, prefix_len: Option<u32>) -> Result<usize> {
    let count = match prefix_len {
        Some(prefix_len) => range.par_prefix_blocks(prefix_len)?.count(),
        None => range.par_iter().count(),
    };
    Ok(count)
}
