use std::io::Write;

use anyhow::Result;
use ipseq_addr::SegmentedAddress;
use ipseq_range::SeqRange;

use crate::utils::{OutputFormat, parse_bounds};

/// Prints the prefix blocks of length `prefix_len` intersecting the range, trimmed to
/// the range unless `blocks` is set.
pub fn run(
    lower: &str,
    upper: &str,
    prefix_len: u32,
    blocks: bool,
    limit: Option<usize>,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    let limit = limit.unwrap_or(usize::MAX);
    with_range!(&range, |r| {
        if blocks {
            write_blocks(r, prefix_len, limit, format, out)
        } else {
            write_trimmed(r, prefix_len, limit, format, out)
        }
    })
}

fn write_blocks<A: SegmentedAddress>(
    range: &SeqRange<A>,
    prefix_len: u32,
    limit: usize,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for block in range.prefix_block_iter(prefix_len)?.take(limit) {
        writeln!(out, "{}/{}", format.address(&block.lower()), block.prefix_len())?;
    }
    Ok(())
}

fn write_trimmed<A: SegmentedAddress>(
    range: &SeqRange<A>,
    prefix_len: u32,
    limit: usize,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for item in range.prefix_iter(prefix_len)?.take(limit) {
        writeln!(out, "{}", format.seq_range(&item))?;
    }
    Ok(())
}
