use std::io::Write;

use anyhow::Result;
use ipseq_addr::SegmentedAddress;
use ipseq_range::SeqRange;

use crate::utils::{OutputFormat, parse_bounds};

pub fn run(
    lower: &str,
    upper: &str,
    limit: Option<usize>,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    with_range!(&range, |r| write_addresses(r, limit, format, out))
}

fn write_addresses<A: SegmentedAddress>(
    range: &SeqRange<A>,
    limit: Option<usize>,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for address in range.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", format.address(&address))?;
    }
    Ok(())
}
