use std::io::Write;

use anyhow::Result;

use crate::utils::{OutputFormat, parse_bounds};

/// Prints the partition obtained by bisecting the range `depth` levels deep.
pub fn run(
    lower: &str,
    upper: &str,
    depth: usize,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    with_range!(&range, |r| {
        for part in r.split_to_depth(depth) {
            writeln!(out, "{}", format.seq_range(&part))?;
        }
        Ok(())
    })
}
