use std::io::Write;

use anyhow::Result;

use crate::utils::parse_bounds;

/// Prints the minimal prefix-block decomposition of the range.
pub fn run(lower: &str, upper: &str, out: &mut impl Write) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    with_range!(&range, |r| {
        for block in r.span_with_prefix_blocks() {
            writeln!(out, "{block}")?;
        }
        Ok(())
    })
}
