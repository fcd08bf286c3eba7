use std::io::Write;

use anyhow::Result;

use crate::utils::{OutputFormat, parse_bounds};

pub fn run(lower: &str, upper: &str, format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    let range = parse_bounds(lower, upper)?;
    writeln!(out, "{}\t{}", format.range(&range), range.count())?;
    Ok(())
}
