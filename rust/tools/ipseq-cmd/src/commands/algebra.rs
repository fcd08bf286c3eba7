//! Set operations over ranges given as `lower-upper`, `address` or `address/prefix`.

use std::io::Write;

use anyhow::{Result, bail};
use ipseq_range::IpSeqRange;

use crate::utils::{OutputFormat, parse_range};

pub fn join(ranges: &[String], format: &OutputFormat, out: &mut impl Write) -> Result<()> {
    let ranges = ranges
        .iter()
        .map(|s| parse_range(s))
        .collect::<Result<Vec<_>>>()?;
    for range in IpSeqRange::join_all(ranges) {
        writeln!(out, "{}", format.range(&range))?;
    }
    Ok(())
}

pub fn subtract(
    range: &str,
    other: &str,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (range, other) = parse_pair(range, other)?;
    let Some(parts) = range.subtract(&other) else {
        bail!("Cannot subtract {} from {}", other.family(), range.family());
    };
    for part in parts {
        writeln!(out, "{}", format.range(&part))?;
    }
    Ok(())
}

pub fn intersect(
    range: &str,
    other: &str,
    format: &OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (range, other) = parse_pair(range, other)?;
    match range.intersect(&other) {
        Some(common) => writeln!(out, "{}", format.range(&common))?,
        None => log::info!("{range} and {other} have no common addresses"),
    }
    Ok(())
}

fn parse_pair(range: &str, other: &str) -> Result<(IpSeqRange, IpSeqRange)> {
    let range = parse_range(range)?;
    let other = parse_range(other)?;
    if range.family() != other.family() {
        bail!(
            "Ranges belong to different families: {} and {}",
            range.family(),
            other.family()
        );
    }
    Ok((range, other))
}
