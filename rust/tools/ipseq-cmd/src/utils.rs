//! Argument parsing and output formatting shared by the commands.

use std::net::IpAddr;

use anyhow::{Context, Result};
use ipseq_addr::{PrefixBlock, SegmentedAddress};
use ipseq_range::{IpSeqRange, SeqRange};

/// How ranges and addresses are rendered.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    separator: String,
    normalized: bool,
}

impl OutputFormat {
    pub fn new(separator: String, normalized: bool) -> OutputFormat {
        OutputFormat {
            separator,
            normalized,
        }
    }

    pub fn range(&self, range: &IpSeqRange) -> String {
        if self.normalized {
            range.to_normalized_string_with(&self.separator)
        } else {
            range.to_canonical_string_with(&self.separator)
        }
    }

    pub fn seq_range<A: SegmentedAddress>(&self, range: &SeqRange<A>) -> String {
        if self.normalized {
            range.to_normalized_string_with(&self.separator)
        } else {
            range.to_canonical_string_with(&self.separator)
        }
    }

    pub fn address<A: SegmentedAddress>(&self, address: &A) -> String {
        if self.normalized {
            address.to_normalized_string()
        } else {
            address.to_canonical_string()
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::new(ipseq_range::DEFAULT_SEPARATOR.to_string(), false)
    }
}

pub fn parse_address(s: &str) -> Result<IpAddr> {
    s.trim()
        .parse()
        .with_context(|| format!("Invalid IP address: {s}"))
}

/// Parses the two bounds of a range, given in either order.
pub fn parse_bounds(lower: &str, upper: &str) -> Result<IpSeqRange> {
    let range = IpSeqRange::new(parse_address(lower)?, parse_address(upper)?)?;
    Ok(range)
}

/// Parses a range written as `lower-upper`, a single `address`, or `address/prefix`.
pub fn parse_range(s: &str) -> Result<IpSeqRange> {
    if let Some((lower, upper)) = s.split_once('-') {
        return parse_bounds(lower, upper);
    }
    if let Some((address, prefix_len)) = s.split_once('/') {
        let prefix_len: u32 = prefix_len
            .trim()
            .parse()
            .with_context(|| format!("Invalid prefix length in: {s}"))?;
        let range = match parse_address(address)? {
            IpAddr::V4(a) => IpSeqRange::V4(PrefixBlock::new(a, prefix_len)?.into()),
            IpAddr::V6(a) => IpSeqRange::V6(PrefixBlock::new(a, prefix_len)?.into()),
        };
        return Ok(range);
    }
    Ok(IpSeqRange::single(parse_address(s)?))
}
