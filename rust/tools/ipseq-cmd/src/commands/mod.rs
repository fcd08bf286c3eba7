//! Command implementations for ipseq-cmd
//!
//! Every command writes its output to the given writer, one item per line.

/// Evaluates `$body` with `$r` bound to the family-specific range inside an
/// `IpSeqRange`, so generic helpers can be called for either family.
macro_rules! with_range {
    ($range:expr, |$r:ident| $body:expr) => {
        match $range {
            ipseq_range::IpSeqRange::V4($r) => $body,
            ipseq_range::IpSeqRange::V6($r) => $body,
        }
    };
}

pub mod algebra;
pub mod count;
pub mod list;
pub mod par_count;
pub mod prefixes;
pub mod span;
pub mod split;
