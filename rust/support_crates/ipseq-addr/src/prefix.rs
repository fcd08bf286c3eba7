//! Mapping of prefix lengths onto the segment layout of an address.
//!
//! A prefix length `p` splits the address bits into network bits `[0, p)` and host
//! bits `[p, BIT_COUNT)`. Range algorithms need to know in which segments that
//! boundary falls:
//!
//! - the *network segment index* is the segment holding the last network bit
//! - the *host segment index* is the segment holding the first host bit
//!
//! They coincide when the boundary falls inside a segment and differ by one when it
//! is segment-aligned.

use ipseq_common::{Result, result::verify_prefix_len};

use crate::SegmentedAddress;

/// Index of the segment holding the last network bit.
///
/// A zero prefix has no network bits; by convention the first segment is used, its
/// own segment prefix length being zero.
#[inline]
pub fn network_segment_index(prefix_len: u32, bits_per_segment: u32) -> usize {
    if prefix_len == 0 {
        0
    } else {
        ((prefix_len - 1) / bits_per_segment) as usize
    }
}

/// Index of the segment holding the first host bit; equals the segment count when
/// `prefix_len` covers the whole address.
#[inline]
pub fn host_segment_index(prefix_len: u32, bits_per_segment: u32) -> usize {
    (prefix_len / bits_per_segment) as usize
}

/// Number of network bits that fall into the segment at `index`.
///
/// Returns `None` when every bit of the segment belongs to the network part.
#[inline]
pub fn segment_prefix_length(bits_per_segment: u32, prefix_len: u32, index: usize) -> Option<u32> {
    let preceding = index as u32 * bits_per_segment;
    if prefix_len <= preceding {
        Some(0)
    } else if prefix_len - preceding <= bits_per_segment {
        Some(prefix_len - preceding)
    } else {
        None
    }
}

/// Verifies that `prefix_len` can be mapped onto the layout of `A`.
#[inline]
pub fn check_prefix_len<A: SegmentedAddress>(prefix_len: u32) -> Result<()> {
    verify_prefix_len(prefix_len, A::BIT_COUNT)
}
