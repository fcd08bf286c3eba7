pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails with [`ErrorKind::InvalidPrefixLength`](crate::ErrorKind::InvalidPrefixLength)
/// unless `prefix_len` fits within an address of `bit_count` bits.
#[inline]
pub fn verify_prefix_len(prefix_len: u32, bit_count: u32) -> Result<()> {
    if prefix_len <= bit_count {
        Ok(())
    } else {
        invalid_prefix_len(prefix_len, bit_count)
    }
}

#[cold]
pub fn invalid_prefix_len(prefix_len: u32, bit_count: u32) -> Result<()> {
    Err(crate::error::Error::invalid_prefix_len(prefix_len, bit_count))
}
