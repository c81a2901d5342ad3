//! Low-level byte reading utilities

use super::types::error::{MoError, Result};
use super::types::models::Endianness;

/// Read a `u32` at `offset` in the given byte order.
///
/// Fails with `CorruptData` instead of panicking when fewer than four bytes
/// remain at `offset`.
pub fn read_u32_at(buf: &[u8], offset: usize, endianness: Endianness) -> Result<u32> {
    let bytes = offset
        .checked_add(4)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| MoError::CorruptData(format!(
            "cannot read 4 bytes at offset {} of a {}-byte buffer",
            offset, buf.len()
        )))?;
    Ok(endianness.read_u32(bytes))
}
