//! Fixed file header and string descriptor tables.
//!
//! # Layout
//! ```text
//! [ 0] magic                    0x950412DE in either byte order
//! [ 4] format revision
//! [ 8] number of strings
//! [12] offset of original string table
//! [16] offset of translation string table
//! [20] size of hash table
//! [24] offset of hash table
//! ```
//!
//! Each string table holds `number of strings` descriptors of 8 bytes:
//! `length: u32`, `offset: u32`.

use log::{debug, trace};

use crate::mo::types::error::{MoError, Result};
use crate::mo::types::models::{Endianness, MoLayout, StringDescriptor};
use crate::mo::utils;

/// Magic number identifying an MO catalog, as read in its own byte order.
pub const MO_MAGIC: u32 = 0x950412de;

/// Size of the fixed file header in bytes.
pub const HEADER_SIZE: usize = 28;

/// Size of one string descriptor in bytes.
pub const DESCRIPTOR_SIZE: usize = 8;

/// Detects the byte order from the magic number at offset 0.
pub fn detect_endianness(buffer: &[u8]) -> Result<Endianness> {
    let le = utils::read_u32_at(buffer, 0, Endianness::Little)?;
    if le == MO_MAGIC {
        return Ok(Endianness::Little);
    }
    if le.swap_bytes() == MO_MAGIC {
        return Ok(Endianness::Big);
    }
    Err(MoError::Format { found: le })
}

/// Validates the buffer size and reads the fixed file header.
pub fn read_layout(buffer: &[u8]) -> Result<MoLayout> {
    if buffer.is_empty() {
        return Err(MoError::EmptyBuffer);
    }
    if buffer.len() < HEADER_SIZE {
        return Err(MoError::TooSmall {
            len: buffer.len(),
            min: HEADER_SIZE,
        });
    }

    let endianness = detect_endianness(buffer)?;
    let field = |offset| utils::read_u32_at(buffer, offset, endianness);

    let layout = MoLayout {
        endianness,
        revision: field(4)?,
        strings_count: field(8)?,
        original_table_offset: field(12)?,
        translation_table_offset: field(16)?,
        hash_table_size: field(20)?,
        hash_table_offset: field(24)?,
    };

    debug!(
        "MO layout: {}, revision={}, strings={}, originals@{:#x}, translations@{:#x}",
        layout.endianness,
        layout.revision,
        layout.strings_count,
        layout.original_table_offset,
        layout.translation_table_offset
    );

    Ok(layout)
}

/// Reads a descriptor table and checks every range against the buffer.
///
/// No descriptor is returned unless all of them are in bounds.
pub fn read_descriptors(
    buffer: &[u8],
    table_offset: u32,
    count: u32,
    endianness: Endianness,
    table_name: &'static str,
) -> Result<Vec<StringDescriptor>> {
    let count = count as usize;
    let table_start = table_offset as usize;
    let table_len = count.checked_mul(DESCRIPTOR_SIZE);
    let table_fits = table_len
        .and_then(|len| table_start.checked_add(len))
        .is_some_and(|end| end <= buffer.len());
    if !table_fits {
        return Err(MoError::CorruptData(format!(
            "{} table of {} descriptors at offset {} exceeds buffer of {} bytes",
            table_name, count, table_start, buffer.len()
        )));
    }

    let mut descriptors = Vec::with_capacity(count);
    for index in 0..count {
        let at = table_start + index * DESCRIPTOR_SIZE;
        let descriptor = StringDescriptor {
            length: utils::read_u32_at(buffer, at, endianness)?,
            offset: utils::read_u32_at(buffer, at + 4, endianness)?,
        };

        let in_bounds = descriptor
            .range()
            .is_some_and(|range| range.end <= buffer.len());
        if !in_bounds {
            return Err(MoError::CorruptData(format!(
                "{} string {} spans {}+{} bytes, beyond buffer of {} bytes",
                table_name, index, descriptor.offset, descriptor.length, buffer.len()
            )));
        }

        trace!(
            "{} string {}: {} bytes at {:#x}",
            table_name, index, descriptor.length, descriptor.offset
        );
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}
