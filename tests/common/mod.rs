//! Helpers for building MO catalogs in memory.

#![allow(dead_code)]

use std::path::PathBuf;

pub const MAGIC: u32 = 0x950412de;

#[derive(Clone, Copy)]
pub enum Order {
    Little,
    Big,
}

fn put_u32(out: &mut Vec<u8>, value: u32, order: Order) {
    match order {
        Order::Little => out.extend_from_slice(&value.to_le_bytes()),
        Order::Big => out.extend_from_slice(&value.to_be_bytes()),
    }
}

/// Builds a catalog from `(original, translation)` pairs, entry 0 being the header.
///
/// Layout: 28-byte header, original table, translation table, string data.
pub fn build_mo(entries: &[(&[u8], &[u8])], order: Order) -> Vec<u8> {
    let count = entries.len() as u32;
    let original_table = 28u32;
    let translation_table = original_table + 8 * count;
    let data_start = translation_table + 8 * count;

    let mut data = Vec::new();
    let mut originals = Vec::new();
    let mut translations = Vec::new();
    for (original, _) in entries {
        originals.push((original.len() as u32, data_start + data.len() as u32));
        data.extend_from_slice(original);
        data.push(0);
    }
    for (_, translation) in entries {
        translations.push((translation.len() as u32, data_start + data.len() as u32));
        data.extend_from_slice(translation);
        data.push(0);
    }

    let mut out = Vec::new();
    put_u32(&mut out, MAGIC, order);
    put_u32(&mut out, 0, order);
    put_u32(&mut out, count, order);
    put_u32(&mut out, original_table, order);
    put_u32(&mut out, translation_table, order);
    put_u32(&mut out, 0, order);
    put_u32(&mut out, data_start + data.len() as u32, order);
    for (len, offset) in originals.iter().chain(translations.iter()) {
        put_u32(&mut out, *len, order);
        put_u32(&mut out, *offset, order);
    }
    out.extend_from_slice(&data);
    out
}

/// Overwrites the little-endian `u32` at `offset`.
pub fn patch_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub const FR_HEADER: &[u8] = b"Content-Type: text/plain; charset=UTF-8\nLanguage: fr\n";

pub fn hello_catalog(order: Order) -> Vec<u8> {
    build_mo(&[(b"", FR_HEADER), (b"Hello", b"Bonjour")], order)
}

pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}
