//! Core data structures for MO catalog components.
//!
//! This module defines the fundamental types used throughout the library:
//! - File layout and byte order
//! - String descriptors
//! - The parsed catalog, its domain tables and header record
//! - Parse options

use std::collections::hash_map;
use std::collections::HashMap;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Default domain name used when the caller does not supply one.
pub const DEFAULT_DOMAIN: &str = "messages";

/// Byte order of every multi-byte integer in a catalog, fixed by its magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Reads a `u32` from the first four bytes of `buf`.
    ///
    /// Callers are responsible for `buf` holding at least four bytes.
    pub(crate) fn read_u32(&self, buf: &[u8]) -> u32 {
        match self {
            Endianness::Little => LittleEndian::read_u32(buf),
            Endianness::Big => BigEndian::read_u32(buf),
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// The fixed 28-byte file header of an MO catalog.
///
/// `revision` and the hash table fields are exposed for completeness only;
/// parsing does not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoLayout {
    pub endianness: Endianness,
    pub revision: u32,
    /// Number of messages, including the header entry at index 0.
    pub strings_count: u32,
    pub original_table_offset: u32,
    pub translation_table_offset: u32,
    pub hash_table_size: u32,
    pub hash_table_offset: u32,
}

/// A `(length, offset)` pair locating one string's bytes inside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringDescriptor {
    pub length: u32,
    pub offset: u32,
}

impl StringDescriptor {
    /// Byte range covered by this descriptor, or `None` if it overflows `usize`.
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(self.offset).ok()?;
        let end = start.checked_add(usize::try_from(self.length).ok()?)?;
        Some(start..end)
    }
}

/// Metadata taken from a catalog's entry 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    /// Caller-assigned domain name, not read from the file.
    pub domain: String,
    pub lang: Option<String>,
    /// Plural selection expression, verbatim from the `Plural-Forms` header.
    pub plural_forms: Option<String>,
}

/// A value stored in a [`DomainTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The header record, stored under the empty key.
    Header(HeaderRecord),
    /// Translated variants: index 0 is the singular form, then plural forms in catalog order.
    Translation(Vec<String>),
}

/// All messages of one domain, keyed by message id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTable {
    entries: HashMap<String, Entry>,
}

impl DomainTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts an entry, returning the one it replaced.
    pub(crate) fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        self.entries.insert(key, entry)
    }

    /// The header record stored under the empty key, if still present.
    pub fn header(&self) -> Option<&HeaderRecord> {
        match self.entries.get("") {
            Some(Entry::Header(header)) => Some(header),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Translated variants for `key`. Never matches the header record.
    pub fn translations(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key) {
            Some(Entry::Translation(variants)) => Some(variants.as_slice()),
            _ => None,
        }
    }

    /// Number of keys, the header included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DomainTable {
    type Item = (&'a String, &'a Entry);
    type IntoIter = hash_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A parsed catalog: domain name to domain table.
///
/// A catalog produced by [`parse`](crate::mo::parse) holds exactly one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    domains: HashMap<String, DomainTable>,
}

impl Catalog {
    pub(crate) fn single(domain: String, table: DomainTable) -> Self {
        let mut domains = HashMap::with_capacity(1);
        domains.insert(domain, table);
        Self { domains }
    }

    pub fn domain(&self, name: &str) -> Option<&DomainTable> {
        self.domains.get(name)
    }

    pub fn domains(&self) -> hash_map::Iter<'_, String, DomainTable> {
        self.domains.iter()
    }

    pub fn into_domains(self) -> HashMap<String, DomainTable> {
        self.domains
    }
}

/// Caller-supplied settings for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name of the domain table in the resulting catalog.
    pub domain: String,
    /// Encoding label overriding the header's `charset`.
    pub encoding: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            encoding: None,
        }
    }
}

impl ParseOptions {
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}
