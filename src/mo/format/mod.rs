//! File format parsing layer for MO catalogs.
//!
//! # Module Organization
//!
//! - [`layout`]: Fixed file header, byte order detection and descriptor tables
//! - [`header`]: The metadata block stored as entry 0
//!
//! # Architecture
//!
//! ```text
//! Buffer Structure:
//! ┌─────────────────────┐
//! │  File Header (28B)  │ ← layout::read_layout()
//! ├─────────────────────┤
//! │  Original Table     │ ← layout::read_descriptors()
//! │  Translation Table  │
//! ├─────────────────────┤
//! │  Hash Table         │   (unused)
//! ├─────────────────────┤
//! │  String Data        │ ← header::parse_header_fields() for entry 0,
//! │                     │   TextDecoder for the rest
//! └─────────────────────┘
//! ```

pub mod header;
pub mod layout;
