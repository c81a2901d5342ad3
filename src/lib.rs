//! # mo-reader
//!
//! A decoder for gettext compiled message catalogs (`.mo` files).
//! Turns an in-memory byte buffer into a [`Catalog`] of translated strings,
//! handling both byte orders and any encoding known to `encoding_rs`.
//!
//! Plural rule evaluation is left to the caller: plural entries are returned
//! as an ordered list of variants together with the verbatim `Plural-Forms`
//! expression.
//!
//! ```no_run
//! use mo_reader::{parse, ParseOptions};
//!
//! let bytes = std::fs::read("fr.mo").unwrap();
//! let catalog = parse(&bytes, &ParseOptions::default()).unwrap();
//! let messages = catalog.domain("messages").unwrap();
//! println!("{:?}", messages.translations("Hello"));
//! ```
pub mod mo;

// Re-export the main types for convenience
pub use mo::{
    parse,
    parse_with_decoder,
    EncodingRsDecoder,
    MoError,
    Result,
    TextDecoder,
    types::models::{
        Catalog,
        DomainTable,
        Endianness,
        Entry,
        HeaderRecord,
        MoLayout,
        ParseOptions,
        StringDescriptor,
        DEFAULT_DOMAIN,
    },
};
