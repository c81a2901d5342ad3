//! Custom error types for the mo-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is terminal: a failed parse never yields a partial catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoError {
    /// The input is not a usable byte buffer.
    ///
    /// The slice-based `parse` API cannot produce this; it exists for callers
    /// bridging from untyped or nullable buffers.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The buffer holds no bytes at all.
    #[error("Empty buffer: a catalog needs at least one byte")]
    EmptyBuffer,

    /// The buffer is shorter than the fixed 28-byte file header.
    #[error("Buffer too small: {len} bytes, at least {min} required")]
    TooSmall { len: usize, min: usize },

    /// The magic number matches neither byte order.
    #[error("Not an MO catalog: bad magic number {found:#010x}")]
    Format { found: u32 },

    /// A descriptor table or string range points outside the buffer.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// The decoder cannot handle the resolved encoding label.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

/// A convenience `Result` type alias using the crate's `MoError` type.
pub type Result<T> = std::result::Result<T, MoError>;
