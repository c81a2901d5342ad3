//! Text decoding capability used for message bodies.

use encoding_rs::Encoding;
use log::trace;

use super::types::error::{MoError, Result};

/// Turns raw bytes into text for a given encoding label.
///
/// Implementations must be pure: the same bytes and label always give the
/// same result.
pub trait TextDecoder {
    /// Whether `label` names an encoding this decoder can handle.
    fn supports(&self, label: &str) -> bool;

    /// Decodes `bytes` as `label`, failing with `UnsupportedEncoding` for unknown labels.
    fn decode(&self, bytes: &[u8], label: &str) -> Result<String>;
}

/// Default decoder backed by `encoding_rs` and WHATWG encoding labels.
///
/// A leading BOM of the selected encoding is stripped and malformed
/// sequences are replaced with U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRsDecoder;

impl EncodingRsDecoder {
    fn lookup(label: &str) -> Result<&'static Encoding> {
        Encoding::for_label_no_replacement(label.trim().as_bytes())
            .ok_or_else(|| MoError::UnsupportedEncoding(label.to_string()))
    }
}

impl TextDecoder for EncodingRsDecoder {
    fn supports(&self, label: &str) -> bool {
        Self::lookup(label).is_ok()
    }

    fn decode(&self, bytes: &[u8], label: &str) -> Result<String> {
        let encoding = Self::lookup(label)?;
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if had_errors {
            trace!("Replaced malformed {} sequences in {} bytes", encoding.name(), bytes.len());
        }
        Ok(text.into_owned())
    }
}
