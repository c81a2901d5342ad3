//! Catalog header record parsing.
//!
//! Entry 0 of every catalog maps the empty message id to a block of
//! `Key: Value` lines, in the style of MIME headers:
//!
//! ```text
//! Content-Type: text/plain; charset=UTF-8
//! Language: fr
//! Plural-Forms: nplurals=2; plural=(n > 1);
//! ```
//!
//! The block is always UTF-8, whatever encoding the message bodies use.

use std::collections::HashMap;
use std::sync::OnceLock;
use log::{debug, trace};
use regex::Regex;

use crate::mo::types::models::HeaderRecord;

/// Encoding used when neither the caller nor the header names one.
pub const DEFAULT_ENCODING: &str = "utf-8";

static CHARSET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn charset_regex() -> &'static Regex {
    CHARSET_PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)(?:^|;)\s*charset\s*=\s*"?([^\s;"]+)"#).expect("Invalid charset regex pattern")
    })
}

/// Splits header text into a `Key: Value` table.
///
/// Each line is split on its first colon and both sides are trimmed. Lines
/// without a colon are skipped; a repeated key keeps its last value.
pub fn parse_header_fields(text: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                trace!("Skipping header line without a colon: {:?}", line);
            }
            continue;
        };
        fields.insert(key.trim().to_string(), value.trim().to_string());
    }
    fields
}

/// Extracts the lower-cased `charset=` parameter from a `Content-Type` value.
///
/// Only a whole `charset` parameter matches, not one such as `x-charset`.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    charset_regex()
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Picks the encoding for message bodies.
///
/// An explicit caller label wins; otherwise the header's charset is used,
/// falling back to [`DEFAULT_ENCODING`].
pub fn resolve_encoding(explicit: Option<&str>, fields: &HashMap<String, String>) -> String {
    if let Some(label) = explicit {
        debug!("Using caller-supplied encoding '{}'", label);
        return label.to_string();
    }
    match fields.get("Content-Type").and_then(|ct| charset_from_content_type(ct)) {
        Some(charset) => {
            debug!("Using header charset '{}'", charset);
            charset
        }
        None => {
            debug!("No charset in header, defaulting to '{}'", DEFAULT_ENCODING);
            DEFAULT_ENCODING.to_string()
        }
    }
}

/// Builds the header record for `domain` from parsed header fields.
pub fn build_header_record(domain: &str, fields: &HashMap<String, String>) -> HeaderRecord {
    HeaderRecord {
        domain: domain.to_string(),
        lang: fields.get("Language").cloned(),
        plural_forms: fields.get("Plural-Forms").cloned(),
    }
}
