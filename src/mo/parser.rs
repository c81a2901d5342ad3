use encoding_rs::UTF_8;
use log::{debug, info, trace, warn};

use super::decoder::{EncodingRsDecoder, TextDecoder};
use super::format::{header, layout};
use super::types::error::{MoError, Result};
use super::types::models::*;

/// Per-call state, built once and never mutated.
struct ParseContext<'a> {
    buffer: &'a [u8],
    originals: Vec<StringDescriptor>,
    translations: Vec<StringDescriptor>,
    /// Resolved encoding label for message bodies.
    encoding: String,
}

impl<'a> ParseContext<'a> {
    fn bytes(&self, descriptor: &StringDescriptor) -> Result<&'a [u8]> {
        descriptor
            .range()
            .and_then(|range| self.buffer.get(range))
            .ok_or_else(|| MoError::CorruptData(format!(
                "string at {}+{} is outside the buffer",
                descriptor.offset, descriptor.length
            )))
    }
}

/// Parses an MO catalog with the default `encoding_rs` decoder.
///
/// # Errors
/// Returns an error if:
/// - The buffer is empty or shorter than the 28-byte file header
/// - The magic number matches neither byte order
/// - A descriptor table or string lies outside the buffer
/// - The resolved encoding is not supported
pub fn parse(buffer: &[u8], options: &ParseOptions) -> Result<Catalog> {
    parse_with_decoder(buffer, options, &EncodingRsDecoder)
}

/// Parses an MO catalog, decoding message bodies with `decoder`.
///
/// The header block is always decoded as UTF-8; `decoder` only sees the
/// original and translated strings of entries 1 and up.
pub fn parse_with_decoder<D>(buffer: &[u8], options: &ParseOptions, decoder: &D) -> Result<Catalog>
where
    D: TextDecoder + ?Sized,
{
    info!("Parsing MO catalog for domain '{}' ({} bytes)", options.domain, buffer.len());

    let mo_layout = layout::read_layout(buffer)?;
    let originals = layout::read_descriptors(
        buffer,
        mo_layout.original_table_offset,
        mo_layout.strings_count,
        mo_layout.endianness,
        "original",
    )?;
    let translations = layout::read_descriptors(
        buffer,
        mo_layout.translation_table_offset,
        mo_layout.strings_count,
        mo_layout.endianness,
        "translation",
    )?;

    // Entry 0 is the header; its original string is empty by convention.
    let header_text = match (originals.first(), translations.first()) {
        (Some(original), Some(translation)) => {
            if original.length != 0 {
                trace!("Entry 0 has a non-empty original string ({} bytes)", original.length);
            }
            let bytes = translation
                .range()
                .and_then(|range| buffer.get(range))
                .unwrap_or_default();
            let (text, _) = UTF_8.decode_with_bom_removal(bytes);
            text.into_owned()
        }
        _ => {
            debug!("Catalog has no entries, using an empty header");
            String::new()
        }
    };

    let fields = header::parse_header_fields(&header_text);
    let encoding = header::resolve_encoding(options.encoding.as_deref(), &fields);
    if !decoder.supports(&encoding) {
        return Err(MoError::UnsupportedEncoding(encoding));
    }

    let header_record = header::build_header_record(&options.domain, &fields);
    debug!(
        "Header record: lang={:?}, plural_forms={:?}, encoding='{}'",
        header_record.lang, header_record.plural_forms, encoding
    );

    let ctx = ParseContext {
        buffer,
        originals,
        translations,
        encoding,
    };

    let mut table = DomainTable::with_capacity(ctx.originals.len().max(1));
    table.insert(String::new(), Entry::Header(header_record));
    decode_entries(&ctx, decoder, &mut table)?;

    info!(
        "Parsed MO catalog: domain='{}', {} keys, {}",
        options.domain,
        table.len(),
        mo_layout.endianness
    );

    Ok(Catalog::single(options.domain.clone(), table))
}

/// Decodes entries 1 and up into `table`; later duplicates replace earlier ones.
fn decode_entries<D>(ctx: &ParseContext<'_>, decoder: &D, table: &mut DomainTable) -> Result<()>
where
    D: TextDecoder + ?Sized,
{
    for (index, (original, translation)) in ctx
        .originals
        .iter()
        .zip(ctx.translations.iter())
        .enumerate()
        .skip(1)
    {
        let original_text = decoder.decode(ctx.bytes(original)?, &ctx.encoding)?;
        let translation_text = decoder.decode(ctx.bytes(translation)?, &ctx.encoding)?;

        // Only the singular msgid is kept; msgctxt is not split off.
        let key = original_text
            .split('\0')
            .next()
            .unwrap_or_default()
            .to_string();
        let variants: Vec<String> = translation_text.split('\0').map(str::to_string).collect();

        trace!("Entry {}: {:?} -> {} variant(s)", index, key, variants.len());
        if table.insert(key.clone(), Entry::Translation(variants)).is_some() {
            warn!("Entry {} overwrites an earlier entry for key {:?}", index, key);
        }
    }
    Ok(())
}
