// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Byte-buffer entry points: decode with a named encoding, reorder, and encode
// back with the same encoding. Decoding and encoding are strict; malformed
// input or unmappable output is an error, never a replacement character.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use pdfgen_core::error::{PdfgenError, Result};
use tracing::{debug, instrument};

use crate::display::{BidiOptions, reorder_with_options};

/// Resolve a WHATWG encoding label such as `"utf-8"` or `"windows-1255"`.
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| PdfgenError::UnknownEncoding(label.to_owned()))
}

/// Decode `bytes` strictly. A byte order mark is kept as text.
pub fn decode<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| PdfgenError::Decode {
            encoding: encoding.name().to_owned(),
            detail: "malformed byte sequence".into(),
        })
}

/// Encode `text` strictly with `encoding`.
///
/// `encoding_rs` only encodes UTF-16 by falling back to UTF-8, so the two
/// UTF-16 byte orders are written here directly.
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }

    let (bytes, used, had_errors) = encoding.encode(text);
    if had_errors || used != encoding {
        let detail = match first_unmappable(text, encoding) {
            Some(c) => format!("U+{:04X} has no mapping", c as u32),
            None => format!("output would be {}", used.name()),
        };
        return Err(PdfgenError::Encode {
            encoding: encoding.name().to_owned(),
            detail,
        });
    }
    Ok(bytes.into_owned())
}

fn first_unmappable(text: &str, encoding: &'static Encoding) -> Option<char> {
    let mut buf = [0u8; 4];
    text.chars()
        .find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
}

/// Byte variant of [`crate::reorder_for_display`].
pub fn reorder_bytes_for_display(bytes: &[u8], encoding: &str) -> Result<Vec<u8>> {
    reorder_bytes_with_options(bytes, encoding, &BidiOptions::default())
}

/// Decode, reorder, and re-encode. Empty input comes back untouched without
/// the label being looked at.
#[instrument(skip(bytes, options), fields(bytes_len = bytes.len()))]
pub fn reorder_bytes_with_options(
    bytes: &[u8],
    encoding: &str,
    options: &BidiOptions,
) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let encoding = lookup_encoding(encoding)?;
    let text = decode(bytes, encoding)?;
    let shown = reorder_with_options(&text, options);
    debug!(encoding = encoding.name(), chars = shown.chars().count(), "re-encoding display text");
    encode(&shown, encoding)
}
