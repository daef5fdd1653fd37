//! Decoding content-document bytes to text

use crate::error::ExtractError;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;

/// How far into a document to look for a charset declaration
const SNIFF_LEN: usize = 1024;

/// Decode markup bytes.
///
/// Order of preference: byte-order mark, valid UTF-8, the charset declared
/// near the top of the document, then Windows-1252. A declared charset that
/// is not a known encoding label is an error, as is a decoded NUL character.
pub fn decode_markup(bytes: &[u8]) -> Result<Cow<'_, str>, ExtractError> {
    let text = if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        encoding.decode_with_bom_removal(bytes).0
    } else if let Ok(text) = std::str::from_utf8(bytes) {
        Cow::Borrowed(text)
    } else {
        match declared_charset(bytes) {
            Some(label) => {
                let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
                    ExtractError::MalformedMarkup(format!("unsupported encoding '{}'", label))
                })?;
                tracing::debug!("Decoding content document as {}", encoding.name());
                encoding.decode_without_bom_handling(bytes).0
            }
            None => WINDOWS_1252.decode_without_bom_handling(bytes).0,
        }
    };

    if text.contains('\0') {
        return Err(ExtractError::MalformedMarkup(
            "content contains NUL bytes".to_string(),
        ));
    }

    Ok(text)
}

/// Find `encoding="..."` or `charset=...` in the first bytes of a document
fn declared_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    ["encoding=", "charset="].iter().find_map(|key| {
        let start = head.find(key)? + key.len();
        let value: String = head[start..]
            .trim_start_matches(['"', '\''])
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
            .collect();
        (!value.is_empty()).then_some(value)
    })
}
