use std::borrow::Cow;
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value as JsonValue;

use super::model::Catalog;
use crate::error::{FilterError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog from a UTF-16 encoded JSON file.
///
/// Steps: read bytes → decode UTF-16 → drop NUL characters → parse JSON →
/// validate every entry as a record.
pub fn load_catalog(path: &Path, byte_order: ByteOrder) -> Result<Catalog> {
    let bytes = std::fs::read(path).map_err(|e| FilterError::io(path, e))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    let text = decode_utf16(&bytes, byte_order)?;
    let text = strip_nuls(&text);
    parse_catalog(&text)
}

// ---------------------------------------------------------------------------
// UTF-16 decoding
// ---------------------------------------------------------------------------

/// Byte order of the UTF-16 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ByteOrder {
    /// Follow the byte-order mark; little endian when there is none.
    #[default]
    Auto,
    Little,
    Big,
}

const BOM_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode UTF-16 bytes into a `String`, consuming a leading byte-order mark.
pub fn decode_utf16(bytes: &[u8], byte_order: ByteOrder) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(FilterError::Decode(format!(
            "odd number of bytes ({})",
            bytes.len()
        )));
    }

    let bom = bytes.get(..2);
    let (big_endian, body) = match (byte_order, bom) {
        (ByteOrder::Auto | ByteOrder::Little, Some(b)) if b == BOM_LE.as_slice() => {
            (false, &bytes[2..])
        }
        (ByteOrder::Auto | ByteOrder::Big, Some(b)) if b == BOM_BE.as_slice() => {
            (true, &bytes[2..])
        }
        (ByteOrder::Big, _) => (true, bytes),
        (ByteOrder::Auto | ByteOrder::Little, _) => (false, bytes),
    };
    log::debug!("decoding UTF-16{}", if big_endian { "BE" } else { "LE" });

    let units = body.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    let mut text = String::with_capacity(body.len() / 2);
    let mut offset = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                offset += c.len_utf16();
                text.push(c);
            }
            Err(e) => {
                return Err(FilterError::Decode(format!(
                    "unpaired surrogate 0x{:04X} at code unit {offset}",
                    e.unpaired_surrogate()
                )))
            }
        }
    }
    Ok(text)
}

/// Remove every U+0000 from `text`.  Borrows when there is nothing to remove.
pub fn strip_nuls(text: &str) -> Cow<'_, str> {
    if !text.contains('\0') {
        return Cow::Borrowed(text);
    }
    let cleaned: String = text.chars().filter(|&c| c != '\0').collect();
    log::debug!("stripped {} NUL characters", text.len() - cleaned.len());
    Cow::Owned(cleaned)
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected JSON shape (type id → type attributes):
///
/// ```json
/// {
///   "587": { "groupID": 25, "name": { "en": "Rifter" }, ... },
///   "34":  { "groupID": 18, "name": { "en": "Tritanium" }, ... }
/// }
/// ```
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    let root: JsonValue = serde_json::from_str(text).map_err(FilterError::Parse)?;

    match root {
        JsonValue::Object(object) => Catalog::from_json_object(object),
        _ => Err(FilterError::schema(
            "<root>",
            "expected a JSON object keyed by type id",
        )),
    }
}
