use std::fmt::Write as _;
use std::path::Path;

use super::model::Catalog;
use crate::error::{FilterError, Result};

/// Layout of the written JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Serialize `catalog` to ASCII-only JSON text.
pub fn to_json(catalog: &Catalog, style: OutputStyle) -> Result<String> {
    let text = match style {
        OutputStyle::Compact => serde_json::to_string(catalog),
        OutputStyle::Pretty => serde_json::to_string_pretty(catalog),
    }
    .map_err(FilterError::Encode)?;
    Ok(escape_non_ascii(text))
}

/// Serialize `catalog` and replace the file at `path` with it.
///
/// The whole document is built before the file is touched, so a failure
/// leaves any previous output in place.
pub fn write_catalog(path: &Path, catalog: &Catalog, style: OutputStyle) -> Result<usize> {
    let text = to_json(catalog, style)?;
    std::fs::write(path, &text).map_err(|e| FilterError::io(path, e))?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(text.len())
}

/// Rewrite every non-ASCII character, and DEL, as a `\uXXXX` escape (UTF-16
/// surrogate pairs above the BMP).
///
/// serde_json already escapes quotes, backslashes and control characters, so
/// any such character left in its output sits inside a string literal and can
/// be escaped in place.
fn escape_non_ascii(text: String) -> String {
    if text.bytes().all(|b| b < 0x7F) {
        return text;
    }
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut units = [0u16; 2];
    for c in text.chars() {
        if c < '\x7F' {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            // Writing into a String cannot fail.
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_catalog;

    #[test]
    fn compact_output_has_no_whitespace() {
        let catalog =
            parse_catalog(r#"{ "1" : { "groupID" : 25 , "name" : "Rifter" } }"#).unwrap();
        assert_eq!(
            to_json(&catalog, OutputStyle::Compact).unwrap(),
            r#"{"1":{"groupID":25,"name":"Rifter"}}"#
        );
    }

    #[test]
    fn pretty_output_parses_back_equal() {
        let catalog = parse_catalog(r#"{"1": {"groupID": 25, "tags": [1, 2]}}"#).unwrap();
        let text = to_json(&catalog, OutputStyle::Pretty).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(parse_catalog(&text).unwrap(), catalog);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let catalog = parse_catalog(
            r#"{"11": {"groupID": 25, "name": {"de": "Ägir", "ja": "ラグナロク"}, "icon": "🚀"}}"#,
        )
        .unwrap();
        let text = to_json(&catalog, OutputStyle::Compact).unwrap();

        assert!(text.is_ascii());
        assert!(text.contains(r"\u00c4gir"));
        assert!(text.contains(r"\ud83d\ude80"));
        assert_eq!(parse_catalog(&text).unwrap(), catalog);
    }

    #[test]
    fn delete_character_is_escaped() {
        let catalog = parse_catalog("{\"1\": {\"groupID\": 25, \"k\": \"a\u{7F}b\"}}").unwrap();
        let text = to_json(&catalog, OutputStyle::Compact).unwrap();
        assert_eq!(text, r#"{"1":{"groupID":25,"k":"a\u007fb"}}"#);
    }

    #[test]
    fn huge_integers_are_written_exactly() {
        let input = r#"{"1":{"groupID":25,"big":123456789012345678901234567890,"neg":-98765432109876543210987654321}}"#;
        let catalog = parse_catalog(input).unwrap();
        assert_eq!(to_json(&catalog, OutputStyle::Compact).unwrap(), input);
    }

    #[test]
    fn already_escaped_sequences_are_left_alone() {
        let catalog = parse_catalog(r#"{"1": {"groupID": 25, "q": "a\"b\\c\n"}}"#).unwrap();
        let text = to_json(&catalog, OutputStyle::Compact).unwrap();
        assert_eq!(text, r#"{"1":{"groupID":25,"q":"a\"b\\c\n"}}"#);
    }

    #[test]
    fn write_catalog_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ships.json");
        std::fs::write(&path, "stale content that is much longer than the new output").unwrap();

        let catalog = parse_catalog("{}").unwrap();
        let written = write_catalog(&path, &catalog, OutputStyle::Compact).unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("ships.json");
        let err = write_catalog(&path, &Catalog::default(), OutputStyle::Compact).unwrap_err();
        assert!(matches!(err, FilterError::Io { .. }));
    }
}
