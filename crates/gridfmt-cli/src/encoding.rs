//! Text encoding at the I/O boundary.
//!
//! The table engine only sees `&str`. Input bytes are decoded here with the
//! encoding the user named (a byte order mark wins over the label), and the
//! formatted document is encoded back the same way. Malformed input is
//! replaced with U+FFFD rather than rejected; a half-broken file still gets
//! its table formatted.

use encoding_rs::{Encoding, UTF_8};

use crate::error::CliError;

const UTF_8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A resolved encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

/// A decoded document and what is needed to write it back.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub text: String,
    /// Encoding actually used, after BOM sniffing.
    pub encoding: &'static Encoding,
    /// Whether the input started with a byte order mark.
    pub bom: bool,
    /// Whether malformed sequences were replaced.
    pub had_errors: bool,
}

impl TextCodec {
    /// Resolve a WHATWG encoding label such as `utf-8` or `shift_jis`.
    ///
    /// # Errors
    ///
    /// [`CliError::UnknownEncoding`] if the label names no encoding.
    pub fn for_label(label: &str) -> Result<Self, CliError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| Self { encoding })
            .ok_or_else(|| CliError::UnknownEncoding(label.to_string()))
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.encoding.name()
    }

    /// Decode `bytes` to text.
    ///
    /// A leading byte order mark overrides the configured label, and
    /// malformed sequences decode to U+FFFD with a warning.
    pub fn decode(self, bytes: &[u8]) -> Decoded {
        let bom = Encoding::for_bom(bytes).is_some();
        let (text, encoding, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            tracing::warn!(
                encoding = encoding.name(),
                "malformed input sequences replaced with U+FFFD"
            );
        }
        tracing::debug!(
            requested = self.name(),
            actual = encoding.name(),
            bom,
            bytes = bytes.len(),
            "input decoded"
        );
        Decoded {
            text: text.into_owned(),
            encoding,
            bom,
            had_errors,
        }
    }
}

impl Decoded {
    /// Encode `text` the way this document was read.
    ///
    /// UTF-16 input is written back as UTF-8, the encoder's output encoding
    /// for it. A BOM is re-emitted only for UTF-8 output.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, output, unmappable) = self.encoding.encode(text);
        if unmappable {
            tracing::warn!(
                encoding = output.name(),
                "unmappable characters written as numeric character references"
            );
        }
        if self.bom && output == UTF_8 {
            let mut out = Vec::with_capacity(UTF_8_BOM.len() + bytes.len());
            out.extend_from_slice(UTF_8_BOM);
            out.extend_from_slice(&bytes);
            out
        } else {
            bytes.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_16LE, WINDOWS_1252};

    #[test]
    fn labels_resolve_case_insensitively() {
        assert_eq!(TextCodec::for_label("UTF-8").unwrap().name(), "UTF-8");
        assert_eq!(TextCodec::for_label(" shift_jis ").unwrap().name(), "Shift_JIS");
        assert_eq!(TextCodec::for_label("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = TextCodec::for_label("klingon").unwrap_err();
        assert!(matches!(err, CliError::UnknownEncoding(ref label) if label == "klingon"));
    }

    #[test]
    fn shift_jis_round_trips() {
        let codec = TextCodec::for_label("shift_jis").unwrap();
        let bytes = [0x93, 0xFA, 0x96, 0x7B];
        let decoded = codec.decode(&bytes);
        assert_eq!(decoded.text, "\u{65E5}\u{672C}");
        assert_eq!(decoded.encoding, SHIFT_JIS);
        assert_eq!(decoded.encode(&decoded.text), bytes);
    }

    #[test]
    fn legacy_single_byte() {
        let codec = TextCodec::for_label("windows-1252").unwrap();
        let decoded = codec.decode(b"caf\xE9");
        assert_eq!(decoded.text, "caf\u{E9}");
        assert_eq!(decoded.encoding, WINDOWS_1252);
        assert_eq!(decoded.encode("caf\u{E9}"), b"caf\xE9");
    }

    #[test]
    fn utf8_bom_is_stripped_and_restored() {
        let codec = TextCodec::for_label("utf-8").unwrap();
        let decoded = codec.decode(b"\xEF\xBB\xBFa");
        assert_eq!(decoded.text, "a");
        assert!(decoded.bom);
        assert_eq!(decoded.encode("b"), b"\xEF\xBB\xBFb");
    }

    #[test]
    fn bom_overrides_label() {
        let codec = TextCodec::for_label("windows-1252").unwrap();
        let decoded = codec.decode(b"\xFF\xFEa\x00");
        assert_eq!(decoded.text, "a");
        assert_eq!(decoded.encoding, UTF_16LE);
        assert_eq!(decoded.encode("a"), b"\xEF\xBB\xBFa");
    }

    #[test]
    fn malformed_input_is_replaced() {
        let codec = TextCodec::for_label("utf-8").unwrap();
        let decoded = codec.decode(b"a\xFFb");
        assert_eq!(decoded.text, "a\u{FFFD}b");
        assert!(decoded.had_errors);
        assert!(!decoded.bom);
    }
}
