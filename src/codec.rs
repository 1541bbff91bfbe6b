//! Shared codec vocabulary: separators, text encodings, errors, sanitization

// Characters silently accepted (and discarded) between bit groups
pub const SEPARATORS: [char; 8] = [' ', ',', '_', '-', '\n', '\t', '|', '/'];

/// Number of bits per group; every byte must be fully specified
pub const GROUP_WIDTH: usize = 8;

/// Check whether a character is a recognized group separator
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// Text encoding used on the byte-sequence side of a conversion
///
/// Encoding is replacement-based and never fails: characters the encoding
/// cannot represent become `?`. Decoding tries strict conversion first and
/// falls back to the replacement character U+FFFD for malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8 (lossless for all Rust strings)
    #[default]
    Utf8,
    /// 7-bit ASCII
    Ascii,
    /// ISO-8859-1, one byte per character
    Latin1,
}

impl TextEncoding {
    /// Parse a user-facing encoding name
    pub fn parse(name: &str) -> Result<Self, UnknownEncoding> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(UnknownEncoding {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical name of this encoding
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Encode text into bytes, replacing unencodable characters with `?`
    pub fn encode_replace(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
                .collect(),
        }
    }

    /// Decode bytes into text, substituting U+FFFD for malformed sequences
    ///
    /// Strict decoding is attempted first; on failure the replacement-mode
    /// result is returned instead. Latin-1 decoding cannot fail.
    pub fn decode_replace(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => match std::str::from_utf8(bytes) {
                Ok(text) => text.to_string(),
                Err(_) => String::from_utf8_lossy(bytes).into_owned(),
            },
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
                .collect(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextEncoding::parse(s)
    }
}

/// Error for an unrecognized encoding name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding {
    pub name: String,
}

impl std::fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown encoding '{}' (expected utf-8, ascii or latin-1)",
            self.name
        )
    }
}

impl std::error::Error for UnknownEncoding {}

/// Error type for binary-string decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input contained a character that is neither 0/1 nor a separator
    InvalidCharacter { position: usize, ch: char },
    /// Bit count after sanitization is not a multiple of 8
    InvalidLength { bits: usize },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::InvalidCharacter { position, ch } => {
                write!(
                    f,
                    "Invalid character {:?} at position {} in binary input. Only 0/1 and separators are allowed.",
                    ch, position
                )
            }
            CodecError::InvalidLength { bits } => {
                write!(f, "Bit length must be a multiple of 8. Got {} bits.", bits)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// An invalid character found during sanitization, with its original position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChar {
    /// Character index in the raw input
    pub position: usize,
    pub ch: char,
}

/// Result of sanitizing raw binary input
///
/// Invalid characters are recorded with their positions rather than silently
/// dropped, so callers can report them precisely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sanitized {
    /// The surviving bit string (only `0` and `1`)
    pub bits: String,
    /// Characters that were neither binary digits nor separators
    pub invalid: Vec<InvalidChar>,
}

impl Sanitized {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Strip recognized separators from raw binary input in a single pass
///
/// Separators are discarded; anything that is not a separator or a binary
/// digit is kept in the invalid list.
pub fn sanitize(input: &str) -> Sanitized {
    let mut out = Sanitized::default();
    for (position, ch) in input.chars().enumerate() {
        match ch {
            '0' | '1' => out.bits.push(ch),
            _ if is_separator(ch) => {}
            _ => out.invalid.push(InvalidChar { position, ch }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_separators() {
        let s = sanitize("0100 1000,0110_0101-0110\t1100");
        assert!(s.is_clean());
        assert_eq!(s.bits, "010010000110010101101100");
    }

    #[test]
    fn test_sanitize_idempotent_on_clean_bits() {
        let s = sanitize("01001000");
        assert!(s.is_clean());
        assert_eq!(s.bits, "01001000");
        let again = sanitize(&s.bits);
        assert_eq!(again.bits, s.bits);
    }

    #[test]
    fn test_sanitize_records_invalid_positions() {
        let s = sanitize("01a0 1b");
        assert!(!s.is_clean());
        assert_eq!(s.bits, "0101");
        assert_eq!(
            s.invalid,
            vec![
                InvalidChar { position: 2, ch: 'a' },
                InvalidChar { position: 6, ch: 'b' },
            ]
        );
    }

    #[test]
    fn test_sanitize_carriage_return_is_invalid() {
        let s = sanitize("01\r10");
        assert_eq!(s.invalid.len(), 1);
        assert_eq!(s.invalid[0].ch, '\r');
    }

    #[test]
    fn test_encoding_parse_aliases() {
        assert_eq!(TextEncoding::parse("UTF-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::parse("utf8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::parse("ascii").unwrap(), TextEncoding::Ascii);
        assert_eq!(
            TextEncoding::parse("ISO-8859-1").unwrap(),
            TextEncoding::Latin1
        );
        assert!(TextEncoding::parse("utf-16").is_err());
    }

    #[test]
    fn test_ascii_encode_replaces_non_ascii() {
        let bytes = TextEncoding::Ascii.encode_replace("héllo");
        assert_eq!(bytes, b"h?llo");
    }

    #[test]
    fn test_latin1_round_trip() {
        let bytes = TextEncoding::Latin1.encode_replace("café");
        assert_eq!(bytes, b"caf\xe9");
        assert_eq!(TextEncoding::Latin1.decode_replace(&bytes), "café");
    }

    #[test]
    fn test_utf8_decode_replaces_malformed() {
        // 0xFF is never valid in UTF-8
        let text = TextEncoding::Utf8.decode_replace(&[0x48, 0xFF, 0x69]);
        assert_eq!(text, "H\u{FFFD}i");
    }

    #[test]
    fn test_invalid_length_message_includes_bit_count() {
        let err = CodecError::InvalidLength { bits: 4 };
        assert!(err.to_string().contains("4 bits"));
    }
}
