//! Text to binary-string encoder

use crate::codec::TextEncoding;

/// Encodes text as space-separated 8-bit binary groups
pub struct Encoder {
    encoding: TextEncoding,
}

impl Encoder {
    /// Create a new encoder using UTF-8
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
        }
    }

    /// Create an encoder for a specific text encoding
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    /// Encode text to a binary string
    ///
    /// Each byte of the encoded text becomes an 8-digit MSB-first group;
    /// groups are joined with single spaces. Multi-byte characters produce
    /// multiple groups. Unencodable characters are replaced, never fatal.
    /// Empty input produces an empty string.
    pub fn encode(&self, text: &str) -> String {
        let bytes = self.encoding.encode_replace(text);
        bytes
            .iter()
            .map(|byte| format!("{:08b}", byte))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text to a binary string using UTF-8
pub fn encode(text: &str) -> String {
    Encoder::new().encode(text)
}
