//! Binary-string to text decoder

use crate::codec::{sanitize, CodecError, TextEncoding, GROUP_WIDTH};

/// Decodes space-separated (or otherwise separated) 8-bit binary groups
pub struct Decoder {
    encoding: TextEncoding,
}

impl Decoder {
    /// Create a new decoder using UTF-8
    pub fn new() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
        }
    }

    /// Create a decoder for a specific text encoding
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    /// Decode a binary string to text
    ///
    /// Accepts a continuous bit stream or groups split by any recognized
    /// separator. Fails if the input contains other characters or if the bit
    /// count is not a multiple of 8. Empty input (after sanitization) decodes
    /// to the empty string. Byte sequences that are malformed under the
    /// chosen encoding degrade to the replacement character instead of
    /// failing.
    pub fn decode(&self, input: &str) -> Result<String, CodecError> {
        let cleaned = sanitize(input);

        if let Some(bad) = cleaned.invalid.first() {
            return Err(CodecError::InvalidCharacter {
                position: bad.position,
                ch: bad.ch,
            });
        }

        if cleaned.bits.is_empty() {
            return Ok(String::new());
        }

        if cleaned.bits.len() % GROUP_WIDTH != 0 {
            return Err(CodecError::InvalidLength {
                bits: cleaned.bits.len(),
            });
        }

        let bytes = chunk_bytes(&cleaned.bits);
        Ok(self.encoding.decode_replace(&bytes))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a clean bit string (length a multiple of 8) into bytes
fn chunk_bytes(bits: &str) -> Vec<u8> {
    bits.as_bytes()
        .chunks(GROUP_WIDTH)
        .map(|group| {
            group
                .iter()
                .fold(0u8, |acc, &digit| (acc << 1) | (digit - b'0'))
        })
        .collect()
}

/// Decode a binary string to text using UTF-8
pub fn decode(input: &str) -> Result<String, CodecError> {
    Decoder::new().decode(input)
}
