//! # textbits
//!
//! Conversion between text and an 8-bit-per-byte binary string
//! representation, with auto-detection, file conversion, and a run history
//! exportable to JSON or CSV.
//!
//! ## Binary String Format
//!
//! Text is encoded byte-by-byte into 8-digit MSB-first binary groups joined
//! by single spaces:
//!
//! ```text
//! Hi  ->  01001000 01101001
//! ```
//!
//! Multi-byte characters produce one group per encoded byte. Decoding is
//! tolerant on input: groups may be separated by spaces, commas,
//! underscores, dashes, newlines, tabs, pipes or slashes, or run together as
//! a continuous stream.
//!
//! ```
//! use textbits::{encode, decode};
//!
//! assert_eq!(encode("Hi"), "01001000 01101001");
//! assert_eq!(decode("01001000,01101001").unwrap(), "Hi");
//! ```
//!
//! ## Validation
//!
//! Decoding fails with [`CodecError::InvalidCharacter`] when the input
//! contains anything that is neither a binary digit nor a recognized
//! separator, and with [`CodecError::InvalidLength`] when the bit count is
//! not a multiple of 8. Byte sequences that are malformed under the chosen
//! [`TextEncoding`] never fail; they decode with U+FFFD substituted at the
//! malformed positions.
//!
//! ## Auto-Detection
//!
//! [`looks_like_binary`] classifies an input as binary when at least 90% of
//! its non-separator characters are `0`/`1`. This is a permissive heuristic
//! for choosing a conversion direction, not a validator.

pub mod codec;
pub mod convert;
pub mod decoder;
pub mod detect;
pub mod encoder;
pub mod history;

pub use codec::{sanitize, CodecError, InvalidChar, Sanitized, TextEncoding, SEPARATORS};
pub use convert::{convert_file, read_text_file, write_text_file, Mode};
pub use decoder::{decode, Decoder};
pub use detect::{looks_like_binary, looks_like_binary_with_threshold, DEFAULT_THRESHOLD};
pub use encoder::{encode, Encoder};
pub use history::{History, Record};
