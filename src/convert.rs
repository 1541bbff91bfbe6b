//! File conversion pipeline

use crate::codec::TextEncoding;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::history::History;
use anyhow::{Context, Result};
use std::path::Path;

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text to binary string ("t2b")
    TextToBinary,
    /// Binary string to text ("b2t")
    BinaryToText,
}

impl Mode {
    /// Short user-facing name, also used in history records
    pub fn name(&self) -> &'static str {
        match self {
            Mode::TextToBinary => "t2b",
            Mode::BinaryToText => "b2t",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t2b" => Ok(Mode::TextToBinary),
            "b2t" => Ok(Mode::BinaryToText),
            _ => Err(UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

/// Error for an unrecognized mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode {
    pub name: String,
}

impl std::fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown mode '{}' (expected t2b or b2t)", self.name)
    }
}

impl std::error::Error for UnknownMode {}

/// Read a whole UTF-8 text file
pub fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Write a whole UTF-8 text file
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

/// Convert `infile` into `outfile` in the given direction
///
/// Returns (input chars, output chars) and appends one history record.
pub fn convert_file(
    infile: &Path,
    outfile: &Path,
    mode: Mode,
    encoding: TextEncoding,
    history: &mut History,
) -> Result<(usize, usize)> {
    let data = read_text_file(infile)?;
    let out = match mode {
        Mode::TextToBinary => Encoder::with_encoding(encoding).encode(&data),
        Mode::BinaryToText => Decoder::with_encoding(encoding)
            .decode(&data)
            .with_context(|| format!("Failed to decode: {}", infile.display()))?,
    };
    write_text_file(outfile, &out)?;
    history.add(mode.name(), &data, &out);
    Ok((data.chars().count(), out.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_parse() {
        assert_eq!("t2b".parse::<Mode>().unwrap(), Mode::TextToBinary);
        assert_eq!("B2T".parse::<Mode>().unwrap(), Mode::BinaryToText);
        assert!("both".parse::<Mode>().is_err());
    }

    #[test]
    fn test_convert_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let text_path = dir.path().join("notes.txt");
        let bin_path = dir.path().join("notes.bin.txt");
        let back_path = dir.path().join("notes.back.txt");
        std::fs::write(&text_path, "Hello").unwrap();

        let mut history = History::new();
        let (in_len, out_len) = convert_file(
            &text_path,
            &bin_path,
            Mode::TextToBinary,
            TextEncoding::Utf8,
            &mut history,
        )
        .unwrap();
        assert_eq!(in_len, 5);
        assert_eq!(out_len, 5 * 8 + 4); // five groups, four spaces

        convert_file(
            &bin_path,
            &back_path,
            Mode::BinaryToText,
            TextEncoding::Utf8,
            &mut history,
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&back_path).unwrap(), "Hello");

        assert_eq!(history.len(), 2);
        assert_eq!(history.tail(2)[0].mode, "t2b");
        assert_eq!(history.tail(2)[1].mode, "b2t");
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = TempDir::new().unwrap();
        let mut history = History::new();
        let result = convert_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
            Mode::TextToBinary,
            TextEncoding::Utf8,
            &mut history,
        );
        assert!(result.is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn test_convert_file_decode_error_propagates() {
        let dir = TempDir::new().unwrap();
        let in_path = dir.path().join("bad.txt");
        std::fs::write(&in_path, "0100").unwrap();

        let mut history = History::new();
        let result = convert_file(
            &in_path,
            &dir.path().join("out.txt"),
            Mode::BinaryToText,
            TextEncoding::Utf8,
            &mut history,
        );
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("multiple of 8"));
        assert!(history.is_empty());
    }
}
