//! In-memory conversion history with JSON/CSV export
//!
//! The store is append-only and explicitly owned by the caller (the
//! interactive session or a single CLI invocation); nothing here is global.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Maximum preview length in characters
const PREVIEW_LEN: usize = 80;

/// One recorded conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// RFC 3339 timestamp of the conversion
    pub timestamp: String,
    /// Conversion mode ("t2b", "b2t" or "auto")
    pub mode: String,
    pub input_preview: String,
    pub output_preview: String,
    /// Input length in characters
    pub input_len: usize,
    /// Output length in characters
    pub output_len: usize,
}

/// Append-only list of conversion records
#[derive(Debug, Default)]
pub struct History {
    items: Vec<Record>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for one conversion
    pub fn add(&mut self, mode: &str, input: &str, output: &str) {
        self.items.push(Record {
            timestamp: now_rfc3339(),
            mode: mode.to_string(),
            input_preview: preview(input),
            output_preview: preview(output),
            input_len: input.chars().count(),
            output_len: output.chars().count(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The most recent `n` records, oldest first
    pub fn tail(&self, n: usize) -> &[Record] {
        let start = self.items.len().saturating_sub(n);
        &self.items[start..]
    }

    /// Serialize all records as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.items).context("Failed to serialize history")
    }

    /// Write all records to a JSON file
    pub fn export_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }

    /// Write all records to a CSV file with a header row
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut out =
            String::from("timestamp,mode,input_preview,output_preview,input_len,output_len\n");
        for r in &self.items {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                csv_field(&r.timestamp),
                csv_field(&r.mode),
                csv_field(&r.input_preview),
                csv_field(&r.output_preview),
                r.input_len,
                r.output_len
            ));
        }
        std::fs::write(path, out).with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Truncate to PREVIEW_LEN characters, appending an ellipsis when cut
fn preview(s: &str) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> History {
        let mut h = History::new();
        h.add("t2b", "Hi", "01001000 01101001");
        h.add("b2t", "01001000 01101001", "Hi");
        h
    }

    #[test]
    fn test_add_and_tail() {
        let mut h = History::new();
        assert!(h.is_empty());
        for i in 0..15 {
            h.add("auto", &format!("input {i}"), "out");
        }
        assert_eq!(h.len(), 15);
        let tail = h.tail(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0].input_preview, "input 5");
        assert_eq!(tail[9].input_preview, "input 14");
    }

    #[test]
    fn test_tail_larger_than_history() {
        let h = sample();
        assert_eq!(h.tail(100).len(), 2);
    }

    #[test]
    fn test_preview_truncation_is_char_safe() {
        let long: String = "é".repeat(100);
        let p = preview(&long);
        assert_eq!(p.chars().count(), 81);
        assert!(p.ends_with('…'));
    }

    #[test]
    fn test_preview_short_input_untouched() {
        assert_eq!(preview("Hi"), "Hi");
    }

    #[test]
    fn test_record_lengths_in_chars() {
        let mut h = History::new();
        h.add("t2b", "日本語", "x");
        assert_eq!(h.tail(1)[0].input_len, 3);
    }

    #[test]
    fn test_json_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        sample().export_json(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["mode"], "t2b");
        assert_eq!(parsed[1]["output_preview"], "Hi");
    }

    #[test]
    fn test_csv_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        sample().export_csv(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,mode,input_preview,output_preview,input_len,output_len"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
