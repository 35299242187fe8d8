//! Plain-text reader
//!
//! Reads raw bytes and decodes them as ASCII, discarding every byte
//! that does not decode. Bytes are dropped, not replaced, so multi-byte
//! characters vanish entirely instead of leaving placeholders.

use super::ReadError;
use std::fs;
use std::path::Path;

/// Reader for plain-text-like files
#[derive(Debug, Clone, Default)]
pub struct PlainTextReader;

impl PlainTextReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the whole file as one ASCII string.
    pub fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = fs::read(path)?;
        Ok(decode_ascii_dropping(&bytes))
    }
}

/// ASCII decode with non-ASCII bytes discarded
fn decode_ascii_dropping(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect()
}
