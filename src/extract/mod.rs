//! Text extraction
//!
//! Turns a document file into plain text for the similarity pipeline.
//! Dispatches on the file extension:
//! - `docx` goes through the structured-paragraph reader
//! - everything else, including `doc`, `txt`, unknown extensions, and
//!   paths with no extension, is read as ASCII with undecodable bytes
//!   discarded
//!
//! Every failure collapses to [`ExtractError::NotADocument`]; the
//! underlying cause is logged at debug level. Extraction never aborts
//! more than the current request.

mod docx;
mod text;

pub use self::docx::DocxReader;
pub use self::text::PlainTextReader;

use crate::core::types::DocumentFormat;
use std::path::Path;
use thiserror::Error;

/// The single externally visible extraction failure
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("not a document file: {path}")]
    NotADocument { path: String },
}

/// Richer failure used inside the format readers, collapsed before it
/// leaves the module
#[derive(Error, Debug)]
pub(crate) enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("container parse failed: {reason}")]
    Container { reason: String },
}

/// Text extractor dispatching to format-specific readers
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    structured: DocxReader,
    plain: PlainTextReader,
}

impl Extractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the plain-text content of a document.
    ///
    /// Returns [`ExtractError::NotADocument`] for anything that cannot
    /// be turned into text: a missing or unreadable file, or a corrupt
    /// structured container.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let result = match DocumentFormat::from_path(path) {
            DocumentFormat::Structured => self.structured.read_text(path),
            DocumentFormat::PlainText => self.plain.read_text(path),
        };

        result.map_err(|cause| {
            tracing::debug!(path = %path.display(), %cause, "extraction failed");
            ExtractError::NotADocument {
                path: path.display().to_string(),
            }
        })
    }
}
