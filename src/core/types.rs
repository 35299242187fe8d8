//! Core data types
//!
//! Defines the document format tag, the similarity score type, and the
//! records a check run hands back to the presentation layer.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Document format, derived from the file extension as it appears on
/// the path. The extension is compared as given; `report.DOCX` is not
/// recognized as structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Paragraph-structured rich-text container (`docx`)
    Structured,
    /// Plain-text-like content. Covers the plain (`txt`) and legacy
    /// (`doc`) formats, any unrecognized extension, and paths with no
    /// extension at all.
    PlainText,
}

impl DocumentFormat {
    /// Derive the format tag from a path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("docx") => DocumentFormat::Structured,
            _ => DocumentFormat::PlainText,
        }
    }
}

/// Cosine similarity between two documents, expressed as a percentage.
///
/// The value is clamped to [0, 100]; floating point can push the raw
/// cosine a hair past 1.0 for identical inputs. Displays with exactly
/// three decimal places (`37.482%`), which is also the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Wrap a raw percentage, clamping into [0, 100].
    pub fn new(percent: f64) -> Self {
        SimilarityScore(percent.clamp(0.0, 100.0))
    }

    /// The percentage as a scalar.
    pub fn percent(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}%", self.0)
    }
}

impl Serialize for SimilarityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One scored candidate from a check run
#[derive(Debug, Clone, Serialize)]
pub struct CandidateScore {
    /// Candidate file name, for display
    pub display_name: String,

    /// Similarity against the query document
    pub similarity: SimilarityScore,

    /// Full path of the candidate, for open/reveal actions delegated
    /// to the operating environment
    pub path: PathBuf,
}

/// Outcome of one check run
///
/// Results appear in directory enumeration order, which is whatever the
/// OS returns and is not guaranteed stable across runs. Ordering for
/// presentation is the caller's concern.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// One record per candidate that could be scored
    pub results: Vec<CandidateScore>,

    /// Candidates dropped by per-candidate failure isolation
    pub skipped: usize,
}
