//! docsim - document similarity checking
//!
//! This crate ranks a corpus of reference documents by textual
//! similarity to a query document. It provides:
//! - Text extraction from plain-text and paragraph-structured files
//! - Normalization into a canonical token stream (lowercase,
//!   punctuation deletion, word split, English stemming)
//! - TF-IDF vectorization over a pairwise vocabulary
//! - Cosine similarity scoring as a percentage
//! - A sequential corpus scanner with per-candidate failure isolation
//!
//! Execution is single threaded and synchronous; one check runs to
//! completion with blocking file reads. Nothing is cached or persisted
//! between checks.

pub mod core;
pub mod corpus;
pub mod extract;
pub mod normalize;
pub mod similarity;

// Re-export commonly used items
pub use crate::core::config::{default_corpus_dir, CheckConfig};
pub use crate::core::error::{DocsimError, Result};
pub use crate::core::types::{CandidateScore, DocumentFormat, ScanReport, SimilarityScore};
pub use crate::corpus::{add_to_corpus, CheckError, CorpusError, CorpusScanner};
pub use crate::extract::{ExtractError, Extractor};
pub use crate::normalize::Normalizer;
pub use crate::similarity::{ScoreError, SimilarityEngine, TfidfVectorizer};

use std::path::Path;

/// Run one similarity check with the given configuration.
///
/// Convenience wrapper over [`CorpusScanner`] for callers that do not
/// need to reuse the scanner across requests.
pub fn check_document(query: &Path, config: CheckConfig) -> Result<ScanReport> {
    let scanner = CorpusScanner::with_config(config);
    Ok(scanner.check(query)?)
}
