//! Similarity engine
//!
//! Scores a query document against one candidate file:
//! - read the candidate's text
//! - vectorize both documents into TF-IDF weights over their pairwise
//!   vocabulary
//! - take the cosine of the two vectors as a percentage
//!
//! By default the candidate is read as raw bytes (UTF-8, undecodable
//! sequences dropped) while the query arrives already extracted. The
//! asymmetry means a structured candidate gets scored on its serialized
//! container bytes, which corrupts its score; `extract_candidates`
//! switches the engine to extracting both sides identically.

mod vectorizer;
#[cfg(test)]
mod tests;

pub use self::vectorizer::{cosine_similarity, TfidfVectorizer};

use crate::core::config::CheckConfig;
use crate::core::types::SimilarityScore;
use crate::extract::Extractor;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error types for scoring operations
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("candidate unreadable: {path}")]
    CandidateUnreadable { path: String },
}

/// Engine computing one pairwise similarity per call
///
/// Holds no state between calls: vocabulary and vectors live only for
/// the duration of one `score` invocation.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    vectorizer: TfidfVectorizer,
    extractor: Extractor,
    extract_candidates: bool,
}

impl SimilarityEngine {
    /// Engine with default behavior: candidates read as raw bytes.
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
            extractor: Extractor::new(),
            extract_candidates: false,
        }
    }

    /// Engine configured from a check run's settings.
    pub fn with_config(config: &CheckConfig) -> Self {
        Self {
            extract_candidates: config.extract_candidates,
            ..Self::new()
        }
    }

    /// Score already-extracted query text against one candidate file.
    ///
    /// Returns [`ScoreError::CandidateUnreadable`] when the candidate
    /// cannot be read; the caller decides whether that skips the
    /// candidate or aborts anything larger.
    pub fn score(&self, query_text: &str, candidate: &Path) -> Result<SimilarityScore, ScoreError> {
        let candidate_text = self.candidate_text(candidate)?;

        let (query_vec, candidate_vec) = self
            .vectorizer
            .fit_transform_pair(query_text, &candidate_text);
        let percent = cosine_similarity(&query_vec, &candidate_vec) * 100.0;

        tracing::debug!(candidate = %candidate.display(), percent, "scored candidate");
        Ok(SimilarityScore::new(percent))
    }

    fn candidate_text(&self, candidate: &Path) -> Result<String, ScoreError> {
        let unreadable = |candidate: &Path| ScoreError::CandidateUnreadable {
            path: candidate.display().to_string(),
        };

        if self.extract_candidates {
            self.extractor
                .extract(candidate)
                .map_err(|_| unreadable(candidate))
        } else {
            read_text_dropping_invalid(candidate).map_err(|cause| {
                tracing::debug!(candidate = %candidate.display(), %cause, "candidate read failed");
                unreadable(candidate)
            })
        }
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a file as UTF-8, dropping byte sequences that do not decode.
fn read_text_dropping_invalid(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    let mut text = String::with_capacity(bytes.len());
    let mut rest: &[u8] = &bytes;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // The prefix is valid by construction, so no
                // replacement characters are introduced here.
                text.push_str(&String::from_utf8_lossy(valid));
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at end of input
                    None => break,
                }
            }
        }
    }
    Ok(text)
}
