//! Corpus scanning
//!
//! The candidate-enumeration loop around the similarity engine: extract
//! the query once, then walk the corpus directory strictly sequentially
//! and collect one score per readable candidate. A candidate that fails
//! is skipped, counted, and logged; it never aborts the rest of the
//! scan. Also hosts the copy-to-corpus file convenience.


use crate::core::config::CheckConfig;
use crate::core::types::{CandidateScore, ScanReport};
use crate::extract::{ExtractError, Extractor};
use crate::similarity::SimilarityEngine;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a whole check request
#[derive(Error, Debug)]
pub enum CheckError {
    /// The query itself could not be extracted; no candidates are
    /// scored.
    #[error(transparent)]
    NotADocument(#[from] ExtractError),

    /// The corpus directory exists but could not be enumerated.
    #[error("corpus directory unreadable: {path}: {source}")]
    CorpusUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from corpus file management
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A file-dependent action was invoked without a usable document.
    #[error("no document selected")]
    NoQuerySelected,

    #[error("copy into corpus failed: {reason}")]
    CopyFailed { reason: String },
}

/// Scanner running one check request against the corpus snapshot
///
/// Candidates are visited in the order the OS returns directory
/// entries; files added or removed mid-scan may or may not be
/// observed. The scanner holds no lock and expects the caller to issue
/// one check at a time.
pub struct CorpusScanner {
    extractor: Extractor,
    engine: SimilarityEngine,
    config: CheckConfig,
}

impl CorpusScanner {
    /// Scanner with default configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Scanner with custom configuration
    pub fn with_config(config: CheckConfig) -> Self {
        Self {
            extractor: Extractor::new(),
            engine: SimilarityEngine::with_config(&config),
            config,
        }
    }

    /// The configuration this scanner runs with
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run one check: extract the query, score every candidate in the
    /// corpus directory.
    ///
    /// A missing corpus directory yields an empty report. A candidate
    /// that cannot be scored is counted in `skipped` and the scan
    /// continues.
    pub fn check(&self, query: &Path) -> Result<ScanReport, CheckError> {
        let query_text = self.extractor.extract(query)?;
        tracing::info!(query = %query.display(), chars = query_text.len(), "query extracted");

        let corpus_dir = &self.config.corpus_dir;
        if !corpus_dir.exists() {
            tracing::info!(corpus = %corpus_dir.display(), "corpus directory missing, nothing to scan");
            return Ok(ScanReport::default());
        }

        let entries = fs::read_dir(corpus_dir).map_err(|source| CheckError::CorpusUnreadable {
            path: corpus_dir.display().to_string(),
            source,
        })?;

        let mut report = ScanReport::default();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    report.skipped += 1;
                    continue;
                }
            };

            match self.engine.score(&query_text, &path) {
                Ok(similarity) => report.results.push(CandidateScore {
                    display_name: display_name(&path),
                    similarity,
                    path,
                }),
                Err(e) => {
                    tracing::warn!(candidate = %path.display(), error = %e, "skipping candidate");
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            results = report.results.len(),
            skipped = report.skipped,
            "scan complete"
        );
        Ok(report)
    }
}

impl Default for CorpusScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a document into the corpus directory under
/// `<file name>.copy`, creating the directory if needed.
///
/// Reports [`CorpusError::NoQuerySelected`] when the source file is
/// gone, which is what happens when the action is invoked without a
/// prior successful selection. Never touches an existing report.
pub fn add_to_corpus(query: &Path, corpus_dir: &Path) -> Result<PathBuf, CorpusError> {
    if !query.is_file() {
        return Err(CorpusError::NoQuerySelected);
    }
    let name = query
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(CorpusError::NoQuerySelected)?;

    fs::create_dir_all(corpus_dir).map_err(|e| CorpusError::CopyFailed {
        reason: e.to_string(),
    })?;

    let dest = corpus_dir.join(format!("{name}.copy"));
    fs::copy(query, &dest).map_err(|e| CorpusError::CopyFailed {
        reason: e.to_string(),
    })?;

    tracing::info!(from = %query.display(), to = %dest.display(), "document added to corpus");
    Ok(dest)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
