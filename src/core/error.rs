//! Error types for docsim
//!
//! Every failure is an explicit discriminated result. Each pipeline
//! module defines its own error enum next to the code that raises it;
//! this module aggregates them into one crate-level error so callers
//! can hold a single type.

use thiserror::Error;

use crate::corpus::{CheckError, CorpusError};
use crate::extract::ExtractError;
use crate::similarity::ScoreError;

/// Result type alias for docsim operations
pub type Result<T> = std::result::Result<T, DocsimError>;

/// Main error type for docsim
#[derive(Error, Debug)]
pub enum DocsimError {
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("scoring error: {0}")]
    Score(#[from] ScoreError),

    #[error("check error: {0}")]
    Check(#[from] CheckError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsimError {
    /// Whether the failure concerns only the current request.
    ///
    /// Nothing in the pipeline is fatal to the process; this marks the
    /// errors a caller should render as a notice and move on from, as
    /// opposed to environment problems worth escalating.
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            DocsimError::Extract(_)
                | DocsimError::Check(CheckError::NotADocument(_))
                | DocsimError::Corpus(CorpusError::NoQuerySelected)
        )
    }
}
