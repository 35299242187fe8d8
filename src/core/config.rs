//! Check run configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one check run
///
/// There is no configuration file; values come from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Directory holding the candidate corpus
    pub corpus_dir: PathBuf,

    /// Run candidates through the same extractor as the query instead
    /// of reading their raw bytes. Off by default: candidates are read
    /// raw, even structured ones.
    pub extract_candidates: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            extract_candidates: false,
        }
    }
}

/// The default corpus location, a fixed folder under the user's home.
pub fn default_corpus_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Desktop")
        .join("Work")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_home_corpus() {
        let config = CheckConfig::default();
        assert!(config.corpus_dir.ends_with("Desktop/Work") || dirs::home_dir().is_none());
        assert!(!config.extract_candidates);
    }
}
