//! Tests for the similarity engine

use super::*;
use crate::core::config::CheckConfig;
use docx_rs::{Docx, Paragraph, Run};
use std::fs;
use tempfile::TempDir;

fn write_candidate(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write candidate");
    path
}

fn extracting_engine() -> SimilarityEngine {
    SimilarityEngine::with_config(&CheckConfig {
        corpus_dir: std::path::PathBuf::new(),
        extract_candidates: true,
    })
}

#[test]
fn self_similarity_is_one_hundred() {
    let dir = TempDir::new().unwrap();
    let text = "The quick brown fox jumps over the lazy dog";
    let path = write_candidate(&dir, "copy.txt", text);

    let engine = SimilarityEngine::new();
    let score = engine.score(text, &path).unwrap();
    assert!((score.percent() - 100.0).abs() < 1e-6);
    assert_eq!(score.to_string(), "100.000%");
}

#[test]
fn disjoint_documents_score_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_candidate(&dir, "other.txt", "quantum entanglement decoherence");

    let engine = SimilarityEngine::new();
    let score = engine.score("medieval castle architecture", &path).unwrap();
    assert_eq!(score.percent(), 0.0);
    assert_eq!(score.to_string(), "0.000%");
}

#[test]
fn related_candidate_outranks_unrelated_one() {
    let dir = TempDir::new().unwrap();
    let related = write_candidate(&dir, "related.txt", "The quick brown fox jumps");
    let unrelated = write_candidate(&dir, "unrelated.txt", "Quantum mechanics describes particles");

    let engine = SimilarityEngine::new();
    let query = "The quick brown fox";
    let related_score = engine.score(query, &related).unwrap();
    let unrelated_score = engine.score(query, &unrelated).unwrap();
    assert!(related_score.percent() > unrelated_score.percent());
}

#[test]
fn inflected_forms_still_match() {
    // Stemming folds "jumping"/"jumps" together, so the overlap
    // survives inflection.
    let dir = TempDir::new().unwrap();
    let path = write_candidate(&dir, "inflected.txt", "the fox was jumping");

    let engine = SimilarityEngine::new();
    let score = engine.score("the fox jumps", &path).unwrap();
    assert!(score.percent() > 0.0);
}

#[test]
fn missing_candidate_is_unreadable() {
    let engine = SimilarityEngine::new();
    let err = engine
        .score("anything", std::path::Path::new("/nonexistent/candidate.txt"))
        .unwrap_err();
    assert!(matches!(err, ScoreError::CandidateUnreadable { .. }));
}

#[test]
fn directory_candidate_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let engine = SimilarityEngine::new();
    let err = engine.score("anything", dir.path()).unwrap_err();
    assert!(matches!(err, ScoreError::CandidateUnreadable { .. }));
}

mod candidate_acquisition {
    use super::*;

    fn write_docx(dir: &TempDir, name: &str, paragraphs: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = fs::File::create(&path).expect("failed to create docx");
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        docx.build().pack(file).expect("failed to pack docx");
        path
    }

    #[test]
    fn raw_read_scores_structured_candidates_on_container_bytes() {
        // Default behavior: the docx candidate is read as raw zip
        // bytes, so a textually identical document does not score
        // anywhere near 100.
        let dir = TempDir::new().unwrap();
        let text = "The quick brown fox jumps over the lazy dog";
        let docx_path = write_docx(&dir, "same.docx", &[text]);

        let raw_engine = SimilarityEngine::new();
        let raw_score = raw_engine.score(text, &docx_path).unwrap();
        assert!(raw_score.percent() < 100.0 - 1e-3);
    }

    #[test]
    fn extraction_flag_restores_structured_parity() {
        let dir = TempDir::new().unwrap();
        let text = "The quick brown fox jumps over the lazy dog";
        let docx_path = write_docx(&dir, "same.docx", &[text]);

        let engine = extracting_engine();
        let score = engine.score(text, &docx_path).unwrap();
        assert!((score.percent() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn plain_candidates_score_identically_on_both_paths() {
        let dir = TempDir::new().unwrap();
        let candidate = write_candidate(&dir, "essay.txt", "A mostly similar essay about foxes");
        let query = "An essay about foxes";

        let raw_score = SimilarityEngine::new().score(query, &candidate).unwrap();
        let extracted_score = extracting_engine().score(query, &candidate).unwrap();
        assert_eq!(raw_score, extracted_score);
    }

    #[test]
    fn extracting_engine_skips_unreadable_candidates_too() {
        let dir = TempDir::new().unwrap();
        let broken = write_candidate(&dir, "broken.docx", "not a zip archive");

        let engine = extracting_engine();
        let err = engine.score("anything", &broken).unwrap_err();
        assert!(matches!(err, ScoreError::CandidateUnreadable { .. }));
    }
}
