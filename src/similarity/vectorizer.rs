//! Pairwise TF-IDF vectorization
//!
//! The vocabulary is scoped to exactly the two documents of one
//! comparison. There is no corpus-wide index: every call builds its
//! vocabulary from scratch, which keeps one comparison independent of
//! everything else on disk at the cost of recomputation. Scaling past
//! that means fitting one shared vocabulary for the whole corpus while
//! keeping these weight semantics.

use crate::normalize::Normalizer;
use std::collections::BTreeMap;

const EPSILON: f64 = 1e-10;

/// TF-IDF vectorizer over a two-document vocabulary
///
/// Weights follow the conventional smoothed scheme: raw term counts
/// scaled by `ln((1 + n) / (1 + df)) + 1` with `n = 2`, rows
/// L2-normalized. With normalized rows the cosine of two vectors is
/// their dot product.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    normalizer: Normalizer,
}

impl TfidfVectorizer {
    /// Vectorizer with the standard pipeline: normalization plus
    /// English stop-word removal.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::with_stop_words(),
        }
    }

    /// Vectorizer over a caller-supplied normalizer.
    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// Fit on exactly two documents and transform both into weight
    /// vectors over their shared vocabulary. Vocabulary order is
    /// alphabetical, so the mapping is deterministic.
    pub fn fit_transform_pair(&self, first: &str, second: &str) -> (Vec<f64>, Vec<f64>) {
        let first_tokens = self.normalizer.normalize(first);
        let second_tokens = self.normalizer.normalize(second);

        let mut vocabulary: BTreeMap<&str, usize> = first_tokens
            .iter()
            .chain(second_tokens.iter())
            .map(|token| (token.as_str(), 0))
            .collect();
        for (slot, index) in vocabulary.values_mut().enumerate() {
            *index = slot;
        }

        let mut first_vec = term_counts(&first_tokens, &vocabulary);
        let mut second_vec = term_counts(&second_tokens, &vocabulary);

        // Smoothed inverse document frequency over the two-document fit
        // corpus: df is 1 or 2, so shared terms get weight 1 and terms
        // unique to one side get ln(3/2) + 1.
        for i in 0..vocabulary.len() {
            let df = (first_vec[i] > 0.0) as u8 + (second_vec[i] > 0.0) as u8;
            let idf = ((1.0 + 2.0) / (1.0 + f64::from(df))).ln() + 1.0;
            first_vec[i] *= idf;
            second_vec[i] *= idf;
        }

        l2_normalize(&mut first_vec);
        l2_normalize(&mut second_vec);

        (first_vec, second_vec)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw term counts over the shared vocabulary
fn term_counts(tokens: &[String], vocabulary: &BTreeMap<&str, usize>) -> Vec<f64> {
    let mut counts = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(&index) = vocabulary.get(token.as_str()) {
            counts[index] += 1.0;
        }
    }
    counts
}

fn l2_normalize(v: &mut [f64]) {
    let norm = vector_magnitude(v);
    if norm > EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(ai, bi)| ai * bi).sum()
}

fn vector_magnitude(v: &[f64]) -> f64 {
    v.iter().map(|vi| vi * vi).sum::<f64>().sqrt()
}

/// Cosine similarity between two weight vectors. Zero when either
/// vector is degenerate, so documents with no surviving tokens score
/// 0 rather than NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mag_a = vector_magnitude(a);
    let mag_b = vector_magnitude(b);
    if mag_a < EPSILON || mag_b < EPSILON {
        return 0.0;
    }
    dot_product(a, b) / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_documents_have_unit_cosine() {
        let vectorizer = TfidfVectorizer::new();
        let (a, b) = vectorizer.fit_transform_pair(
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumps over the lazy dog",
        );
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_documents_have_zero_cosine() {
        let vectorizer = TfidfVectorizer::new();
        let (a, b) = vectorizer.fit_transform_pair("alpha beta gamma", "delta epsilon zeta");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn empty_documents_score_zero_not_nan() {
        let vectorizer = TfidfVectorizer::new();
        let (a, b) = vectorizer.fit_transform_pair("", "");
        let sim = cosine_similarity(&a, &b);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn vectors_share_one_vocabulary() {
        let vectorizer = TfidfVectorizer::new();
        let (a, b) = vectorizer.fit_transform_pair("apple banana", "banana cherry");
        assert_eq!(a.len(), b.len());
        // apple, banana, cherry after normalization
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn unique_terms_weigh_more_than_shared_ones() {
        let vectorizer = TfidfVectorizer::new();
        // Vocabulary is alphabetical: apple < banana. "apple" appears in
        // both documents (idf 1), "banana" only in the first.
        let (a, _b) = vectorizer.fit_transform_pair("apple banana", "apple");
        assert!(a[1] > a[0]);
    }
}
