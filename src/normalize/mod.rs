//! Text normalization
//!
//! Turns raw document text into the canonical token stream the
//! vectorizer consumes:
//! - lowercase the whole input
//! - delete ASCII punctuation characters (deletion, not replacement,
//!   so `don't` becomes the single token `dont`)
//! - split at whitespace word boundaries
//! - stem each token with the English suffix-stripping stemmer
//!
//! Built as a tantivy analyzer pipeline: a custom word tokenizer plus
//! the stock `LowerCaser` and `Stemmer` filters. The vectorizer uses a
//! variant of the same pipeline with English stop-word removal applied
//! after stemming; plain normalization never removes stop words.

use tantivy::tokenizer::{
    Language, LowerCaser, Stemmer, StopWordFilter, TextAnalyzer, Token, TokenStream,
    Tokenizer as TantivyTokenizer,
};

/// Word-boundary tokenizer that deletes punctuation.
///
/// Whitespace ends a token; ASCII punctuation characters are dropped
/// without ending one. `well-known` therefore yields `wellknown`, and
/// a chunk that was nothing but punctuation yields no token at all.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text by splitting at whitespace, deleting punctuation
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else if !ch.is_ascii_punctuation() {
                current.push(ch);
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}

/// Token stream for the word tokenizer (tantivy integration)
pub struct WordTokenStream {
    tokens: Vec<String>,
    index: usize,
    offset: usize,
    token: Token,
}

impl TokenStream for WordTokenStream {
    fn advance(&mut self) -> bool {
        if self.index >= self.tokens.len() {
            return false;
        }

        let text = &self.tokens[self.index];
        self.token = Token {
            offset_from: self.offset,
            offset_to: self.offset + text.len(),
            position: self.index,
            text: text.clone(),
            position_length: 1,
        };
        self.offset += text.len();
        self.index += 1;
        true
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}

impl TantivyTokenizer for WordTokenizer {
    type TokenStream<'a> = WordTokenStream;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        let tokens = self.tokenize(text);
        WordTokenStream {
            tokens,
            index: 0,
            offset: 0,
            token: Token::default(),
        }
    }
}

/// Normalizer producing the canonical token stream.
///
/// A pure function of its input: the same text always yields the same
/// token sequence, in input order. Construct once and pass explicitly
/// to whatever needs it; there is no hidden shared state.
#[derive(Clone)]
pub struct Normalizer {
    analyzer: TextAnalyzer,
}

impl Normalizer {
    /// Pipeline without stop-word removal: lowercase, punctuation
    /// deletion, word split, stem.
    pub fn new() -> Self {
        Self {
            analyzer: TextAnalyzer::builder(WordTokenizer::new())
                .filter(LowerCaser)
                .filter(Stemmer::new(Language::English))
                .build(),
        }
    }

    /// Pipeline for vectorization: the same steps, then English
    /// stop-word removal over the stemmed tokens. Matching against the
    /// stop list happens after stemming, so a word whose stem leaves
    /// the list survives.
    pub fn with_stop_words() -> Self {
        let stop_words = StopWordFilter::new(Language::English)
            .unwrap_or_else(|| StopWordFilter::remove(Vec::<String>::new()));
        Self {
            analyzer: TextAnalyzer::builder(WordTokenizer::new())
                .filter(LowerCaser)
                .filter(Stemmer::new(Language::English))
                .filter(stop_words)
                .build(),
        }
    }

    /// Normalize text into an ordered sequence of stemmed tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(text);
        let mut tokens = Vec::new();
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        tokens
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_stems() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("Running RUNS run"),
            vec!["run", "run", "run"]
        );
    }

    #[test]
    fn punctuation_is_deleted_not_replaced() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("don't stop");
        assert!(tokens.contains(&"dont".to_string()));
        assert!(!tokens.contains(&"don".to_string()));
        assert!(!tokens.contains(&"t".to_string()));
    }

    #[test]
    fn hyphenated_words_collapse() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("well-known"), vec!["wellknown"]);
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        let normalizer = Normalizer::new();
        assert!(normalizer.normalize("... --- !!!").is_empty());
        assert!(normalizer.normalize("").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("quick brown fox"),
            vec!["quick", "brown", "fox"]
        );
    }

    #[test]
    fn stop_words_survive_plain_normalization() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("the cat and the hat");
        assert!(tokens.contains(&"the".to_string()));
        assert!(tokens.contains(&"and".to_string()));
    }

    #[test]
    fn stop_word_pipeline_removes_them() {
        let normalizer = Normalizer::with_stop_words();
        let tokens = normalizer.normalize("the quick brown fox");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(tokens.contains(&"quick".to_string()));
    }

    proptest! {
        // A pure function of its input: two independently constructed
        // normalizers agree, and repeated calls agree.
        #[test]
        fn normalization_is_deterministic(text in "\\PC{0,200}") {
            let first = Normalizer::new();
            let second = Normalizer::new();
            let once = first.normalize(&text);
            prop_assert_eq!(&once, &first.normalize(&text));
            prop_assert_eq!(&once, &second.normalize(&text));
        }
    }
}
