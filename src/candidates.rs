// src/candidates.rs
//
// Candidate span extraction: adjacent-word bigrams plus non-stopword unigrams.

use crate::phonetic_encoder::{PhoneticCode, PhoneticEncoder};
use crate::stop_words::is_candidate_stop_word;

/// A span of the input sentence eligible for phonetic comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub code: PhoneticCode,
}

/// Inclusive character-length bounds for two-word spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigramBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for BigramBounds {
    fn default() -> Self {
        Self {
            min_chars: 4,
            max_chars: 16,
        }
    }
}

impl BigramBounds {
    fn contains(&self, span: &str) -> bool {
        let chars = span.chars().count();
        chars >= self.min_chars && chars <= self.max_chars
    }
}

pub struct CandidateExtractor<'a> {
    encoder: &'a PhoneticEncoder,
    bounds: BigramBounds,
}

impl<'a> CandidateExtractor<'a> {
    pub fn new(encoder: &'a PhoneticEncoder, bounds: BigramBounds) -> Self {
        Self { encoder, bounds }
    }

    /// Bigrams first, then unigrams, each encoded. Duplicated spans are kept.
    pub fn extract(&self, sentence: &str) -> Vec<Candidate> {
        candidate_spans(sentence, self.bounds)
            .into_iter()
            .map(|text| {
                let code = self.encoder.encode(&text);
                Candidate { text, code }
            })
            .collect()
    }
}

/// The text of every scoring-eligible span, lowercased, before encoding.
pub fn candidate_spans(sentence: &str, bounds: BigramBounds) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let bigrams = tokens
        .windows(2)
        .map(|pair| pair.join(" "))
        .filter(|span| bounds.contains(span));

    let unigrams = tokens
        .iter()
        .filter(|token| !is_candidate_stop_word(token))
        .map(|token| token.to_string());

    bigrams.chain(unigrams).collect()
}
