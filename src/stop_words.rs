// src/stop_words.rs
//
// Stopword tables for span generation and prefix verification.
// Lookups expect already-lowercased tokens.

use std::collections::HashSet;
use once_cell::sync::Lazy;

/// Words never scored as single-word candidates: articles, short prepositions,
/// common conjunctions and the copula.
pub static CANDIDATE_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "this", "the", "a", "an", "and", "or", "but", "is", "are",
        "in", "on", "at", "of", "to", "as", "by", "for",
    ].into_iter().collect()
});

/// Broader list used when re-checking a match against the sentence.
/// Adds auxiliaries, modals, directional prepositions and generic fillers.
pub static VERIFICATION_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Articles and conjunctions
        "this", "the", "a", "an", "and", "or", "but", "nor",

        // Auxiliary and modal verbs
        "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did",
        "will", "would", "shall", "should", "can", "could", "may", "might", "must",

        // Prepositions, including directional ones
        "in", "on", "at", "of", "to", "as", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above", "below",
        "from", "up", "down", "out", "off", "over", "under",

        // Adverbs, determiners and fillers
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
        "no", "not", "only", "own", "same", "so", "than", "too", "very",
        "s", "t", "just", "don", "now",
    ].into_iter().collect()
});

pub fn is_candidate_stop_word(token: &str) -> bool {
    CANDIDATE_STOP_WORDS.contains(token)
}

pub fn is_verification_stop_word(token: &str) -> bool {
    VERIFICATION_STOP_WORDS.contains(token)
}
