// src/prefix_verifier.rs
//
// Second pass over fuzzy matches. A match survives only if the leading sound
// of the custom word also starts some significant word of the sentence.

use crate::phonetic_encoder::{PhoneticCode, PhoneticEncoder};
use crate::stop_words::is_verification_stop_word;

pub const DEFAULT_MIN_PREFIX_CHARS: usize = 3;

pub struct PrefixVerifier<'a> {
    encoder: &'a PhoneticEncoder,
    min_prefix_chars: usize,
}

impl<'a> PrefixVerifier<'a> {
    pub fn new(encoder: &'a PhoneticEncoder, min_prefix_chars: usize) -> Self {
        Self {
            encoder,
            min_prefix_chars,
        }
    }

    /// Half the word, but never fewer than `min_prefix_chars` characters.
    pub fn prefix_len(&self, word: &str) -> usize {
        self.min_prefix_chars.max(word.chars().count() / 2)
    }

    /// Keep the matched words whose prefix code is shared with a sentence word,
    /// preserving their ranking.
    pub fn verify<S: AsRef<str>>(&self, matched_words: &[S], sentence: &str) -> Vec<String> {
        let lowered = sentence.to_lowercase();
        let sentence_words: Vec<&str> = lowered
            .split_whitespace()
            .filter(|word| !is_verification_stop_word(word))
            .collect();

        let mut verified = Vec::with_capacity(matched_words.len());
        for word in matched_words {
            let word: &str = word.as_ref();
            if self.is_spoken(word, &sentence_words) {
                verified.push(word.to_string());
            }
        }
        verified
    }

    fn is_spoken(&self, matched_word: &str, sentence_words: &[&str]) -> bool {
        let prefix_len = self.prefix_len(matched_word);
        let word_code = self.prefix_code(matched_word, prefix_len);

        sentence_words
            .iter()
            .filter(|word| word.chars().count() > 1)
            .any(|word| self.prefix_code(word, prefix_len).shares_code_with(&word_code))
    }

    fn prefix_code(&self, word: &str, prefix_len: usize) -> PhoneticCode {
        let prefix: String = word.chars().take(prefix_len).collect();
        self.encoder.encode(&prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify(matched: &[&str], sentence: &str) -> Vec<String> {
        let encoder = PhoneticEncoder::new();
        PrefixVerifier::new(&encoder, DEFAULT_MIN_PREFIX_CHARS).verify(matched, sentence)
    }

    #[test]
    fn test_prefix_length() {
        let encoder = PhoneticEncoder::new();
        let verifier = PrefixVerifier::new(&encoder, DEFAULT_MIN_PREFIX_CHARS);
        assert_eq!(verifier.prefix_len("kaan"), 3);
        assert_eq!(verifier.prefix_len("yurii"), 3);
        assert_eq!(verifier.prefix_len("carbonite"), 4);
        assert_eq!(verifier.prefix_len("schleuning"), 5);
    }

    #[test]
    fn test_shared_leading_sound_survives() {
        assert_eq!(verify(&["yurii"], "yuri will help raymond"), vec!["yurii"]);
        assert_eq!(verify(&["wilson"], "wilbur said so"), vec!["wilson"]);
    }

    #[test]
    fn test_different_leading_sound_is_dropped() {
        assert!(verify(&["carbonite"], "yuri will help").is_empty());
    }

    #[test]
    fn test_stopwords_and_single_letters_are_ignored() {
        // "will" would share "wil" but is a stopword here
        assert!(verify(&["wilson"], "will").is_empty());
        assert!(verify(&["wilson"], "Will").is_empty());
        assert!(verify(&["xavier"], "x y z").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let result = verify(&["wilbur", "carbonite", "yurii"], "yuri and wilbur");
        assert_eq!(result, vec!["wilbur", "yurii"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(verify(&["yurii"], "").is_empty());
        assert!(verify(&[], "yuri").is_empty());
    }
}
