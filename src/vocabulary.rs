// src/vocabulary.rs
//
// Phonetic index over the custom word list.
// Built once by the host, then shared read-only across matching calls.

use std::collections::HashMap;

use log::{debug, info};

use crate::phonetic_encoder::{PhoneticCode, PhoneticEncoder};

/// A known custom word and its phonetic codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub code: PhoneticCode,
}

/// Immutable mapping from custom word to phonetic code, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    entries: Vec<VocabularyEntry>,
    /// word -> position in `entries`
    positions: HashMap<String, usize>,
}

impl VocabularyIndex {
    /// Encode every word of the list with the default encoder.
    ///
    /// A repeated word keeps the position of its first occurrence and takes the
    /// code of its last one. Blank words are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(words, &PhoneticEncoder::new())
    }

    /// Like `build`, with the caller's encoder. Use the same encoder settings
    /// the matcher runs with, or codes will not line up.
    pub fn build_with<I, S>(words: I, encoder: &PhoneticEncoder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words.into_iter().filter_map(|word| {
            let word = word.as_ref();
            if word.trim().is_empty() {
                debug!("[VocabularyIndex] Skipping blank vocabulary entry");
                return None;
            }
            Some(VocabularyEntry {
                word: word.to_string(),
                code: encoder.encode(word),
            })
        });
        Self::from_entries(entries)
    }

    /// Index precomputed entries. Duplicates follow the same rule as `build`.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VocabularyEntry>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.word, entry.code);
        }

        info!("[VocabularyIndex] Indexed {} custom words.", index.len());
        index
    }

    fn insert(&mut self, word: String, code: PhoneticCode) {
        match self.positions.get(&word) {
            Some(&position) => {
                debug!("[VocabularyIndex] Duplicate word '{}', replacing its code", word);
                self.entries[position].code = code;
            }
            None => {
                self.positions.insert(word.clone(), self.entries.len());
                self.entries.push(VocabularyEntry { word, code });
            }
        }
    }

    /// All entries in the order the words were first seen.
    pub fn lookup_all(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<&VocabularyEntry> {
        self.positions.get(word).map(|&position| &self.entries[position])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
