// src/fuzzy_scorer.rs
//
// Scores vocabulary entries against candidate spans by edit distance between
// phonetic codes. The allowed distance grows with the candidate code length.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::candidates::Candidate;
use crate::phonetic_encoder::PhoneticCode;
use crate::vocabulary::VocabularyEntry;

/// One step of the adaptive threshold: codes longer than
/// `min_code_len_exclusive` may differ by up to `max_distance` edits.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdTier {
    pub min_code_len_exclusive: usize,
    pub max_distance: usize,
}

/// Maximum accepted edit distance as a function of candidate code length.
///
/// Tiers are applied in order and a later qualifying tier overrides an earlier
/// one, so keep them sorted by `min_code_len_exclusive`. The defaults are tuned
/// for Double Metaphone code lengths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FuzzyThresholds {
    #[serde(default = "default_base_distance")]
    pub base_distance: usize,
    #[serde(default = "default_tiers")]
    pub tiers: Vec<ThresholdTier>,
}

fn default_base_distance() -> usize {
    1
}

fn default_tiers() -> Vec<ThresholdTier> {
    vec![
        ThresholdTier { min_code_len_exclusive: 3, max_distance: 2 },
        ThresholdTier { min_code_len_exclusive: 5, max_distance: 3 },
    ]
}

impl Default for FuzzyThresholds {
    fn default() -> Self {
        Self {
            base_distance: default_base_distance(),
            tiers: default_tiers(),
        }
    }
}

impl FuzzyThresholds {
    /// Allowed distance for a candidate, judged on its longer code.
    pub fn max_distance_for(&self, code: &PhoneticCode) -> usize {
        let code_len = code
            .primary
            .chars()
            .count()
            .max(code.secondary.chars().count());

        self.tiers
            .iter()
            .filter(|tier| code_len > tier.min_code_len_exclusive)
            .fold(self.base_distance, |_, tier| tier.max_distance)
    }
}

/// A vocabulary word with its best score for one sentence. Lower is closer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub word: String,
    pub score: usize,
}

/// Best score per vocabulary word, remembering first-insertion order for ties.
#[derive(Debug, Clone, Default)]
pub struct BestScores {
    matches: Vec<ScoredMatch>,
    positions: HashMap<String, usize>,
}

impl BestScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `score` if the word is new or the score beats the current best.
    pub fn record(&mut self, word: &str, score: usize) {
        match self.positions.get(word) {
            Some(&position) => {
                let current = &mut self.matches[position];
                if score < current.score {
                    current.score = score;
                }
            }
            None => {
                self.positions.insert(word.to_string(), self.matches.len());
                self.matches.push(ScoredMatch {
                    word: word.to_string(),
                    score,
                });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.positions.get(word).map(|&position| self.matches[position].score)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredMatch> {
        self.matches.iter()
    }

    /// Ascending by score; equal scores keep first-insertion order.
    pub fn ranked(&self) -> Vec<ScoredMatch> {
        let mut ranked = self.matches.clone();
        // sort_by_key is stable
        ranked.sort_by_key(|m| m.score);
        ranked
    }
}

#[derive(Debug, Clone, Default)]
pub struct FuzzyScorer {
    thresholds: FuzzyThresholds,
}

impl FuzzyScorer {
    pub fn new(thresholds: FuzzyThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &FuzzyThresholds {
        &self.thresholds
    }

    /// Score every vocabulary entry against every candidate.
    ///
    /// Exact mode accepts only equal primary codes, with score 0. Fuzzy mode
    /// accepts any pair within the candidate's adaptive threshold. Candidates
    /// with no phonetic code never match.
    pub fn score(
        &self,
        vocabulary: &[VocabularyEntry],
        candidates: &[Candidate],
        fuzzy: bool,
    ) -> BestScores {
        let mut best = BestScores::new();

        for entry in vocabulary {
            for candidate in candidates.iter().filter(|c| !c.code.is_empty()) {
                if fuzzy {
                    let max_distance = self.thresholds.max_distance_for(&candidate.code);
                    let distance = code_distance(&entry.code, &candidate.code);
                    if distance <= max_distance {
                        best.record(&entry.word, distance);
                    }
                } else if entry.code.primary == candidate.code.primary {
                    best.record(&entry.word, 0);
                    break;
                }
            }
        }

        best
    }
}

/// Edit distance between a vocabulary code and a candidate code.
///
/// When the vocabulary word has an alternate pronunciation, primaries and
/// secondaries are compared pairwise and the closer pair wins.
pub fn code_distance(word: &PhoneticCode, candidate: &PhoneticCode) -> usize {
    let primary = levenshtein(&word.primary, &candidate.primary);
    if word.has_secondary() {
        primary.min(levenshtein(&word.secondary, &candidate.secondary))
    } else {
        primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, primary: &str, secondary: &str) -> VocabularyEntry {
        VocabularyEntry {
            word: word.to_string(),
            code: PhoneticCode::new(primary, secondary),
        }
    }

    fn candidate(text: &str, primary: &str, secondary: &str) -> Candidate {
        Candidate {
            text: text.to_string(),
            code: PhoneticCode::new(primary, secondary),
        }
    }

    #[test]
    fn test_threshold_tiers() {
        let thresholds = FuzzyThresholds::default();
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("AR", "")), 1);
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("RMN", "")), 1);
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("RMNT", "")), 2);
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("KRPNT", "")), 2);
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("KRPNTS", "")), 3);

        // The longer of the two codes decides
        assert_eq!(thresholds.max_distance_for(&PhoneticCode::new("AL", "FLMN")), 2);
    }

    #[test]
    fn test_longer_codes_never_tighten() {
        let thresholds = FuzzyThresholds::default();
        let mut previous = 0;
        for len in 0..10 {
            let allowed = thresholds.max_distance_for(&PhoneticCode::new("K".repeat(len), ""));
            assert!(allowed >= previous, "threshold dropped at length {}", len);
            previous = allowed;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = FuzzyThresholds { base_distance: 0, tiers: vec![] };
        let scorer = FuzzyScorer::new(thresholds);
        let vocab = vec![entry("raymond", "RMNT", "")];

        let near = vec![candidate("raymon", "RMN", "")];
        assert!(scorer.score(&vocab, &near, true).is_empty());

        let same = vec![candidate("raymond", "RMNT", "")];
        assert_eq!(scorer.score(&vocab, &same, true).get("raymond"), Some(0));
    }

    #[test]
    fn test_fuzzy_accepts_within_threshold() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("ramoan", "RMN", "")];
        let candidates = vec![candidate("raymond", "RMNT", "")];

        let scores = scorer.score(&vocab, &candidates, true);
        assert_eq!(scores.get("ramoan"), Some(1));
    }

    #[test]
    fn test_fuzzy_rejects_beyond_threshold() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("carbonite", "KRPN", "")];
        let candidates = vec![candidate("plain", "PLN", ""), candidate("test", "TST", "")];

        assert!(scorer.score(&vocab, &candidates, true).is_empty());
    }

    #[test]
    fn test_secondary_codes_compared_pairwise() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("schmidt", "XMT", "SMT")];
        let candidates = vec![candidate("smit", "SMT", "XMT")];

        // primary vs primary and secondary vs secondary are both 1
        assert_eq!(scorer.score(&vocab, &candidates, true).get("schmidt"), Some(1));

        let candidates = vec![candidate("smith", "SM0", "SMT")];
        assert_eq!(scorer.score(&vocab, &candidates, true).get("schmidt"), Some(0));
    }

    #[test]
    fn test_best_score_wins() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("yurii", "AR", "")];
        let candidates = vec![
            candidate("yuri will", "ARL", ""),
            candidate("yuri", "AR", ""),
            candidate("will", "AL", "FL"),
        ];

        let scores = scorer.score(&vocab, &candidates, true);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("yurii"), Some(0));
    }

    #[test]
    fn test_exact_mode() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("ramoan", "RMN", ""), entry("raymond", "RMNT", "")];
        let candidates = vec![candidate("raymond", "RMNT", ""), candidate("raymond", "RMNT", "")];

        let scores = scorer.score(&vocab, &candidates, false);
        assert!(!scores.contains("ramoan"));
        assert_eq!(scores.get("raymond"), Some(0));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_exact_match_scores_zero_in_fuzzy_mode() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("kaan", "KN", "")];
        let candidates = vec![candidate("con", "KN", "")];
        assert_eq!(scorer.score(&vocab, &candidates, true).get("kaan"), Some(0));
    }

    #[test]
    fn test_empty_candidate_codes_never_match() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![entry("a", "A", "")];
        let candidates = vec![candidate("!!!", "", "")];

        assert!(scorer.score(&vocab, &candidates, true).is_empty());
        assert!(scorer.score(&vocab, &candidates, false).is_empty());
    }

    #[test]
    fn test_ranking_ties_follow_vocabulary_order() {
        let scorer = FuzzyScorer::default();
        let vocab = vec![
            entry("beta", "PT", ""),
            entry("alpha", "ALF", ""),
            entry("gamma", "KM", ""),
        ];
        let candidates = vec![
            candidate("pet", "PT", ""),
            candidate("alfa", "ALF", ""),
            candidate("kim", "KMM", ""),
        ];

        let ranked = scorer.score(&vocab, &candidates, true).ranked();
        let words: Vec<&str> = ranked.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["beta", "alpha", "gamma"]);
        assert_eq!(ranked.iter().map(|m| m.score).collect::<Vec<_>>(), vec![0, 0, 1]);
    }

    #[test]
    fn test_best_scores_record() {
        let mut best = BestScores::new();
        best.record("kaan", 2);
        best.record("cursor", 1);
        best.record("kaan", 3);
        assert_eq!(best.get("kaan"), Some(2));
        best.record("kaan", 0);
        assert_eq!(best.get("kaan"), Some(0));

        let order: Vec<&str> = best.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(order, vec!["kaan", "cursor"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let scorer = FuzzyScorer::default();
        let candidates = vec![candidate("raymond", "RMNT", "")];
        assert!(scorer.score(&[], &candidates, true).is_empty());
    }
}
