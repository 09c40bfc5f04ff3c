// src/matcher.rs
//
// End-to-end matching: extract candidates, score them against the vocabulary,
// then verify leading sounds. Diagnostics go through an injected observer so
// the pipeline itself stays free of side effects.

use std::sync::Arc;

use log::debug;

use crate::candidates::{BigramBounds, Candidate, CandidateExtractor};
use crate::config::MatcherSettings;
use crate::fuzzy_scorer::{BestScores, FuzzyScorer, ScoredMatch};
use crate::phonetic_encoder::PhoneticEncoder;
use crate::prefix_verifier::{PrefixVerifier, DEFAULT_MIN_PREFIX_CHARS};
use crate::vocabulary::VocabularyIndex;

/// Hooks for tracing a matching run. Every hook defaults to doing nothing.
pub trait MatchObserver: Send + Sync {
    fn candidates(&self, _sentence: &str, _candidates: &[Candidate]) {}

    fn scores(&self, _scores: &BestScores) {}

    fn verified(&self, _before: &[String], _after: &[String]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Writes each stage to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn candidates(&self, sentence: &str, candidates: &[Candidate]) {
        debug!(
            "[PhoneticMatcher] {} candidate spans for '{}':",
            candidates.len(),
            sentence
        );
        for candidate in candidates {
            debug!("[PhoneticMatcher]   {}: {}", candidate.text, candidate.code);
        }
    }

    fn scores(&self, scores: &BestScores) {
        let rendered: Vec<String> = scores
            .iter()
            .map(|m| format!("{}={}", m.word, m.score))
            .collect();
        debug!("[PhoneticMatcher] Scores: {{{}}}", rendered.join(", "));
    }

    fn verified(&self, before: &[String], after: &[String]) {
        debug!("[PhoneticMatcher] Before verification: {:?}", before);
        debug!("[PhoneticMatcher] After verification: {:?}", after);
    }
}

/// A vocabulary index plus the settings used to match sentences against it.
///
/// Holds no mutable state, so one matcher can serve many threads.
pub struct PhoneticMatcher {
    index: VocabularyIndex,
    settings: MatcherSettings,
    encoder: PhoneticEncoder,
    scorer: FuzzyScorer,
    observer: Arc<dyn MatchObserver>,
}

impl PhoneticMatcher {
    /// `index` should be built with `settings.encoder()` so both sides share
    /// the same code length.
    pub fn new(index: VocabularyIndex, settings: MatcherSettings) -> Self {
        let observer: Arc<dyn MatchObserver> = if settings.diagnostics {
            Arc::new(LogObserver)
        } else {
            Arc::new(NoopObserver)
        };
        let scorer = FuzzyScorer::new(settings.thresholds.clone());
        let encoder = settings.encoder();

        Self {
            index,
            settings,
            encoder,
            scorer,
            observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn index(&self) -> &VocabularyIndex {
        &self.index
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    /// Vocabulary words close to some span of `sentence`, best first.
    pub fn scored_matches(&self, sentence: &str, fuzzy: bool) -> Vec<ScoredMatch> {
        if self.index.is_empty() {
            return Vec::new();
        }

        let extractor = CandidateExtractor::new(&self.encoder, self.settings.bigram_bounds());
        let candidates = extractor.extract(sentence);
        self.observer.candidates(sentence, &candidates);

        let scores = self.scorer.score(self.index.lookup_all(), &candidates, fuzzy);
        self.observer.scores(&scores);

        scores.ranked()
    }

    /// Ranked words from the scoring pass alone.
    pub fn find_matches(&self, sentence: &str, fuzzy: bool) -> Vec<String> {
        self.scored_matches(sentence, fuzzy)
            .into_iter()
            .map(|m| m.word)
            .collect()
    }

    /// Fuzzy matches that also pass prefix verification.
    pub fn filtered_matches(&self, sentence: &str) -> Vec<String> {
        let matches = self.find_matches(sentence, true);
        if matches.is_empty() {
            return matches;
        }

        let verifier = PrefixVerifier::new(&self.encoder, self.settings.min_prefix_chars);
        let verified = verifier.verify(&matches, sentence);
        self.observer.verified(&matches, &verified);
        verified
    }
}

/// Scoring pass with default settings against a borrowed index.
pub fn find_matches(index: &VocabularyIndex, sentence: &str, fuzzy: bool) -> Vec<String> {
    let encoder = PhoneticEncoder::new();
    let candidates = CandidateExtractor::new(&encoder, BigramBounds::default()).extract(sentence);
    FuzzyScorer::default()
        .score(index.lookup_all(), &candidates, fuzzy)
        .ranked()
        .into_iter()
        .map(|m| m.word)
        .collect()
}

/// Fuzzy scoring plus prefix verification with default settings.
pub fn filtered_matches(index: &VocabularyIndex, sentence: &str) -> Vec<String> {
    let matches = find_matches(index, sentence, true);
    let encoder = PhoneticEncoder::new();
    PrefixVerifier::new(&encoder, DEFAULT_MIN_PREFIX_CHARS).verify(&matches, sentence)
}
