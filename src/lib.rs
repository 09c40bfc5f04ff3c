//! Flags custom vocabulary words that a speech-to-text engine likely misheard.
//!
//! Sentences are split into single-word and two-word spans, each span is
//! encoded with Double Metaphone, and the codes are compared to the custom
//! word list by edit distance. A second pass keeps only words whose leading
//! sound actually starts a word of the sentence.
//!
//! ```no_run
//! use soundalike::{MatcherSettings, PhoneticMatcher, VocabularyIndex};
//!
//! let index = VocabularyIndex::build(["yurii", "ramoan"]);
//! let matcher = PhoneticMatcher::new(index, MatcherSettings::default());
//! let words = matcher.filtered_matches("yuri will help raymond");
//! assert!(words.contains(&"yurii".to_string()));
//! ```

pub mod candidates;
pub mod config;
pub mod error;
pub mod fuzzy_scorer;
pub mod matcher;
pub mod phonetic_encoder;
pub mod prefix_verifier;
pub mod stop_words;
pub mod timing;
pub mod vocabulary;
pub mod vocabulary_source;

pub use candidates::{BigramBounds, Candidate, CandidateExtractor};
pub use config::MatcherSettings;
pub use error::{Result, SoundalikeError};
pub use fuzzy_scorer::{BestScores, FuzzyScorer, FuzzyThresholds, ScoredMatch, ThresholdTier};
pub use matcher::{filtered_matches, find_matches, LogObserver, MatchObserver, NoopObserver, PhoneticMatcher};
pub use phonetic_encoder::{PhoneticCode, PhoneticEncoder, DEFAULT_MAX_CODE_LENGTH};
pub use prefix_verifier::PrefixVerifier;
pub use timing::TimingHelper;
pub use vocabulary::{VocabularyEntry, VocabularyIndex};
