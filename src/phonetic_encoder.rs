// src/phonetic_encoder.rs
//
// Double Metaphone encoding of single words and multi-word spans.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::warn;
use rphonetic::{DoubleMetaphone, Encoder};

/// Primary and secondary phonetic codes for a token.
///
/// An empty `secondary` means the encoder saw no pronunciation ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PhoneticCode {
    pub primary: String,
    pub secondary: String,
}

impl PhoneticCode {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        let primary = primary.into();
        let mut secondary = secondary.into();
        if secondary == primary {
            secondary.clear();
        }
        Self { primary, secondary }
    }

    pub fn has_secondary(&self) -> bool {
        !self.secondary.is_empty()
    }

    /// True when the encoder produced nothing usable for this token.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The non-empty codes, primary first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|code| !code.is_empty())
    }

    /// Whether any non-empty code of `self` equals any non-empty code of `other`.
    pub fn shares_code_with(&self, other: &PhoneticCode) -> bool {
        self.codes().any(|code| other.codes().any(|theirs| theirs == code))
    }
}

impl fmt::Display for PhoneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.primary, self.secondary)
    }
}

/// Longest code the encoder emits. Long enough that no realistic word or
/// two-word span is truncated.
pub const DEFAULT_MAX_CODE_LENGTH: usize = 64;

/// Stateless wrapper around the Double Metaphone encoder.
pub struct PhoneticEncoder {
    inner: DoubleMetaphone,
}

impl Default for PhoneticEncoder {
    fn default() -> Self {
        Self::with_max_code_length(DEFAULT_MAX_CODE_LENGTH)
    }
}

impl PhoneticEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes longer than `max_code_length` are truncated. Matching compares
    /// truncated codes, so small caps make long words collide.
    pub fn with_max_code_length(max_code_length: usize) -> Self {
        Self {
            inner: DoubleMetaphone::new(max_code_length.max(1)),
        }
    }

    /// Encode a word or a space-joined span.
    ///
    /// Tokens the encoder cannot handle produce an empty code instead of failing.
    /// The panic itself is still reported by the process panic hook, which
    /// belongs to the host application.
    pub fn encode(&self, token: &str) -> PhoneticCode {
        if token.trim().is_empty() {
            return PhoneticCode::default();
        }

        // DoubleMetaphone indexes into its input and can panic on unusual tokens
        let encoded = panic::catch_unwind(AssertUnwindSafe(|| {
            (self.inner.encode(token), self.inner.encode_alternate(token))
        }));

        match encoded {
            Ok((primary, alternate)) => PhoneticCode::new(primary, alternate),
            Err(_) => {
                warn!("[PhoneticEncoder] DoubleMetaphone panicked on token {:?}", token);
                PhoneticCode::default()
            }
        }
    }
}
