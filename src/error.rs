// src/error.rs
//
// Errors for the fallible edges of the crate: vocabulary files, settings, timing.
// Matching itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundalikeError {
    #[error("failed to read or write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary JSON '{path}': {source}")]
    VocabularyJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to serialize vocabulary: {0}")]
    VocabularySerialize(#[from] serde_json::Error),

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("word cannot be empty")]
    EmptyWord,

    #[error("timing for '{0}' was never started or has already been stopped")]
    TimingNotStarted(String),
}

impl SoundalikeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SoundalikeError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SoundalikeError>;
