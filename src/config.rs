use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use log::{info, warn};

use crate::candidates::BigramBounds;
use crate::error::{Result, SoundalikeError};
use crate::fuzzy_scorer::FuzzyThresholds;
use crate::phonetic_encoder::{PhoneticEncoder, DEFAULT_MAX_CODE_LENGTH};
use crate::prefix_verifier::DEFAULT_MIN_PREFIX_CHARS;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatcherSettings {
    #[serde(default = "default_bigram_min_chars")]
    pub bigram_min_chars: usize,
    #[serde(default = "default_bigram_max_chars")]
    pub bigram_max_chars: usize,
    #[serde(default = "default_min_prefix_chars")]
    pub min_prefix_chars: usize,
    #[serde(default = "default_max_code_length")]
    pub max_code_length: usize,
    #[serde(default = "default_diagnostics")]
    pub diagnostics: bool,
    #[serde(default)]
    pub vocabulary_path: Option<PathBuf>,
    // Tables last so the TOML output stays valid
    #[serde(default = "default_thresholds")]
    pub thresholds: FuzzyThresholds,
}

fn default_thresholds() -> FuzzyThresholds {
    FuzzyThresholds::default()
}

fn default_bigram_min_chars() -> usize {
    4
}

fn default_bigram_max_chars() -> usize {
    16
}

fn default_min_prefix_chars() -> usize {
    DEFAULT_MIN_PREFIX_CHARS
}

fn default_max_code_length() -> usize {
    DEFAULT_MAX_CODE_LENGTH
}

fn default_diagnostics() -> bool {
    false // Trace output is opt-in
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            bigram_min_chars: default_bigram_min_chars(),
            bigram_max_chars: default_bigram_max_chars(),
            min_prefix_chars: default_min_prefix_chars(),
            max_code_length: default_max_code_length(),
            diagnostics: default_diagnostics(),
            vocabulary_path: None,
            thresholds: default_thresholds(),
        }
    }
}

// Helper function to get project directories
pub(crate) fn get_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "soundalike", "Soundalike")
}

impl MatcherSettings {
    pub fn bigram_bounds(&self) -> BigramBounds {
        BigramBounds {
            min_chars: self.bigram_min_chars,
            max_chars: self.bigram_max_chars,
        }
    }

    /// Encoder configured with `max_code_length`.
    pub fn encoder(&self) -> PhoneticEncoder {
        PhoneticEncoder::with_max_code_length(self.max_code_length)
    }

    /// `<platform config dir>/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        get_project_dirs()
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(SoundalikeError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| SoundalikeError::io(path, e))?;
        let settings = toml::from_str::<MatcherSettings>(&contents).map_err(|e| {
            SoundalikeError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        info!("[Config] Settings loaded from: {}", path.display());
        Ok(settings)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(SoundalikeError::Io { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!("[Config] Config file '{}' not found. Using defaults.", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| SoundalikeError::io(dir, e))?;
        }

        let config_content = toml::to_string_pretty(self)?;
        fs::write(path, config_content).map_err(|e| SoundalikeError::io(path, e))?;

        info!("[Config] Settings saved to: {}", path.display());
        Ok(())
    }
}
