// src/vocabulary_source.rs
//
// Reads and writes the custom word list. Plain files hold one word per line;
// a `.json` file holds an array of strings.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::get_project_dirs;
use crate::error::{Result, SoundalikeError};

/// `<platform config dir>/custom_words.txt`
pub fn default_vocabulary_path() -> Result<PathBuf> {
    get_project_dirs()
        .map(|dirs| dirs.config_dir().join("custom_words.txt"))
        .ok_or(SoundalikeError::NoConfigDir)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

/// Trimmed words in file order. Blank lines and `#` comments are skipped.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|e| SoundalikeError::io(path, e))?;

    let words = if is_json(path) {
        if data.trim().is_empty() {
            Vec::new() // Handle empty file case
        } else {
            let raw: Vec<String> = serde_json::from_str(&data).map_err(|e| {
                SoundalikeError::VocabularyJson {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
            raw.into_iter()
                .map(|word| word.trim().to_string())
                .filter(|word| !word.is_empty())
                .collect()
        }
    } else {
        parse_words(&data)
    };

    info!("[VocabularySource] Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// A missing file reads as an empty list.
fn load_words_or_empty(path: &Path) -> Result<Vec<String>> {
    if path.exists() {
        load_words(path)
    } else {
        Ok(Vec::new())
    }
}

pub fn save_words(path: &Path, words: &[String]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| SoundalikeError::io(dir, e))?;
    }

    let data = if is_json(path) {
        serde_json::to_string_pretty(words)?
    } else {
        let mut data = words.join("\n");
        if !data.is_empty() {
            data.push('\n');
        }
        data
    };

    fs::write(path, data).map_err(|e| SoundalikeError::io(path, e))?;
    info!("[VocabularySource] Saved {} words to {}", words.len(), path.display());
    Ok(())
}

/// Append a word unless a case-insensitive match is already listed.
pub fn add_word(path: &Path, word: &str) -> Result<Vec<String>> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(SoundalikeError::EmptyWord);
    }

    let mut words = load_words_or_empty(path)?;
    let lowered = trimmed.to_lowercase();
    if words.iter().any(|w| w.to_lowercase() == lowered) {
        debug!("[VocabularySource] Word '{}' already exists.", trimmed);
        return Ok(words);
    }

    words.push(trimmed.to_string());
    save_words(path, &words)?;
    Ok(words)
}

/// Drop every case-insensitive match of `word`.
pub fn remove_word(path: &Path, word: &str) -> Result<Vec<String>> {
    let lowered = word.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(SoundalikeError::EmptyWord);
    }

    let mut words = load_words_or_empty(path)?;
    let initial_len = words.len();
    words.retain(|w| w.to_lowercase() != lowered);

    if words.len() < initial_len {
        save_words(path, &words)?;
        info!("[VocabularySource] Word '{}' removed.", lowered);
    } else {
        debug!("[VocabularySource] Word '{}' not found for removal.", lowered);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let contents = "yurii\n  ramoan  \n\n# people\ncarbonite\r\n";
        assert_eq!(parse_words(contents), vec!["yurii", "ramoan", "carbonite"]);
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn test_load_line_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "Kaan\nPanjeet\n\nSupabase\n").unwrap();

        assert_eq!(load_words(&path).unwrap(), vec!["Kaan", "Panjeet", "Supabase"]);
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"["cursor", " supabase ", ""]"#).unwrap();
        assert_eq!(load_words(&path).unwrap(), vec!["cursor", "supabase"]);

        fs::write(&path, "   ").unwrap();
        assert!(load_words(&path).unwrap().is_empty());

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_words(&path), Err(SoundalikeError::VocabularyJson { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(load_words(&path), Err(SoundalikeError::Io { .. })));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let words = vec!["yurii".to_string(), "ramoan".to_string()];

        for name in ["nested/words.txt", "words.json"] {
            let path = dir.path().join(name);
            save_words(&path, &words).unwrap();
            assert_eq!(load_words(&path).unwrap(), words);
        }
    }

    #[test]
    fn test_add_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");

        assert_eq!(add_word(&path, " Yurii ").unwrap(), vec!["Yurii"]);
        assert_eq!(add_word(&path, "yurii").unwrap(), vec!["Yurii"]);
        assert_eq!(add_word(&path, "ramoan").unwrap(), vec!["Yurii", "ramoan"]);
        assert!(matches!(add_word(&path, "  "), Err(SoundalikeError::EmptyWord)));

        assert_eq!(remove_word(&path, "YURII").unwrap(), vec!["ramoan"]);
        assert_eq!(remove_word(&path, "carbonite").unwrap(), vec!["ramoan"]);
        assert_eq!(load_words(&path).unwrap(), vec!["ramoan"]);
    }
}
