//! Dictionary lookup — the spelling check's reference word list.
//!
//! Loaded once at startup and shared read-only across requests via
//! `Arc<dyn Dictionary>` in `AppState`. The default backend is a flat word
//! list, either bundled into the binary or loaded from `DICTIONARY_PATH`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

const BUNDLED_WORD_LIST: &str = include_str!("../../assets/dictionary.txt");

/// The dictionary lookup trait: given candidate words, return the subset the
/// dictionary does not recognize.
pub trait Dictionary: Send + Sync {
    fn unknown(&self, words: &[&str]) -> HashSet<String>;
}

/// Flat word-list dictionary. Lookup is case-insensitive; entries are stored
/// lower-cased.
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// The word list compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            words: parse_word_list(BUNDLED_WORD_LIST),
        }
    }

    /// Loads a word list from disk: one word per line, `#` lines ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
        Ok(Self {
            words: parse_word_list(&contents),
        })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn unknown(&self, words: &[&str]) -> HashSet<String> {
        words
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| !self.words.contains(w))
            .collect()
    }
}

fn parse_word_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
