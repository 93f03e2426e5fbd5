//! Extra weak-word list
//!
//! Lets an application extend the built-in common pattern tables with its own
//! words (product names, company names, ...). The list is owned by an
//! [`Evaluator`](crate::Evaluator), never stored globally.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the word list path.
pub const WORDLIST_PATH_ENV: &str = "PWD_SCORE_WORDLIST_PATH";

const DEFAULT_WORDLIST_PATH: &str = "./assets/weak-words.txt";

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Case-insensitive set of weak substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<String>,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_SCORE_WORDLIST_PATH`
/// 2. Default path `./assets/weak-words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_PATH))
}

impl WordList {
    /// Builds a list from in-memory words. Entries are trimmed and lowercased,
    /// blank ones are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads the list from the path returned by [`get_wordlist_path`].
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load() -> Result<Self, WordListError> {
        Self::from_path(get_wordlist_path())
    }

    /// Loads a newline-separated word list from a specific file.
    ///
    /// # Errors
    ///
    /// Same as [`WordList::load`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
            return Err(WordListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: Empty file {:?}", path);
            return Err(WordListError::EmptyFile);
        }

        let list = Self::from_words(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Word list loaded: {} words from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if `lowered` contains any word of the list.
    ///
    /// `lowered` must already be ASCII-lowercased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.words.iter().any(|w| lowered.contains(w.as_str()))
    }
}
