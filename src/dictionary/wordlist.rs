//! Word list backed dictionary

use super::{DEFAULT_LANGUAGE, DictionaryChecker};
use crate::core::normalize;
use crate::error::Result;
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// A dictionary for a single language, held as a set of lowercase words
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Create an English dictionary from any iterator of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            words,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(DICTIONARY.iter().copied())
    }

    /// Load a dictionary from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(words))
    }

    /// Set the language this dictionary answers for
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Iterate over all words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryChecker for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        if !language.eq_ignore_ascii_case(&self.language) {
            return false;
        }
        self.words.contains(&normalize(word))
    }
}
