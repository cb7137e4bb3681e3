//! Game configuration
//!
//! Collects where word lists come from and how root words are picked, then
//! assembles a ready-to-play engine.

use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
use crate::engine::GameEngine;
use crate::error::Result;
use crate::wordlists::{FixedWord, RandomWordList, START_WORDS, WordSource, loader};
use std::path::PathBuf;

/// Where a word list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// The list compiled into the binary
    Embedded,
    /// A newline-delimited file
    File(PathBuf),
}

impl ListSource {
    /// Parse a command line value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "embedded" {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Everything needed to build a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub start_words: ListSource,
    pub dictionary: ListSource,
    /// Seed for root word selection; random when absent
    pub seed: Option<u64>,
    /// Play this root word every round instead of drawing from the list
    pub root_word: Option<String>,
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: ListSource::Embedded,
            dictionary: ListSource::Embedded,
            seed: None,
            root_word: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary file cannot be read or is empty.
    pub fn load_dictionary(&self) -> Result<WordListDictionary> {
        let dictionary = match &self.dictionary {
            ListSource::Embedded => WordListDictionary::embedded(),
            ListSource::File(path) => WordListDictionary::from_file(path)?,
        };
        Ok(dictionary.with_language(self.language.clone()))
    }

    /// Build the configured root word source
    ///
    /// # Errors
    ///
    /// Returns an error if a start word file cannot be read or is empty.
    pub fn root_word_source(&self) -> Result<WordSource> {
        if let Some(word) = &self.root_word {
            return Ok(WordSource::Fixed(FixedWord(word.clone())));
        }

        let words = match &self.start_words {
            ListSource::Embedded => loader::words_from_slice(START_WORDS),
            ListSource::File(path) => loader::load_from_file(path)?,
        };

        let list = match self.seed {
            Some(seed) => RandomWordList::with_seed(words, seed),
            None => RandomWordList::new(words),
        };
        Ok(WordSource::Random(list))
    }

    /// Build an engine with its first round started
    ///
    /// # Errors
    ///
    /// Returns an error if any configured word list cannot be loaded.
    pub fn build_engine(&self) -> Result<GameEngine<WordListDictionary, WordSource>> {
        let dictionary = self.load_dictionary()?;
        tracing::info!(words = dictionary.len(), language = %self.language, "dictionary ready");

        let source = self.root_word_source()?;
        let mut engine = GameEngine::new(dictionary, source).with_language(self.language.clone());
        engine.start_new_round();
        Ok(engine)
    }
}
