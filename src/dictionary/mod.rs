//! Dictionary lookups
//!
//! The engine never judges spelling itself; it asks a [`DictionaryChecker`].
//! Implementations can be backed by embedded word lists, dictionary files, or
//! any other lookup that answers yes or no.

mod wordlist;

pub use wordlist::WordListDictionary;

/// Language used when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Decides whether a word is a real word in a language
pub trait DictionaryChecker {
    /// Check if `word` is a correctly spelled word in `language`
    ///
    /// Must be a pure predicate: no side effects, same answer for the same input.
    fn is_real_word(&self, word: &str, language: &str) -> bool;

    /// Check `word` against the default language
    fn is_real(&self, word: &str) -> bool {
        self.is_real_word(word, DEFAULT_LANGUAGE)
    }
}

impl<D: DictionaryChecker + ?Sized> DictionaryChecker for &D {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}
