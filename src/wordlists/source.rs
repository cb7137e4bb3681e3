//! Root word sources
//!
//! A round starts by asking a [`RootWordSource`] for a word. Sources may run
//! dry (an empty list); the engine then falls back to its default root word.

use super::{START_WORDS, loader::words_from_slice};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Supplies root words for new rounds
pub trait RootWordSource {
    /// Pick the root word for the next round, or `None` if there is none to give
    fn next_root_word(&mut self) -> Option<String>;
}

/// Enum wrapper for the built-in sources
///
/// Allows runtime selection of the source while keeping static dispatch.
pub enum WordSource {
    /// Uniform random choice from a word list
    Random(RandomWordList),
    /// The same word every round
    Fixed(FixedWord),
}

impl RootWordSource for WordSource {
    fn next_root_word(&mut self) -> Option<String> {
        match self {
            Self::Random(s) => s.next_root_word(),
            Self::Fixed(s) => s.next_root_word(),
        }
    }
}

/// Random root words drawn from a list
pub struct RandomWordList {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWordList {
    /// Draw from `words` using an OS-seeded generator
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw from `words` with a fixed seed, for reproducible sessions
    #[must_use]
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw from the embedded start word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(START_WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootWordSource for RandomWordList {
    fn next_root_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

/// Always supplies the same root word
pub struct FixedWord(pub String);

impl RootWordSource for FixedWord {
    fn next_root_word(&mut self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn random_list_picks_from_list() {
        let list = words(&["silkworm", "birthday", "absolute"]);
        let mut source = RandomWordList::with_seed(list.clone(), 7);

        for _ in 0..20 {
            let word = source.next_root_word().unwrap();
            assert!(list.contains(&word));
        }
    }

    #[test]
    fn random_list_empty_yields_none() {
        let mut source = RandomWordList::with_seed(Vec::new(), 7);
        assert_eq!(source.next_root_word(), None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let list = words(&["silkworm", "birthday", "absolute", "carnival"]);
        let mut a = RandomWordList::with_seed(list.clone(), 42);
        let mut b = RandomWordList::with_seed(list, 42);

        for _ in 0..10 {
            assert_eq!(a.next_root_word(), b.next_root_word());
        }
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let mut source = RandomWordList::embedded();
        assert_eq!(source.words().len(), START_WORDS.len());
        assert!(source.next_root_word().is_some());
    }

    #[test]
    fn fixed_word_repeats() {
        let mut source = FixedWord("birthday".to_string());
        assert_eq!(source.next_root_word().as_deref(), Some("birthday"));
        assert_eq!(source.next_root_word().as_deref(), Some("birthday"));
    }

    #[test]
    fn word_source_dispatches() {
        let mut source = WordSource::Fixed(FixedWord("absolute".to_string()));
        assert_eq!(source.next_root_word().as_deref(), Some("absolute"));

        let mut source = WordSource::Random(RandomWordList::with_seed(Vec::new(), 1));
        assert_eq!(source.next_root_word(), None);
    }
}
