//! Letter pool for the sub-multiset check
//!
//! A candidate is playable only if every letter it uses, counted with
//! repetition, is available in the root word.

use rustc_hash::FxHashMap;

/// Multiset of the letters in a root word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
}

impl LetterPool {
    /// Build a pool from the letters of `word`
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// How many times `letter` is available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    /// True if the pool holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Walks the word and removes one matching occurrence per letter from a
    /// working copy; fails as soon as a letter has nothing left.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("worms"));
    /// assert!(!pool.can_spell("lull")); // only one 'l'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();

        for letter in word.chars() {
            match remaining.get_mut(&letter) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }

        true
    }
}
