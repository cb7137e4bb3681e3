//! Word Scramble game engine
//!
//! Holds one session: the current root word, the words accepted this round,
//! and the round and total scores.

use super::{RoundState, SubmissionResult};
use crate::core::{LetterPool, normalize, score_for};
use crate::dictionary::{DEFAULT_LANGUAGE, DictionaryChecker};
use crate::wordlists::RootWordSource;

/// Root word used when the source has nothing to offer
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

type Observer = Box<dyn FnMut(&RoundState)>;

/// Validates and scores candidate words against a root word
///
/// Coordinates a [`DictionaryChecker`] for realness and a [`RootWordSource`]
/// for new rounds. Rejected submissions never change state.
///
/// # Examples
/// ```
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::engine::{GameEngine, SubmissionResult};
/// use word_scramble::wordlists::FixedWord;
///
/// let dictionary = WordListDictionary::new(["worms", "silkworm"]);
/// let mut engine = GameEngine::start(dictionary, FixedWord("silkworm".into()));
///
/// assert_eq!(engine.submit("Worms"), SubmissionResult::Accepted(6));
/// assert_eq!(engine.submit("worms"), SubmissionResult::AlreadyUsed);
/// assert_eq!(engine.submit("lull"), SubmissionResult::NotPossible);
/// assert_eq!(engine.total_score(), 6);
/// ```
pub struct GameEngine<D: DictionaryChecker, R: RootWordSource> {
    dictionary: D,
    source: R,
    language: String,
    root_word: String,
    letters: LetterPool,
    used_words: Vec<String>,
    round_score: u32,
    total_score: u32,
    round: u32,
    observers: Vec<Observer>,
}

impl<D: DictionaryChecker, R: RootWordSource> GameEngine<D, R> {
    /// Create an engine with no round in progress
    ///
    /// Call [`start_new_round`](Self::start_new_round) before submitting words.
    pub fn new(dictionary: D, source: R) -> Self {
        Self {
            dictionary,
            source,
            language: DEFAULT_LANGUAGE.to_string(),
            root_word: String::new(),
            letters: LetterPool::default(),
            used_words: Vec::new(),
            round_score: 0,
            total_score: 0,
            round: 0,
            observers: Vec::new(),
        }
    }

    /// Create an engine and start its first round
    pub fn start(dictionary: D, source: R) -> Self {
        let mut engine = Self::new(dictionary, source);
        engine.start_new_round();
        engine
    }

    /// Use `language` for dictionary lookups
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Register a callback run after every committed state change
    ///
    /// Fires when a round starts and when a word is accepted, never on a
    /// rejection.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&RoundState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Start a new round with a fresh root word
    ///
    /// Clears the used words and the round score. The total score carries over.
    pub fn start_new_round(&mut self) {
        let root_word = self
            .source
            .next_root_word()
            .map(|word| normalize(&word))
            .filter(|word| !word.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!(
                    fallback = DEFAULT_ROOT_WORD,
                    "root word source is empty, using fallback"
                );
                DEFAULT_ROOT_WORD.to_string()
            });

        self.letters = LetterPool::new(&root_word);
        self.root_word = root_word;
        self.used_words.clear();
        self.round_score = 0;
        self.round += 1;

        tracing::info!(round = self.round, root_word = %self.root_word, "started new round");
        self.notify();
    }

    /// Validate a candidate and score it if it is acceptable
    ///
    /// Checks run in order and stop at the first failure: empty input,
    /// originality, possibility, realness, and finally that the candidate is
    /// not the root word itself.
    pub fn submit(&mut self, candidate: &str) -> SubmissionResult {
        let word = normalize(candidate);
        let result = self.evaluate_normalized(&word);
        tracing::debug!(candidate = %word, %result, "submission");

        if let SubmissionResult::Accepted(points) = result {
            self.used_words.push(word);
            self.round_score += points;
            self.total_score += points;
            self.notify();
        }

        result
    }

    /// What [`submit`](Self::submit) would return, without changing anything
    #[must_use]
    pub fn evaluate(&self, candidate: &str) -> SubmissionResult {
        self.evaluate_normalized(&normalize(candidate))
    }

    fn evaluate_normalized(&self, word: &str) -> SubmissionResult {
        if word.is_empty() {
            return SubmissionResult::Ignored;
        }

        if !self.is_original(word) {
            return SubmissionResult::AlreadyUsed;
        }

        if !self.letters.can_spell(word) {
            return SubmissionResult::NotPossible;
        }

        if !self.dictionary.is_real_word(word, &self.language) {
            return SubmissionResult::NotReal;
        }

        if word == self.root_word {
            return SubmissionResult::IsRootWord;
        }

        SubmissionResult::Accepted(score_for(word))
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }

        let state = self.snapshot();
        for observer in &mut self.observers {
            observer(&state);
        }
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words in the order they were played
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Accepted words, most recent first
    pub fn used_words_recent_first(&self) -> impl Iterator<Item = &str> {
        self.used_words.iter().rev().map(String::as_str)
    }

    #[must_use]
    pub const fn round_score(&self) -> u32 {
        self.round_score
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Number of rounds started so far
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Copy of the current round state
    #[must_use]
    pub fn snapshot(&self) -> RoundState {
        RoundState {
            root_word: self.root_word.clone(),
            used_words: self.used_words.clone(),
            round_score: self.round_score,
            total_score: self.total_score,
            round: self.round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::wordlists::FixedWord;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct AcceptAll;

    impl DictionaryChecker for AcceptAll {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    struct NoWords;

    impl RootWordSource for NoWords {
        fn next_root_word(&mut self) -> Option<String> {
            None
        }
    }

    /// Hands out the given words in order, then runs dry
    struct Sequence(Vec<&'static str>);

    impl RootWordSource for Sequence {
        fn next_root_word(&mut self) -> Option<String> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0).to_string())
            }
        }
    }

    fn silkworm_engine() -> GameEngine<WordListDictionary, FixedWord> {
        let dictionary =
            WordListDictionary::new(["silk", "worm", "worms", "milk", "silkworm", "lull", "mi"]);
        GameEngine::start(dictionary, FixedWord("silkworm".to_string()))
    }

    #[test]
    fn new_engine_has_no_round() {
        let engine = GameEngine::new(AcceptAll, NoWords);
        assert_eq!(engine.root_word(), "");
        assert_eq!(engine.round(), 0);
        assert_eq!(engine.language(), "en");
    }

    #[test]
    fn start_uses_source_word() {
        let engine = GameEngine::start(AcceptAll, FixedWord("birthday".to_string()));
        assert_eq!(engine.root_word(), "birthday");
        assert_eq!(engine.round(), 1);
    }

    #[test]
    fn empty_source_falls_back_to_silkworm() {
        let engine = GameEngine::start(AcceptAll, NoWords);
        assert_eq!(engine.root_word(), DEFAULT_ROOT_WORD);
        assert_eq!(engine.root_word(), "silkworm");
    }

    #[test]
    fn blank_source_word_falls_back() {
        let engine = GameEngine::start(AcceptAll, FixedWord("   ".to_string()));
        assert_eq!(engine.root_word(), "silkworm");
    }

    #[test]
    fn source_word_is_normalized() {
        let engine = GameEngine::start(AcceptAll, FixedWord(" Birthday\n".to_string()));
        assert_eq!(engine.root_word(), "birthday");
    }

    #[test]
    fn accepts_worms() {
        let mut engine = silkworm_engine();
        assert_eq!(engine.submit("worms"), SubmissionResult::Accepted(6));
        assert_eq!(engine.used_words(), ["worms"]);
        assert_eq!(engine.round_score(), 6);
        assert_eq!(engine.total_score(), 6);
    }

    #[test]
    fn root_word_is_rejected() {
        let mut engine = silkworm_engine();
        assert_eq!(engine.submit("silkworm"), SubmissionResult::IsRootWord);
        assert_eq!(engine.submit("SILKWORM "), SubmissionResult::IsRootWord);
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.round_score(), 0);
    }

    #[test]
    fn lull_is_not_possible() {
        let mut engine = silkworm_engine();
        // Real word, but silkworm has only one 'l'
        assert_eq!(engine.submit("lull"), SubmissionResult::NotPossible);
    }

    #[test]
    fn repeat_in_other_case_is_already_used() {
        let mut engine = silkworm_engine();
        assert_eq!(engine.submit("worms"), SubmissionResult::Accepted(6));
        assert_eq!(engine.submit("Worms"), SubmissionResult::AlreadyUsed);
        assert_eq!(engine.submit("  WORMS  "), SubmissionResult::AlreadyUsed);
        assert_eq!(engine.used_words().len(), 1);
        assert_eq!(engine.round_score(), 6);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut engine = silkworm_engine();
        assert_eq!(engine.submit(""), SubmissionResult::Ignored);
        assert_eq!(engine.submit("   "), SubmissionResult::Ignored);
        assert_eq!(engine.submit("\n"), SubmissionResult::Ignored);
        assert_eq!(engine.snapshot().used_words.len(), 0);
    }

    #[test]
    fn unknown_word_is_not_real() {
        let mut engine = silkworm_engine();
        // Spellable from silkworm, but not in the dictionary
        assert_eq!(engine.submit("wilk"), SubmissionResult::NotReal);
    }

    #[test]
    fn checks_run_in_order() {
        let mut engine = silkworm_engine();
        engine.submit("silk");

        // Already used wins over everything else
        assert_eq!(engine.submit("silk"), SubmissionResult::AlreadyUsed);
        // Possibility is checked before realness
        assert_eq!(engine.submit("zzz"), SubmissionResult::NotPossible);
        // Realness is checked before the root word
        let mut strict = GameEngine::start(
            WordListDictionary::new(["worm"]),
            FixedWord("silkworm".to_string()),
        );
        assert_eq!(strict.submit("silkworm"), SubmissionResult::NotReal);
    }

    #[test]
    fn rejections_are_idempotent() {
        let mut engine = silkworm_engine();
        engine.submit("milk");
        let before = engine.snapshot();

        for candidate in ["lull", "wilk", "silkworm", "milk", "  "] {
            let first = engine.submit(candidate);
            let second = engine.submit(candidate);
            assert_eq!(first, second, "different result for {candidate:?}");
            assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn round_score_is_sum_of_used_words() {
        let mut engine = silkworm_engine();
        engine.submit("silk");
        engine.submit("worms");
        engine.submit("mi");

        let expected: u32 = engine.used_words().iter().map(|w| score_for(w)).sum();
        assert_eq!(engine.round_score(), expected);
        assert_eq!(engine.round_score(), 4 + 6 + 2);
    }

    #[test]
    fn accepted_words_fit_in_root_word() {
        let mut engine = GameEngine::start(AcceptAll, FixedWord("silkworm".to_string()));
        for candidate in ["silk", "lull", "worms", "mossy", "ilk", "skim", "mom"] {
            engine.submit(candidate);
        }

        let pool = LetterPool::new(engine.root_word());
        for word in engine.used_words() {
            assert!(pool.can_spell(word), "{word} does not fit");
            assert_ne!(word, engine.root_word());
        }
        assert_eq!(engine.used_words(), ["silk", "worms", "ilk", "skim"]);
    }

    #[test]
    fn new_round_keeps_total_score() {
        let mut engine = GameEngine::start(AcceptAll, Sequence(vec!["silkworm", "birthday"]));
        engine.submit("worms");
        engine.submit("silk");
        assert_eq!(engine.total_score(), 10);

        engine.start_new_round();
        assert_eq!(engine.root_word(), "birthday");
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.round_score(), 0);
        assert_eq!(engine.total_score(), 10);
        assert_eq!(engine.round(), 2);

        engine.submit("bird");
        assert_eq!(engine.round_score(), 4);
        assert_eq!(engine.total_score(), 14);

        // Source is now empty
        engine.start_new_round();
        assert_eq!(engine.root_word(), "silkworm");
        assert_eq!(engine.total_score(), 14);
    }

    #[test]
    fn word_used_last_round_is_fresh_again() {
        let mut engine = GameEngine::start(AcceptAll, FixedWord("silkworm".to_string()));
        assert!(engine.submit("silk").is_accepted());
        engine.start_new_round();
        assert!(engine.submit("silk").is_accepted());
    }

    #[test]
    fn recent_first_order() {
        let mut engine = silkworm_engine();
        engine.submit("silk");
        engine.submit("worm");
        engine.submit("milk");

        let recent: Vec<&str> = engine.used_words_recent_first().collect();
        assert_eq!(recent, vec!["milk", "worm", "silk"]);
    }

    #[test]
    fn evaluate_does_not_commit() {
        let engine = silkworm_engine();
        assert_eq!(engine.evaluate("Worms"), SubmissionResult::Accepted(6));
        assert!(engine.used_words().is_empty());
        assert_eq!(engine.total_score(), 0);
    }

    #[test]
    fn language_is_passed_to_dictionary() {
        let dictionary = WordListDictionary::new(["silk"]);
        let mut engine =
            GameEngine::new(&dictionary, FixedWord("silkworm".to_string())).with_language("fr");
        engine.start_new_round();
        assert_eq!(engine.submit("silk"), SubmissionResult::NotReal);
    }

    #[test]
    fn observers_see_commits_only() {
        let seen: Rc<RefCell<Vec<RoundState>>> = Rc::default();
        let mut engine = GameEngine::new(AcceptAll, FixedWord("silkworm".to_string()));

        let sink = Rc::clone(&seen);
        engine.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        engine.start_new_round();
        engine.submit("worms");
        engine.submit("worms");
        engine.submit("lull");
        engine.submit("");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].round, 1);
        assert!(seen[0].used_words.is_empty());
        assert_eq!(seen[1].used_words, vec!["worms"]);
        assert_eq!(seen[1].total_score, 6);
    }
}
