//! Hints command
//!
//! Lists every dictionary word that would score on a fresh round with a given
//! root word.

use crate::core::{LetterPool, normalize, score_for};
use crate::dictionary::WordListDictionary;
use rayon::prelude::*;

/// A playable word and what it is worth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub word: String,
    pub points: u32,
}

/// All scoring words for a root word
pub struct HintsResult {
    pub root_word: String,
    /// Highest score first, then alphabetical
    pub hints: Vec<Hint>,
    /// Score for playing every hint in one round
    pub max_score: u32,
}

/// Find all scoring words for `root_word`
///
/// Zero-point words (single letters, or longer than any scoring band) are
/// left out even though the engine would accept them.
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn find_hints(root_word: &str, dictionary: &WordListDictionary) -> Result<HintsResult, String> {
    let root_word = normalize(root_word);
    if root_word.is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let pool = LetterPool::new(&root_word);
    let words: Vec<&str> = dictionary.words().collect();

    let mut hints: Vec<Hint> = words
        .par_iter()
        .filter(|&&word| word != root_word && pool.can_spell(word))
        .filter_map(|&word| {
            let points = score_for(word);
            (points > 0).then(|| Hint {
                word: word.to_string(),
                points,
            })
        })
        .collect();

    hints.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));
    let max_score: u32 = hints.iter().map(|h| h.points).sum();

    tracing::debug!(root_word = %root_word, count = hints.len(), max_score, "computed hints");

    Ok(HintsResult {
        root_word,
        hints,
        max_score,
    })
}
