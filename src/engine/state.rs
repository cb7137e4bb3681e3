//! Snapshot of a round, for observers and renderers

/// Immutable copy of the engine's round state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundState {
    pub root_word: String,
    /// Accepted words in the order they were played
    pub used_words: Vec<String>,
    pub round_score: u32,
    pub total_score: u32,
    /// Rounds started this session, 0 before the first
    pub round: u32,
}

impl RoundState {
    /// Accepted words, most recent first, as shown to the player
    pub fn used_words_recent_first(&self) -> impl Iterator<Item = &str> {
        self.used_words.iter().rev().map(String::as_str)
    }
}
