//! Core domain types for Word Scramble
//!
//! Pure functions and types with no I/O: candidate normalization, the letter
//! pool used for the sub-multiset check, and the length-based scoring table.

mod letters;
mod score;
mod word;

pub use letters::LetterPool;
pub use score::{SCORE_BANDS, ScoreBand, ScoreRule, score_for, score_for_length};
pub use word::{letter_count, normalize};
