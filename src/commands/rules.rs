//! Rules command
//!
//! Gathers the scoring table and the reasons a word can be turned away.

use crate::engine::SubmissionResult;
use crate::output::formatters::{result_message, scoring_legend};

/// Submissions that never score, in the order the engine checks them
const REJECTIONS: [SubmissionResult; 4] = [
    SubmissionResult::AlreadyUsed,
    SubmissionResult::NotPossible,
    SubmissionResult::NotReal,
    SubmissionResult::IsRootWord,
];

/// Everything a player needs to know before a round
pub struct GameRules {
    /// One line per scoring band, shortest words first
    pub scoring: Vec<String>,
    /// Title and explanation for each rejection
    pub rejections: Vec<(&'static str, &'static str)>,
}

/// Collect the rules of the game
#[must_use]
pub fn game_rules() -> GameRules {
    GameRules {
        scoring: scoring_legend(),
        rejections: REJECTIONS.into_iter().filter_map(result_message).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SCORE_BANDS;

    #[test]
    fn one_scoring_line_per_band() {
        let rules = game_rules();
        assert_eq!(rules.scoring.len(), SCORE_BANDS.len());
        assert_eq!(rules.scoring[3], "8 letters: 15 points");
    }

    #[test]
    fn every_rejection_is_explained() {
        let rules = game_rules();
        assert_eq!(rules.rejections.len(), REJECTIONS.len());
        assert_eq!(rules.rejections[0].0, "Word used already");
        assert_eq!(rules.rejections[3].0, "Cheeky!");
        assert!(rules.rejections.iter().all(|(_, message)| !message.is_empty()));
    }
}
