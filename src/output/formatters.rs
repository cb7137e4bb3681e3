//! Formatting utilities for terminal output

use crate::core::{SCORE_BANDS, ScoreBand, ScoreRule};
use crate::engine::SubmissionResult;

/// Title and message shown to the player for a submission outcome
///
/// Returns `None` for [`SubmissionResult::Ignored`], which the UI does not react to.
#[must_use]
pub const fn result_message(result: SubmissionResult) -> Option<(&'static str, &'static str)> {
    match result {
        SubmissionResult::Ignored => None,
        SubmissionResult::Accepted(_) => Some(("Nice!", "Word added to your list.")),
        SubmissionResult::AlreadyUsed => Some(("Word used already", "Be more original!")),
        SubmissionResult::NotPossible => Some((
            "Word not possible",
            "Use ONLY the letters from the word up top.",
        )),
        SubmissionResult::NotReal => {
            Some(("Word not recognised", "Yeah, that's not a real word."))
        }
        SubmissionResult::IsRootWord => {
            Some(("Cheeky!", "You can't just use the original word!"))
        }
    }
}

/// One line of the scoring legend
///
/// Built from the same table the engine scores with, so the two cannot drift.
#[must_use]
pub fn legend_line(band: &ScoreBand) -> String {
    let lengths = if band.min_len == band.max_len {
        format!("{} letters", band.min_len)
    } else {
        format!("{}-{} letters", band.min_len, band.max_len)
    };

    let points = match band.rule {
        ScoreRule::Flat(points) => format!("{points} points"),
        ScoreRule::LengthPlus(_) if band.min_len == band.max_len => {
            format!("{} points", band.rule.points(band.min_len))
        }
        ScoreRule::LengthPlus(0) => "(length) points".to_string(),
        ScoreRule::LengthPlus(bonus) => format!("(length + {bonus}) points"),
    };

    format!("{lengths}: {points}")
}

/// The full scoring legend, shortest words first
#[must_use]
pub fn scoring_legend() -> Vec<String> {
    SCORE_BANDS.iter().map(legend_line).collect()
}

/// Small badge showing a word's length, like "(5)"
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("({})", word.chars().count())
}
