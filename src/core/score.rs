//! Length-based scoring
//!
//! Points depend only on the number of letters in the accepted word:
//!
//! | letters | points      |
//! |---------|-------------|
//! | 2-4     | length      |
//! | 5-6     | length + 1  |
//! | 7       | length + 3  |
//! | 8       | 15          |
//! | other   | 0           |

use super::word::letter_count;

/// How a band turns a word length into points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    /// One point per letter plus a bonus
    LengthPlus(u32),
    /// Fixed number of points regardless of length
    Flat(u32),
}

impl ScoreRule {
    #[inline]
    #[must_use]
    pub const fn points(self, length: usize) -> u32 {
        match self {
            Self::LengthPlus(bonus) => length as u32 + bonus,
            Self::Flat(points) => points,
        }
    }
}

/// An inclusive range of word lengths sharing one scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub min_len: usize,
    pub max_len: usize,
    pub rule: ScoreRule,
}

impl ScoreBand {
    #[inline]
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min_len <= length && length <= self.max_len
    }
}

/// The scoring table, shortest words first
///
/// Lengths outside every band score zero.
pub const SCORE_BANDS: [ScoreBand; 4] = [
    ScoreBand {
        min_len: 2,
        max_len: 4,
        rule: ScoreRule::LengthPlus(0),
    },
    ScoreBand {
        min_len: 5,
        max_len: 6,
        rule: ScoreRule::LengthPlus(1),
    },
    ScoreBand {
        min_len: 7,
        max_len: 7,
        rule: ScoreRule::LengthPlus(3),
    },
    ScoreBand {
        min_len: 8,
        max_len: 8,
        rule: ScoreRule::Flat(15),
    },
];

/// Points for a word of `length` letters
#[must_use]
pub fn score_for_length(length: usize) -> u32 {
    SCORE_BANDS
        .iter()
        .find(|band| band.contains(length))
        .map_or(0, |band| band.rule.points(length))
}

/// Points for an (already normalized) word
///
/// # Examples
/// ```
/// use word_scramble::core::score_for;
///
/// assert_eq!(score_for("silk"), 4);
/// assert_eq!(score_for("worms"), 6);
/// assert_eq!(score_for("a"), 0);
/// ```
#[must_use]
pub fn score_for(word: &str) -> u32 {
    score_for_length(letter_count(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_by_length() {
        let expected = [0, 0, 2, 3, 4, 6, 7, 10, 15, 0, 0, 0];
        for (length, &points) in expected.iter().enumerate() {
            assert_eq!(
                score_for_length(length),
                points,
                "wrong score for length {length}"
            );
        }
    }

    #[test]
    fn score_for_counts_letters() {
        assert_eq!(score_for("ox"), 2);
        assert_eq!(score_for("worm"), 4);
        assert_eq!(score_for("worms"), 6);
        assert_eq!(score_for("silkie"), 7);
        assert_eq!(score_for("bowlers"), 10);
        assert_eq!(score_for("silkworm"), 15);
        assert_eq!(score_for("silkworms"), 0);
    }

    #[test]
    fn score_depends_only_on_length() {
        assert_eq!(score_for("milk"), score_for("worm"));
        assert_eq!(score_for("storm"), score_for("worms"));
    }

    #[test]
    fn bands_do_not_overlap() {
        for window in SCORE_BANDS.windows(2) {
            assert!(window[0].max_len < window[1].min_len);
        }
    }

    #[test]
    fn flat_rule_ignores_length() {
        assert_eq!(ScoreRule::Flat(15).points(8), 15);
        assert_eq!(ScoreRule::Flat(15).points(3), 15);
        assert_eq!(ScoreRule::LengthPlus(3).points(7), 10);
    }
}
