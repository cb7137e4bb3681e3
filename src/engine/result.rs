//! Outcome of submitting a candidate word

use std::fmt;

/// What happened to a submitted candidate
///
/// Every variant except `Accepted` leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionResult {
    /// Nothing but whitespace was submitted
    Ignored,
    /// The word was added to the round, worth this many points
    Accepted(u32),
    /// The word was already played this round
    AlreadyUsed,
    /// The word needs letters the root word does not have
    NotPossible,
    /// The dictionary does not know the word
    NotReal,
    /// The word is the root word itself
    IsRootWord,
}

impl SubmissionResult {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// True for the outcomes the player should be told off for
    #[inline]
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        !matches!(self, Self::Accepted(_) | Self::Ignored)
    }

    /// Points earned, zero unless accepted
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Accepted(points) => points,
            _ => 0,
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored => write!(f, "ignored"),
            Self::Accepted(points) => write!(f, "accepted (+{points})"),
            Self::AlreadyUsed => write!(f, "already used"),
            Self::NotPossible => write!(f, "not possible"),
            Self::NotReal => write!(f, "not a real word"),
            Self::IsRootWord => write!(f, "is the root word"),
        }
    }
}
