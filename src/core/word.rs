//! Candidate word normalization
//!
//! Everything the engine compares, stores, or scores goes through [`normalize`]
//! first, so "Worms", " worms " and "worms" are the same word.

/// Normalize raw player input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Worms\n"), "worms");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word, counted in characters rather than bytes
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
