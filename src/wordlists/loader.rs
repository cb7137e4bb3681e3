//! Word list loading utilities
//!
//! Word lists are flat text: one lowercase word per line.

use crate::core::normalize;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse newline-delimited word list text
///
/// Lines are trimmed and lowercased; blank lines are skipped.
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`Error::ReadWordList`] if the file cannot be read, and
/// [`Error::EmptyWordList`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::ReadWordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(Error::EmptyWordList(path.to_path_buf()));
    }

    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|&s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}
