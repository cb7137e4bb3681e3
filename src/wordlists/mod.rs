//! Word lists for Word Scramble
//!
//! Embedded lists compiled into the binary, a loader for list files, and the
//! root word sources built on top of them.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{FixedWord, RandomWordList, RootWordSource, WordSource};
