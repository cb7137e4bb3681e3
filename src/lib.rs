//! Word Scramble
//!
//! A word-building game: make as many words as you can from the letters of a
//! root word. Words are checked against a dictionary and scored by length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::engine::{GameEngine, SubmissionResult};
//! use word_scramble::wordlists::FixedWord;
//!
//! let mut engine = GameEngine::start(
//!     WordListDictionary::embedded(),
//!     FixedWord("silkworm".to_string()),
//! );
//!
//! assert_eq!(engine.submit("worms"), SubmissionResult::Accepted(6));
//! assert_eq!(engine.submit("silkworm"), SubmissionResult::IsRootWord);
//! println!("Total: {}", engine.total_score());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Dictionary lookups
pub mod dictionary;

// Word lists and root word sources
pub mod wordlists;

// Game setup
pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
