//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_hints, print_round_header, print_rules, print_submission, print_used_words,
};
