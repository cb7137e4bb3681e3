//! Command implementations

pub mod hints;
pub mod rules;
pub mod simple;

pub use hints::{Hint, HintsResult, find_hints};
pub use rules::{GameRules, game_rules};
pub use simple::run_simple;
