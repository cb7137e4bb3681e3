//! Game engine
//!
//! The validation-and-scoring state machine behind a Word Scramble session.

mod game;
mod result;
mod state;

pub use game::{DEFAULT_ROOT_WORD, GameEngine};
pub use result::SubmissionResult;
pub use state::RoundState;
