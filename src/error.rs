//! Error type for word list loading and game setup
//!
//! Rejected submissions are not errors; see [`crate::engine::SubmissionResult`].

use std::io;
use std::path::PathBuf;

/// Errors raised while assembling a game from external resources
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read word list {path}: {source}")]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {0} contains no words")]
    EmptyWordList(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
