use std::io;

use thiserror::Error;

/// Errors surfaced by the typing test library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("topics should be lowercase: {0:?}")]
    TopicNotLowercase(String),

    #[error("elapsed time must be positive, got {0}")]
    NonPositiveElapsed(f64),

    #[error("malformed game: {0}")]
    MalformedGame(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn malformed_game<S: Into<String>>(msg: S) -> Self {
        Error::MalformedGame(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
