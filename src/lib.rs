// Library surface shared by the `cats` binary and integration tests.
pub mod autocorrect;
pub mod config;
pub mod error;
pub mod game;
pub mod paragraphs;
pub mod progress;
pub mod results_log;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod text;

pub use error::{Error, Result};
