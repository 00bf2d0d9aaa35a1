//! Error types for tasktok.
//!
//! The timer core never fails; these errors belong to the shell around it
//! (configuration, terminal setup, output encoding, argument handling).

use thiserror::Error;

/// Errors that can occur while running tasktok.
#[derive(Error, Debug)]
pub enum TaskTokError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or stdio failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A named item (such as a preset) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl TaskTokError {
    /// Exit code the binary reports for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 2,
            _ => 1,
        }
    }
}
