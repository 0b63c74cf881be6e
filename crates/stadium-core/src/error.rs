//! Error types for stadium-rs.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for stadium-rs operations.
#[derive(Error, Debug)]
pub enum StadiumError {
    /// The stadium definition file could not be opened.
    #[error("cannot open the stadium definition '{}': {source}", path.display())]
    DefinitionNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token stream ended before the definition was complete.
    #[error("unexpected end of definition while reading {expected}")]
    UnexpectedEof { expected: String },

    /// A token could not be parsed as the expected integer.
    #[error("invalid token '{token}' while reading {expected}")]
    InvalidToken { token: String, expected: String },

    /// The definition parsed, but its indices or dimensions are inconsistent.
    #[error("malformed stadium definition: {0}")]
    MalformedDefinition(String),

    /// The expanded complex has more entries than a `u32` id can address.
    #[error("too many {what} for 32-bit indices: {count}")]
    IndexOverflow { what: &'static str, count: usize },

    /// The output file could not be created.
    #[error("cannot open '{}' for writing: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for stadium-rs operations.
pub type Result<T> = std::result::Result<T, StadiumError>;
