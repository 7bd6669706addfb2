//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a V8 log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    #[error("Failed to read log: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur when decoding or checking flamegraph levels
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Level {level} has {len} values, expected a multiple of 3")]
    TruncatedLevel { level: usize, len: usize },

    #[error("Bar position overflows at level {level}, bar {bar}")]
    Overflow { level: usize, bar: usize },

    #[error("Invalid levels: {0}")]
    InvalidLevels(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
