//! Error types for the lexifreq library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`LexifreqError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexifreq::error::{LexifreqError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexifreqError::invalid_operation("word already grouped"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexifreq operations.
#[derive(Error, Debug)]
pub enum LexifreqError {
    /// I/O errors (reading corpora, writing the synonym file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (char filters, tokenization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus extraction errors (record loading, tree access).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Synonym store persistence errors.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// An operation that violates a store invariant.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LexifreqError`].
pub type Result<T> = std::result::Result<T, LexifreqError>;

impl LexifreqError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Corpus(msg.into())
    }

    /// Create a new persistence error.
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        LexifreqError::Persistence(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        LexifreqError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexifreqError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = LexifreqError::invalid_operation("word already grouped");
        assert_eq!(error.to_string(), "Invalid operation: word already grouped");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = LexifreqError::from(io_error);

        match error {
            LexifreqError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
