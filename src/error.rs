//! Error types for textsift.

use thiserror::Error;

/// Result type for textsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textsift operations.
///
/// The core utilities are total functions over well-formed string inputs;
/// the only failure sources are compiling a caller-supplied pattern source
/// that the host regex engine rejects, and a match that exceeds the
/// engine's backtracking budget.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Pattern source failed to compile.
    #[error("Pattern compilation failed: {0}")]
    Pattern(String),

    /// Pattern matching failed at runtime (backtracking limit exceeded).
    #[error("Pattern match failed: {0}")]
    Match(String),
}

impl Error {
    /// Create a pattern compilation error.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Error::Pattern(msg.into())
    }

    /// Create a pattern match error.
    pub fn match_failed(msg: impl Into<String>) -> Self {
        Error::Match(msg.into())
    }
}
