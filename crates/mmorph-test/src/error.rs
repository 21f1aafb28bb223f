//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A text fixture could not be parsed
    #[error("bad fixture at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The parsed pixels do not form a valid image
    #[error("invalid fixture image: {0}")]
    Image(#[from] mmorph_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
