//! Error types for mmorph-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mmorph_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Unsupported pixel type for this operation
    #[error("unsupported pixel type: expected {expected}, got {actual}")]
    UnsupportedType {
        expected: &'static str,
        actual: mmorph_core::PixelType,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Recognized but unimplemented mode
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
