//! Error types for mmorph-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] mmorph_core::Error),

    /// Structuring element or reduction error
    #[error("morphology error: {0}")]
    Morph(#[from] mmorph_morph::MorphError),

    /// Unsupported pixel type for this operation
    #[error("unsupported pixel type: expected {expected}, got {actual}")]
    UnsupportedType {
        expected: &'static str,
        actual: mmorph_core::PixelType,
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
