//! Error types for mmorph-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::image::PixelType;
use thiserror::Error;

/// mmorph error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Two operands carry different pixel types
    #[error("incompatible pixel types: {0} vs {1}")]
    TypeMismatch(PixelType, PixelType),

    /// Pixel type outside the supported set, or not accepted by this operation
    #[error("unsupported pixel type: {0}")]
    UnsupportedType(String),

    /// Pixel value does not fit the image's pixel type
    #[error("value {value} out of range for {ptype} pixels")]
    ValueOutOfRange { value: i64, ptype: PixelType },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for mmorph-core operations
pub type Result<T> = std::result::Result<T, Error>;
