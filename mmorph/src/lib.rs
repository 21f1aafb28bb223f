//! mmorph - Discrete mathematical morphology for Rust
//!
//! # Overview
//!
//! mmorph provides the core operators of gray-level and binary
//! mathematical morphology on 2-D integer images:
//!
//! - Flat and weighted structuring elements with standard shapes
//! - Erosion, dilation, opening and closing
//! - Connected component labeling under any connectivity
//! - Marker-controlled watershed with optional watershed lines
//! - Graph and approximate Euclidean distance transforms
//!
//! # Example
//!
//! ```
//! use mmorph::{Image, PixelType};
//! use mmorph::morph::{Sel, erode};
//!
//! let img = Image::from_rows(PixelType::UInt8, &[[9, 9, 9], [9, 1, 9], [9, 9, 9]]).unwrap();
//! let out = erode(&img, &Sel::default()).unwrap();
//! assert_eq!(out.row(0), &[9, 1, 9]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use mmorph_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use mmorph_morph as morph;
pub use mmorph_region as region;
