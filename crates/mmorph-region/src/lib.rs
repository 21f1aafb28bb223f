//! mmorph-region - Region processing for mmorph
//!
//! This crate provides:
//!
//! - **Connected component labeling** - [`label`] assigns 1..K to the
//!   components of a binary image under any structuring element's
//!   connectivity
//! - **Watershed segmentation** - [`cwatershed`] floods an elevation image
//!   from labeled markers, optionally returning watershed lines
//!
//! # Examples
//!
//! ```
//! use mmorph_core::{Image, PixelType};
//! use mmorph_morph::Sel;
//! use mmorph_region::{WatershedOptions, cwatershed, label};
//!
//! let img = Image::from_rows(PixelType::Binary, &[[1, 1, 0, 1]]).unwrap();
//! let labels = label(&img, &Sel::default()).unwrap();
//! assert_eq!(labels.data(), &[1, 1, 0, 2]);
//!
//! let elevation = Image::from_rows(PixelType::UInt8, &[[0, 1, 2, 3, 2, 1, 0]]).unwrap();
//! let markers = Image::from_rows(PixelType::Binary, &[[1, 0, 0, 0, 0, 0, 1]]).unwrap();
//! let out = cwatershed(&elevation, &markers, &WatershedOptions::new()).unwrap();
//! assert_eq!(out.labels.data(), &[1, 1, 1, 1, 2, 2, 2]);
//! ```

mod error;
pub mod label;
pub mod watershed;

pub use error::{RegionError, RegionResult};
pub use label::{count_components, label};
pub use watershed::{WatershedOptions, WatershedOutput, cwatershed};
