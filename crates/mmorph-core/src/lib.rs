//! mmorph Core - Basic data structures for discrete morphology
//!
//! This crate provides the image container shared by every mmorph crate:
//!
//! - [`Image`] / [`ImageMut`] - Dense 2-D pixel array (immutable / mutable)
//! - [`PixelType`] - The four supported element types and their value limits
//!
//! Pixel arithmetic (complement, saturated addition, union, intersection),
//! type conversion, comparison and border handling are implemented as
//! methods on [`Image`].

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::statistics::MinMax;
pub use image::{Image, ImageMut, PixelType};
