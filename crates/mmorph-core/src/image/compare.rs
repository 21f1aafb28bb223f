//! Image comparison and thresholding
//!
//! Equality tests and the threshold operators producing binary images.

use super::{Image, PixelType};
use crate::error::Result;

impl Image {
    /// Whether two images have the same size and identical pixel values.
    ///
    /// The element types are not compared, so a binary image equals a
    /// `UInt8` image holding the same 0/1 values.
    pub fn is_equal(&self, other: &Image) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the pixels where two images differ.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] for differently sized images.
    pub fn count_pixel_diffs(&self, other: &Image) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(crate::Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }

    /// Binary image of the pixels with `value >= k`.
    pub fn binary(&self, k: i32) -> Image {
        self.map_pixels(PixelType::Binary, |v| i64::from(v >= k))
    }

    /// Binary image of the pixels with `lo <= value <= hi`.
    ///
    /// With `hi == None` the upper bound is the type maximum.
    pub fn threshold_range(&self, lo: i32, hi: Option<i32>) -> Image {
        let hi = hi.unwrap_or(self.pixel_type().max_value());
        self.map_pixels(PixelType::Binary, |v| i64::from(lo <= v && v <= hi))
    }
}
