//! Pixel access functions
//!
//! Bounds-checked getters and setters for individual pixels. Coordinates
//! are `(x, y)` with `x` the column and `y` the row.

use super::{Image, ImageMut};
use crate::error::{Error, Result};

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> i32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.inner.data[y as usize * self.width() as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for coordinates outside the image
    /// and [`Error::ValueOutOfRange`] when `value` does not fit the type.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: i32) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        let ptype = self.pixel_type();
        if !ptype.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                ptype,
            });
        }
        let w = self.width() as usize;
        self.inner.data[y as usize * w + x as usize] = value;
        Ok(())
    }
}
