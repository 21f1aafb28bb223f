//! Border operations
//!
//! Adding and removing constant-valued frames around an image. Neighborhood
//! operators pad their input so that every neighbor of an interior pixel
//! has a valid buffer index, then strip the frame from the result.

use super::{Image, PixelType};
use crate::error::{Error, Result};

impl Image {
    /// Add a border of `npix` pixels on every side, filled with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` does not fit the type.
    pub fn add_border(&self, npix: u32, value: i32) -> Result<Image> {
        self.add_border_general(npix, npix, npix, npix, value)
    }

    /// Add borders of individual widths, filled with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` does not fit the type.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
        value: i32,
    ) -> Result<Image> {
        let ptype: PixelType = self.pixel_type();
        if !ptype.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                ptype,
            });
        }
        let w = self.width() as usize;
        let wd = w + left as usize + right as usize;
        let hd = self.height() as usize + top as usize + bottom as usize;
        let mut data = vec![value; wd * hd];
        for y in 0..self.height() {
            let start = (y as usize + top as usize) * wd + left as usize;
            data[start..start + w].copy_from_slice(self.row(y));
        }
        Ok(Image::from_parts(wd as u32, hd as u32, ptype, data))
    }

    /// Remove `npix` pixels from every side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if nothing would remain.
    pub fn remove_border(&self, npix: u32) -> Result<Image> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove borders of individual widths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if nothing would remain.
    pub fn remove_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Result<Image> {
        let (w, h) = (u64::from(self.width()), u64::from(self.height()));
        let horiz = u64::from(left) + u64::from(right);
        let vert = u64::from(top) + u64::from(bottom);
        if horiz >= w || vert >= h {
            return Err(Error::InvalidParameter(format!(
                "cannot remove borders ({left}, {right}, {top}, {bottom}) from {w}x{h} image"
            )));
        }
        let wd = (w - horiz) as usize;
        let hd = (h - vert) as usize;
        let mut data = Vec::with_capacity(wd * hd);
        for y in 0..hd {
            let row = self.row(top + y as u32);
            data.extend_from_slice(&row[left as usize..left as usize + wd]);
        }
        Ok(Image::from_parts(wd as u32, hd as u32, self.pixel_type(), data))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, PixelType};

    #[test]
    fn test_add_remove_border() {
        let img = Image::from_rows(PixelType::UInt8, &[[1, 2], [3, 4]]).unwrap();
        let padded = img.add_border_general(1, 0, 2, 1, 9).unwrap();
        assert_eq!((padded.width(), padded.height()), (3, 5));
        assert_eq!(padded.row(0), &[9, 9, 9]);
        assert_eq!(padded.row(2), &[9, 1, 2]);
        assert_eq!(padded.row(3), &[9, 3, 4]);
        assert_eq!(padded.row(4), &[9, 9, 9]);

        let back = padded.remove_border_general(1, 0, 2, 1).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_border_errors() {
        let img = Image::new(3, 3, PixelType::Binary).unwrap();
        assert!(img.add_border(1, 2).is_err());
        assert!(img.remove_border(2).is_err());
        assert_eq!(img.remove_border(1).unwrap().len(), 1);
    }
}
