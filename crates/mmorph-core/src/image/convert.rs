//! Element type conversion
//!
//! Conversions between the four supported element types.

use super::{Image, PixelType};
use crate::error::{Error, Result};

impl Image {
    /// Convert a binary image to a gray-level type.
    ///
    /// Foreground pixels become `k` (the type maximum when `None`) and
    /// background pixels become the type minimum.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] if `self` is not binary or `ptype` is binary
    /// - [`Error::ValueOutOfRange`] if `k` does not fit `ptype`
    pub fn gray(&self, ptype: PixelType, k: Option<i32>) -> Result<Image> {
        if !self.is_binary() {
            return Err(Error::UnsupportedType(format!(
                "gray expects a binary image, got {}",
                self.pixel_type()
            )));
        }
        if ptype == PixelType::Binary {
            return Err(Error::UnsupportedType(
                "gray target must be a gray-level type".to_string(),
            ));
        }
        let (lo, hi) = ptype.limits();
        let k = k.unwrap_or(hi);
        if !ptype.contains(i64::from(k)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(k),
                ptype,
            });
        }
        Ok(self.map_pixels(ptype, |v| i64::from(if v != 0 { k } else { lo })))
    }

    /// Convert to another element type, clipping values into its limits.
    ///
    /// Converting to [`PixelType::Binary`] maps nonzero pixels to 1.
    pub fn to_type(&self, ptype: PixelType) -> Image {
        if ptype == self.pixel_type() {
            return self.clone();
        }
        match ptype {
            PixelType::Binary => self.map_pixels(ptype, |v| i64::from(v != 0)),
            _ => self.map_pixels(ptype, i64::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Image, PixelType};

    #[test]
    fn test_gray() {
        let b = Image::from_rows(PixelType::Binary, &[[1, 0]]).unwrap();
        assert_eq!(b.gray(PixelType::UInt16, None).unwrap().data(), &[65535, 0]);
        assert_eq!(b.gray(PixelType::UInt8, Some(7)).unwrap().data(), &[7, 0]);
        assert_eq!(
            b.gray(PixelType::Int32, None).unwrap().data(),
            &[2_147_483_647, -2_147_483_647]
        );
        assert!(matches!(
            b.gray(PixelType::Binary, None),
            Err(Error::UnsupportedType(_))
        ));
        assert!(b.gray(PixelType::UInt8, Some(256)).is_err());
        let g = Image::from_rows(PixelType::UInt8, &[[1, 0]]).unwrap();
        assert!(g.gray(PixelType::UInt16, None).is_err());
    }

    #[test]
    fn test_to_type_clips() {
        let img = Image::from_rows(PixelType::Int32, &[[-5, 100, 70000]]).unwrap();
        assert_eq!(img.to_type(PixelType::UInt8).data(), &[0, 100, 255]);
        assert_eq!(img.to_type(PixelType::UInt16).data(), &[0, 100, 65535]);
        assert_eq!(img.to_type(PixelType::Binary).data(), &[1, 1, 1]);
    }
}
