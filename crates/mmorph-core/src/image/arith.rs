//! Pixel arithmetic
//!
//! Lattice operations on images: complement, pointwise maximum (union) and
//! minimum (intersection), and saturated addition and subtraction. All
//! results stay inside the element type's limits.
//!
//! Binary operands must agree in size and element type.

use super::{Image, PixelType};
use crate::error::{Error, Result};

impl Image {
    /// Check that `other` has the same size and element type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] or [`Error::TypeMismatch`].
    pub fn check_compatible(&self, other: &Image) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        if self.pixel_type() != other.pixel_type() {
            return Err(Error::TypeMismatch(
                self.pixel_type(),
                other.pixel_type(),
            ));
        }
        Ok(())
    }

    fn zip_map(&self, other: &Image, f: impl Fn(i32, i32) -> i64) -> Result<Image> {
        self.check_compatible(other)?;
        let ptype = self.pixel_type();
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| ptype.clamp(f(a, b)))
            .collect();
        Ok(Image::from_parts(self.width(), self.height(), ptype, data))
    }

    /// Complement: `min + max - v` for every pixel.
    ///
    /// Exchanges the type's limits and is an involution. For binary images
    /// this is logical NOT; for `Int32` it is plain negation.
    pub fn neg(&self) -> Image {
        let (lo, hi) = self.pixel_type().limits();
        let sum = i64::from(lo) + i64::from(hi);
        self.map_pixels(self.pixel_type(), |v| sum - i64::from(v))
    }

    /// Pointwise maximum of two images.
    ///
    /// # Errors
    ///
    /// See [`Image::check_compatible`].
    pub fn union(&self, other: &Image) -> Result<Image> {
        self.zip_map(other, |a, b| i64::from(a.max(b)))
    }

    /// Pointwise minimum of two images.
    ///
    /// # Errors
    ///
    /// See [`Image::check_compatible`].
    pub fn intersection(&self, other: &Image) -> Result<Image> {
        self.zip_map(other, |a, b| i64::from(a.min(b)))
    }

    /// Pointwise maximum with a constant, clipped to the type.
    pub fn union_constant(&self, value: i64) -> Image {
        self.map_pixels(self.pixel_type(), |v| i64::from(v).max(value))
    }

    /// Pointwise minimum with a constant, clipped to the type.
    pub fn intersection_constant(&self, value: i64) -> Image {
        self.map_pixels(self.pixel_type(), |v| i64::from(v).min(value))
    }

    /// Saturated addition of two images.
    ///
    /// # Errors
    ///
    /// See [`Image::check_compatible`].
    pub fn add_saturated(&self, other: &Image) -> Result<Image> {
        self.zip_map(other, |a, b| i64::from(a) + i64::from(b))
    }

    /// Saturated addition of a constant.
    pub fn add_constant(&self, value: i64) -> Image {
        self.map_pixels(self.pixel_type(), |v| i64::from(v) + value)
    }

    /// Saturated subtraction of two images.
    ///
    /// # Errors
    ///
    /// See [`Image::check_compatible`].
    pub fn sub_saturated(&self, other: &Image) -> Result<Image> {
        self.zip_map(other, |a, b| i64::from(a) - i64::from(b))
    }

    /// Saturated subtraction of a constant.
    pub fn sub_constant(&self, value: i64) -> Image {
        self.map_pixels(self.pixel_type(), |v| i64::from(v) - value)
    }

    /// Add a structuring-element weight to every pixel.
    ///
    /// Pixels at the type minimum are left unchanged; see
    /// [`PixelType::add_weight`].
    pub fn add_weight(&self, weight: i32) -> Image {
        let ptype: PixelType = self.pixel_type();
        self.map_pixels(ptype, |v| i64::from(ptype.add_weight(v, weight)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Image, PixelType};

    fn row(ptype: PixelType, vals: &[i32]) -> Image {
        Image::from_rows(ptype, &[vals]).unwrap()
    }

    #[test]
    fn test_neg() {
        assert_eq!(row(PixelType::Binary, &[0, 1]).neg().data(), &[1, 0]);
        assert_eq!(row(PixelType::UInt8, &[0, 5, 255]).neg().data(), &[255, 250, 0]);
        assert_eq!(
            row(PixelType::Int32, &[-2_147_483_647, 0, 12]).neg().data(),
            &[2_147_483_647, 0, -12]
        );
        let img = row(PixelType::UInt16, &[0, 17, 65535]);
        assert_eq!(img.neg().neg(), img);
    }

    #[test]
    fn test_union_intersection() {
        let a = row(PixelType::UInt8, &[1, 9, 4]);
        let b = row(PixelType::UInt8, &[3, 2, 4]);
        assert_eq!(a.union(&b).unwrap().data(), &[3, 9, 4]);
        assert_eq!(a.intersection(&b).unwrap().data(), &[1, 2, 4]);
        assert_eq!(a.union_constant(5).data(), &[5, 9, 5]);
        assert_eq!(a.intersection_constant(-3).data(), &[0, 0, 0]);
    }

    #[test]
    fn test_operand_mismatch() {
        let a = row(PixelType::UInt8, &[1, 2]);
        let b = row(PixelType::UInt16, &[1, 2]);
        let c = row(PixelType::UInt8, &[1, 2, 3]);
        assert!(matches!(
            a.union(&b),
            Err(Error::TypeMismatch(PixelType::UInt8, PixelType::UInt16))
        ));
        assert!(matches!(
            a.intersection(&c),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_saturated_arith() {
        let a = row(PixelType::UInt8, &[250, 3]);
        let b = row(PixelType::UInt8, &[10, 5]);
        assert_eq!(a.add_saturated(&b).unwrap().data(), &[255, 8]);
        assert_eq!(a.sub_saturated(&b).unwrap().data(), &[240, 0]);
        assert_eq!(a.add_constant(10).data(), &[255, 13]);
        assert_eq!(a.sub_constant(4).data(), &[246, 0]);
    }

    #[test]
    fn test_add_weight_absorbing() {
        let a = row(PixelType::UInt8, &[0, 1, 254]);
        assert_eq!(a.add_weight(3).data(), &[0, 4, 255]);
        assert_eq!(a.add_weight(0).data(), &[0, 1, 254]);
    }
}
