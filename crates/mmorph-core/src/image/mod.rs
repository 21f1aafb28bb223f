//! Image - the dense pixel array container
//!
//! `Image` is the fundamental value type of the toolbox: a rectangular,
//! row-major array of integer pixels together with an element type.
//!
//! # Pixel storage
//!
//! - Every pixel is stored as an `i32`, whatever the element type
//! - Pixel `(x, y)` lives at index `y * width + x`
//! - Every stored value lies inside the type's [limits](PixelType::limits)
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
pub mod arith;
mod border;
pub mod compare;
pub mod convert;
pub mod statistics;

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Element type of an image.
///
/// Each type has a pair of limits `(min, max)`. The minimum doubles as the
/// "absent" marker in weighted structuring elements and the maximum as
/// "infinity" in distance and cost computations.
///
/// | type     | min           | max          |
/// |----------|---------------|--------------|
/// | `Binary` | 0             | 1            |
/// | `UInt8`  | 0             | 255          |
/// | `UInt16` | 0             | 65535        |
/// | `Int32`  | -2147483647   | 2147483647   |
///
/// `i32::MIN` is reserved and never appears in an `Int32` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Boolean pixels (0 or 1)
    Binary,
    /// 8-bit unsigned
    UInt8,
    /// 16-bit unsigned
    UInt16,
    /// 32-bit signed, symmetric range
    Int32,
}

impl PixelType {
    /// All supported element types, narrowest first.
    pub const ALL: [PixelType; 4] = [Self::Binary, Self::UInt8, Self::UInt16, Self::Int32];

    /// Parse an element type from its name.
    ///
    /// Accepts `"binary"` (or `"bool"`), `"uint8"`, `"uint16"` and `"int32"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "binary" | "bool" => Ok(Self::Binary),
            "uint8" => Ok(Self::UInt8),
            "uint16" => Ok(Self::UInt16),
            "int32" => Ok(Self::Int32),
            other => Err(Error::UnsupportedType(other.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::UInt8 => "uint8",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
        }
    }

    /// The `(min, max)` value pair for this type.
    #[inline]
    pub const fn limits(self) -> (i32, i32) {
        match self {
            Self::Binary => (0, 1),
            Self::UInt8 => (0, 255),
            Self::UInt16 => (0, 65535),
            Self::Int32 => (-2_147_483_647, 2_147_483_647),
        }
    }

    /// Smallest representable value.
    #[inline]
    pub const fn min_value(self) -> i32 {
        self.limits().0
    }

    /// Largest representable value.
    #[inline]
    pub const fn max_value(self) -> i32 {
        self.limits().1
    }

    /// Whether `value` lies inside this type's limits.
    #[inline]
    pub fn contains(self, value: i64) -> bool {
        let (lo, hi) = self.limits();
        (i64::from(lo)..=i64::from(hi)).contains(&value)
    }

    /// Clip `value` into this type's limits.
    #[inline]
    pub fn clamp(self, value: i64) -> i32 {
        let (lo, hi) = self.limits();
        value.clamp(i64::from(lo), i64::from(hi)) as i32
    }

    /// Saturated weight addition used by weighted dilation.
    ///
    /// A zero weight is the identity. The type minimum is absorbing: a
    /// pixel already at the minimum stays there whatever the weight.
    /// Everything else is `clamp(value + weight)`.
    #[inline]
    pub fn add_weight(self, value: i32, weight: i32) -> i32 {
        if weight == 0 || value == self.min_value() {
            value
        } else {
            self.clamp(i64::from(value) + i64::from(weight))
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Internal image data
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Element type
    ptype: PixelType,
    /// Row-major pixel values
    data: Vec<i32>,
}

/// Image - immutable, reference-counted pixel array
///
/// # Examples
///
/// ```
/// use mmorph_core::{Image, PixelType};
///
/// let img = Image::new(64, 48, PixelType::UInt8).unwrap();
/// assert_eq!(img.width(), 64);
/// assert_eq!(img.height(), 48);
/// assert_eq!(img.get_pixel(3, 3), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, ptype: PixelType) -> Result<Self> {
        Self::new_filled(width, height, ptype, 0)
    }

    /// Create a new image with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::ValueOutOfRange`] if `value` does not fit `ptype`.
    pub fn new_filled(width: u32, height: u32, ptype: PixelType, value: i32) -> Result<Self> {
        Ok(ImageMut::new_filled(width, height, ptype, value)?.into())
    }

    /// Create an image from row-major pixel values.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::InvalidParameter`] if `data.len() != width * height`
    /// - [`Error::ValueOutOfRange`] if any value lies outside the type's limits
    pub fn from_vec(width: u32, height: u32, ptype: PixelType, data: Vec<i32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "pixel buffer holds {} values, {}x{} image needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        if let Some(&bad) = data.iter().find(|&&v| !ptype.contains(i64::from(v))) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(bad),
                ptype,
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                ptype,
                data,
            }),
        })
    }

    /// Create an image from a slice of equally long rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use mmorph_core::{Image, PixelType};
    ///
    /// let img = Image::from_rows(PixelType::Binary, &[[1, 1, 0], [0, 1, 0]]).unwrap();
    /// assert_eq!((img.width(), img.height()), (3, 2));
    /// assert_eq!(img.get_pixel(2, 0), Some(0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for ragged rows, plus everything
    /// [`Image::from_vec`] can return.
    pub fn from_rows<R: AsRef<[i32]>>(ptype: PixelType, rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::InvalidParameter(format!(
                    "row {y} has {} pixels, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width as u32, height as u32, ptype, data)
    }

    /// Wrap a buffer whose values are already known to fit `ptype`.
    pub(crate) fn from_parts(width: u32, height: u32, ptype: PixelType, data: Vec<i32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Image {
            inner: Arc::new(ImageData {
                width,
                height,
                ptype,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the element type.
    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.inner.ptype
    }

    /// Whether this is a binary image.
    #[inline]
    pub fn is_binary(&self) -> bool {
        self.inner.ptype == PixelType::Binary
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false; images have at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get the raw row-major pixel values.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[i32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Number of strong references to the shared data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Apply `f` to every pixel, producing an image of type `ptype`.
    ///
    /// Results are clipped into the limits of `ptype`.
    pub fn map_pixels(&self, ptype: PixelType, f: impl Fn(i32) -> i64) -> Image {
        let data = self.data().iter().map(|&v| ptype.clamp(f(v))).collect();
        Self::from_parts(self.width(), self.height(), ptype, data)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for Image {}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`. Writes are checked against the
/// element type's limits.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new mutable image with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::ValueOutOfRange`] if `value` does not fit `ptype`.
    pub fn new_filled(width: u32, height: u32, ptype: PixelType, value: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if !ptype.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                ptype,
            });
        }
        Ok(ImageMut {
            inner: ImageData {
                width,
                height,
                ptype,
                data: vec![value; width as usize * height as usize],
            },
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the element type.
    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.inner.ptype
    }

    /// Get the raw row-major pixel values.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.inner.data
    }

    /// Get mutable access to the raw pixel values.
    ///
    /// Writers must keep every value inside the type's limits.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.inner.data
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` does not fit the type.
    pub fn fill(&mut self, value: i32) -> Result<()> {
        let ptype = self.inner.ptype;
        if !ptype.contains(i64::from(value)) {
            return Err(Error::ValueOutOfRange {
                value: i64::from(value),
                ptype,
            });
        }
        self.inner.data.fill(value);
        Ok(())
    }
}

impl From<ImageMut> for Image {
    fn from(img: ImageMut) -> Self {
        Image {
            inner: Arc::new(img.inner),
        }
    }
}
