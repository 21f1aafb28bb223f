//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. Its origin is always the center cell, so both dimensions
//! are odd.
//!
//! There are two kinds of SEL:
//!
//! - **flat**: a binary matrix; nonzero cells are part of the element
//! - **weighted**: an `Int32` matrix; every cell except [`Sel::EXCLUDED`]
//!   is part of the element and carries its value as an additive weight
//!
//! A SEL can also be viewed as a set of [`SelPoint`]s: offsets from the
//! origin paired with weights (always 0 for flat elements).

use crate::{MorphError, MorphResult};
use mmorph_core::{Image, PixelType};

/// One active cell of a structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelPoint {
    /// Row offset from the origin (positive is down)
    pub dy: i32,
    /// Column offset from the origin (positive is right)
    pub dx: i32,
    /// Additive weight; 0 for flat elements
    pub weight: i32,
}

impl SelPoint {
    /// Create a point with zero weight.
    pub const fn new(dy: i32, dx: i32) -> Self {
        Self { dy, dx, weight: 0 }
    }

    /// Create a point carrying a weight.
    pub const fn weighted(dy: i32, dx: i32, weight: i32) -> Self {
        Self { dy, dx, weight }
    }
}

/// Structuring Element (SEL)
///
/// The default SEL is the 3x3 cross (4-connectivity).
///
/// # Examples
///
/// ```
/// use mmorph_morph::Sel;
///
/// let sel = Sel::from_flat_rows(&[[0u8, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap();
/// assert_eq!(sel, Sel::default());
/// assert_eq!(sel.active_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    flat: bool,
    data: Vec<i32>,
}

impl Sel {
    /// Value marking an excluded cell of a weighted SEL (the `Int32` minimum).
    pub const EXCLUDED: i32 = PixelType::Int32.min_value();

    fn from_parts(width: u32, height: u32, flat: bool, data: Vec<i32>) -> MorphResult<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be odd, got {width}x{height}"
            )));
        }
        if data.len() != width as usize * height as usize {
            return Err(MorphError::InvalidSel(format!(
                "{} cells given for a {width}x{height} element",
                data.len()
            )));
        }
        Ok(Sel {
            width,
            height,
            flat,
            data,
        })
    }

    fn collect_rows<T: Copy, R: AsRef<[T]>>(rows: &[R]) -> MorphResult<(u32, u32, Vec<T>)> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MorphError::InvalidSel("ragged rows".to_string()));
            }
            data.extend_from_slice(row);
        }
        Ok((width as u32, height as u32, data))
    }

    /// Create a flat SEL from rows of cells; nonzero cells are active.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for ragged rows or even dimensions.
    pub fn from_flat_rows<R: AsRef<[u8]>>(rows: &[R]) -> MorphResult<Self> {
        let (w, h, cells) = Self::collect_rows(rows)?;
        let data = cells.into_iter().map(|c| i32::from(c != 0)).collect();
        Self::from_parts(w, h, true, data)
    }

    /// Create a weighted SEL from rows of weights.
    ///
    /// Cells equal to [`Sel::EXCLUDED`] are not part of the element.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for ragged rows, even dimensions
    /// or the reserved value `i32::MIN`.
    pub fn from_weighted_rows<R: AsRef<[i32]>>(rows: &[R]) -> MorphResult<Self> {
        let (w, h, data) = Self::collect_rows(rows)?;
        if data.contains(&i32::MIN) {
            return Err(MorphError::InvalidSel(
                "weights must not use the reserved value i32::MIN".to_string(),
            ));
        }
        Self::from_parts(w, h, false, data)
    }

    /// Create a SEL from an image.
    ///
    /// A binary image gives a flat SEL and an `Int32` image a weighted one.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnsupportedType`] for other pixel types and
    /// [`MorphError::InvalidSel`] for even dimensions.
    pub fn from_image(image: &Image) -> MorphResult<Self> {
        let flat = match image.pixel_type() {
            PixelType::Binary => true,
            PixelType::Int32 => false,
            actual => {
                return Err(MorphError::UnsupportedType {
                    expected: "binary or int32",
                    actual,
                });
            }
        };
        Self::from_parts(image.width(), image.height(), flat, image.data().to_vec())
    }

    /// Build the smallest centered SEL containing a set of points.
    ///
    /// The result is `(2*max|dy| + 1) x (2*max|dx| + 1)`. Duplicate offsets
    /// keep the largest weight. For weighted SELs, points whose weight is at
    /// or below [`Sel::EXCLUDED`] are dropped. An empty set gives a 1x1 SEL
    /// with no active cell.
    pub fn from_points(points: &[SelPoint], flat: bool) -> Self {
        let points: Vec<SelPoint> = points
            .iter()
            .copied()
            .filter(|p| flat || p.weight > Self::EXCLUDED)
            .collect();
        let ry = points.iter().map(|p| p.dy.unsigned_abs()).max().unwrap_or(0);
        let rx = points.iter().map(|p| p.dx.unsigned_abs()).max().unwrap_or(0);
        let (height, width) = (2 * ry + 1, 2 * rx + 1);
        let excluded = if flat { 0 } else { Self::EXCLUDED };
        let mut data = vec![excluded; width as usize * height as usize];
        for p in &points {
            let idx = (p.dy + ry as i32) as usize * width as usize + (p.dx + rx as i32) as usize;
            let value = if flat { 1 } else { p.weight };
            data[idx] = data[idx].max(value);
        }
        Sel {
            width,
            height,
            flat,
            data,
        }
    }

    /// Single-cell SEL containing only the origin (the identity of SEL dilation).
    pub fn identity(flat: bool) -> Self {
        Self::from_points(&[SelPoint::new(0, 0)], flat)
    }

    /// Replace the cell matrix; dimensions stay odd.
    pub(crate) fn set_cells(&mut self, width: u32, height: u32, data: Vec<i32>) {
        debug_assert!(width % 2 == 1 && height % 2 == 1);
        debug_assert_eq!(data.len(), width as usize * height as usize);
        self.width = width;
        self.height = height;
        self.data = data;
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate (center column)
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.width / 2
    }

    /// Get the origin y coordinate (center row)
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.height / 2
    }

    /// Whether this is a flat SEL
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.flat
    }

    /// Pixel type of the SEL matrix: binary when flat, `Int32` otherwise
    pub fn pixel_type(&self) -> PixelType {
        if self.flat {
            PixelType::Binary
        } else {
            PixelType::Int32
        }
    }

    /// Value stored in cells that are not part of the element
    #[inline]
    pub fn excluded_value(&self) -> i32 {
        self.pixel_type().min_value()
    }

    /// Get the cell value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Whether the cell at (x, y) is part of the element
    pub fn is_active(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_some_and(|v| v != self.excluded_value())
    }

    /// Get raw cell data
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Number of active cells
    pub fn active_count(&self) -> usize {
        let excluded = self.excluded_value();
        self.data.iter().filter(|&&v| v != excluded).count()
    }

    /// Whether the element has no active cell
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Active cells as origin-relative points, in row-major order.
    pub fn points(&self) -> Vec<SelPoint> {
        let (cy, cx) = (self.origin_y() as i32, self.origin_x() as i32);
        let excluded = self.excluded_value();
        let w = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != excluded)
            .map(|(i, &v)| SelPoint {
                dy: (i / w) as i32 - cy,
                dx: (i % w) as i32 - cx,
                weight: if self.flat { 0 } else { v },
            })
            .collect()
    }

    /// Linear offsets of the active cells in a row-major buffer of row
    /// length `stride`.
    ///
    /// Each offset is `dy * stride + dx`, so `index + offset` addresses the
    /// corresponding neighbor of `index` provided the buffer is padded by
    /// at least [`Sel::half_extent`] on every side.
    pub fn neighbor_offsets(&self, stride: usize) -> Vec<isize> {
        self.points()
            .iter()
            .map(|p| p.dy as isize * stride as isize + p.dx as isize)
            .collect()
    }

    /// Half extents `(rows, cols)`: the padding needed around an image.
    pub fn half_extent(&self) -> (u32, u32) {
        (self.height / 2, self.width / 2)
    }

    /// Weighted copy of this SEL; active flat cells get weight 0.
    pub fn to_weighted(&self) -> Sel {
        if !self.flat {
            return self.clone();
        }
        let data = self
            .data
            .iter()
            .map(|&v| if v != 0 { 0 } else { Self::EXCLUDED })
            .collect();
        Sel {
            width: self.width,
            height: self.height,
            flat: false,
            data,
        }
    }

    /// The SEL matrix as an image (binary or `Int32`).
    pub fn to_image(&self) -> MorphResult<Image> {
        Ok(Image::from_vec(
            self.width,
            self.height,
            self.pixel_type(),
            self.data.clone(),
        )?)
    }
}

impl Default for Sel {
    fn default() -> Self {
        Sel::cross(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_rows() {
        let sel = Sel::from_flat_rows(&[[0u8, 1, 0], [1, 1, 1], [0, 1, 0]]).unwrap();
        assert!(sel.is_flat());
        assert_eq!((sel.width(), sel.height()), (3, 3));
        assert_eq!((sel.origin_x(), sel.origin_y()), (1, 1));
        assert!(sel.is_active(1, 0));
        assert!(!sel.is_active(0, 0));
        assert!(!sel.is_active(5, 0));
    }

    #[test]
    fn test_even_dimensions_rejected() {
        assert!(matches!(
            Sel::from_flat_rows(&[[1u8, 1]]),
            Err(MorphError::InvalidSel(_))
        ));
        assert!(matches!(
            Sel::from_weighted_rows(&[[0], [0]]),
            Err(MorphError::InvalidSel(_))
        ));
        assert!(Sel::from_weighted_rows(&[[i32::MIN]]).is_err());
    }

    #[test]
    fn test_points_row_major() {
        let sel = Sel::default();
        let pts = sel.points();
        assert_eq!(
            pts,
            vec![
                SelPoint::new(-1, 0),
                SelPoint::new(0, -1),
                SelPoint::new(0, 0),
                SelPoint::new(0, 1),
                SelPoint::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_from_points() {
        let sel = Sel::from_points(&[SelPoint::new(0, 2), SelPoint::new(-1, 0)], true);
        assert_eq!((sel.height(), sel.width()), (3, 5));
        assert!(sel.is_active(4, 1));
        assert!(sel.is_active(2, 0));
        assert_eq!(sel.active_count(), 2);

        let empty = Sel::from_points(&[], false);
        assert_eq!((empty.height(), empty.width()), (1, 1));
        assert_eq!(empty.data(), &[Sel::EXCLUDED]);
        assert!(empty.is_empty());

        let dup = Sel::from_points(
            &[SelPoint::weighted(0, 0, 3), SelPoint::weighted(0, 0, 8)],
            false,
        );
        assert_eq!(dup.data(), &[8]);

        let low = Sel::from_points(
            &[
                SelPoint::weighted(0, 0, Sel::EXCLUDED),
                SelPoint::weighted(0, 1, i32::MIN),
            ],
            false,
        );
        assert_eq!(low.data(), &[Sel::EXCLUDED]);
        assert_eq!(low.active_count(), 0);
    }

    #[test]
    fn test_neighbor_offsets() {
        let sel = Sel::square(1);
        assert_eq!(
            sel.neighbor_offsets(10),
            vec![-11, -10, -9, -1, 0, 1, 9, 10, 11]
        );
    }

    #[test]
    fn test_to_weighted_and_image() {
        let w = Sel::default().to_weighted();
        assert!(!w.is_flat());
        assert_eq!(w.active_count(), 5);
        assert_eq!(w.get(0, 0), Some(Sel::EXCLUDED));
        assert_eq!(w.get(1, 1), Some(0));

        let img = w.to_image().unwrap();
        assert_eq!(img.pixel_type(), PixelType::Int32);
        assert_eq!(Sel::from_image(&img).unwrap(), w);
        let gray = Image::new(3, 3, PixelType::UInt8).unwrap();
        assert!(matches!(
            Sel::from_image(&gray),
            Err(MorphError::UnsupportedType { .. })
        ));
    }
}
