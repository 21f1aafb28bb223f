//! Structuring element algebra
//!
//! Transformations of a [`Sel`] viewed as a point set: translation,
//! reflection through the origin, rotation, union and Minkowski addition.

use crate::sel::{Sel, SelPoint};
use crate::MorphResult;
use mmorph_core::{Error, PixelType};

/// Direction of a SEL rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateDirection {
    /// Clockwise on screen (rows grow downward)
    #[default]
    Clockwise,
    /// Anti-clockwise on screen
    AntiClockwise,
}

impl Sel {
    /// Shift every active cell by `(dy, dx)`.
    ///
    /// The result is re-centered on the origin, so its matrix grows to
    /// keep the shifted points.
    pub fn translate(&self, dy: i32, dx: i32) -> Sel {
        let points: Vec<SelPoint> = self
            .points()
            .into_iter()
            .map(|p| SelPoint::weighted(p.dy + dy, p.dx + dx, p.weight))
            .collect();
        Sel::from_points(&points, self.is_flat())
    }

    /// Reflect through the origin (reverse both axes).
    pub fn reflect(&self) -> Sel {
        let mut data = self.data().to_vec();
        data.reverse();
        let mut out = self.clone();
        out.set_cells(self.width(), self.height(), data);
        out
    }

    /// Rotate by `theta` degrees.
    ///
    /// Each point is rotated about the origin and rounded to the nearest
    /// cell (halves away from zero). Rotations by multiples of 90 degrees
    /// are exact; others are approximations.
    pub fn rotate(&self, theta: f64, direction: RotateDirection) -> Sel {
        let theta = match direction {
            RotateDirection::Clockwise => theta,
            RotateDirection::AntiClockwise => -theta,
        }
        .to_radians();
        let (sin, cos) = theta.sin_cos();
        let points: Vec<SelPoint> = self
            .points()
            .into_iter()
            .map(|p| {
                let (y, x) = (f64::from(p.dy), f64::from(p.dx));
                let nx = (x * cos - y * sin).round() as i32;
                let ny = (x * sin + y * cos).round() as i32;
                SelPoint::weighted(ny, nx, p.weight)
            })
            .collect();
        Sel::from_points(&points, self.is_flat())
    }

    /// Union of two SELs of the same kind.
    ///
    /// The smaller matrix is padded around its center; shared cells take
    /// the larger weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] when one SEL is flat and the
    /// other weighted.
    pub fn union(&self, other: &Sel) -> MorphResult<Sel> {
        if self.is_flat() != other.is_flat() {
            return Err(Error::TypeMismatch(self.pixel_type(), other.pixel_type()).into());
        }
        let mut points = self.points();
        points.extend(other.points());
        let mut out = Sel::from_points(&points, self.is_flat());
        let height = self.height().max(other.height());
        let width = self.width().max(other.width());
        out.pad_to(height, width);
        Ok(out)
    }

    /// Minkowski addition (dilation of one SEL by another).
    ///
    /// Every pair of active points `(a, b)` contributes the point `a + b`
    /// with weight `a.weight + b.weight`, clipped to the `Int32` limits. A sum
    /// that reaches the lower limit is [`Sel::EXCLUDED`] and drops out. The
    /// result is flat only when both inputs are flat; a flat input otherwise
    /// counts as weight 0. If either input is empty, so is the result.
    pub fn dilate(&self, other: &Sel) -> Sel {
        let flat = self.is_flat() && other.is_flat();
        let lhs = self.points();
        let rhs = other.points();
        let mut points = Vec::with_capacity(lhs.len() * rhs.len());
        for b in &rhs {
            for a in &lhs {
                let weight = PixelType::Int32.clamp(i64::from(a.weight) + i64::from(b.weight));
                points.push(SelPoint::weighted(a.dy + b.dy, a.dx + b.dx, weight));
            }
        }
        Sel::from_points(&points, flat)
    }

    /// N-fold Minkowski sum of this SEL with itself.
    ///
    /// `sum(0)` is the single-origin identity of the same kind and
    /// `sum(1)` is a copy of `self`.
    pub fn sum(&self, n: u32) -> Sel {
        if n == 0 {
            return Sel::identity(self.is_flat());
        }
        let mut acc = self.clone();
        for _ in 1..n {
            acc = acc.dilate(self);
        }
        acc
    }

    /// Grow the matrix to at least `height x width`, keeping it centered.
    fn pad_to(&mut self, height: u32, width: u32) {
        let height = height.max(self.height());
        let width = width.max(self.width());
        if height == self.height() && width == self.width() {
            return;
        }
        let (oy, ox) = (
            (height - self.height()) / 2,
            (width - self.width()) / 2,
        );
        let mut data = vec![self.excluded_value(); width as usize * height as usize];
        for y in 0..self.height() {
            for x in 0..self.width() {
                let src = (y * self.width() + x) as usize;
                data[((y + oy) * width + x + ox) as usize] = self.data()[src];
            }
        }
        self.set_cells(width, height, data);
    }
}
