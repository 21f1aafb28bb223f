//! Standard structuring element shapes
//!
//! Crosses, squares, disks under several metrics, and digital line
//! segments. All are built by Minkowski addition of small elements, so a
//! radius-`r` shape is the `r`-fold sum of its radius-1 generator.

use crate::sel::{Sel, SelPoint};
use crate::{MorphError, MorphResult};
use mmorph_core::{Error, Image};

/// Metric used to build a disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiskMetric {
    /// Diamond (4-connected ball)
    CityBlock,
    /// Square (8-connected ball)
    Chessboard,
    /// Alternating square and cross generators
    Octagon,
    /// Discretized Euclidean disk
    #[default]
    Euclidean,
}

/// Radius-1 cross with weight 1 at the center and 0 on the arms.
fn weighted_cross() -> Sel {
    Sel::from_points(
        &[
            SelPoint::weighted(-1, 0, 0),
            SelPoint::weighted(0, -1, 0),
            SelPoint::weighted(0, 0, 1),
            SelPoint::weighted(0, 1, 0),
            SelPoint::weighted(1, 0, 0),
        ],
        false,
    )
}

/// Radius-1 square with weight 1 everywhere.
fn weighted_box() -> Sel {
    let points: Vec<SelPoint> = (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| SelPoint::weighted(dy, dx, 1)))
        .collect();
    Sel::from_points(&points, false)
}

impl Sel {
    /// Flat cross of radius `r`: the `r`-fold sum of the 3x3 cross.
    ///
    /// `cross(0)` is the single origin and `cross(1)` the 4-connectivity
    /// neighborhood.
    pub fn cross(r: u32) -> Sel {
        let base = Sel::from_points(
            &[
                SelPoint::new(-1, 0),
                SelPoint::new(0, -1),
                SelPoint::new(0, 0),
                SelPoint::new(0, 1),
                SelPoint::new(1, 0),
            ],
            true,
        );
        base.sum(r)
    }

    /// Flat square of radius `r` (side `2r + 1`).
    ///
    /// `square(1)` is the 8-connectivity neighborhood.
    pub fn square(r: u32) -> Sel {
        let points: Vec<SelPoint> = (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| SelPoint::new(dy, dx)))
            .collect();
        Sel::from_points(&points, true).sum(r)
    }

    /// Flat disk of radius `r`.
    pub fn disk(r: u32, metric: DiskMetric) -> Sel {
        disk_impl(r, metric, None)
    }

    /// Weighted disk of radius `r` with base height `h`.
    ///
    /// Weights decrease from the center outward, giving a cone
    /// (city-block, chessboard, octagon) or a spherical cap (Euclidean)
    /// sitting on `h`.
    pub fn disk_weighted(r: u32, metric: DiskMetric, h: i32) -> Sel {
        disk_impl(r, metric, Some(h))
    }

    /// Flat digital line segment of `length` pixels starting at the origin.
    ///
    /// `theta` is in degrees, measured clockwise on screen from the
    /// positive x axis. A zero length gives the single origin.
    pub fn line(length: u32, theta: f64) -> Sel {
        if length == 0 {
            return Sel::identity(true);
        }
        let rad = theta.to_radians();
        let (sin, cos, tan) = (rad.sin(), rad.cos(), rad.tan());
        let len = f64::from(length);
        let points: Vec<SelPoint> = if tan.abs() <= 1.0 {
            let s = cos.signum();
            steps(len * cos - s * 0.5, s)
                .map(|x| SelPoint::new((x * tan + 0.5).floor() as i32, x as i32))
                .collect()
        } else {
            let s = sin.signum();
            steps(len * sin - s * 0.5, s)
                .map(|y| SelPoint::new(y as i32, (y / tan + 0.5).floor() as i32))
                .collect()
        };
        Sel::from_points(&points, true)
    }

    /// Create a SEL from a binary domain image and optional weights.
    ///
    /// Without `values` the result is flat and equals the domain. With
    /// `values` the result is weighted: active cells take the weight at the
    /// same position, all others are [`Sel::EXCLUDED`].
    ///
    /// # Errors
    ///
    /// - [`MorphError::UnsupportedType`] if `domain` is not binary
    /// - [`Error::DimensionMismatch`] if `values` differs in size
    /// - [`MorphError::InvalidSel`] for even dimensions
    pub fn from_images(domain: &Image, values: Option<&Image>) -> MorphResult<Sel> {
        if !domain.is_binary() {
            return Err(MorphError::UnsupportedType {
                expected: "binary",
                actual: domain.pixel_type(),
            });
        }
        let Some(values) = values else {
            return Sel::from_image(domain);
        };
        if !domain.sizes_equal(values) {
            return Err(Error::DimensionMismatch {
                expected: (domain.width(), domain.height()),
                actual: (values.width(), values.height()),
            }
            .into());
        }
        let rows: Vec<Vec<i32>> = (0..domain.height())
            .map(|y| {
                domain
                    .row(y)
                    .iter()
                    .zip(values.row(y))
                    .map(|(&d, &v)| if d != 0 { v } else { Sel::EXCLUDED })
                    .collect()
            })
            .collect();
        Sel::from_weighted_rows(&rows)
    }
}

/// `0, s, 2s, ...` while strictly before `stop`.
fn steps(stop: f64, s: f64) -> impl Iterator<Item = f64> {
    let n = (stop / s).ceil().max(0.0) as u32;
    (0..n).map(move |k| f64::from(k) * s)
}

fn disk_impl(r: u32, metric: DiskMetric, height: Option<i32>) -> Sel {
    let flat = height.is_none();
    let seed = match height {
        None => Sel::identity(true),
        Some(h) => Sel::from_points(&[SelPoint::weighted(0, 0, h)], false),
    };
    if r == 0 {
        return seed;
    }
    match metric {
        DiskMetric::CityBlock => {
            let b = if flat { Sel::cross(1) } else { weighted_cross() };
            seed.dilate(&b.sum(r))
        }
        DiskMetric::Chessboard => {
            let b = if flat { Sel::square(1) } else { weighted_box() };
            seed.dilate(&b.sum(r))
        }
        DiskMetric::Octagon => {
            let (b1, b2) = if flat {
                (Sel::square(1), Sel::cross(1))
            } else {
                (weighted_box(), weighted_cross())
            };
            if r == 1 {
                b1
            } else {
                seed.dilate(&b1.sum(r / 2)).dilate(&b2.sum(r.div_ceil(2)))
            }
        }
        DiskMetric::Euclidean => {
            let rf = f64::from(r) + 0.5;
            let ri = r as i32;
            let h = height.unwrap_or(0);
            let mut points = Vec::new();
            for dy in -ri..=ri {
                for dx in -ri..=ri {
                    let d2 = f64::from(dy * dy + dx * dx);
                    if d2.sqrt() <= rf {
                        let cap = (rf * rf - d2).max(0.0).sqrt() as i32;
                        points.push(SelPoint::weighted(dy, dx, h.saturating_add(cap)));
                    }
                }
            }
            Sel::from_points(&points, flat)
        }
    }
}
