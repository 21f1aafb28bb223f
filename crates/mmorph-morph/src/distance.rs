//! Distance transforms by iterated erosion
//!
//! The distance of a foreground pixel to the background is computed by
//! starting the foreground at "infinity" (the working type's maximum) and
//! the background at 0, then eroding with a weighted structuring element
//! until nothing changes. Each erosion lets the known distances grow by one
//! step of the metric.
//!
//! - [`DistanceMetric::Graph`]: the connectivity SEL with weight -1 on every
//!   active cell except the origin, so each erosion adds one graph step
//! - [`DistanceMetric::Euclidean`] / [`DistanceMetric::EuclideanSquared`]:
//!   iteration `i` erodes by a 3x3 SEL with orthogonal weight `-2i + 1` and
//!   diagonal weight `-4i + 2`, accumulating squared Euclidean distances
//!
//! The conditional variant holds pixels outside a mask at infinity after
//! every erosion, so distances only propagate through the mask.

use crate::{MorphError, MorphResult, Sel, SelPoint, erode};
use mmorph_core::{Error, Image, PixelType};

/// Metric used by the distance transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Number of SEL steps to the background
    Graph,
    /// Approximate Euclidean distance, rounded to the nearest integer
    #[default]
    Euclidean,
    /// Approximate squared Euclidean distance
    EuclideanSquared,
}

impl DistanceMetric {
    fn working_type(self) -> PixelType {
        match self {
            Self::Graph => PixelType::UInt16,
            Self::Euclidean | Self::EuclideanSquared => PixelType::Int32,
        }
    }
}

/// Distance of each foreground pixel to the nearest background pixel.
///
/// Background pixels get 0. With [`DistanceMetric::Graph`], `sel` gives the
/// connectivity; the Euclidean metrics always use 8-connected propagation
/// and ignore it. Foreground pixels that cannot reach any background (an
/// all-foreground image) keep the output type's maximum.
///
/// Output is `UInt16` for `Graph` and `Euclidean`, `Int32` for
/// `EuclideanSquared`.
///
/// # Examples
///
/// ```
/// use mmorph_core::{Image, PixelType};
/// use mmorph_morph::{DistanceMetric, Sel, distance};
///
/// let img = Image::from_rows(PixelType::Binary, &[[0, 1, 1, 1, 1, 1, 0]]).unwrap();
/// let d = distance(&img, &Sel::default(), DistanceMetric::Graph).unwrap();
/// assert_eq!(d.data(), &[0, 1, 2, 3, 2, 1, 0]);
/// ```
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedType`] if `image` is not binary.
pub fn distance(image: &Image, sel: &Sel, metric: DistanceMetric) -> MorphResult<Image> {
    distance_impl(image, None, sel, metric)
}

/// Distance to the background measured inside a mask.
///
/// Propagation never passes through pixels where `mask` is 0, and the
/// result is 0 there. Foreground pixels cut off from every background pixel
/// keep the output type's maximum.
///
/// # Errors
///
/// - [`MorphError::UnsupportedType`] if `image` or `mask` is not binary
/// - [`Error::DimensionMismatch`] if the sizes differ
pub fn conditional_distance(
    image: &Image,
    mask: &Image,
    sel: &Sel,
    metric: DistanceMetric,
) -> MorphResult<Image> {
    distance_impl(image, Some(mask), sel, metric)
}

/// Graph distance from a marker, measured inside a mask.
///
/// Marker pixels get 0, mask pixels `k` steps away from the marker get `k`,
/// and pixels outside the mask or unreachable from the marker get 65535.
/// The result is `UInt16`.
///
/// # Errors
///
/// - [`MorphError::UnsupportedType`] if either input is not binary
/// - [`Error::DimensionMismatch`] if the sizes differ
/// - [`MorphError::NotImplemented`] for the Euclidean metrics
pub fn geodesic_distance(
    mask: &Image,
    marker: &Image,
    sel: &Sel,
    metric: DistanceMetric,
) -> MorphResult<Image> {
    check_binary(mask)?;
    check_binary(marker)?;
    check_sizes(mask, marker)?;
    if metric != DistanceMetric::Graph {
        return Err(MorphError::NotImplemented(format!(
            "geodesic distance with the {metric:?} metric"
        )));
    }

    let outside = mask.neg();
    let unmarked = marker.neg();
    let mut dist = unmarked.gray(PixelType::UInt16, Some(1))?;
    let mut front = unmarked.union(&outside)?;
    let mut steps = 0u32;
    loop {
        let next = erode(&front, sel)?.union(&outside)?;
        if next == front {
            break;
        }
        dist = dist.add_saturated(&next.gray(PixelType::UInt16, Some(1))?)?;
        front = next;
        steps += 1;
    }
    tracing::debug!(steps, "geodesic distance converged");
    Ok(dist.union(&front.gray(PixelType::UInt16, None)?)?)
}

fn check_binary(image: &Image) -> MorphResult<()> {
    if !image.is_binary() {
        return Err(MorphError::UnsupportedType {
            expected: "binary",
            actual: image.pixel_type(),
        });
    }
    Ok(())
}

fn check_sizes(a: &Image, b: &Image) -> MorphResult<()> {
    if !a.sizes_equal(b) {
        return Err(Error::DimensionMismatch {
            expected: (a.width(), a.height()),
            actual: (b.width(), b.height()),
        }
        .into());
    }
    Ok(())
}

/// Connectivity SEL turned into a unit-cost step: -1 off the origin, 0 on it.
fn graph_step(sel: &Sel) -> Sel {
    let mut points: Vec<SelPoint> = sel
        .points()
        .into_iter()
        .filter(|p| (p.dy, p.dx) != (0, 0))
        .map(|p| SelPoint::weighted(p.dy, p.dx, -1))
        .collect();
    points.push(SelPoint::weighted(0, 0, 0));
    Sel::from_points(&points, false)
}

/// 3x3 step adding the squared-distance increments of iteration `i`.
fn euclidean_step(i: u32) -> Sel {
    let i = i64::from(i);
    let orth = (-2 * i + 1).max(i64::from(Sel::EXCLUDED + 1)) as i32;
    let diag = (-4 * i + 2).max(i64::from(Sel::EXCLUDED + 1)) as i32;
    Sel::from_points(
        &[
            SelPoint::weighted(-1, -1, diag),
            SelPoint::weighted(-1, 0, orth),
            SelPoint::weighted(-1, 1, diag),
            SelPoint::weighted(0, -1, orth),
            SelPoint::weighted(0, 0, 0),
            SelPoint::weighted(0, 1, orth),
            SelPoint::weighted(1, -1, diag),
            SelPoint::weighted(1, 0, orth),
            SelPoint::weighted(1, 1, diag),
        ],
        false,
    )
}

fn distance_impl(
    image: &Image,
    mask: Option<&Image>,
    sel: &Sel,
    metric: DistanceMetric,
) -> MorphResult<Image> {
    check_binary(image)?;
    let work = metric.working_type();
    let inf = work.max_value();

    let barrier = match mask {
        Some(m) => {
            check_binary(m)?;
            check_sizes(image, m)?;
            Some(m.map_pixels(work, |v| if v != 0 { 0 } else { i64::from(inf) }))
        }
        None => None,
    };

    let mut field = image.map_pixels(work, |v| if v != 0 { i64::from(inf) } else { 0 });
    if let Some(b) = &barrier {
        field = field.union(b)?;
    }

    let graph = (metric == DistanceMetric::Graph).then(|| graph_step(sel));
    let mut iterations = 0u32;
    loop {
        iterations += 1;
        let next = match &graph {
            Some(step) => erode(&field, step)?,
            None => erode(&field, &euclidean_step(iterations))?,
        };
        let next = match &barrier {
            Some(b) => next.union(b)?,
            None => next,
        };
        if next == field {
            break;
        }
        field = next;
    }
    tracing::debug!(iterations, ?metric, "distance transform converged");

    let out = match metric {
        DistanceMetric::Graph | DistanceMetric::EuclideanSquared => field,
        DistanceMetric::Euclidean => field.map_pixels(PixelType::UInt16, |v| {
            if v == inf {
                i64::from(PixelType::UInt16.max_value())
            } else {
                f64::from(v).sqrt().round() as i64
            }
        }),
    };

    match mask {
        Some(m) => {
            let data = out
                .data()
                .iter()
                .zip(m.data())
                .map(|(&v, &inside)| if inside != 0 { v } else { 0 })
                .collect();
            Ok(Image::from_vec(out.width(), out.height(), out.pixel_type(), data)?)
        }
        None => Ok(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary<R: AsRef<[i32]>>(rows: &[R]) -> Image {
        Image::from_rows(PixelType::Binary, rows).unwrap()
    }

    #[test]
    fn test_graph_square() {
        let mut rows = vec![vec![0; 7]; 7];
        for row in rows.iter_mut().take(6).skip(1) {
            row[1..6].fill(1);
        }
        let img = binary(&rows);
        let d = distance(&img, &Sel::default(), DistanceMetric::Graph).unwrap();
        assert_eq!(d.pixel_type(), PixelType::UInt16);
        assert_eq!(d.get_pixel(3, 3), Some(3));
        assert_eq!(d.get_pixel(1, 1), Some(1));
        assert_eq!(d.get_pixel(2, 3), Some(2));
        assert_eq!(d.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_all_background_and_foreground() {
        let zeros = Image::new(4, 3, PixelType::Binary).unwrap();
        let d = distance(&zeros, &Sel::default(), DistanceMetric::Graph).unwrap();
        assert_eq!(d.count_nonzero(), 0);

        let ones = Image::new_filled(4, 3, PixelType::Binary, 1).unwrap();
        let d = distance(&ones, &Sel::default(), DistanceMetric::Euclidean).unwrap();
        assert!(d.data().iter().all(|&v| v == 65535));
    }

    #[test]
    fn test_euclidean_squared() {
        let img = binary(&[
            [0, 1, 1, 1],
            [1, 1, 1, 1],
            [1, 1, 1, 1],
        ]);
        let d = distance(&img, &Sel::default(), DistanceMetric::EuclideanSquared).unwrap();
        assert_eq!(d.pixel_type(), PixelType::Int32);
        assert_eq!(d.row(0), &[0, 1, 4, 9]);
        assert_eq!(d.row(1), &[1, 2, 5, 10]);
        assert_eq!(d.row(2), &[4, 5, 8, 13]);

        let e = distance(&img, &Sel::default(), DistanceMetric::Euclidean).unwrap();
        assert_eq!(e.row(2), &[2, 2, 3, 4]);
    }

    #[test]
    fn test_graph_uses_sel_connectivity() {
        let img = binary(&[[0, 1, 1], [1, 1, 1], [1, 1, 1]]);
        let cross = distance(&img, &Sel::cross(1), DistanceMetric::Graph).unwrap();
        let square = distance(&img, &Sel::square(1), DistanceMetric::Graph).unwrap();
        assert_eq!(cross.get_pixel(2, 2), Some(4));
        assert_eq!(square.get_pixel(2, 2), Some(2));
    }

    #[test]
    fn test_conditional_distance() {
        let img = binary(&[[0, 1, 1, 1, 1, 0]]);
        let mask = binary(&[[1, 1, 1, 0, 1, 1]]);
        let d = conditional_distance(&img, &mask, &Sel::default(), DistanceMetric::Graph).unwrap();
        assert_eq!(d.data(), &[0, 1, 2, 0, 1, 0]);
    }

    #[test]
    fn test_conditional_unreachable() {
        let img = binary(&[[0, 1, 1, 1]]);
        let mask = binary(&[[1, 0, 1, 1]]);
        let d = conditional_distance(&img, &mask, &Sel::default(), DistanceMetric::Graph).unwrap();
        assert_eq!(d.data(), &[0, 0, 65535, 65535]);
    }

    #[test]
    fn test_geodesic_distance() {
        let mask = binary(&[[1, 1, 0, 1, 1, 1]]);
        let marker = binary(&[[0, 0, 0, 1, 0, 0]]);
        let d = geodesic_distance(&mask, &marker, &Sel::default(), DistanceMetric::Graph).unwrap();
        assert_eq!(d.data(), &[65535, 65535, 65535, 0, 1, 2]);
        assert!(matches!(
            geodesic_distance(&mask, &marker, &Sel::default(), DistanceMetric::Euclidean),
            Err(MorphError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_type_errors() {
        let gray = Image::new(3, 3, PixelType::UInt8).unwrap();
        let bin = Image::new(3, 3, PixelType::Binary).unwrap();
        let small = Image::new(2, 3, PixelType::Binary).unwrap();
        assert!(matches!(
            distance(&gray, &Sel::default(), DistanceMetric::Graph),
            Err(MorphError::UnsupportedType { .. })
        ));
        assert!(matches!(
            conditional_distance(&bin, &small, &Sel::default(), DistanceMetric::Graph),
            Err(MorphError::Core(Error::DimensionMismatch { .. }))
        ));
    }
}
