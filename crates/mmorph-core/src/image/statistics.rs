//! Image statistics

use super::Image;

/// Smallest and largest pixel value of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

impl Image {
    /// Minimum and maximum pixel values.
    pub fn min_max(&self) -> MinMax {
        let (min, max) = self
            .data()
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        MinMax { min, max }
    }

    /// Number of nonzero pixels.
    pub fn count_nonzero(&self) -> u64 {
        self.data().iter().filter(|&&v| v != 0).count() as u64
    }
}
