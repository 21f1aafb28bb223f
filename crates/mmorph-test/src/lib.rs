//! mmorph-test - Regression test framework for mmorph
//!
//! Regression tests create a [`RegParams`], record a sequence of numbered
//! comparisons, and assert on [`RegParams::cleanup`] at the end:
//!
//! ```
//! use mmorph_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Fixtures are written inline as text grids with [`parse_image`], or drawn
//! from the deterministic generators in this crate.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print compared images

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use mmorph_core::{Image, PixelType};

/// Parse a whitespace-separated text grid into an image.
///
/// Blank lines are skipped. A `.` is read as 0 so binary fixtures can be
/// drawn legibly.
///
/// # Errors
///
/// Returns [`TestError::Parse`] for tokens that are not integers and
/// [`TestError::Image`] for ragged rows or out-of-range values.
pub fn parse_image(ptype: PixelType, text: &str) -> TestResult<Image> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| match tok {
                "." => Ok(0),
                _ => tok.parse::<i32>().map_err(|e| TestError::Parse {
                    line: lineno + 1,
                    message: format!("{tok:?}: {e}"),
                }),
            })
            .collect::<TestResult<Vec<i32>>>()?;
        rows.push(row);
    }
    Ok(Image::from_rows(ptype, &rows)?)
}

/// Deterministic linear congruential generator for fixture data.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// Uniform value in `0..bound`.
    pub fn below(&mut self, bound: u32) -> u32 {
        ((self.next_u64() >> 33) % u64::from(bound.max(1))) as u32
    }
}

/// Random binary image where roughly `percent` of the pixels are set.
pub fn random_binary(width: u32, height: u32, percent: u32, seed: u64) -> Image {
    let mut rng = SimpleRng::new(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| i32::from(rng.below(100) < percent))
        .collect();
    Image::from_vec(width, height, PixelType::Binary, data)
        .unwrap_or_else(|e| panic!("random_binary({width}, {height}): {e}"))
}

/// Random gray image with values uniform in `0..=max_value`.
pub fn random_gray(width: u32, height: u32, ptype: PixelType, max_value: i32, seed: u64) -> Image {
    let mut rng = SimpleRng::new(seed);
    let bound = max_value.clamp(0, ptype.max_value()) as u32 + 1;
    let data = (0..width as usize * height as usize)
        .map(|_| rng.below(bound) as i32)
        .collect();
    Image::from_vec(width, height, ptype, data)
        .unwrap_or_else(|e| panic!("random_gray({width}, {height}): {e}"))
}
