//! Marker-controlled watershed segmentation
//!
//! The elevation image is treated as a topographic surface that is flooded
//! from labeled markers. Pixels are settled in order of increasing cost
//! with a priority queue; each settled pixel offers its label to its
//! unsettled neighbors, which take it when the offer lowers their cost.
//!
//! Equal-cost entries leave the queue in insertion order, which makes the
//! result deterministic on plateaus.

use crate::error::{RegionError, RegionResult};
use crate::label::label;
use mmorph_core::{Error, Image, PixelType};
use mmorph_morph::{Sel, pad_for_sel, strip_pad};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Options for watershed segmentation
#[derive(Debug, Clone)]
pub struct WatershedOptions {
    /// Connectivity used for labeling markers and for flooding
    pub sel: Sel,
    /// Also compute the binary watershed line image
    pub return_lines: bool,
    /// Generalized Voronoi mode: a neighbor's cost is the cost of the pixel
    /// offering its label rather than its own elevation
    pub gvoronoi: bool,
}

impl Default for WatershedOptions {
    fn default() -> Self {
        Self {
            sel: Sel::default(),
            return_lines: false,
            gvoronoi: false,
        }
    }
}

impl WatershedOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connectivity structuring element
    pub fn with_sel(mut self, sel: Sel) -> Self {
        self.sel = sel;
        self
    }

    /// Request the watershed line image
    pub fn with_lines(mut self, return_lines: bool) -> Self {
        self.return_lines = return_lines;
        self
    }

    /// Enable generalized Voronoi flooding
    pub fn with_gvoronoi(mut self, gvoronoi: bool) -> Self {
        self.gvoronoi = gvoronoi;
        self
    }
}

/// Result of [`cwatershed`]
#[derive(Debug, Clone)]
pub struct WatershedOutput {
    /// Label of the basin each pixel was flooded from; 0 if never reached
    pub labels: Image,
    /// Binary watershed lines, when requested
    pub lines: Option<Image>,
}

/// Per-pixel flooding state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PixelStatus {
    /// Not yet settled
    Open,
    /// Settled; cost and label are final
    Permanent,
    /// Padding frame; never visited
    Border,
}

/// Priority queue entry, ordered so `BinaryHeap` pops the lowest cost
/// first and, among equal costs, the earliest push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FloodEntry {
    cost: i64,
    seq: u64,
    index: usize,
}

impl Ord for FloodEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FloodEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Marker-controlled watershed.
///
/// # Arguments
///
/// * `elevation` - Surface to flood; any gray-level pixel type
/// * `markers` - Seeds. A binary image is labeled first with `options.sel`;
///   any other type is used directly as labels (pixels > 0 are seeds, the
///   rest start unlabeled)
/// * `options` - Connectivity, line output and flooding mode
///
/// Marker pixels start with their own elevation as cost; every other pixel
/// starts at the elevation type's maximum and is only reached when an offer
/// falls strictly below it. A 0/1 marker image that is not binary therefore
/// acts as a single region labeled 1.
///
/// A settled pixel whose already-settled neighbor carries a different label
/// (and is not itself a line pixel) is marked in the line image.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the inputs differ in size and
/// [`RegionError::UnsupportedType`] for a binary elevation image.
pub fn cwatershed(
    elevation: &Image,
    markers: &Image,
    options: &WatershedOptions,
) -> RegionResult<WatershedOutput> {
    if !elevation.sizes_equal(markers) {
        return Err(Error::DimensionMismatch {
            expected: (elevation.width(), elevation.height()),
            actual: (markers.width(), markers.height()),
        }
        .into());
    }
    if elevation.is_binary() {
        return Err(RegionError::UnsupportedType {
            expected: "gray-level elevation",
            actual: elevation.pixel_type(),
        });
    }
    let sel = &options.sel;
    let seeds = if markers.is_binary() {
        label(markers, sel)?
    } else {
        markers.clone()
    };

    let f = pad_for_sel(elevation, sel, 0, 1)?;
    let y = pad_for_sel(&seeds, sel, 0, 1)?;
    let (pw, ph) = (f.width() as usize, f.height() as usize);
    let (ry, rx) = sel.half_extent();
    let (ry, rx) = (ry as usize, rx as usize);

    let elev = f.data();
    let mut labels: Vec<i32> = y.data().iter().map(|&l| l.max(0)).collect();
    let mut status: Vec<PixelStatus> = (0..elev.len())
        .map(|i| {
            let (row, col) = (i / pw, i % pw);
            if row < ry || row >= ph - ry || col < rx || col >= pw - rx {
                PixelStatus::Border
            } else {
                PixelStatus::Open
            }
        })
        .collect();
    let max_cost = i64::from(elevation.pixel_type().max_value());
    let mut cost = vec![max_cost; elev.len()];
    let mut lines = options.return_lines.then(|| vec![0i32; elev.len()]);
    let offsets = sel.neighbor_offsets(pw);

    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;
    for (i, &l) in labels.iter().enumerate() {
        if l > 0 {
            cost[i] = i64::from(elev[i]);
            heap.push(FloodEntry {
                cost: cost[i],
                seq,
                index: i,
            });
            seq += 1;
        }
    }
    let seed_count = seq;

    let mut stale = 0u64;
    while let Some(FloodEntry { index: p, .. }) = heap.pop() {
        if status[p] == PixelStatus::Permanent {
            stale += 1;
            continue;
        }
        status[p] = PixelStatus::Permanent;
        for &off in &offsets {
            // p is interior, so p + off is inside the padded buffer
            let q = (p as isize + off) as usize;
            match status[q] {
                PixelStatus::Border => {}
                PixelStatus::Open => {
                    let offer = if options.gvoronoi {
                        cost[p]
                    } else {
                        i64::from(elev[q])
                    };
                    if offer < cost[q] {
                        cost[q] = offer;
                        labels[q] = labels[p];
                        heap.push(FloodEntry {
                            cost: offer,
                            seq,
                            index: q,
                        });
                        seq += 1;
                    }
                }
                PixelStatus::Permanent => {
                    if let Some(lines) = lines.as_mut() {
                        if labels[q] != labels[p] && lines[q] == 0 {
                            lines[p] = 1;
                        }
                    }
                }
            }
        }
    }
    tracing::debug!(
        seeds = seed_count,
        pushes = seq,
        stale_pops = stale,
        gvoronoi = options.gvoronoi,
        "watershed flooding complete"
    );

    let labels = Image::from_vec(y.width(), y.height(), seeds.pixel_type(), labels)?;
    let labels = strip_pad(&labels, sel, 1)?;
    let lines = match lines {
        Some(data) => {
            let img = Image::from_vec(f.width(), f.height(), PixelType::Binary, data)?;
            Some(strip_pad(&img, sel, 1)?)
        }
        None => None,
    };
    Ok(WatershedOutput { labels, lines })
}
