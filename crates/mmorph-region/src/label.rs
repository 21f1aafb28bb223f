//! Connected component labeling
//!
//! Components are grown with an explicit stack over a padded copy of the
//! image, so connectivity is whatever neighborhood the structuring element
//! describes (4-connected cross, 8-connected square, or anything else).

use crate::error::RegionResult;
use mmorph_core::{Image, PixelType};
use mmorph_morph::{Sel, pad_for_sel, strip_pad};

/// Label the connected components of a binary image.
///
/// Background pixels get 0. Components are numbered 1..K in raster order
/// of their first pixel. Each component grows from that pixel by following
/// the active offsets of `sel` forward, so with a symmetric `sel` it is the
/// usual connected component. An asymmetric `sel` gives a partition that
/// depends on the scan order.
///
/// Non-binary inputs are read as `pixel > 0`.
///
/// The result is `UInt16` when K fits (K <= 65535) and `Int32` otherwise.
///
/// # Arguments
///
/// * `image` - Input image
/// * `sel` - Connectivity; [`Sel::default()`] is 4-connectivity
///
/// # Errors
///
/// Fails only if padding the image fails, which cannot happen for valid
/// inputs.
///
/// # See also
///
/// [`count_components`]
pub fn label(image: &Image, sel: &Sel) -> RegionResult<Image> {
    let foreground = image.binary(1);
    let padded = pad_for_sel(&foreground, sel, 0, 1)?;
    let fg = padded.data();
    let offsets = sel.neighbor_offsets(padded.width() as usize);

    let mut labels = vec![0i32; fg.len()];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_label = 1i32;

    for start in 0..fg.len() {
        if fg[start] == 0 || labels[start] != 0 {
            continue;
        }
        labels[start] = next_label;
        stack.push(start);
        while let Some(p) = stack.pop() {
            for &off in &offsets {
                // Foreground only lives in the interior, so p + off stays in bounds
                let q = (p as isize + off) as usize;
                if fg[q] != 0 && labels[q] == 0 {
                    labels[q] = next_label;
                    stack.push(q);
                }
            }
        }
        next_label += 1;
    }

    let count = next_label - 1;
    tracing::debug!(
        components = count,
        width = image.width(),
        height = image.height(),
        "labeled connected components"
    );

    let ptype = if count <= PixelType::UInt16.max_value() {
        PixelType::UInt16
    } else {
        PixelType::Int32
    };
    let labeled = Image::from_vec(padded.width(), padded.height(), ptype, labels)?;
    Ok(strip_pad(&labeled, sel, 1)?)
}

/// Count the connected components of a binary image.
///
/// # Errors
///
/// See [`label`].
pub fn count_components(image: &Image, sel: &Sel) -> RegionResult<u32> {
    let labeled = label(image, sel)?;
    Ok(labeled.min_max().max.max(0) as u32)
}
