//! Padding for neighborhood scans
//!
//! Region-growing algorithms address neighbors through flat buffer offsets
//! (see [`Sel::neighbor_offsets`]). Padding the image by the SEL's half
//! extent guarantees every neighbor of an interior pixel is a valid index.

use crate::{MorphError, MorphResult, Sel};
use mmorph_core::Image;

/// Pad `image` by `scale` times the SEL half extents on every side.
///
/// The frame is `scale * (height / 2)` rows on top and bottom and
/// `scale * (width / 2)` columns on left and right, filled with `value`.
///
/// # Errors
///
/// Returns an error if `value` does not fit the image's pixel type, or
/// [`MorphError::InvalidParameters`] if the frame width overflows.
pub fn pad_for_sel(image: &Image, sel: &Sel, value: i32, scale: u32) -> MorphResult<Image> {
    let (ry, rx) = frame(sel, scale)?;
    Ok(image.add_border_general(rx, rx, ry, ry, value)?)
}

/// Remove the frame added by [`pad_for_sel`] with the same SEL and scale.
///
/// # Errors
///
/// Returns an error if the image is too small to hold the frame.
pub fn strip_pad(image: &Image, sel: &Sel, scale: u32) -> MorphResult<Image> {
    let (ry, rx) = frame(sel, scale)?;
    Ok(image.remove_border_general(rx, rx, ry, ry)?)
}

fn frame(sel: &Sel, scale: u32) -> MorphResult<(u32, u32)> {
    let (ry, rx) = sel.half_extent();
    match (ry.checked_mul(scale), rx.checked_mul(scale)) {
        (Some(ry), Some(rx)) => Ok((ry, rx)),
        _ => Err(MorphError::InvalidParameters(format!(
            "padding of {scale}x the SEL half extents overflows"
        ))),
    }
}
