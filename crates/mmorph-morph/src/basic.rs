//! Basic morphological operations
//!
//! Dilation, erosion, opening and closing for images of every supported
//! pixel type, with flat or weighted structuring elements.
//!
//! Pixels outside the image never contribute: dilation ignores source
//! positions that fall off the image, and erosion (its dual) ignores them
//! as well rather than treating them as background.

use crate::{MorphResult, Sel};
use mmorph_core::{Image, ImageMut};

/// Dilate an image by a structuring element.
///
/// For every pixel `p`,
/// `out(p) = max { add_weight(in(p - o), w) : (o, w) in sel, p - o inside }`,
/// where [`add_weight`](mmorph_core::PixelType::add_weight) saturates to the
/// pixel type and keeps type-minimum pixels absorbing. A pixel that no
/// element reaches, and every pixel when the SEL is empty, gets the type
/// minimum.
///
/// The source image is shifted by each SEL offset and max-accumulated into
/// the output.
///
/// # Examples
///
/// ```
/// use mmorph_core::{Image, PixelType};
/// use mmorph_morph::{Sel, dilate};
///
/// let img = Image::from_rows(PixelType::Binary, &[[0, 0, 1, 0, 0]]).unwrap();
/// let out = dilate(&img, &Sel::default()).unwrap();
/// assert_eq!(out.data(), &[0, 1, 1, 1, 0]);
/// ```
///
/// # See also
///
/// [`erode`], [`open`], [`close`]
pub fn dilate(image: &Image, sel: &Sel) -> MorphResult<Image> {
    let ptype = image.pixel_type();
    let w = image.width() as i64;
    let h = image.height() as i64;
    let mut out = ImageMut::new_filled(image.width(), image.height(), ptype, ptype.min_value())?;
    let src = image.data();
    let dst = out.data_mut();

    for p in sel.points() {
        let (dy, dx) = (i64::from(p.dy), i64::from(p.dx));
        // Destination rows/cols whose source p - o is inside the image
        let (y0, y1) = (dy.max(0), (h + dy).min(h));
        let (x0, x1) = (dx.max(0), (w + dx).min(w));
        if y0 >= y1 || x0 >= x1 {
            continue;
        }
        for y in y0..y1 {
            let src_row = ((y - dy) * w) as usize;
            let dst_row = (y * w) as usize;
            for x in x0..x1 {
                let v = ptype.add_weight(src[src_row + (x - dx) as usize], p.weight);
                let d = &mut dst[dst_row + x as usize];
                if v > *d {
                    *d = v;
                }
            }
        }
    }
    Ok(out.into())
}

/// Erode an image by a structuring element.
///
/// Defined by duality: `erode(f, b) = neg(dilate(neg(f), reflect(b)))`,
/// so for flat elements `out(p) = min { in(p + o) : o in sel, p + o inside }`
/// and weights are subtracted. A pixel that no element reaches gets the
/// type maximum.
///
/// # See also
///
/// [`dilate`], [`open`], [`close`]
pub fn erode(image: &Image, sel: &Sel) -> MorphResult<Image> {
    Ok(dilate(&image.neg(), &sel.reflect())?.neg())
}

/// Morphological opening: erosion followed by dilation.
///
/// Anti-extensive and idempotent for flat elements.
pub fn open(image: &Image, sel: &Sel) -> MorphResult<Image> {
    dilate(&erode(image, sel)?, sel)
}

/// Morphological closing: dilation followed by erosion.
///
/// Extensive and idempotent for flat elements.
pub fn close(image: &Image, sel: &Sel) -> MorphResult<Image> {
    erode(&dilate(image, sel)?, sel)
}
