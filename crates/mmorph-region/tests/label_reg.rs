//! Connected component labeling regression test
//!
//! Labels random binary images and compares against a union-find
//! reference numbered in raster order, and checks that turning both the
//! image and a symmetric connectivity by 180 degrees keeps the partition.
//!
//! Run with:
//! ```
//! cargo test -p mmorph-region --test label_reg
//! ```

use mmorph_core::{Image, PixelType};
use mmorph_morph::{RotateDirection, Sel, SelPoint};
use mmorph_region::{count_components, label};
use mmorph_test::{RegParams, parse_image, random_binary};
use std::collections::HashMap;

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

/// Union-find labeling; `sel` must be symmetric.
fn reference_label(image: &Image, sel: &Sel) -> Vec<i32> {
    let (w, h) = (image.width() as i32, image.height() as i32);
    let fg: Vec<bool> = image.data().iter().map(|&v| v > 0).collect();
    let mut parent: Vec<usize> = (0..fg.len()).collect();
    let points = sel.points();
    for y in 0..h {
        for x in 0..w {
            let p = (y * w + x) as usize;
            if !fg[p] {
                continue;
            }
            for o in &points {
                let (qy, qx) = (y + o.dy, x + o.dx);
                if (0..h).contains(&qy) && (0..w).contains(&qx) {
                    let q = (qy * w + qx) as usize;
                    if fg[q] {
                        let (a, b) = (find(&mut parent, p), find(&mut parent, q));
                        parent[a.max(b)] = a.min(b);
                    }
                }
            }
        }
    }

    let mut ids = vec![0i32; fg.len()];
    let mut out = vec![0i32; fg.len()];
    let mut next = 1;
    for p in 0..fg.len() {
        if fg[p] {
            let root = find(&mut parent, p);
            if ids[root] == 0 {
                ids[root] = next;
                next += 1;
            }
            out[p] = ids[root];
        }
    }
    out
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    let wide = Sel::from_flat_rows(&[[1u8, 1, 1, 1, 1]]).unwrap();
    let sels = [Sel::cross(1), Sel::square(1), Sel::cross(2), wide];

    for (seed, percent) in [(1, 30), (2, 45), (3, 55), (4, 70)] {
        let img = random_binary(37, 29, percent, seed);
        for sel in &sels {
            let labels = label(&img, sel).unwrap();
            rp.compare_bool(true, labels.pixel_type() == PixelType::UInt16);
            let expected = reference_label(&img, sel);
            let expected =
                Image::from_vec(img.width(), img.height(), PixelType::UInt16, expected).unwrap();
            rp.compare_images_typed(&expected, &labels);
            rp.compare_values(
                f64::from(expected.min_max().max),
                f64::from(count_components(&img, sel).unwrap()),
                0.0,
            );
        }

        // More connectivity never splits components
        let n4 = count_components(&img, &Sel::cross(1)).unwrap();
        let n8 = count_components(&img, &Sel::square(1)).unwrap();
        rp.compare_bool(true, n8 <= n4);

        // Foreground and labeled pixels coincide
        let labels = label(&img, &Sel::square(1)).unwrap();
        rp.compare_images(&img, &labels.binary(1));
    }

    assert!(rp.cleanup());
}

/// Image turned by 180 degrees (row-major data reversed).
fn turn_half(image: &Image) -> Image {
    let mut data = image.data().to_vec();
    data.reverse();
    Image::from_vec(image.width(), image.height(), image.pixel_type(), data).unwrap()
}

/// True when two label images describe the same partition up to renumbering.
fn same_partition(a: &Image, b: &Image) -> bool {
    let mut forward = HashMap::new();
    let mut backward = HashMap::new();
    a.data().iter().zip(b.data()).all(|(&x, &y)| {
        (x == 0) == (y == 0)
            && *forward.entry(x).or_insert(y) == y
            && *backward.entry(y).or_insert(x) == x
    })
}

#[test]
fn label_rotation_reg() {
    let mut rp = RegParams::new("label_rotation");

    let irregular = Sel::from_points(
        &[
            SelPoint::new(0, 0),
            SelPoint::new(0, 2),
            SelPoint::new(0, -2),
            SelPoint::new(1, 1),
            SelPoint::new(-1, -1),
        ],
        true,
    );
    let sels = [Sel::cross(1), Sel::square(1), irregular];

    for (seed, percent) in [(5, 40), (6, 55)] {
        let img = random_binary(23, 17, percent, seed);
        for sel in &sels {
            let labels = label(&img, sel).unwrap();
            let turned_sel = sel.rotate(180.0, RotateDirection::Clockwise);
            let turned = label(&turn_half(&img), &turned_sel).unwrap();
            let back = turn_half(&turned);
            rp.compare_bool(true, same_partition(&labels, &back));
            rp.compare_values(
                f64::from(labels.min_max().max),
                f64::from(back.min_max().max),
                0.0,
            );
        }
    }

    // Renumbering check itself tells partitions apart
    let a = parse_image(PixelType::UInt16, "1 1 0 2").unwrap();
    let b = parse_image(PixelType::UInt16, "2 2 0 1").unwrap();
    let c = parse_image(PixelType::UInt16, "1 2 0 2").unwrap();
    rp.compare_bool(true, same_partition(&a, &b));
    rp.compare_bool(false, same_partition(&a, &c));

    assert!(rp.cleanup());
}

#[test]
fn label_shapes_reg() {
    let mut rp = RegParams::new("label_shapes");

    let img = parse_image(
        PixelType::Binary,
        "
        1 1 . . 1 . 1
        1 . . 1 1 . 1
        . . 1 . . . 1
        . 1 . . 1 1 .
        1 . . . 1 . .
        ",
    )
    .unwrap();

    let expected = parse_image(
        PixelType::UInt16,
        "
        1 1 . . 2 . 3
        1 . . 2 2 . 3
        . . 4 . . . 3
        . 5 . . 6 6 .
        7 . . . 6 . .
        ",
    )
    .unwrap();
    rp.compare_images_typed(&expected, &label(&img, &Sel::cross(1)).unwrap());

    let expected = parse_image(
        PixelType::UInt16,
        "
        1 1 . . 2 . 3
        1 . . 2 2 . 3
        . . 2 . . . 3
        . 2 . . 3 3 .
        2 . . . 3 . .
        ",
    )
    .unwrap();
    rp.compare_images_typed(&expected, &label(&img, &Sel::square(1)).unwrap());

    assert!(rp.cleanup());
}
