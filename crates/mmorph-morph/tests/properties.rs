//! Property tests for the basic operators on arbitrary small images.

use mmorph_core::{Image, PixelType};
use mmorph_morph::{DiskMetric, Sel, SelPoint, close, dilate, erode, open};
use proptest::prelude::*;

fn gray_image() -> impl Strategy<Value = Image> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(0i32..=255, (w * h) as usize)
            .prop_map(move |data| Image::from_vec(w, h, PixelType::UInt8, data).unwrap())
    })
}

fn binary_image() -> impl Strategy<Value = Image> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        proptest::collection::vec(0i32..=1, (w * h) as usize)
            .prop_map(move |data| Image::from_vec(w, h, PixelType::Binary, data).unwrap())
    })
}

fn binary_pair() -> impl Strategy<Value = (Image, Image)> {
    (1u32..12, 1u32..12).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        (
            proptest::collection::vec(0i32..=1, n),
            proptest::collection::vec(0i32..=1, n),
        )
            .prop_map(move |(a, b)| {
                (
                    Image::from_vec(w, h, PixelType::Binary, a).unwrap(),
                    Image::from_vec(w, h, PixelType::Binary, b).unwrap(),
                )
            })
    })
}

fn flat_sel() -> impl Strategy<Value = Sel> {
    prop_oneof![
        (0u32..3).prop_map(Sel::cross),
        (0u32..3).prop_map(Sel::square),
        (1u32..4).prop_map(|r| Sel::disk(r, DiskMetric::Euclidean)),
        (1u32..6, 0.0f64..180.0).prop_map(|(len, theta)| Sel::line(len, theta)),
        proptest::collection::vec((-2i32..=2, -2i32..=2), 1..6).prop_map(|pts| {
            let pts: Vec<SelPoint> = pts.into_iter().map(|(dy, dx)| SelPoint::new(dy, dx)).collect();
            Sel::from_points(&pts, true)
        }),
    ]
}

fn below(a: &Image, b: &Image) -> bool {
    a.data().iter().zip(b.data()).all(|(x, y)| x <= y)
}

proptest! {
    #[test]
    fn erosion_is_dual_of_dilation(img in gray_image(), sel in flat_sel()) {
        let lhs = erode(&img, &sel).unwrap();
        let rhs = dilate(&img.neg(), &sel.reflect()).unwrap().neg();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn opening_and_closing_are_idempotent(img in gray_image(), sel in flat_sel()) {
        let o = open(&img, &sel).unwrap();
        prop_assert_eq!(open(&o, &sel).unwrap(), o.clone());
        prop_assert!(below(&o, &img));
        let c = close(&img, &sel).unwrap();
        prop_assert_eq!(close(&c, &sel).unwrap(), c.clone());
        prop_assert!(below(&img, &c));
    }

    #[test]
    fn dilation_is_increasing((a, b) in binary_pair(), sel in flat_sel()) {
        let wider = a.union(&b).unwrap();
        prop_assert!(below(&dilate(&a, &sel).unwrap(), &dilate(&wider, &sel).unwrap()));
        prop_assert!(below(&erode(&a, &sel).unwrap(), &erode(&wider, &sel).unwrap()));
    }

    #[test]
    fn binary_results_stay_binary(img in binary_image(), sel in flat_sel()) {
        for out in [dilate(&img, &sel).unwrap(), erode(&img, &sel).unwrap()] {
            prop_assert_eq!(out.pixel_type(), PixelType::Binary);
            prop_assert!(out.data().iter().all(|&v| v == 0 || v == 1));
        }
    }
}
