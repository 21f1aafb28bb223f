//! mmorph-morph - Morphological operations on integer images
//!
//! This crate provides:
//!
//! - Structuring elements ([`Sel`]), flat or weighted, with standard shapes
//!   (crosses, squares, disks, lines) and their algebra (translation,
//!   reflection, rotation, union, Minkowski addition)
//! - The reduction primitive: weighted [`dilate`] and its dual [`erode`],
//!   plus [`open`] and [`close`]
//! - Padding helpers for neighborhood scans
//! - Distance transforms (graph and approximate Euclidean, plain,
//!   conditional and geodesic)

mod basic;
pub mod distance;
mod error;
pub mod pad;
pub mod sel;
mod sel_ops;
mod shapes;

pub use basic::{close, dilate, erode, open};
pub use distance::{DistanceMetric, conditional_distance, distance, geodesic_distance};
pub use error::{MorphError, MorphResult};
pub use pad::{pad_for_sel, strip_pad};
pub use sel::{Sel, SelPoint};
pub use sel_ops::RotateDirection;
pub use shapes::DiskMetric;
