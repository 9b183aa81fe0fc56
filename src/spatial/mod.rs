//! Pixel grids and the strip operations built on them
//!
//! This module contains:
//! - The owned `Raster` type and its `Pixel` samples
//! - Segmentation of an image into vertical strips
//! - Horizontal composition of strips
//! - Seeded shuffling for producing shredded inputs

/// Horizontal strip concatenation
pub mod compositor;
/// Owned RGB pixel grids
pub mod raster;
/// Vertical strip segmentation
pub mod segment;
/// Seeded strip shuffling
pub mod shred;

pub use raster::{Pixel, Raster};
