//! Greedy reconstruction of images that were cut into equal-width vertical
//! strips and shuffled
//!
//! The source image is segmented into strips, every ordered pair of strips is
//! scored by how alike the pixels on either side of the candidate seam are,
//! and the best pair is joined. Rounds repeat until one strip remains.

#![deny(unsafe_code)]

/// Strip collection, seam scoring and the greedy merge loop
pub mod algorithm;
/// Colour space conversion and pixel similarity metrics
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Numeric helpers for distance computations
pub mod math;
/// Rasters and strip segmentation, composition and shuffling
pub mod spatial;

pub use algorithm::engine::{ReconstructionConfig, ReconstructionEngine, reconstruct};
pub use color::metric::{Metric, SimilarityMetric};
pub use io::error::{Result, UnshredError};
pub use spatial::raster::{Pixel, Raster};
