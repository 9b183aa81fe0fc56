//! Seeded shuffling of strips, used to produce inputs for reconstruction

use crate::io::error::Result;
use crate::spatial::compositor::combine_all;
use crate::spatial::raster::Raster;
use crate::spatial::segment::segment;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Segment `raster` and return its strips in a seeded random order
///
/// # Errors
///
/// Returns an error if `strip_width` is zero or wider than the raster
pub fn shuffled_strips(raster: &Raster, strip_width: usize, seed: u64) -> Result<Vec<Raster>> {
    let mut strips = segment(raster, strip_width)?;
    let mut rng = StdRng::seed_from_u64(seed);
    strips.shuffle(&mut rng);
    Ok(strips)
}

/// Shred `raster` into strips and reassemble them in a seeded random order
///
/// Trailing columns that do not fill a whole strip are dropped.
///
/// # Errors
///
/// Returns an error if `strip_width` is zero or wider than the raster
pub fn shred(raster: &Raster, strip_width: usize, seed: u64) -> Result<Raster> {
    combine_all(&shuffled_strips(raster, strip_width, seed)?)
}
