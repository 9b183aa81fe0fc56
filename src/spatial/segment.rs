//! Cutting an image into equal-width vertical strips

use crate::io::error::{Result, invalid_dimension};
use crate::spatial::raster::Raster;
use ndarray::s;
use tracing::debug;

/// Number of whole strips of `strip_width` that fit in `width`
pub const fn strip_count(width: usize, strip_width: usize) -> usize {
    if strip_width == 0 { 0 } else { width / strip_width }
}

/// Split `raster` into full-height strips of `strip_width` columns
///
/// Strip `i` covers columns `[i * strip_width, (i + 1) * strip_width)`.
/// Columns past the last whole strip are dropped.
///
/// # Errors
///
/// Returns an error if `strip_width` is zero or wider than the raster
pub fn segment(raster: &Raster, strip_width: usize) -> Result<Vec<Raster>> {
    if strip_width == 0 {
        return Err(invalid_dimension(
            "strip_width",
            strip_width,
            &"strips must be at least one pixel wide",
        ));
    }
    if raster.width() < strip_width {
        return Err(invalid_dimension(
            "strip_width",
            strip_width,
            &format!("image is only {}px wide", raster.width()),
        ));
    }

    let count = strip_count(raster.width(), strip_width);
    let pixels = raster.view();

    let strips = (0..count)
        .map(|index| {
            let start = index * strip_width;
            Raster::from_array(pixels.slice(s![.., start..start + strip_width]).to_owned())
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        strips = count,
        strip_width,
        dropped_columns = raster.width() % strip_width,
        "segmented image"
    );

    Ok(strips)
}
