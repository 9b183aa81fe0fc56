//! Horizontal concatenation of strips

use crate::io::error::{Result, UnshredError, dimension_mismatch, ensure_same_height};
use crate::spatial::raster::Raster;
use ndarray::{Axis, concatenate};

/// Place `right` immediately to the right of `left`
///
/// The result is `left.width() + right.width()` wide with rows aligned.
///
/// # Errors
///
/// Returns an error if the strips differ in height
pub fn combine(left: &Raster, right: &Raster) -> Result<Raster> {
    ensure_same_height("combine", left.height(), right.height())?;
    let joined = concatenate(Axis(1), &[left.view(), right.view()]).map_err(|_shape_error| {
        dimension_mismatch("combine", left.height(), right.height())
    })?;
    Raster::from_array(joined)
}

/// Join a sequence of strips left to right in the given order
///
/// # Errors
///
/// Returns an error if `strips` is empty or the strips differ in height
pub fn combine_all(strips: &[Raster]) -> Result<Raster> {
    let (first, rest) = strips.split_first().ok_or(UnshredError::EmptyCollection {
        operation: "combine_all",
    })?;
    for strip in rest {
        ensure_same_height("combine_all", first.height(), strip.height())?;
    }

    let views: Vec<_> = strips.iter().map(Raster::view).collect();
    let joined = concatenate(Axis(1), &views).map_err(|_shape_error| {
        dimension_mismatch("combine_all", first.height(), first.height())
    })?;
    Raster::from_array(joined)
}
