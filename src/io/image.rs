//! Decoding source images into rasters and encoding results

use crate::io::error::{Result, UnshredError};
use crate::spatial::raster::Raster;
use std::path::Path;
use tracing::info;

/// Decode an image file into an RGB raster
///
/// Any alpha channel is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a supported image format
/// - The image has no pixels
pub fn load_raster(path: &Path) -> Result<Raster> {
    let decoded = image::open(path).map_err(|e| UnshredError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raster = Raster::from_rgb_image(&decoded.to_rgb8())?;

    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "loaded image"
    );
    Ok(raster)
}

/// Encode a raster to `path`, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| UnshredError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster
        .to_rgb_image()
        .save(path)
        .map_err(|e| UnshredError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "saved image"
    );
    Ok(())
}
