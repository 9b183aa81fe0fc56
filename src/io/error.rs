//! Error types for strip reconstruction and the surrounding file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum UnshredError {
    /// A width or strip size cannot be used to cut the image
    ///
    /// Occurs when:
    /// - The strip width is zero
    /// - The strip width exceeds the image width
    /// - A raster would have zero width or height
    InvalidDimension {
        /// Name of the offending dimension
        parameter: &'static str,
        /// Provided value that failed validation
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two strips that must share a height do not
    DimensionMismatch {
        /// Operation that detected the mismatch
        operation: &'static str,
        /// Height of the left-hand strip
        left_height: usize,
        /// Height of the right-hand strip
        right_height: usize,
    },

    /// An operation that needs at least one strip received none
    EmptyCollection {
        /// Operation that received the empty input
        operation: &'static str,
    },

    /// A strip id does not name a live strip in the collection
    InvalidStrip {
        /// Offending strip id
        id: usize,
        /// Description of the problem
        reason: &'static str,
    },

    /// Failed to decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode the reconstructed image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// The command-line target cannot be processed
    InvalidTarget {
        /// Target path as given
        path: PathBuf,
        /// Description of the problem
        reason: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for UnshredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid dimension '{parameter}' = {value}: {reason}")
            }
            Self::DimensionMismatch {
                operation,
                left_height,
                right_height,
            } => {
                write!(
                    f,
                    "Height mismatch in {operation}: left strip is {left_height}px, right strip is {right_height}px"
                )
            }
            Self::EmptyCollection { operation } => {
                write!(f, "No strips supplied to {operation}")
            }
            Self::InvalidStrip { id, reason } => {
                write!(f, "Invalid strip {id}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Cannot process '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for UnshredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, UnshredError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    parameter: &'static str,
    value: usize,
    reason: &impl ToString,
) -> UnshredError {
    UnshredError::InvalidDimension {
        parameter,
        value,
        reason: reason.to_string(),
    }
}

/// Create a height mismatch error for two strips
pub const fn dimension_mismatch(
    operation: &'static str,
    left_height: usize,
    right_height: usize,
) -> UnshredError {
    UnshredError::DimensionMismatch {
        operation,
        left_height,
        right_height,
    }
}

/// Fail with [`UnshredError::DimensionMismatch`] unless both heights agree
///
/// # Errors
///
/// Returns an error if `left_height != right_height`
pub const fn ensure_same_height(
    operation: &'static str,
    left_height: usize,
    right_height: usize,
) -> Result<()> {
    if left_height == right_height {
        Ok(())
    } else {
        Err(dimension_mismatch(operation, left_height, right_height))
    }
}
