//! Reconstruction constants and runtime configuration defaults

/// Width in pixels of each shred when none is given
pub const DEFAULT_STRIP_WIDTH: usize = 32;

/// Fixed seed for reproducible shredding
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to reconstructed image filenames
pub const OUTPUT_SUFFIX: &str = "_unshredded";
/// Suffix added to shuffled image filenames
pub const SHRED_SUFFIX: &str = "_shredded";
/// Lossless format written for every output
pub const OUTPUT_EXTENSION: &str = "png";

/// Input extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "png", "bmp", "gif", "jpg", "jpeg", "tif", "tiff", "webp",
];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
