//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use unshred::io::configuration::{
        DEFAULT_SEED, DEFAULT_STRIP_WIDTH, MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_EXTENSION,
        OUTPUT_SUFFIX, SHRED_SUFFIX, SUPPORTED_EXTENSIONS,
    };

    // Tests the default shred width
    // Verified by changing the width constant
    #[test]
    fn test_default_strip_width() {
        assert_eq!(DEFAULT_STRIP_WIDTH, 32);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests output suffixes are distinct and filesystem safe
    // Verified by adding special character
    #[test]
    fn test_output_suffixes() {
        assert_ne!(OUTPUT_SUFFIX, SHRED_SUFFIX);
        for suffix in [OUTPUT_SUFFIX, SHRED_SUFFIX] {
            assert!(suffix.starts_with('_'));
            for ch in suffix.chars() {
                assert!(
                    ch.is_alphanumeric() || ch == '_' || ch == '-',
                    "Output suffix contains invalid character: {ch}"
                );
            }
        }
    }

    // Tests outputs are written in a lossless format we can also read
    // Verified by switching the output to jpeg
    #[test]
    fn test_output_extension_lossless_and_supported() {
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert!(SUPPORTED_EXTENSIONS.contains(&OUTPUT_EXTENSION));
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
