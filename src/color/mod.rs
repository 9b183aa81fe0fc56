//! Colour conversion and pixel similarity

/// sRGB to L*a*b* conversion
pub mod lab;
/// Interchangeable pixel similarity metrics
pub mod metric;

pub use metric::{Metric, SimilarityMetric};
