//! Pixel similarity metrics used to score candidate seams

use crate::color::lab::to_lab;
use crate::math::distance::{euclidean, inverse_distance};
use crate::spatial::raster::Pixel;
use clap::ValueEnum;
use std::fmt;

/// Scores how alike two pixels are
///
/// Scores are non-negative and larger means more similar. Implementations
/// are expected to be symmetric up to floating-point error.
pub trait SimilarityMetric {
    /// Similarity of `first` and `second`
    fn score(&self, first: Pixel, second: Pixel) -> f64;
}

/// Inverse Euclidean distance in L*a*b* space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabEuclidean;

impl SimilarityMetric for LabEuclidean {
    fn score(&self, first: Pixel, second: Pixel) -> f64 {
        let distance = euclidean(to_lab(first).components(), to_lab(second).components());
        inverse_distance(distance)
    }
}

/// Inverse Euclidean distance over raw RGB channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RgbEuclidean;

impl SimilarityMetric for RgbEuclidean {
    fn score(&self, first: Pixel, second: Pixel) -> f64 {
        let distance = euclidean(
            first.channels().map(f64::from),
            second.channels().map(f64::from),
        );
        inverse_distance(distance)
    }
}

/// One for identical pixels, zero otherwise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactMatch;

impl SimilarityMetric for ExactMatch {
    fn score(&self, first: Pixel, second: Pixel) -> f64 {
        if first == second { 1.0 } else { 0.0 }
    }
}

/// Metric selected at configuration time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Metric {
    /// Perceptual distance in L*a*b* space
    #[default]
    #[value(name = "lab")]
    LabEuclidean,
    /// Distance over raw RGB channels
    #[value(name = "rgb")]
    RgbEuclidean,
    /// Binary exact-colour match
    #[value(name = "exact")]
    ExactMatch,
}

impl SimilarityMetric for Metric {
    fn score(&self, first: Pixel, second: Pixel) -> f64 {
        match self {
            Self::LabEuclidean => LabEuclidean.score(first, second),
            Self::RgbEuclidean => RgbEuclidean.score(first, second),
            Self::ExactMatch => ExactMatch.score(first, second),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LabEuclidean => "lab",
            Self::RgbEuclidean => "rgb",
            Self::ExactMatch => "exact",
        };
        f.write_str(name)
    }
}
