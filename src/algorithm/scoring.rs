use crate::color::metric::SimilarityMetric;
use crate::io::error::{Result, ensure_same_height};
use crate::spatial::raster::Raster;

/// Scores how plausibly one strip continues into another
///
/// The seam is the right edge of the left strip against the left edge of the
/// right strip; each row contributes one metric score to the total.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeScorer<M> {
    metric: M,
}

impl<M: SimilarityMetric> EdgeScorer<M> {
    /// Wrap a pixel metric
    pub const fn new(metric: M) -> Self {
        Self { metric }
    }

    /// Access the underlying pixel metric
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Sum of per-row similarity across the seam `left | right`
    ///
    /// Direction matters: `score(a, b)` and `score(b, a)` compare different
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the strips differ in height
    pub fn score(&self, left: &Raster, right: &Raster) -> Result<f64> {
        ensure_same_height("score", left.height(), right.height())?;

        Ok(left
            .right_edge()
            .iter()
            .zip(right.left_edge().iter())
            .map(|(&outgoing, &incoming)| self.metric.score(outgoing, incoming))
            .sum())
    }
}
