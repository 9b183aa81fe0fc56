use crate::{
    algorithm::collection::{StripCollection, StripId},
    algorithm::scoring::EdgeScorer,
    color::metric::{Metric, SimilarityMetric},
    io::configuration::DEFAULT_STRIP_WIDTH,
    io::error::{Result, UnshredError},
    spatial::raster::Raster,
    spatial::segment::segment,
};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Parameters for a single reconstruction run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReconstructionConfig {
    /// Width in pixels of every shred in the source image
    pub strip_width: usize,
    /// Pixel metric used to score seams
    pub metric: Metric,
    /// Score candidate pairs on the rayon thread pool
    pub parallel: bool,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            strip_width: DEFAULT_STRIP_WIDTH,
            metric: Metric::default(),
            parallel: false,
        }
    }
}

/// Whether the engine still has strips to merge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// More than one strip remains
    Active,
    /// A single strip holds the whole image
    Done,
}

/// Best-scoring seam found in a round
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Strip whose right edge forms the seam
    pub left: StripId,
    /// Strip whose left edge forms the seam
    pub right: StripId,
    /// Total seam similarity
    pub score: f64,
}

/// One completed merge round
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MergeRecord {
    /// 1-based round number
    pub round: usize,
    /// Strip that absorbed the other
    pub left: StripId,
    /// Strip that was retired
    pub right: StripId,
    /// Seam score that won the round
    pub score: f64,
}

/// Output of a finished reconstruction
#[derive(Clone, Debug)]
pub struct Reconstruction {
    /// Reassembled image
    pub raster: Raster,
    /// Merges in the order they were performed
    pub merges: Vec<MergeRecord>,
}

/// Greedy seam-matching reconstruction over a strip collection
///
/// Each round scores every ordered pair of live strips, joins the pair with
/// the highest score and retires the right-hand strip. Past merges are never
/// revisited. Ties go to the first pair in scan order (left id ascending,
/// then right id ascending), so runs are deterministic.
pub struct ReconstructionEngine<M> {
    scorer: EdgeScorer<M>,
    strips: StripCollection,
    parallel: bool,
    merges: Vec<MergeRecord>,
}

impl<M: SimilarityMetric + Sync> ReconstructionEngine<M> {
    /// Create an engine over `strips`, scored with `metric`
    ///
    /// # Errors
    ///
    /// Returns an error if `strips` is empty or the heights differ
    pub fn new(strips: Vec<Raster>, metric: M) -> Result<Self> {
        let strips = StripCollection::new(strips)?;
        Ok(Self {
            scorer: EdgeScorer::new(metric),
            merges: Vec::with_capacity(strips.len().saturating_sub(1)),
            strips,
            parallel: false,
        })
    }

    /// Enable or disable parallel pair scoring
    ///
    /// Results are identical either way; only wall-clock time changes.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Current state of the merge loop
    pub fn state(&self) -> EngineState {
        if self.strips.len() > 1 {
            EngineState::Active
        } else {
            EngineState::Done
        }
    }

    /// Strips as they currently stand
    pub const fn strips(&self) -> &StripCollection {
        &self.strips
    }

    /// Merges performed so far
    pub fn merges(&self) -> &[MergeRecord] {
        &self.merges
    }

    /// Rounds left before the engine is done
    pub fn rounds_remaining(&self) -> usize {
        self.strips.len().saturating_sub(1)
    }

    /// Score every ordered pair of live strips and pick the best
    ///
    /// Returns `None` when fewer than two strips remain.
    ///
    /// # Errors
    ///
    /// Returns an error if two strips differ in height
    pub fn best_pair(&self) -> Result<Option<Candidate>> {
        let pairs = self.strips.ordered_pairs();
        trace!(pairs = pairs.len(), parallel = self.parallel, "scoring seams");

        let scores = if self.parallel {
            pairs
                .par_iter()
                .map(|&(left, right)| self.pair_score(left, right))
                .collect::<Result<Vec<_>>>()?
        } else {
            pairs
                .iter()
                .map(|&(left, right)| self.pair_score(left, right))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(select_best(&pairs, &scores))
    }

    /// Run one merge round
    ///
    /// Returns the merge performed, or `None` if the engine was already done.
    ///
    /// # Errors
    ///
    /// Returns an error if scoring or compositing fails
    pub fn step(&mut self) -> Result<Option<MergeRecord>> {
        if self.state() == EngineState::Done {
            return Ok(None);
        }
        let Some(best) = self.best_pair()? else {
            return Ok(None);
        };

        self.strips.merge(best.left, best.right)?;

        let record = MergeRecord {
            round: self.merges.len() + 1,
            left: best.left,
            right: best.right,
            score: best.score,
        };
        debug!(
            round = record.round,
            left = record.left,
            right = record.right,
            score = record.score,
            remaining = self.strips.len(),
            "merged strips"
        );
        self.merges.push(record);

        Ok(Some(record))
    }

    /// Merge until one strip remains
    ///
    /// # Errors
    ///
    /// Returns an error if any round fails
    pub fn run(self) -> Result<Reconstruction> {
        self.run_with(|_| {})
    }

    /// Merge until one strip remains, reporting each round to `on_merge`
    ///
    /// # Errors
    ///
    /// Returns an error if any round fails
    pub fn run_with<F>(mut self, mut on_merge: F) -> Result<Reconstruction>
    where
        F: FnMut(&MergeRecord),
    {
        while let Some(record) = self.step()? {
            on_merge(&record);
        }

        let raster = self.strips.into_single()?;
        Ok(Reconstruction {
            raster,
            merges: self.merges,
        })
    }

    fn pair_score(&self, left: StripId, right: StripId) -> Result<f64> {
        let missing = |id| UnshredError::InvalidStrip {
            id,
            reason: "no live strip with this id",
        };
        let left_strip = self.strips.get(left).ok_or_else(|| missing(left))?;
        let right_strip = self.strips.get(right).ok_or_else(|| missing(right))?;
        self.scorer.score(left_strip, right_strip)
    }
}

/// First pair with the strictly greatest score
///
/// `pairs` and `scores` are parallel slices in scan order.
pub fn select_best(pairs: &[(StripId, StripId)], scores: &[f64]) -> Option<Candidate> {
    pairs
        .iter()
        .zip(scores)
        .fold(None, |best, (&(left, right), &score)| match best {
            Some(current) if score.partial_cmp(&current.score) != Some(Ordering::Greater) => {
                Some(current)
            }
            _ => Some(Candidate { left, right, score }),
        })
}

/// Segment `raster` and reconstruct it with the configured metric
///
/// # Errors
///
/// Returns an error if segmentation fails or a merge round fails
pub fn reconstruct(raster: &Raster, config: &ReconstructionConfig) -> Result<Reconstruction> {
    reconstruct_with(raster, config, |_| {})
}

/// As [`reconstruct`], reporting each merge round to `on_merge`
///
/// # Errors
///
/// Returns an error if segmentation fails or a merge round fails
pub fn reconstruct_with<F>(
    raster: &Raster,
    config: &ReconstructionConfig,
    on_merge: F,
) -> Result<Reconstruction>
where
    F: FnMut(&MergeRecord),
{
    let strips = segment(raster, config.strip_width)?;
    debug!(
        strips = strips.len(),
        metric = %config.metric,
        parallel = config.parallel,
        "starting reconstruction"
    );

    ReconstructionEngine::new(strips, config.metric)?
        .with_parallel(config.parallel)
        .run_with(on_merge)
}
