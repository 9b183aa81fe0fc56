//! Tests for seam scoring between two strips

#[cfg(test)]
mod tests {
    use unshred::algorithm::scoring::EdgeScorer;
    use unshred::color::metric::{ExactMatch, LabEuclidean, SimilarityMetric};
    use unshred::{Pixel, Raster, UnshredError};

    // Strip whose leftmost column is `left_colour` and rightmost is `right_colour`
    fn strip(height: usize, left_colour: Pixel, right_colour: Pixel) -> Raster {
        Raster::from_fn(3, height, |x, _| if x == 0 { left_colour } else { right_colour })
            .expect("non-empty strip")
    }

    // Tests the score counts matching rows along the seam
    // Verified by comparing the left strip's left edge instead of its right edge
    #[test]
    fn test_score_sums_rows() {
        let red = Pixel::new(255, 0, 0);
        let blue = Pixel::new(0, 0, 255);
        let left = Raster::from_fn(2, 4, |x, y| if x == 1 && y < 3 { red } else { blue })
            .expect("left strip");
        let right = Raster::filled(2, 4, red).expect("right strip");

        let scorer = EdgeScorer::new(ExactMatch);
        let score = scorer.score(&left, &right).expect("equal heights");
        assert!((score - 3.0).abs() < f64::EPSILON);
    }

    // Tests scoring is directional
    // Verified by comparing left edges on both sides
    #[test]
    fn test_score_direction() {
        let a = strip(5, Pixel::new(0, 0, 0), Pixel::new(200, 0, 0));
        let b = strip(5, Pixel::new(200, 0, 0), Pixel::new(0, 0, 255));

        let scorer = EdgeScorer::new(ExactMatch);
        assert!((scorer.score(&a, &b).expect("equal heights") - 5.0).abs() < f64::EPSILON);
        assert!(scorer.score(&b, &a).expect("equal heights").abs() < f64::EPSILON);
    }

    // Tests each row contributes the metric score of its seam pixels
    // Verified by averaging instead of summing
    #[test]
    fn test_score_matches_metric_sum() {
        let left = Raster::from_fn(2, 3, |x, y| Pixel::new(x as u8, 40 * y as u8, 9))
            .expect("left strip");
        let right = Raster::from_fn(2, 3, |x, y| Pixel::new(50 + x as u8, 40 * y as u8, 90))
            .expect("right strip");

        let expected: f64 = (0..3)
            .map(|y| {
                LabEuclidean.score(
                    left.pixel_at(1, y).unwrap_or_default(),
                    right.pixel_at(0, y).unwrap_or_default(),
                )
            })
            .sum();
        let scorer = EdgeScorer::new(LabEuclidean);
        let score = scorer.score(&left, &right).expect("equal heights");
        assert!((score - expected).abs() < 1e-12);
        assert_eq!(scorer.metric(), &LabEuclidean);
    }

    // Tests strips of different heights fail instead of truncating
    // Verified by zipping the shorter column silently
    #[test]
    fn test_score_height_mismatch() {
        let left = Raster::filled(1, 3, Pixel::default()).expect("left strip");
        let right = Raster::filled(1, 4, Pixel::default()).expect("right strip");

        let result = EdgeScorer::new(ExactMatch).score(&left, &right);
        assert!(matches!(
            result,
            Err(UnshredError::DimensionMismatch {
                left_height: 3,
                right_height: 4,
                ..
            })
        ));
    }
}
