//! Tests for the strip arena and its merge bookkeeping

#[cfg(test)]
mod tests {
    use unshred::algorithm::collection::StripCollection;
    use unshred::{Pixel, Raster, UnshredError};

    // One-column strip painted with its own index
    fn strips(count: usize, height: usize) -> Vec<Raster> {
        (0..count)
            .map(|index| {
                Raster::filled(1, height, Pixel::new(index as u8, 0, 0)).expect("non-empty strip")
            })
            .collect()
    }

    fn red_channels(raster: &Raster) -> Vec<u8> {
        (0..raster.width())
            .filter_map(|x| raster.pixel_at(x, 0))
            .map(|pixel| pixel.r)
            .collect()
    }

    // Tests an empty input is rejected
    // Verified by allowing empty collections
    #[test]
    fn test_new_empty() {
        assert!(matches!(
            StripCollection::new(Vec::new()),
            Err(UnshredError::EmptyCollection { .. })
        ));
    }

    // Tests strips must share a height
    // Verified by only checking the first strip
    #[test]
    fn test_new_height_mismatch() {
        let mut input = strips(3, 2);
        input.push(Raster::filled(1, 3, Pixel::default()).expect("strip"));
        assert!(matches!(
            StripCollection::new(input),
            Err(UnshredError::DimensionMismatch { .. })
        ));
    }

    // Tests ordered pairs scan outer id first, skipping self-pairs
    // Verified by emitting unordered pairs only
    #[test]
    fn test_ordered_pairs() {
        let collection = StripCollection::new(strips(3, 1)).expect("valid collection");
        assert_eq!(
            collection.ordered_pairs(),
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]
        );
    }

    // Tests a merge keeps the left id and retires the right id
    // Verified by removing by position after replacing
    #[test]
    fn test_merge_retires_right() {
        let mut collection = StripCollection::new(strips(4, 2)).expect("valid collection");
        collection.merge(2, 0).expect("valid merge");

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.ids().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!collection.contains(0));
        assert_eq!(collection.get(2).map(red_channels), Some(vec![2, 0]));
        assert_eq!(collection.total_width(), 4);
    }

    // Tests merging with a right id before the left id keeps later strips intact
    // Verified by shifting ids after removal
    #[test]
    fn test_merge_right_before_left() {
        let mut collection = StripCollection::new(strips(4, 1)).expect("valid collection");
        collection.merge(3, 1).expect("valid merge");
        collection.merge(0, 3).expect("valid merge");

        assert_eq!(collection.ids().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(collection.get(0).map(red_channels), Some(vec![0, 3, 1]));
        assert_eq!(collection.get(2).map(red_channels), Some(vec![2]));
    }

    // Tests invalid merges leave the collection untouched
    // Verified by retiring the right strip before validating
    #[test]
    fn test_merge_invalid_ids() {
        let mut collection = StripCollection::new(strips(3, 1)).expect("valid collection");

        assert!(matches!(
            collection.merge(1, 1),
            Err(UnshredError::InvalidStrip { id: 1, .. })
        ));
        assert!(matches!(
            collection.merge(0, 7),
            Err(UnshredError::InvalidStrip { id: 7, .. })
        ));

        collection.merge(0, 1).expect("valid merge");
        assert!(matches!(
            collection.merge(1, 2),
            Err(UnshredError::InvalidStrip { id: 1, .. })
        ));
        assert_eq!(collection.len(), 2);
    }

    // Tests the final strip is only released once
    // Verified by returning the first live strip regardless of count
    #[test]
    fn test_into_single() {
        let collection = StripCollection::new(strips(2, 1)).expect("valid collection");
        assert!(matches!(
            collection.clone().into_single(),
            Err(UnshredError::InvalidStrip { .. })
        ));

        let mut merged = collection;
        merged.merge(1, 0).expect("valid merge");
        let raster = merged.into_single().expect("one strip left");
        assert_eq!(red_channels(&raster), vec![1, 0]);
    }

    // Tests pixels are neither duplicated nor dropped across merges
    // Verified by leaving the retired strip live
    #[test]
    fn test_total_width_conserved() {
        let mut collection = StripCollection::new(strips(5, 3)).expect("valid collection");
        assert_eq!(collection.height(), 3);
        for (left, right) in [(4, 2), (0, 4), (3, 1), (3, 0)] {
            collection.merge(left, right).expect("valid merge");
            assert_eq!(collection.total_width(), 5);
        }
        assert_eq!(collection.len(), 1);
        assert!(!collection.is_empty());
    }
}
