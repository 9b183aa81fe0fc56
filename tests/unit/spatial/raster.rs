//! Tests for the owned pixel grid and its image conversions

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use ndarray::Array2;
    use unshred::{Pixel, Raster, UnshredError};

    fn coordinate_raster(width: usize, height: usize) -> Raster {
        Raster::from_fn(width, height, |x, y| Pixel::new(x as u8, y as u8, 7))
            .expect("non-empty raster")
    }

    // Tests zero-sized rasters are rejected
    // Verified by removing the width check
    #[test]
    fn test_from_array_rejects_empty() {
        let no_columns = Raster::from_array(Array2::default((4, 0)));
        assert!(matches!(
            no_columns,
            Err(UnshredError::InvalidDimension {
                parameter: "width",
                ..
            })
        ));

        let no_rows = Raster::from_array(Array2::default((0, 4)));
        assert!(matches!(
            no_rows,
            Err(UnshredError::InvalidDimension {
                parameter: "height",
                ..
            })
        ));
    }

    // Tests (x, y) addressing maps to column and row
    // Verified by swapping the index order in pixel_at
    #[test]
    fn test_pixel_at_addressing() {
        let raster = coordinate_raster(5, 3);
        assert_eq!(raster.width(), 5);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.pixel_at(4, 2), Some(Pixel::new(4, 2, 7)));
        assert_eq!(raster.pixel_at(0, 0), Some(Pixel::new(0, 0, 7)));
        assert_eq!(raster.pixel_at(5, 0), None);
        assert_eq!(raster.pixel_at(0, 3), None);
    }

    // Tests edge columns run top to bottom
    // Verified by returning the first row instead of the first column
    #[test]
    fn test_edges_and_columns() {
        let raster = coordinate_raster(4, 3);
        let left: Vec<Pixel> = raster.left_edge().iter().copied().collect();
        let right: Vec<Pixel> = raster.right_edge().iter().copied().collect();

        assert_eq!(left, (0..3).map(|y| Pixel::new(0, y, 7)).collect::<Vec<_>>());
        assert_eq!(right, (0..3).map(|y| Pixel::new(3, y, 7)).collect::<Vec<_>>());
        assert_eq!(raster.column(2).map(|c| c.len()), Some(3));
        assert!(raster.column(4).is_none());
    }

    // Tests a single-pixel raster has the same left and right edge
    // Verified by offsetting the right edge by one column
    #[test]
    fn test_single_column_edges() {
        let raster = Raster::filled(1, 2, Pixel::new(9, 9, 9)).expect("1x2 raster");
        assert_eq!(raster.left_edge(), raster.right_edge());
    }

    // Tests conversion to and from image buffers preserves pixels
    // Verified by transposing during conversion
    #[test]
    fn test_rgb_image_conversion() {
        let image = RgbImage::from_fn(6, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 3]));
        let raster = Raster::from_rgb_image(&image).expect("non-empty image");

        assert_eq!(raster.width(), 6);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel_at(5, 1), Some(Pixel::new(50, 20, 3)));
        assert_eq!(raster.to_rgb_image(), image);
    }

    // Tests pixel and image channel conversions agree
    // Verified by dropping the blue channel
    #[test]
    fn test_pixel_rgb_conversion() {
        let pixel = Pixel::new(1, 2, 3);
        let rgb: Rgb<u8> = pixel.into();
        assert_eq!(rgb, Rgb([1, 2, 3]));
        assert_eq!(Pixel::from(rgb), pixel);
        assert_eq!(pixel.channels(), [1, 2, 3]);
    }

    // Tests the raw array is laid out as (height, width)
    // Verified by building the array as (width, height)
    #[test]
    fn test_into_array_shape() {
        let array = coordinate_raster(7, 2).into_array();
        assert_eq!(array.dim(), (2, 7));
    }
}
