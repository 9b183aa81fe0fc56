//! Owned RGB pixel grids used for whole images and individual strips

use crate::io::error::{Result, invalid_dimension};
use image::{Rgb, RgbImage};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// A single 8-bit RGB sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Pixel {
    /// Build a pixel from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb<u8>> for Pixel {
    fn from(rgb: Rgb<u8>) -> Self {
        let [r, g, b] = rgb.0;
        Self { r, g, b }
    }
}

impl From<Pixel> for Rgb<u8> {
    fn from(pixel: Pixel) -> Self {
        Self(pixel.channels())
    }
}

/// Rectangular pixel grid, stored row-major as `[row, col]`
///
/// Width and height are always at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Array2<Pixel>,
}

impl Raster {
    /// Wrap a `(height, width)` pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn from_array(pixels: Array2<Pixel>) -> Result<Self> {
        let (height, width) = pixels.dim();
        if width == 0 {
            return Err(invalid_dimension(
                "width",
                width,
                &"raster must be at least one pixel wide",
            ));
        }
        if height == 0 {
            return Err(invalid_dimension(
                "height",
                height,
                &"raster must be at least one pixel tall",
            ));
        }
        Ok(Self { pixels })
    }

    /// Build a raster by evaluating `f(x, y)` for every pixel
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Pixel,
    {
        Self::from_array(Array2::from_shape_fn((height, width), |(y, x)| f(x, y)))
    }

    /// Build a raster filled with a single colour
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        Self::from_array(Array2::from_elem((height, width), pixel))
    }

    /// Copy a decoded image into a raster
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut pixels = Array2::default((height, width));
        for (x, y, rgb) in image.enumerate_pixels() {
            if let Some(slot) = pixels.get_mut((y as usize, x as usize)) {
                *slot = Pixel::from(*rgb);
            }
        }
        Self::from_array(pixels)
    }

    /// Copy the raster into an image buffer ready for encoding
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            self.pixel_at(x as usize, y as usize)
                .unwrap_or_default()
                .into()
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get((y, x)).copied()
    }

    /// View of column `x` from top to bottom
    pub fn column(&self, x: usize) -> Option<ArrayView1<'_, Pixel>> {
        (x < self.width()).then(|| self.pixels.index_axis(Axis(1), x))
    }

    /// Leftmost column
    pub fn left_edge(&self) -> ArrayView1<'_, Pixel> {
        self.pixels.index_axis(Axis(1), 0)
    }

    /// Rightmost column
    pub fn right_edge(&self) -> ArrayView1<'_, Pixel> {
        self.pixels.index_axis(Axis(1), self.width() - 1)
    }

    /// Borrow the underlying `(height, width)` array
    pub fn view(&self) -> ArrayView2<'_, Pixel> {
        self.pixels.view()
    }

    /// Consume the raster and return its pixel array
    pub fn into_array(self) -> Array2<Pixel> {
        self.pixels
    }
}
