//! sRGB to CIE XYZ to CIE L*a*b* conversion (D65 whitepoint, 2° observer)

use crate::spatial::raster::Pixel;

/// Reference white in XYZ, scaled so that Y = 100
pub const WHITE_POINT: [f64; 3] = [95.047, 100.000, 108.883];

// (6/29)^3
const LAB_EPSILON: f64 = 0.008_856;
// 1 / (3 * (6/29)^2)
const LAB_SLOPE: f64 = 7.787_037;
const LAB_OFFSET: f64 = 4.0 / 29.0;

const SRGB_THRESHOLD: f64 = 0.040_45;
const SRGB_ALPHA: f64 = 0.055;

const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// CIE XYZ tristimulus values, Y in `[0, 100]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    /// X component
    pub x: f64,
    /// Y component (luminance)
    pub y: f64,
    /// Z component
    pub z: f64,
}

/// CIE L*a*b* coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl Lab {
    /// Components as an `[l, a, b]` array
    pub const fn components(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

/// Undo the sRGB transfer curve for a channel normalised to `[0, 1]`
pub fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= SRGB_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + SRGB_ALPHA) / (1.0 + SRGB_ALPHA)).powf(2.4)
    }
}

/// Convert an 8-bit sRGB pixel to XYZ
pub fn to_xyz(pixel: Pixel) -> Xyz {
    let linear = pixel
        .channels()
        .map(|channel| srgb_to_linear(f64::from(channel) / 255.0) * 100.0);

    let [x, y, z] = SRGB_TO_XYZ.map(|row| {
        row.iter()
            .zip(linear.iter())
            .map(|(weight, value)| weight * value)
            .sum::<f64>()
    });

    Xyz { x, y, z }
}

// Piecewise cube root with the linear toe near black
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE.mul_add(t, LAB_OFFSET)
    }
}

impl Xyz {
    /// Normalise against [`WHITE_POINT`] and project into L*a*b*
    pub fn to_lab(self) -> Lab {
        let [white_x, white_y, white_z] = WHITE_POINT;
        let fx = lab_f(self.x / white_x);
        let fy = lab_f(self.y / white_y);
        let fz = lab_f(self.z / white_z);

        Lab {
            l: 116.0_f64.mul_add(fy, -16.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// Convert an 8-bit sRGB pixel straight to L*a*b*
pub fn to_lab(pixel: Pixel) -> Lab {
    to_xyz(pixel).to_lab()
}
