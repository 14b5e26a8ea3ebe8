//! Linear RGB color type
//!
//! Linear light values, the input to the CIE XYZ matrix.

use super::srgb::Srgb;

/// Breakpoint of the sRGB transfer function (IEC 61966-2-1).
const SRGB_THRESHOLD: f64 = 0.04045;

/// A color in linear RGB color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Decode one gamma-encoded sRGB component.
#[inline]
pub fn srgb_to_linear(x: f64) -> f64 {
    if x < SRGB_THRESHOLD {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
