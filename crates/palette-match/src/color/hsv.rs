//! HSV (hexcone) representation of sRGB

use super::srgb::Srgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees on `[0, 360)`, 0 for achromatic colors
    pub h: f64,
    /// Saturation on `[0, 1]`, 0 when value is 0
    pub s: f64,
    /// Value (maximum channel) on `[0, 1]`
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl From<Srgb> for Hsv {
    fn from(rgb: Srgb) -> Self {
        let Srgb { r, g, b } = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        let h = if chroma == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / chroma).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { chroma / max };

        Self {
            h: if h >= 360.0 { h - 360.0 } else { h },
            s,
            v: max,
        }
    }
}
