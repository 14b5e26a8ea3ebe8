//! DIN99 color space (DIN 6176)
//!
//! A logarithmic remapping of CIELAB in which Euclidean distance tracks
//! perceived difference more closely than CIE76.

use super::lab::Lab;

/// Rotation of the chroma plane, in degrees.
const HUE_ROTATION: f64 = 16.0;

/// Compression factor of the chroma logarithm.
const CHROMA_COMPRESSION: f64 = 0.045;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99 {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Din99 {
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<Lab> for Din99 {
    fn from(lab: Lab) -> Self {
        let (sin, cos) = HUE_ROTATION.to_radians().sin_cos();

        let l = 105.51 * (1.0 + 0.0158 * lab.l).ln();
        let e = lab.a * cos + lab.b * sin;
        let f = 0.7 * (-lab.a * sin + lab.b * cos);
        let g = e.hypot(f);

        if g == 0.0 {
            return Self { l, a: 0.0, b: 0.0 };
        }

        let c = (1.0 + CHROMA_COMPRESSION * g).ln() / CHROMA_COMPRESSION;
        let h = f.atan2(e);
        Self {
            l,
            a: c * h.cos(),
            b: c * h.sin(),
        }
    }
}
