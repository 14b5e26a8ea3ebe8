//! Oklab perceptual color space
//!
//! Converted from XYZ with Björn Ottosson's published matrices.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::xyz::{mul3, Xyz};

/// XYZ (D65) to approximate cone responses.
const XYZ_TO_LMS: [[f64; 3]; 3] = [
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
];

/// Non-linear cone responses to Lab.
const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// A color in Oklab perceptual color space.
///
/// Values are not clamped; `l` is 0.0 for black and about 1.0 for white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<Xyz> for Oklab {
    fn from(xyz: Xyz) -> Self {
        let lms = mul3(&XYZ_TO_LMS, xyz.to_array());
        let lms_ = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let [l, a, b] = mul3(&LMS_TO_LAB, lms_);
        Self { l, a, b }
    }
}
