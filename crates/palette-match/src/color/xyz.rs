//! CIE 1931 XYZ tristimulus values
//!
//! Scaled so that the D65 reference white has `Y = 1.0`.

use super::linear_rgb::LinearRgb;

/// D65 reference white (2° observer), `Y` normalized to 1.
pub const D65_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// Linear sRGB to XYZ, D65 (IEC 61966-2-1).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Multiply a 3x3 matrix by a column vector.
#[inline]
pub(crate) fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul3(&RGB_TO_XYZ, rgb.to_array());
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_maps_near_reference_white() {
        let white = Xyz::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!((white.x - D65_WHITE.x).abs() < 1e-3);
        assert!((white.y - D65_WHITE.y).abs() < 1e-12);
        assert!((white.z - D65_WHITE.z).abs() < 1e-3);
    }

    #[test]
    fn test_primaries_are_matrix_columns() {
        let red = Xyz::from(LinearRgb::new(1.0, 0.0, 0.0));
        assert_eq!(red.to_array(), [0.4124, 0.2126, 0.0193]);

        let blue = Xyz::from(LinearRgb::new(0.0, 0.0, 1.0));
        assert_eq!(blue.to_array(), [0.1805, 0.0722, 0.9505]);
    }
}
