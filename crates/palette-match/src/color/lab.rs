//! CIE 1976 L*a*b* and its cylindrical form L*C*h
//!
//! Lab is relative to the D65 white in [`D65_WHITE`](super::D65_WHITE) and is
//! the working space of the CIE76, CIE94, CIEDE2000 and CMC formulas.

use super::xyz::{Xyz, D65_WHITE};

/// Breakpoint of the Lab companding function, `(6/29)^3`.
const EPSILON: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Chroma, the Euclidean norm of `(a, b)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn companding(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * (6.0 / 29.0) * (6.0 / 29.0)) + 4.0 / 29.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = companding(xyz.x / D65_WHITE.x);
        let fy = companding(xyz.y / D65_WHITE.y);
        let fz = companding(xyz.z / D65_WHITE.z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// Lab in cylindrical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue angle in degrees on `[0, 360)`
    pub h: f64,
}

impl Lch {
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }
}

/// Hue angle of `(x, y)` in degrees on `[0, 360)`; 0 for the origin.
#[inline]
pub(crate) fn hue_degrees(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let h = y.atan2(x).to_degrees();
    if h < 0.0 {
        // atan2 can return -0.0 or tiny negatives that round to 360.0
        let wrapped = h + 360.0;
        if wrapped >= 360.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        h
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            c: lab.chroma(),
            h: hue_degrees(lab.b, lab.a),
        }
    }
}
