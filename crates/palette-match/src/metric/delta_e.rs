//! Published color-difference formulas over CIELAB
//!
//! Argument order is `(reference, sample)`. CIE94 and CMC weight their terms
//! by the reference color's chroma and hue, so they are not symmetric.
//!
//! # References
//!
//! - CIE 116-1995 (CIE94)
//! - G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 color-difference formula:
//!   implementation notes, supplementary test data, and mathematical
//!   observations", Color Res. Appl. 30 (2005)
//! - F. J. J. Clarke, R. McDonald, B. Rigg, "Modification to the JPC79
//!   colour-difference formula", J. Soc. Dyers Colour. 100 (1984) (CMC l:c)

use crate::color::{Lab, Lch};

/// `25^7`, the pivot of the CIEDE2000 chroma terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Parametric weights of CIE94.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cie94Weights {
    pub kl: f64,
    pub kc: f64,
    pub kh: f64,
    pub k1: f64,
    pub k2: f64,
}

/// Squared hue difference `ΔH² = Δa² + Δb² − ΔC²`, clamped at zero.
#[inline]
fn delta_h_squared(reference: Lab, sample: Lab, delta_c: f64) -> f64 {
    let da = reference.a - sample.a;
    let db = reference.b - sample.b;
    (da * da + db * db - delta_c * delta_c).max(0.0)
}

/// CIE76: Euclidean distance in Lab.
#[inline]
pub fn cie76(reference: Lab, sample: Lab) -> f64 {
    reference.distance(sample)
}

/// CIE94 with chroma and hue weighting taken from `reference`.
pub fn cie94(reference: Lab, sample: Lab, w: Cie94Weights) -> f64 {
    let c1 = reference.chroma();
    let c2 = sample.chroma();

    let delta_l = reference.l - sample.l;
    let delta_c = c1 - c2;
    let delta_h2 = delta_h_squared(reference, sample, delta_c);

    let sl = 1.0;
    let sc = 1.0 + w.k1 * c1;
    let sh = 1.0 + w.k2 * c1;

    let tl = delta_l / (w.kl * sl);
    let tc = delta_c / (w.kc * sc);
    let th2 = delta_h2 / ((w.kh * sh) * (w.kh * sh));

    (tl * tl + tc * tc + th2).sqrt()
}

/// Mean of two hue angles (degrees) across the 0/360 seam.
#[inline]
fn mean_hue(h1: f64, h2: f64, c_product: f64) -> f64 {
    if c_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    }
}

/// CIEDE2000 with `kL = kC = kH = 1`.
pub fn ciede2000(reference: Lab, sample: Lab) -> f64 {
    let c_bar = (reference.chroma() + sample.chroma()) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1 = reference.a * (1.0 + g);
    let a2 = sample.a * (1.0 + g);
    let c1 = a1.hypot(reference.b);
    let c2 = a2.hypot(sample.b);
    let h1 = Lch::from(Lab::new(reference.l, a1, reference.b)).h;
    let h2 = Lch::from(Lab::new(sample.l, a2, sample.b)).h;

    let delta_l = sample.l - reference.l;
    let delta_c = c2 - c1;
    let c_product = c1 * c2;

    // Hue difference wrapped to [-180, 180]
    let dh = if c_product == 0.0 {
        0.0
    } else {
        let diff = h2 - h1;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_h = 2.0 * c_product.sqrt() * (dh.to_radians() / 2.0).sin();

    let l_bar = (reference.l + sample.l) / 2.0;
    let c_bar_p = (c1 + c2) / 2.0;
    let h_bar = mean_hue(h1, h2, c_product);

    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();

    let l50 = (l_bar - 50.0) * (l_bar - 50.0);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * c_bar_p;
    let sh = 1.0 + 0.015 * c_bar_p * t;

    let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let tl = delta_l / sl;
    let tc = delta_c / sc;
    let th = delta_h / sh;

    (tl * tl + tc * tc + th * th + rt * tc * th).max(0.0).sqrt()
}

/// CMC l:c with lightness and hue weighting taken from `reference`.
pub fn cmc(reference: Lab, sample: Lab, l: f64, c: f64) -> f64 {
    let lch = Lch::from(reference);
    let c1 = lch.c;
    let c2 = sample.chroma();

    let delta_l = reference.l - sample.l;
    let delta_c = c1 - c2;
    let delta_h2 = delta_h_squared(reference, sample, delta_c);

    let sl = if reference.l < 16.0 {
        0.511
    } else {
        0.040975 * reference.l / (1.0 + 0.01765 * reference.l)
    };
    let sc = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let t = if (164.0..=345.0).contains(&lch.h) {
        0.56 + (0.2 * (lch.h + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (lch.h + 35.0).to_radians().cos()).abs()
    };
    let sh = sc * (f * t + 1.0 - f);

    let tl = delta_l / (l * sl);
    let tc = delta_c / (c * sc);
    let th2 = delta_h2 / (sh * sh);

    (tl * tl + tc * tc + th2).sqrt()
}
