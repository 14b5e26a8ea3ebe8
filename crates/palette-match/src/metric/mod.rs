//! Distance metrics for color matching
//!
//! A [`DistanceMetric`] first projects colors into its working space once
//! ([`DistanceMetric::project`]) and then compares projected coordinates
//! ([`DistanceMetric::compare`]), so a palette only needs converting once per
//! query batch regardless of the number of samples.

mod delta_e;

use std::fmt;
use std::str::FromStr;

pub use delta_e::{cie76, cie94, ciede2000, cmc, Cie94Weights};

use crate::color::{Din99, Lab, LinearRgb, Oklab, Srgb, Xyz};
use crate::error::UnsupportedMetric;

/// CIE94 parameter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cie94Application {
    /// `kL,kC,kH = 2,1,1`, `K1,K2 = 0.048,0.014`
    #[default]
    GraphicArts,
    /// `kL,kC,kH = 1,1,1`, `K1,K2 = 0.045,0.015`
    Textiles,
}

impl Cie94Application {
    pub fn weights(self) -> Cie94Weights {
        match self {
            Cie94Application::GraphicArts => Cie94Weights {
                kl: 2.0,
                kc: 1.0,
                kh: 1.0,
                k1: 0.048,
                k2: 0.014,
            },
            Cie94Application::Textiles => Cie94Weights {
                kl: 1.0,
                kc: 1.0,
                kh: 1.0,
                k1: 0.045,
                k2: 0.015,
            },
        }
    }
}

/// CMC lightness:chroma ratio presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmcRatio {
    /// 2:1, acceptability
    TwoToOne,
    /// 1:1, perceptibility
    OneToOne,
}

impl CmcRatio {
    /// `(l, c)` weights.
    pub fn weights(self) -> (f64, f64) {
        match self {
            CmcRatio::TwoToOne => (2.0, 1.0),
            CmcRatio::OneToOne => (1.0, 1.0),
        }
    }
}

/// Color-difference model used to find the nearest palette entry.
///
/// Every metric is a function of `(candidate, query)`; for the asymmetric
/// formulas (CIE94, CMC) the candidate palette entry is the reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// Euclidean distance between gamma-encoded sRGB triples
    Rgb,
    /// Euclidean distance in Oklab
    Oklab,
    /// Euclidean distance in DIN99
    Din99,
    /// Euclidean distance in CIELAB
    Cie76,
    Ciede2000,
    Cie94(Cie94Application),
    Cmc(CmcRatio),
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::Cie94(Cie94Application::GraphicArts)
    }
}

impl DistanceMetric {
    /// Every supported metric, in the order of [`NAMES`](Self::NAMES).
    pub const ALL: [DistanceMetric; 9] = [
        DistanceMetric::Rgb,
        DistanceMetric::Oklab,
        DistanceMetric::Din99,
        DistanceMetric::Cie76,
        DistanceMetric::Ciede2000,
        DistanceMetric::Cie94(Cie94Application::GraphicArts),
        DistanceMetric::Cie94(Cie94Application::Textiles),
        DistanceMetric::Cmc(CmcRatio::TwoToOne),
        DistanceMetric::Cmc(CmcRatio::OneToOne),
    ];

    /// Canonical metric names accepted by [`FromStr`] (case-insensitively).
    pub const NAMES: [&'static str; 9] = [
        "RGB",
        "OKLab",
        "DIN99",
        "CIE76",
        "CIEDE2000",
        "CIE94",
        "CIE94-textiles",
        "CMC2:1",
        "CMC1:1",
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Rgb => "RGB",
            DistanceMetric::Oklab => "OKLab",
            DistanceMetric::Din99 => "DIN99",
            DistanceMetric::Cie76 => "CIE76",
            DistanceMetric::Ciede2000 => "CIEDE2000",
            DistanceMetric::Cie94(Cie94Application::GraphicArts) => "CIE94",
            DistanceMetric::Cie94(Cie94Application::Textiles) => "CIE94-textiles",
            DistanceMetric::Cmc(CmcRatio::TwoToOne) => "CMC2:1",
            DistanceMetric::Cmc(CmcRatio::OneToOne) => "CMC1:1",
        }
    }

    /// Whether `d(a, b) == d(b, a)` holds for this metric.
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            DistanceMetric::Rgb
                | DistanceMetric::Oklab
                | DistanceMetric::Din99
                | DistanceMetric::Cie76
        )
    }

    /// Coordinates of `color` in this metric's working space.
    pub fn project(self, color: Srgb) -> [f64; 3] {
        match self {
            DistanceMetric::Rgb => color.to_array(),
            DistanceMetric::Oklab => Oklab::from(Xyz::from(LinearRgb::from(color))).to_array(),
            DistanceMetric::Din99 => Din99::from(lab_of(color)).to_array(),
            DistanceMetric::Cie76
            | DistanceMetric::Ciede2000
            | DistanceMetric::Cie94(_)
            | DistanceMetric::Cmc(_) => lab_of(color).to_array(),
        }
    }

    /// Distance between two colors already passed through [`project`](Self::project).
    pub fn compare(self, candidate: [f64; 3], query: [f64; 3]) -> f64 {
        let as_lab = |v: [f64; 3]| Lab::new(v[0], v[1], v[2]);
        match self {
            DistanceMetric::Rgb | DistanceMetric::Oklab | DistanceMetric::Din99 => {
                euclidean(candidate, query)
            }
            DistanceMetric::Cie76 => cie76(as_lab(candidate), as_lab(query)),
            DistanceMetric::Ciede2000 => ciede2000(as_lab(candidate), as_lab(query)),
            DistanceMetric::Cie94(application) => {
                cie94(as_lab(candidate), as_lab(query), application.weights())
            }
            DistanceMetric::Cmc(ratio) => {
                let (l, c) = ratio.weights();
                cmc(as_lab(candidate), as_lab(query), l, c)
            }
        }
    }

    /// Distance between two sRGB colors.
    pub fn distance(self, candidate: Srgb, query: Srgb) -> f64 {
        self.compare(self.project(candidate), self.project(query))
    }
}

fn lab_of(color: Srgb) -> Lab {
    Lab::from(Xyz::from(LinearRgb::from(color)))
}

#[inline]
fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = UnsupportedMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("CIE94-graphic-arts") {
            return Ok(DistanceMetric::Cie94(Cie94Application::GraphicArts));
        }
        Self::ALL
            .into_iter()
            .find(|metric| metric.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnsupportedMetric {
                name: s.to_string(),
                valid: Self::NAMES.to_vec(),
            })
    }
}
