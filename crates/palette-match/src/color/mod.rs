//! Color types and conversions
//!
//! Every space gets its own type so a conversion can only be applied to the
//! space it was defined for. The conversion chain is:
//!
//! ```text
//! Srgb ──> LinearRgb ──> Xyz ──> Lab ──> Lch
//!  │                      │       └────> Din99
//!  └──> Hsv               └────> Oklab
//! ```
//!
//! All conversions are pure functions over `f64` components and are total:
//! black and white map to finite values in every space.

mod din99;
mod hsv;
mod lab;
mod linear_rgb;
mod oklab;
mod srgb;
mod xyz;

pub use din99::Din99;
pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use srgb::Srgb;
pub use xyz::{Xyz, D65_WHITE};

/// Every representation of a single sRGB color, computed in one pass.
///
/// Used by the outer surfaces to report a sample in all supported spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorReport {
    pub srgb: Srgb,
    pub linear: LinearRgb,
    pub xyz: Xyz,
    pub lab: Lab,
    pub lch: Lch,
    pub oklab: Oklab,
    pub din99: Din99,
    pub hsv: Hsv,
}

impl From<Srgb> for ColorReport {
    fn from(srgb: Srgb) -> Self {
        let linear = LinearRgb::from(srgb);
        let xyz = Xyz::from(linear);
        let lab = Lab::from(xyz);
        Self {
            srgb,
            linear,
            xyz,
            lab,
            lch: Lch::from(lab),
            oklab: Oklab::from(xyz),
            din99: Din99::from(lab),
            hsv: Hsv::from(srgb),
        }
    }
}
