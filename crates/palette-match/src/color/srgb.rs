//! sRGB color type
//!
//! Palette entries and query samples arrive as gamma-encoded sRGB with
//! components on `0.0..=1.0`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in sRGB color space, components on `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected)
    pub r: f64,
    /// Green channel (gamma-corrected)
    pub g: f64,
    /// Blue channel (gamma-corrected)
    pub b: f64,
}

impl Srgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use palette_match::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Convert to 8-bit channels, rounding and clamping to `0..=255`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<[f64; 3]> for Srgb {
    fn from(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_and_back() {
        let color = Srgb::from_u8(255, 128, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.to_bytes(), [255, 128, 0]);
    }

    #[test]
    fn test_hex_parsing() {
        let teal: Srgb = "#008080".parse().unwrap();
        assert_eq!(teal.to_bytes(), [0, 128, 128]);

        let no_hash: Srgb = "00ff00".parse().unwrap();
        assert_eq!(no_hash, Srgb::new(0.0, 1.0, 0.0));

        let short: Srgb = " #ABC ".parse().unwrap();
        assert_eq!(short, Srgb::from_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "#éé".parse::<Srgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Srgb::from_u8(0, 128, 128).to_hex(), "#008080");
        assert_eq!(format!("{}", Srgb::new(1.0, 1.0, 1.0)), "#FFFFFF");
    }
}
