//! YAML palette file format
//!
//! One palette per file:
//!
//! ```yaml
//! key: HTML4
//! license: Public domain
//! index: none          # none | auto | <regex>
//! encoding: u8         # float (default) | u8 | u16
//! colors:
//!   - { name: Aqua, rgb: [0, 255, 255] }
//!   - { name: Black, hex: "#000000" }
//! ```

use palette_match::{BitDepth, IndexSpec, PaletteMetadata, RawPalette, RgbData, Srgb};
use serde::Deserialize;

use crate::error::LoadError;

/// How `rgb` components are written in a palette file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Float,
    U8,
    U16,
}

/// One color; exactly one of `rgb` or `hex` is given.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorSpec {
    pub name: String,
    #[serde(default)]
    pub rgb: Option<Vec<f64>>,
    #[serde(default)]
    pub hex: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteFile {
    pub key: String,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// `none`, `auto`, or a regex for the leading index of each name
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub encoding: Encoding,
    pub colors: Vec<ColorSpec>,
}

impl PaletteFile {
    pub fn parse(file: &str, content: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(content).map_err(|source| LoadError::Parse {
            file: file.to_string(),
            source,
        })
    }

    pub fn index_spec(&self) -> IndexSpec {
        match self.index.as_deref().map(str::trim) {
            None | Some("") | Some("none") => IndexSpec::None,
            Some("auto") => IndexSpec::Auto,
            Some(pattern) => IndexSpec::Pattern(pattern.to_string()),
        }
    }

    /// Converts to the core's raw palette. Range checks are left to catalog
    /// validation; only the file-level shape is checked here.
    pub fn into_raw(self, file: &str) -> Result<RawPalette, LoadError> {
        let index = self.index_spec();
        let encoding = self.encoding;
        let color_error = |name: &str, reason: String| LoadError::Color {
            file: file.to_string(),
            name: name.to_string(),
            reason,
        };

        let mut names = Vec::with_capacity(self.colors.len());
        let mut rows = Vec::with_capacity(self.colors.len());
        for color in self.colors {
            let row = match (&color.rgb, &color.hex) {
                (Some(rgb), None) => rgb.clone(),
                (None, Some(hex)) => {
                    let srgb: Srgb = hex
                        .parse()
                        .map_err(|e: palette_match::ParseColorError| color_error(color.name.as_str(), e.to_string()))?;
                    hex_components(srgb, encoding)
                }
                _ => {
                    return Err(color_error(
                        color.name.as_str(),
                        "needs exactly one of rgb or hex".to_string(),
                    ))
                }
            };
            names.push(color.name);
            rows.push(row);
        }

        let rgb = match encoding {
            Encoding::Float => RgbData::Float(rows),
            Encoding::U8 | Encoding::U16 => {
                let depth = if encoding == Encoding::U8 {
                    BitDepth::Eight
                } else {
                    BitDepth::Sixteen
                };
                let rows = rows
                    .iter()
                    .zip(&names)
                    .map(|(row, name)| {
                        row.iter()
                            .map(|&v| {
                                if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
                                    Ok(v as u64)
                                } else {
                                    Err(color_error(name.as_str(), format!("component {v} is not an integer")))
                                }
                            })
                            .collect::<Result<Vec<u64>, LoadError>>()
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                RgbData::Integer { depth, rows }
            }
        };

        Ok(RawPalette {
            key: self.key,
            names,
            rgb,
            index,
            metadata: PaletteMetadata {
                license: self.license,
                source: self.source,
                notes: self.notes,
            },
        })
    }
}

/// Components of a hex color in the file's encoding.
fn hex_components(srgb: Srgb, encoding: Encoding) -> Vec<f64> {
    let bytes = srgb.to_bytes();
    match encoding {
        Encoding::Float => srgb.to_array().to_vec(),
        Encoding::U8 => bytes.iter().map(|&b| f64::from(b)).collect(),
        Encoding::U16 => bytes.iter().map(|&b| f64::from(b) * 257.0).collect(),
    }
}
