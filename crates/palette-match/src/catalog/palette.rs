//! Palette records and their load-time validation

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use super::natural::natural_cmp;
use crate::color::Srgb;
use crate::error::ValidationError;
use crate::names::{canonical_form, fold, CaseClasses, NormalizationState};

/// Bit depth of integer-encoded RGB data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

impl BitDepth {
    /// Largest representable component value.
    pub fn max_value(self) -> u64 {
        match self {
            BitDepth::Eight => 255,
            BitDepth::Sixteen => 65_535,
        }
    }
}

/// RGB rows as supplied by a loader.
#[derive(Debug, Clone, PartialEq)]
pub enum RgbData {
    /// Components already in `[0, 1]`
    Float(Vec<Vec<f64>>),
    /// Integer components, rescaled by the depth's maximum at load
    Integer { depth: BitDepth, rows: Vec<Vec<u64>> },
}

impl RgbData {
    fn len(&self) -> usize {
        match self {
            RgbData::Float(rows) => rows.len(),
            RgbData::Integer { rows, .. } => rows.len(),
        }
    }
}

/// How the leading numeric index of entry names is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndexSpec {
    /// Names carry no index
    #[default]
    None,
    /// Treat a leading digit run as the index if every name has one
    Auto,
    /// Explicit pattern, matched at the start of each name
    Pattern(String),
}

/// Opaque descriptive strings, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteMetadata {
    pub license: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
}

/// A palette as handed over by an external loader, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPalette {
    pub key: String,
    pub names: Vec<String>,
    pub rgb: RgbData,
    pub index: IndexSpec,
    pub metadata: PaletteMetadata,
}

/// One named color of a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Display name with its original casing and spacing
    pub name: String,
    pub rgb: Srgb,
    /// Position within the palette's natural-sort order
    pub index: usize,
}

impl ColorEntry {
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

/// A validated palette.
///
/// Entries are in natural-sort order, fixed at load time. The name
/// normalization structures are built on first use and then shared by every
/// later query.
#[derive(Debug)]
pub struct PaletteRecord {
    key: String,
    entries: Vec<ColorEntry>,
    index_pattern: Option<Regex>,
    metadata: PaletteMetadata,
    normalization: OnceLock<NormalizationState>,
}

impl PaletteRecord {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metadata(&self) -> &PaletteMetadata {
        &self.metadata
    }

    /// Anchored pattern recognizing the leading index of a name, if any.
    pub fn index_pattern(&self) -> Option<&Regex> {
        self.index_pattern.as_ref()
    }

    /// Name normalization structures, built on first call.
    pub fn normalization(&self) -> &NormalizationState {
        self.normalization.get_or_init(|| {
            tracing::debug!(palette = %self.key, entries = self.entries.len(), "building name index");
            NormalizationState::build(&self.entries, self.index_pattern.as_ref())
        })
    }

    /// Whether [`normalization`](Self::normalization) has run yet.
    pub fn is_normalized(&self) -> bool {
        self.normalization.get().is_some()
    }
}

impl RawPalette {
    /// Checks every field and produces the immutable record.
    pub(crate) fn validate(self) -> Result<PaletteRecord, ValidationError> {
        let RawPalette {
            key,
            names,
            rgb,
            index,
            metadata,
        } = self;

        if key.trim().is_empty() {
            return Err(ValidationError::new(&key, "key", "must not be empty"));
        }
        validate_names(&key, &names)?;

        if rgb.len() != names.len() {
            return Err(ValidationError::new(
                &key,
                "rgb",
                format!("has {} rows but there are {} names", rgb.len(), names.len()),
            ));
        }
        let colors = normalize_rgb(&key, rgb)?;
        let index_pattern = compile_index(&key, &index, &names)?;
        validate_distinct_keys(&key, &names, index_pattern.as_ref())?;

        let mut entries: Vec<ColorEntry> = names
            .into_iter()
            .zip(colors)
            .map(|(name, rgb)| ColorEntry { name, rgb, index: 0 })
            .collect();
        entries.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.index = i;
        }

        Ok(PaletteRecord {
            key,
            entries,
            index_pattern,
            metadata,
            normalization: OnceLock::new(),
        })
    }
}

fn validate_names(key: &str, names: &[String]) -> Result<(), ValidationError> {
    if names.is_empty() {
        return Err(ValidationError::new(key, "names", "must contain at least one name"));
    }
    let mut seen = HashSet::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ValidationError::new(key, "names", format!("entry {i} is empty")));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ValidationError::new(
                key,
                "names",
                format!("duplicate name {name:?}"),
            ));
        }
    }
    Ok(())
}

/// Rejects names that normalize to the same matching key; the later one
/// could never be resolved.
fn validate_distinct_keys(
    key: &str,
    names: &[String],
    index: Option<&Regex>,
) -> Result<(), ValidationError> {
    let case = CaseClasses::observe(names.iter().map(String::as_str));
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(names.len());
    for name in names {
        let folded = fold(&canonical_form(name, index, &case)).to_lowercase();
        if let Some(first) = seen.insert(folded, name) {
            return Err(ValidationError::new(
                key,
                "names",
                format!("{first:?} and {name:?} are indistinguishable"),
            ));
        }
    }
    Ok(())
}

fn check_columns(key: &str, row: usize, columns: usize) -> Result<(), ValidationError> {
    if columns == 3 {
        Ok(())
    } else {
        Err(ValidationError::new(
            key,
            "rgb",
            format!("row {row} has {columns} columns, expected 3"),
        ))
    }
}

fn normalize_rgb(key: &str, rgb: RgbData) -> Result<Vec<Srgb>, ValidationError> {
    match rgb {
        RgbData::Float(rows) => rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                check_columns(key, i, row.len())?;
                for (j, &v) in row.iter().enumerate() {
                    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                        return Err(ValidationError::new(
                            key,
                            "rgb",
                            format!("row {i} column {j} value {v} is not a finite value in [0, 1]"),
                        ));
                    }
                }
                Ok(Srgb::new(row[0], row[1], row[2]))
            })
            .collect(),
        RgbData::Integer { depth, rows } => {
            let max = depth.max_value();
            rows.iter()
                .enumerate()
                .map(|(i, row)| {
                    check_columns(key, i, row.len())?;
                    for (j, &v) in row.iter().enumerate() {
                        if v > max {
                            return Err(ValidationError::new(
                                key,
                                "rgb",
                                format!("row {i} column {j} value {v} exceeds {max}"),
                            ));
                        }
                    }
                    let scale = |v: u64| v as f64 / max as f64;
                    Ok(Srgb::new(scale(row[0]), scale(row[1]), scale(row[2])))
                })
                .collect()
        }
    }
}

fn compile_index(
    key: &str,
    index: &IndexSpec,
    names: &[String],
) -> Result<Option<Regex>, ValidationError> {
    let source = match index {
        IndexSpec::None => return Ok(None),
        IndexSpec::Auto => {
            let all_indexed = names
                .iter()
                .all(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()));
            if !all_indexed {
                return Ok(None);
            }
            r"\d+".to_string()
        }
        IndexSpec::Pattern(p) => p.clone(),
    };
    Regex::new(&format!("^(?:{source})"))
        .map(Some)
        .map_err(|e| {
            ValidationError::new(
                key,
                "index",
                format!("pattern {source:?} does not compile: {e}"),
            )
        })
}
