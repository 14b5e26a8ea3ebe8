//! Asset loading with embedded fallbacks
//!
//! Palettes and the config file ship inside the binary. Behavior:
//!
//! - If an env var is NOT set: use embedded assets only (no filesystem access)
//! - If an env var IS set and path is empty/missing: seed with embedded assets, then use filesystem
//! - If an env var IS set and path has files: use filesystem, with embedded palettes merged in
//!   underneath (an external file replaces the embedded file of the same name)

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use palette_match::RawPalette;

use crate::error::LoadError;
use crate::models::PaletteFile;

/// Embedded palette definitions
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.yaml"]
#[include = "*.yml"]
struct EmbeddedPalettes;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palettes,
    Config,
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub palettes_seeded: Vec<String>,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.palettes_seeded.is_empty() && !self.config_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

fn is_palette_file(name: &str) -> bool {
    name.ends_with(".yaml") || name.ends_with(".yml")
}

/// Asset loader with merge behavior and optional filesystem override
pub struct AssetLoader {
    /// External palettes directory (from PALETTES_DIR env var)
    palettes_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(palettes_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palettes_dir,
            config_file,
        }
    }

    /// Loader that only sees the embedded assets
    pub fn embedded() -> Self {
        Self::new(None, None)
    }

    /// Read a palette file by file name
    ///
    /// If an external path is configured, tries filesystem first, then falls back to embedded.
    pub fn read_palette(&self, file_name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.palettes_dir {
            let full_path = dir.join(file_name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading palette from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedPalettes::get(file_name)
            .map(|f| {
                tracing::trace!(file = %file_name, "Loading palette from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Palette not found: {file_name}"),
                )
            })
    }

    /// List all palette files (merged view of embedded + external), sorted
    pub fn list_palette_files(&self) -> Vec<String> {
        let mut files: BTreeSet<String> = EmbeddedPalettes::iter()
            .map(|s| s.to_string())
            .filter(|s| is_palette_file(s))
            .collect();

        if let Some(ref dir) = self.palettes_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if is_palette_file(name) {
                            files.insert(name.to_string());
                        }
                    }
                }
            }
        }

        files.into_iter().collect()
    }

    /// Read and parse every palette file.
    ///
    /// Any unreadable or malformed file fails the whole load; the catalog
    /// then rejects duplicate keys and bad color data.
    pub fn load_palettes(&self) -> Result<Vec<RawPalette>, LoadError> {
        let mut palettes = Vec::new();
        for file in self.list_palette_files() {
            let bytes = self.read_palette(&file).map_err(|source| LoadError::Io {
                path: file.clone(),
                source,
            })?;
            let content = String::from_utf8(bytes.into_owned()).map_err(|e| LoadError::Io {
                path: file.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            })?;
            let raw = PaletteFile::parse(&file, &content)?.into_raw(&file)?;
            tracing::debug!(file = %file, key = %raw.key, colors = raw.names.len(), "Parsed palette");
            palettes.push(raw);
        }
        Ok(palettes)
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Check if a directory exists and is empty (ignoring .gitkeep)
    fn is_empty_dir(path: &Path) -> bool {
        if !path.exists() || !path.is_dir() {
            return false;
        }
        path.read_dir()
            .map(|mut entries| {
                entries.all(|e| {
                    e.map(|entry| entry.file_name() == ".gitkeep")
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    }

    /// Seed empty/missing locations with embedded assets
    ///
    /// Only operates on paths that were configured (env var was set).
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(ref dir) = self.palettes_dir {
            if !dir.exists() || Self::is_empty_dir(dir) {
                fs::create_dir_all(dir)?;
                for file in EmbeddedPalettes::iter() {
                    if let Some(data) = EmbeddedPalettes::get(&file) {
                        fs::write(dir.join(file.as_ref()), &*data.data)?;
                        report.palettes_seeded.push(file.to_string());
                    }
                }
                if !report.palettes_seeded.is_empty() {
                    tracing::info!(
                        dir = %dir.display(),
                        count = report.palettes_seeded.len(),
                        "Seeded palettes directory with embedded assets"
                    );
                }
            }
        }

        if let Some(ref path) = self.config_file {
            if !path.exists() {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                if let Some(data) = EmbeddedConfig::get("config.yaml") {
                    fs::write(path, &*data.data)?;
                    report.config_seeded = true;
                    tracing::info!(path = %path.display(), "Seeded config file with embedded default");
                }
            }
        }

        Ok(report)
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths (or defaults if not set).
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Palettes => {
                    let dir = self
                        .palettes_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./palettes"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedPalettes::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedPalettes::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Palettes => {
                let mut files: Vec<String> =
                    EmbeddedPalettes::iter().map(|s| s.to_string()).collect();
                files.sort();
                files
            }
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}
