//! Colorname - color names and nearest colors from named palettes
//!
//! Serves a catalog of palettes over HTTP and the command line: resolve
//! loosely typed color names to palette entries, and find the perceptually
//! closest entry for sRGB samples. Matching itself lives in `palette_match`.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
