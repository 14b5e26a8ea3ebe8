//! Test fixtures and constants.

/// Keys of the embedded palettes, in natural order
pub const EMBEDDED_KEYS: [&str; 5] = ["Earth", "HTML4", "MATLAB", "Natural", "RAL"];

/// Every metric name accepted by color queries
pub const METRICS: [&str; 9] = [
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

/// A minimal palette file in the integer encoding
pub const TINY_PALETTE: &str = r##"
key: Tiny
license: CC0
encoding: u8
colors:
  - { name: Black, rgb: [0, 0, 0] }
  - { name: White, hex: "#FFFFFF" }
"##;

/// Same key as an embedded palette but different content
pub const OVERRIDE_HTML4: &str = r##"
key: HTML4
colors:
  - { name: Ink, hex: "#101010" }
"##;

/// Not valid YAML
pub const MALFORMED_PALETTE: &str = "key: Broken\ncolors: [\n";

/// Valid YAML whose rows are out of range
pub const OUT_OF_RANGE_PALETTE: &str = r##"
key: Hot
colors:
  - { name: Too Bright, rgb: [1.5, 0, 0] }
"##;
