//! Constants used throughout svgdata

/// Absolute per-axis distance under which two points are treated as the same
/// point when stitching segments into chains.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-6;

/// Every command letter of the path data grammar.
pub const PATH_COMMANDS: &str = "MmLlHhVvZzCcSsQqTtAa";

/// Whitespace per the SVG grammar (0x20, 0x9, 0xA, 0xD), plus form-feed.
pub const PATH_WHITESPACE: &[u8] = b" \t\n\r\x0c";

/// Read from stdin / write to stdout when given as a file name
pub const STDIO_PATH: &str = "-";
