//! ## svgdata - read, write and re-assemble SVG path data
//!
//! The core of this crate is two pieces:
//!
//! - the path data engine in [`path`]: a scanner, parser and writer for the
//!   mini-language used in the `d` attribute of `<path>` elements.
//! - the chain optimizer in [`chain`]: stitches independently created line
//!   and curve segments into the fewest continuous paths, marking loops as
//!   closed.
//!
//! A streaming document transform built on these is available through the
//! `transform_*` functions, and is what the `svgdata` command line program
//! runs.
//!
//! ## Example
//!
//! ```
//! use svgdata::chain::{OptimizedPathCollection, PathLine};
//! use svgdata::geometry::Point;
//! use svgdata::path::{parse_path_data, write_path_data};
//!
//! let subpaths = parse_path_data("M 0,0 L 10,10 Z").unwrap();
//! assert_eq!(write_path_data(&subpaths), "M0 0L10 10Z");
//!
//! let mut opc = OptimizedPathCollection::new();
//! opc.add_segment(Box::new(PathLine::new(Point::new(10., 10.), Point::new(20., 0.))));
//! opc.add_segment(Box::new(PathLine::new(Point::new(0., 0.), Point::new(10., 10.))));
//! opc.optimize();
//! assert_eq!(opc.num_paths(), 1);
//! assert_eq!(write_path_data(&opc.to_path_data()), "M0 0L10 10L20 0");
//! ```

use std::fs::{self, File};
use std::io::{BufReader, Cursor, Read, Write};

pub mod chain;
#[cfg(feature = "cli")]
pub mod cli;
mod constants;
pub mod document;
pub mod errors;
pub mod geometry;
pub mod path;
mod types;

pub use constants::COINCIDENCE_TOLERANCE;
pub use errors::{Error, Result};
pub use types::fstr;

use constants::STDIO_PATH;
use document::Transformer;

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure a single document transformation.
#[derive(Clone, Debug)]
pub struct TransformConfig {
    /// Rewrite `<path>` data in canonical form (default true)
    pub normalize_paths: bool,
    /// Merge sibling `<line>` elements with matching attributes into
    /// `<path>` elements (default false)
    pub join_lines: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            normalize_paths: true,
            join_lines: false,
        }
    }
}

/// Reads from the `reader` stream, processes document, and writes to `writer`.
///
/// The entire stream is read before any data is written to `writer`.
pub fn transform_stream(
    reader: &mut dyn std::io::BufRead,
    writer: &mut dyn Write,
    config: &TransformConfig,
) -> Result<()> {
    Transformer::from_config(config).transform(reader, writer)
}

/// Transform `input` provided as a string, returning the result as a string.
pub fn transform_str<T: Into<String>>(input: T, config: &TransformConfig) -> Result<String> {
    let mut input = Cursor::new(input.into());
    let mut output: Vec<u8> = vec![];

    transform_stream(&mut input, &mut output, config)?;

    Ok(String::from_utf8(output)?)
}

/// Transform the provided `input` string using default config.
pub fn transform_str_default<T: Into<String>>(input: T) -> Result<String> {
    transform_str(input, &TransformConfig::default())
}

/// Read file from `input` ('-' for stdin), process the result,
/// and write to file given by `output` ('-' for stdout).
pub fn transform_file(input: &str, output: &str, config: &TransformConfig) -> Result<()> {
    let mut in_reader: Box<dyn std::io::BufRead> = if input == STDIO_PATH {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Box::new(BufReader::new(Cursor::new(buf)))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    if output == STDIO_PATH {
        transform_stream(&mut in_reader, &mut std::io::stdout(), config)?;
    } else {
        // Write to a buffer first so a failed transform leaves any existing
        // output file untouched.
        let mut out = Vec::new();
        transform_stream(&mut in_reader, &mut out, config)?;
        fs::write(output, out)?;
    }

    Ok(())
}
