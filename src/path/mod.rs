//! The path data ('d' attribute) mini-language: scanning, parsing and writing.

mod command;
mod parser;
mod syntax;
mod writer;

use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result};

pub use command::{arity, PathCommand, SubPath};
pub use parser::{parse_path_commands, parse_path_data, PathParser};
pub use syntax::{Scanner, Token};
pub use writer::write_path_data;

/// Parsed path data; `FromStr` parses and `Display` writes the canonical form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    subpaths: Vec<SubPath>,
}

impl PathData {
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn into_subpaths(self) -> Vec<SubPath> {
        self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &PathCommand> + '_ {
        self.subpaths.iter().flat_map(|sp| sp.commands())
    }
}

impl From<Vec<SubPath>> for PathData {
    fn from(subpaths: Vec<SubPath>) -> Self {
        Self { subpaths }
    }
}

impl FromStr for PathData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self {
            subpaths: parse_path_data(s)?,
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_path_data(&self.subpaths))
    }
}
