use std::fmt;

use crate::geometry::Point;
use crate::types::fstr;

/// Number of parameters taken by each path command, or `None` if `command`
/// is not a path command letter.
pub fn arity(command: char) -> Option<usize> {
    match command {
        'M' | 'm' | 'L' | 'l' | 'T' | 't' => Some(2),
        'H' | 'h' | 'V' | 'v' => Some(1),
        'C' | 'c' => Some(6),
        'S' | 's' | 'Q' | 'q' => Some(4),
        'A' | 'a' => Some(7),
        'Z' | 'z' => Some(0),
        _ => None,
    }
}

/// A single path instruction with its parameters, together with the absolute
/// points it starts and ends at once preceding relative commands are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    command: char,
    params: Vec<f64>,
    start: Point,
    end: Point,
}

impl PathCommand {
    pub(crate) fn new(command: char, params: Vec<f64>, start: Point, end: Point) -> Self {
        debug_assert_eq!(arity(command), Some(params.len()));
        Self {
            command,
            params,
            start,
            end,
        }
    }

    pub fn command(&self) -> char {
        self.command
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_relative(&self) -> bool {
        self.command.is_ascii_lowercase()
    }

    pub fn is_moveto(&self) -> bool {
        matches!(self.command, 'M' | 'm')
    }

    pub fn is_closepath(&self) -> bool {
        matches!(self.command, 'Z' | 'z')
    }

    /// Append the text form of this command to `out`.
    ///
    /// A space is only inserted before a number where the previous character
    /// would otherwise run into it; a leading '-' is its own delimiter.
    pub(crate) fn write_to(&self, out: &mut String) {
        out.push(self.command);
        for &value in &self.params {
            let num = fstr(value);
            if !num.starts_with('-') && out.ends_with(|c: char| c.is_ascii_digit() || c == '.') {
                out.push(' ');
            }
            out.push_str(&num);
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

/// A run of commands from one moveto (or implicit start) to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    commands: Vec<PathCommand>,
    start: Point,
    end: Point,
}

impl SubPath {
    /// Build a `SubPath` starting at `start`; `None` if `commands` is empty.
    pub(crate) fn new(start: Point, commands: Vec<PathCommand>) -> Option<Self> {
        let end = commands.last()?.end;
        Some(Self {
            commands,
            start,
            end,
        })
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Initial point of the sub-path: the moveto target, or the current
    /// point where the sub-path began without a moveto.
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// True if the final command is a closepath.
    pub fn is_closed(&self) -> bool {
        self.commands.last().is_some_and(|c| c.is_closepath())
    }
}
