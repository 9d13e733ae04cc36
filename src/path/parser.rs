use super::command::{arity, PathCommand, SubPath};
use super::syntax::Scanner;
use crate::errors::{Error, Result};
use crate::geometry::Point;

/// Explicit state for a single parse of path data.
pub struct PathParser<'a> {
    tokens: Scanner<'a>,
    // current command being processed; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<char>,
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // commands of the sub-path under construction
    pending: Vec<PathCommand>,
    subpaths: Vec<SubPath>,
}

impl<'a> PathParser<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            tokens: Scanner::new(data),
            command: None,
            position: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            pending: Vec::new(),
            subpaths: Vec::new(),
        }
    }

    /// Consume the parser, returning every sub-path in drawing order.
    ///
    /// Any error aborts the whole parse; no partial result is returned.
    pub fn parse(mut self) -> Result<Vec<SubPath>> {
        loop {
            self.tokens.skip_wsp_comma();
            if self.tokens.at_end() {
                break;
            }
            self.process_instruction()?;
        }
        self.finish_subpath();
        Ok(self.subpaths)
    }

    fn finish_subpath(&mut self) {
        let commands = std::mem::take(&mut self.pending);
        if let Some(subpath) = SubPath::new(self.subpath_start, commands) {
            self.subpaths.push(subpath);
        }
    }

    /// Determine the command for the next parameter group: either an explicit
    /// command letter, or an implicit repeat of the previous one.
    fn next_command(&mut self) -> Result<char> {
        if self.tokens.at_command() || !self.tokens.at_number() {
            // reports anything which is neither number nor command
            return self.tokens.read_command();
        }
        match self.command {
            // "If a moveto is followed by multiple pairs of coordinates,
            // the subsequent pairs are treated as implicit lineto commands."
            Some('M') => Ok('L'),
            Some('m') => Ok('l'),
            // closepath takes no parameters, so has nothing to repeat
            Some('Z' | 'z') => Err(self.tokens.unrecognized()),
            Some(c) => Ok(c),
            // numbers with no preceding command are lines from the origin
            None => Ok('L'),
        }
    }

    fn read_params(&mut self, command: char) -> Result<Vec<f64>> {
        let count = arity(command).unwrap_or(0);
        let mut params = Vec::with_capacity(count);
        for idx in 0..count {
            self.tokens.skip_wsp_comma();
            if self.tokens.at_end() || self.tokens.at_command() {
                return Err(Error::TruncatedCommand {
                    offset: self.tokens.offset(),
                    command,
                });
            }
            // large-arc-flag and sweep-flag are single digits, and may
            // run straight into the following parameter.
            let value = if matches!(command, 'A' | 'a') && (idx == 3 || idx == 4) {
                self.tokens.read_flag()?
            } else {
                self.tokens.read_number()?
            };
            params.push(value);
        }
        Ok(params)
    }

    /// Absolute point at which `command` with `params` leaves the pen.
    fn resolve_end(&self, command: char, params: &[f64]) -> Point {
        let pos = self.position;
        // final coordinate pair of the parameter group
        let last_xy = || {
            let n = params.len();
            (params[n - 2], params[n - 1])
        };
        match command {
            'M' | 'L' | 'T' | 'C' | 'S' | 'Q' | 'A' => last_xy().into(),
            'm' | 'l' | 't' | 'c' | 's' | 'q' | 'a' => {
                let (dx, dy) = last_xy();
                pos.translated(dx, dy)
            }
            'H' => Point::new(params[0], pos.y),
            'h' => pos.translated(params[0], 0.),
            'V' => Point::new(pos.x, params[0]),
            'v' => pos.translated(0., params[0]),
            _ => self.subpath_start,
        }
    }

    fn process_instruction(&mut self) -> Result<()> {
        let command = self.next_command()?;
        self.command = Some(command);
        let params = self.read_params(command)?;

        let start = self.position;
        let end = self.resolve_end(command, &params);

        if matches!(command, 'M' | 'm') {
            // 'Subsequent "moveto" commands (i.e., when the "moveto" is not
            // the first command) represent the start of a new subpath'
            self.finish_subpath();
            self.subpath_start = end;
        } else if self.pending.is_empty() {
            // sub-path without a moveto starts wherever the pen is
            self.subpath_start = start;
        }

        self.pending.push(PathCommand::new(command, params, start, end));
        self.position = end;

        if matches!(command, 'Z' | 'z') {
            self.finish_subpath();
        }
        Ok(())
    }
}

/// Parse path data into sub-paths.
pub fn parse_path_data(data: &str) -> Result<Vec<SubPath>> {
    PathParser::new(data).parse()
}

/// Parse path data into a flat list of commands.
pub fn parse_path_commands(data: &str) -> Result<Vec<PathCommand>> {
    Ok(parse_path_data(data)?
        .into_iter()
        .flat_map(SubPath::into_commands)
        .collect())
}
