use crate::geometry::Point;
use crate::path::{PathCommand, SubPath};

/// An output surface which chains of segments are drawn onto.
///
/// For each chain the surface receives `move_to` the chain start, one call
/// per segment, `close_path` if the chain is a loop, then `end_path`.
pub trait DrawTarget {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn cubic_to(&mut self, cp1: Point, cp2: Point, end: Point);
    fn arc_to(&mut self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, end: Point);
    fn close_path(&mut self);
    fn end_path(&mut self) {}
}

/// Builds absolute path data from drawing calls, suitable for
/// `write_path_data`.
#[derive(Debug, Default)]
pub struct PathDataBuilder {
    subpaths: Vec<SubPath>,
    pending: Vec<PathCommand>,
    subpath_start: Point,
    position: Point,
}

impl PathDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: char, params: Vec<f64>, end: Point) {
        let start = self.position;
        if self.pending.is_empty() {
            self.subpath_start = start;
        }
        self.pending.push(PathCommand::new(command, params, start, end));
        self.position = end;
    }

    fn finish_subpath(&mut self) {
        let commands = std::mem::take(&mut self.pending);
        if let Some(subpath) = SubPath::new(self.subpath_start, commands) {
            self.subpaths.push(subpath);
        }
    }

    pub fn build(mut self) -> Vec<SubPath> {
        self.finish_subpath();
        self.subpaths
    }
}

impl DrawTarget for PathDataBuilder {
    fn move_to(&mut self, p: Point) {
        self.finish_subpath();
        self.push('M', vec![p.x, p.y], p);
        self.subpath_start = p;
    }

    fn line_to(&mut self, p: Point) {
        self.push('L', vec![p.x, p.y], p);
    }

    fn cubic_to(&mut self, cp1: Point, cp2: Point, end: Point) {
        self.push('C', vec![cp1.x, cp1.y, cp2.x, cp2.y, end.x, end.y], end);
    }

    fn arc_to(&mut self, rx: f64, ry: f64, rotation: f64, large_arc: bool, sweep: bool, end: Point) {
        let flag = |f: bool| if f { 1. } else { 0. };
        self.push(
            'A',
            vec![rx, ry, rotation, flag(large_arc), flag(sweep), end.x, end.y],
            end,
        );
    }

    fn close_path(&mut self) {
        let start = self.subpath_start;
        self.push('Z', vec![], start);
        self.finish_subpath();
    }

    fn end_path(&mut self) {
        self.finish_subpath();
    }
}
