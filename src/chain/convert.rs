//! Conversion of parsed path data into drawable segments.

use super::{PathArc, PathCubic, PathLine, PathSegment};
use crate::geometry::Point;
use crate::path::SubPath;

/// Break one sub-path into segments, one per drawing command.
///
/// Shorthand and quadratic curves become cubic segments; moveto commands and
/// closepath commands which don't move the pen produce nothing.
pub fn segments_from_subpath(subpath: &SubPath) -> Vec<Box<dyn PathSegment>> {
    let mut segments: Vec<Box<dyn PathSegment>> = Vec::new();
    // previous second control point (if any) for evaluating 'S' and 's'
    let mut cubic_cp2: Option<Point> = None;
    // previous control point (if any) for evaluating 'T' and 't'
    let mut quadratic_cp: Option<Point> = None;

    for cmd in subpath.commands() {
        let (start, end) = (cmd.start(), cmd.end());
        let params = cmd.params();
        let ctrl = |idx: usize| {
            if cmd.is_relative() {
                start.translated(params[idx], params[idx + 1])
            } else {
                Point::new(params[idx], params[idx + 1])
            }
        };
        // "The first control point is assumed to be the reflection of the
        //  second control point on the previous command relative to the
        //  current point."
        let reflect = |cp: Option<Point>| {
            cp.map_or(start, |c| Point::new(2. * start.x - c.x, 2. * start.y - c.y))
        };

        let mut next_cubic_cp2 = None;
        let mut next_quadratic_cp = None;
        match cmd.command() {
            'M' | 'm' => {}
            'Z' | 'z' => {
                if !start.almost_equals(&end) {
                    segments.push(Box::new(PathLine::new(start, end)));
                }
            }
            'C' | 'c' => {
                let (cp1, cp2) = (ctrl(0), ctrl(2));
                next_cubic_cp2 = Some(cp2);
                segments.push(Box::new(PathCubic::new(start, cp1, cp2, end)));
            }
            'S' | 's' => {
                let cp1 = reflect(cubic_cp2);
                let cp2 = ctrl(0);
                next_cubic_cp2 = Some(cp2);
                segments.push(Box::new(PathCubic::new(start, cp1, cp2, end)));
            }
            'Q' | 'q' => {
                let cp = ctrl(0);
                next_quadratic_cp = Some(cp);
                segments.push(Box::new(PathCubic::from_quadratic(start, cp, end)));
            }
            'T' | 't' => {
                let cp = reflect(quadratic_cp);
                next_quadratic_cp = Some(cp);
                segments.push(Box::new(PathCubic::from_quadratic(start, cp, end)));
            }
            'A' | 'a' if params[0] != 0. && params[1] != 0. => {
                segments.push(Box::new(PathArc {
                    a: start,
                    rx: params[0],
                    ry: params[1],
                    rotation: params[2],
                    large_arc: params[3] != 0.,
                    sweep: params[4] != 0.,
                    b: end,
                }));
            }
            // lines, and zero-radius arcs which are drawn as lines
            _ => segments.push(Box::new(PathLine::new(start, end))),
        }
        cubic_cp2 = next_cubic_cp2;
        quadratic_cp = next_quadratic_cp;
    }
    segments
}

/// Segments for every sub-path, in drawing order.
pub fn segments_from_subpaths(subpaths: &[SubPath]) -> Vec<Box<dyn PathSegment>> {
    subpaths.iter().flat_map(segments_from_subpath).collect()
}
