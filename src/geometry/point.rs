use std::fmt;

use crate::constants::COINCIDENCE_TOLERANCE;
use crate::types::fstr;

/// A location in user coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Approximate equality used when stitching segments together.
    ///
    /// Both axes must differ by less than `COINCIDENCE_TOLERANCE`; this is an
    /// absolute tolerance, independent of the magnitude of the coordinates.
    pub fn almost_equals(&self, other: &Point) -> bool {
        (self.x - other.x).abs() < COINCIDENCE_TOLERANCE
            && (self.y - other.y).abs() < COINCIDENCE_TOLERANCE
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", fstr(self.x), fstr(self.y))
    }
}
