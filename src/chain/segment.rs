use std::fmt::Debug;

use super::DrawTarget;
use crate::geometry::{BoundingBox, Point};

/// A drawable primitive with two endpoints, which may be stitched into a
/// `Path` chain at either end.
pub trait PathSegment: Debug {
    /// Start point.
    fn p1(&self) -> Point;
    /// End point.
    fn p2(&self) -> Point;
    /// Swap the roles of the endpoints, along with any direction-dependent
    /// state, so the same shape is drawn from `p2` to `p1`.
    fn reverse(&mut self);
    /// Draw this segment; the target is already positioned at `p1()`.
    fn draw_onto(&self, target: &mut dyn DrawTarget);
    fn bounds(&self) -> BoundingBox;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLine {
    pub a: Point,
    pub b: Point,
}

impl PathLine {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// True if both lines join the same two points, in either direction.
    pub fn almost_equals(&self, other: &PathLine) -> bool {
        (self.a.almost_equals(&other.a) && self.b.almost_equals(&other.b))
            || (self.a.almost_equals(&other.b) && self.b.almost_equals(&other.a))
    }
}

impl PathSegment for PathLine {
    fn p1(&self) -> Point {
        self.a
    }

    fn p2(&self) -> Point {
        self.b
    }

    fn reverse(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    fn draw_onto(&self, target: &mut dyn DrawTarget) {
        target.line_to(self.b);
    }

    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.a.x.min(self.b.x),
            self.a.y.min(self.b.y),
            self.a.x.max(self.b.x),
            self.a.y.max(self.b.y),
        )
    }
}

/// Cubic Bézier curve; control points travel with the endpoints on reversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCubic {
    pub a: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub b: Point,
}

impl PathCubic {
    pub fn new(a: Point, cp1: Point, cp2: Point, b: Point) -> Self {
        Self { a, cp1, cp2, b }
    }

    /// Exact cubic form of a quadratic Bézier with control point `cp`.
    pub fn from_quadratic(a: Point, cp: Point, b: Point) -> Self {
        let two_thirds = |from: Point| {
            from.translated((cp.x - from.x) * 2. / 3., (cp.y - from.y) * 2. / 3.)
        };
        Self::new(a, two_thirds(a), two_thirds(b), b)
    }
}

impl PathSegment for PathCubic {
    fn p1(&self) -> Point {
        self.a
    }

    fn p2(&self) -> Point {
        self.b
    }

    fn reverse(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
        std::mem::swap(&mut self.cp1, &mut self.cp2);
    }

    fn draw_onto(&self, target: &mut dyn DrawTarget) {
        target.cubic_to(self.cp1, self.cp2, self.b);
    }

    fn bounds(&self) -> BoundingBox {
        // control polygon hull; contains the curve, if not tightly
        BoundingBox::from_points([self.a, self.cp1, self.cp2, self.b])
            .unwrap_or_else(|| BoundingBox::new(self.a.x, self.a.y, self.a.x, self.a.y))
    }
}

/// Elliptical arc, kept in endpoint parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathArc {
    pub a: Point,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub b: Point,
}

impl PathSegment for PathArc {
    fn p1(&self) -> Point {
        self.a
    }

    fn p2(&self) -> Point {
        self.b
    }

    fn reverse(&mut self) {
        // the same arc traversed backwards turns the other way
        std::mem::swap(&mut self.a, &mut self.b);
        self.sweep = !self.sweep;
    }

    fn draw_onto(&self, target: &mut dyn DrawTarget) {
        target.arc_to(
            self.rx,
            self.ry,
            self.rotation,
            self.large_arc,
            self.sweep,
            self.b,
        );
    }

    fn bounds(&self) -> BoundingBox {
        // An arc may bulge by up to its larger radius past the chord.
        let r = self.rx.abs().max(self.ry.abs());
        let chord = BoundingBox::from_points([self.a, self.b])
            .unwrap_or_else(|| BoundingBox::new(self.a.x, self.a.y, self.a.x, self.a.y));
        BoundingBox::new(chord.x1 - r, chord.y1 - r, chord.x2 + r, chord.y2 + r)
    }
}
