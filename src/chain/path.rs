use std::collections::VecDeque;

use super::{DrawTarget, PathSegment};
use crate::geometry::{BoundingBox, Point};

/// An ordered chain of segments, each drawn on from the end of the last.
///
/// Segments are owned by the chain; splicing one chain onto another moves
/// the segments across.
#[derive(Debug, Default)]
pub struct Path {
    segments: VecDeque<Box<dyn PathSegment>>,
    pub(super) closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segment(segment: Box<dyn PathSegment>) -> Self {
        let mut path = Self::new();
        path.push_back(segment);
        path
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True once the optimizer has found the chain ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn front(&self) -> Option<&dyn PathSegment> {
        self.segments.front().map(|s| s.as_ref())
    }

    pub fn back(&self) -> Option<&dyn PathSegment> {
        self.segments.back().map(|s| s.as_ref())
    }

    /// Start point of the first segment.
    pub fn start(&self) -> Option<Point> {
        self.front().map(|s| s.p1())
    }

    /// End point of the last segment.
    pub fn end(&self) -> Option<Point> {
        self.back().map(|s| s.p2())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PathSegment> + '_ {
        self.segments.iter().map(|s| s.as_ref())
    }

    pub fn push_front(&mut self, segment: Box<dyn PathSegment>) {
        self.segments.push_front(segment);
    }

    pub fn push_back(&mut self, segment: Box<dyn PathSegment>) {
        self.segments.push_back(segment);
    }

    /// Splice all of `other` in before the first segment.
    pub fn push_path_front(&mut self, mut other: Path) {
        // move whichever side is shorter
        if other.len() < self.len() {
            while let Some(segment) = other.segments.pop_back() {
                self.segments.push_front(segment);
            }
        } else {
            other.segments.append(&mut self.segments);
            self.segments = other.segments;
        }
    }

    /// Splice all of `other` in after the last segment.
    pub fn push_path_back(&mut self, mut other: Path) {
        if other.len() < self.len() {
            self.segments.append(&mut other.segments);
        } else {
            while let Some(segment) = self.segments.pop_back() {
                other.segments.push_front(segment);
            }
            self.segments = other.segments;
        }
    }

    /// Reverse the direction of the whole chain: segment order is reversed
    /// and every segment is itself reversed.
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
        for segment in self.segments.iter_mut() {
            segment.reverse();
        }
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::union(self.iter().map(|s| s.bounds()))
    }

    /// Emit this chain onto `target`. Empty chains draw nothing.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let Some(start) = self.start() else {
            return;
        };
        target.move_to(start);
        for segment in self.iter() {
            segment.draw_onto(target);
        }
        if self.closed {
            target.close_path();
        }
        target.end_path();
    }
}
