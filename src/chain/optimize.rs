use super::{segments_from_subpath, DrawTarget, Path, PathDataBuilder, PathSegment};
use crate::geometry::BoundingBox;
use crate::path::SubPath;

/// Takes a set of `Path`s and `PathSegment`s and stitches them into
/// continuous chains. After adding everything, call `optimize()`.
#[derive(Debug, Default)]
pub struct OptimizedPathCollection {
    paths: Vec<Path>,
}

impl OptimizedPathCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    pub fn add_segment(&mut self, segment: Box<dyn PathSegment>) {
        self.add_path(Path::from_segment(segment));
    }

    /// Add each sub-path as a single chain of its segments.
    pub fn add_subpaths(&mut self, subpaths: &[SubPath]) {
        for subpath in subpaths {
            let mut path = Path::new();
            for segment in segments_from_subpath(subpath) {
                path.push_back(segment);
            }
            self.add_path(path);
        }
    }

    /// Join `np` onto the first existing chain with an end coincident with
    /// one of `np`'s ends, reversing `np` where both chains meet start-to-start
    /// or end-to-end. Otherwise `np` becomes a new chain. Empty chains are
    /// ignored.
    pub fn add_path(&mut self, mut np: Path) {
        let (Some(np_start), Some(np_end)) = (np.start(), np.end()) else {
            return;
        };
        for path in self.paths.iter_mut() {
            let (Some(start), Some(end)) = (path.start(), path.end()) else {
                continue;
            };
            if np_end.almost_equals(&start) {
                path.push_path_front(np);
                return;
            }
            if np_start.almost_equals(&end) {
                path.push_path_back(np);
                return;
            }
            if np_start.almost_equals(&start) {
                np.reverse();
                path.push_path_front(np);
                return;
            }
            if np_end.almost_equals(&end) {
                np.reverse();
                path.push_path_back(np);
                return;
            }
        }

        self.paths.push(np);
    }

    /// Merge chains until no further joins are possible, then mark chains
    /// which end where they start as closed.
    ///
    /// A single pass of `add_path` is order-dependent: a chain may only become
    /// joinable after a later chain has bridged a gap. So passes repeat until
    /// one fails to reduce the number of chains.
    pub fn optimize(&mut self) {
        loop {
            let prev_num_paths = self.paths.len();
            for path in std::mem::take(&mut self.paths) {
                self.add_path(path);
            }
            if self.paths.len() == prev_num_paths {
                break;
            }
        }

        for path in self.paths.iter_mut() {
            path.closed = match (path.start(), path.end()) {
                (Some(start), Some(end)) => start.almost_equals(&end),
                _ => false,
            };
        }
    }

    pub fn draw(&self, target: &mut dyn DrawTarget) {
        for path in &self.paths {
            path.draw(target);
        }
    }

    /// Render every chain as one sub-path each.
    pub fn to_path_data(&self) -> Vec<SubPath> {
        let mut builder = PathDataBuilder::new();
        self.draw(&mut builder);
        builder.build()
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::union(self.paths.iter().filter_map(|p| p.bounds()))
    }
}
