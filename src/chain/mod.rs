//! Drawable segments, chains of segments, and stitching chains together.

mod convert;
mod draw;
mod optimize;
mod path;
mod segment;

pub use convert::{segments_from_subpath, segments_from_subpaths};
pub use draw::{DrawTarget, PathDataBuilder};
pub use optimize::OptimizedPathCollection;
pub use path::Path;
pub use segment::{PathArc, PathCubic, PathLine, PathSegment};
