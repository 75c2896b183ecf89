//! Directory scanning and the in-memory track tree.
//!
//! `scan` walks the requested roots and produces a forest of
//! [`Directory`] nodes whose leaves are video [`Track`]s. Directories
//! without any video beneath them never make it into the forest.

mod model;
mod registry;
mod resolve;
mod scan;

pub use model::*;
pub use registry::TrackRegistry;
pub use resolve::{Roots, SkipSet};
pub use scan::{ScanReport, scan};
