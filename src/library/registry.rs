use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolved path -> claim ordinal for every track taken so far.
///
/// Shared by all roots of one run so that a file reachable from two
/// overlapping roots is only emitted by the first one.
#[derive(Debug, Default)]
pub struct TrackRegistry {
    claimed: HashMap<PathBuf, usize>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path`. Returns the new ordinal, or `None` if an earlier
    /// claim already owns it.
    pub fn claim(&mut self, path: &Path) -> Option<usize> {
        if self.claimed.contains_key(path) {
            return None;
        }
        let ordinal = self.claimed.len();
        self.claimed.insert(path.to_path_buf(), ordinal);
        Some(ordinal)
    }
}
