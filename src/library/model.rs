use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// A qualifying video file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Final path segment, e.g. `movie.mkv`.
    pub name: OsString,
    /// Resolved (canonical) path.
    pub path: PathBuf,
    /// Lower-cased extension without the dot.
    pub extension: String,
}

/// A directory with at least one track somewhere beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub name: OsString,
    /// Resolved (canonical) path.
    pub path: PathBuf,
    /// Children in traversal order.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    Track(Track),
}

impl Node {
    pub fn name(&self) -> &OsStr {
        match self {
            Node::Directory(dir) => &dir.name,
            Node::Track(track) => &track.name,
        }
    }
}

impl Directory {
    /// Tentative directory node; only attached to its parent once it
    /// holds at least one track.
    pub fn new(name: impl Into<OsString>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
            children: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, in order.
    pub fn tracks(&self) -> Vec<&Track> {
        let mut out = Vec::new();
        collect_tracks(&self.children, &mut out);
        out
    }
}

fn collect_tracks<'a>(nodes: &'a [Node], out: &mut Vec<&'a Track>) {
    for node in nodes {
        match node {
            Node::Directory(dir) => collect_tracks(&dir.children, out),
            Node::Track(track) => out.push(track),
        }
    }
}
