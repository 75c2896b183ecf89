use std::ffi::OsString;
use std::path::PathBuf;

use crate::library::{Directory, Node};

/// Index into [`Playlist::tracks`], assigned in depth-first order from 0.
pub type TrackId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub id: TrackId,
    pub location: PathBuf,
    pub title: OsString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: OsString,
    /// Directory the group was built from.
    pub path: PathBuf,
    pub items: Vec<GroupItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupItem {
    Group(Group),
    Track(TrackId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    pub tracks: Vec<TrackEntry>,
    pub groups: Vec<Group>,
}

impl Playlist {
    /// Flatten `forest` into a track list and build the matching group tree
    /// in a single depth-first pass.
    pub fn from_forest(title: impl Into<String>, forest: &[Directory]) -> Self {
        let mut tracks = Vec::new();
        let groups = forest
            .iter()
            .map(|dir| group_from_dir(dir, &mut tracks))
            .collect();

        Self {
            title: title.into(),
            tracks,
            groups,
        }
    }
}

fn group_from_dir(dir: &Directory, tracks: &mut Vec<TrackEntry>) -> Group {
    let items = dir
        .children
        .iter()
        .map(|node| match node {
            Node::Directory(sub) => GroupItem::Group(group_from_dir(sub, tracks)),
            Node::Track(track) => {
                let id = tracks.len();
                tracks.push(TrackEntry {
                    id,
                    location: track.path.clone(),
                    title: track.name.clone(),
                });
                GroupItem::Track(id)
            }
        })
        .collect();

    Group {
        title: dir.name.clone(),
        path: dir.path.clone(),
        items,
    }
}
