use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::ScanWarning;

use super::model::{Directory, Node, Track};
use super::registry::TrackRegistry;
use super::resolve::{Roots, SkipSet};

/// Extensions recognised as video, lower-case and without the dot.
const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "mkv"];

/// Result of scanning all roots of one run.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One directory per root that contains at least one track, in root order.
    pub forest: Vec<Directory>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanReport {
    pub fn track_count(&self) -> usize {
        self.forest.iter().map(|dir| dir.tracks().len()).sum()
    }

    pub fn group_count(&self) -> usize {
        fn count(dir: &Directory) -> usize {
            1 + dir
                .children
                .iter()
                .map(|node| match node {
                    Node::Directory(sub) => count(sub),
                    Node::Track(_) => 0,
                })
                .sum::<usize>()
        }
        self.forest.iter().map(count).sum()
    }
}

/// Lower-cased extension of `path` if it names a video file.
pub(super) fn video_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    VIDEO_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Walk every root in order and build the track forest.
///
/// Files already claimed in `registry` (by an earlier root, or an earlier
/// run sharing the registry) are left out.
pub fn scan(roots: &Roots, skip: &SkipSet, registry: &mut TrackRegistry) -> ScanReport {
    let mut report = ScanReport::default();

    for root in roots.iter() {
        let warnings_before = report.warnings.len();
        match scan_root(root, skip, registry, &mut report.warnings) {
            Some(dir) => {
                log::info!(
                    "Found {count} videos under \"{root}\"",
                    count = dir.tracks().len(),
                    root = root.display()
                );
                report.forest.push(dir);
            }
            None => log::info!("No videos found under \"{}\"", root.display()),
        }
        let warnings = report.warnings.len() - warnings_before;
        if warnings > 0 {
            log::info!("{warnings} entries under \"{}\" were left out", root.display());
        }
    }

    report
}

/// Depth-first walk of a single root.
///
/// Directories are kept on a stack while their contents are visited and
/// attached to their parent once the walk leaves them, but only if they
/// ended up holding something.
fn scan_root(
    root: &Path,
    skip: &SkipSet,
    registry: &mut TrackRegistry,
    warnings: &mut Vec<ScanWarning>,
) -> Option<Directory> {
    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    let mut pending: Vec<Directory> = Vec::new();
    let mut committed: Option<Directory> = None;

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                let warning = ScanWarning::from(err);
                log::warn!("{warning}");
                warnings.push(warning);
                continue;
            }
        };

        close_until(&mut pending, entry.depth(), &mut committed);

        let is_dir = entry.file_type().is_dir();
        let resolved = match resolve_entry(&entry, pending.last()) {
            Ok(path) => path,
            Err(source) => {
                let warning = ScanWarning::Unresolvable {
                    path: entry.path().to_path_buf(),
                    source,
                };
                log::warn!("{warning}");
                warnings.push(warning);
                if is_dir {
                    walker.skip_current_dir();
                }
                continue;
            }
        };

        if skip.contains(&resolved) {
            log::debug!("Skipping \"{}\"", resolved.display());
            if is_dir {
                walker.skip_current_dir();
            }
            continue;
        }

        if is_dir {
            pending.push(Directory::new(entry.file_name(), resolved));
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(extension) = video_extension(&resolved) else {
            continue;
        };
        let Some(parent) = pending.last_mut() else {
            continue;
        };
        match registry.claim(&resolved) {
            Some(ordinal) => {
                log::trace!("Claimed #{ordinal} ({extension}) \"{}\"", resolved.display());
                parent.children.push(Node::Track(Track {
                    name: entry.file_name().to_os_string(),
                    path: resolved,
                    extension,
                }));
            }
            None => log::debug!("Already included: \"{}\"", resolved.display()),
        }
    }

    close_until(&mut pending, 0, &mut committed);
    committed
}

/// Pop pending directories until only `depth` remain, attaching each
/// non-empty one to its parent.
fn close_until(pending: &mut Vec<Directory>, depth: usize, committed: &mut Option<Directory>) {
    while pending.len() > depth {
        let Some(dir) = pending.pop() else {
            break;
        };
        if dir.is_empty() {
            log::trace!("Pruned empty \"{}\"", dir.path.display());
            continue;
        }
        match pending.last_mut() {
            Some(parent) => parent.children.push(Node::Directory(dir)),
            None => *committed = Some(dir),
        }
    }
}

/// Canonical path of `entry`.
///
/// Roots are already canonical and plain entries inherit their parent's
/// resolved path; only symlinks need a round trip to the filesystem.
fn resolve_entry(entry: &DirEntry, parent: Option<&Directory>) -> io::Result<PathBuf> {
    if entry.depth() == 0 {
        return Ok(entry.path().to_path_buf());
    }
    match parent {
        Some(parent) if !entry.path_is_symlink() => Ok(parent.path.join(entry.file_name())),
        _ => fs::canonicalize(entry.path()),
    }
}
