use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal problems with the requested roots, raised before any traversal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no root directories given")]
    NoRoots,

    #[error("root \"{}\" cannot be resolved: {source}", .path.display())]
    RootUnresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("root \"{}\" is not a directory", .path.display())]
    RootNotDirectory { path: PathBuf },
}

/// Non-fatal problems met while walking a root.
///
/// The affected entry (and everything beneath it) is left out of the tree.
#[derive(Error, Debug)]
pub enum ScanWarning {
    #[error("cannot read \"{}\": {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("symlink cycle at \"{}\" back to \"{}\"", .path.display(), .ancestor.display())]
    SymlinkCycle { path: PathBuf, ancestor: PathBuf },

    #[error("cannot resolve \"{}\": {source}", .path.display())]
    Unresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanWarning {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanWarning::Unreadable { path, .. }
            | ScanWarning::SymlinkCycle { path, .. }
            | ScanWarning::Unresolvable { path, .. } => path,
        }
    }
}

impl From<walkdir::Error> for ScanWarning {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        if let Some(ancestor) = err.loop_ancestor() {
            return ScanWarning::SymlinkCycle {
                path,
                ancestor: ancestor.to_path_buf(),
            };
        }
        let message = match err.io_error() {
            Some(io_err) => io_err.to_string(),
            None => err.to_string(),
        };
        ScanWarning::Unreadable { path, message }
    }
}

/// Fatal problems while rendering the playlist document.
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("path \"{}\" cannot be written as XML text", .path.display())]
    Unencodable { path: PathBuf },

    #[error("playlist title {title:?} cannot be written as XML text")]
    UnencodableTitle { title: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
