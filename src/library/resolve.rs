use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Canonical root directories, in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots(Vec<PathBuf>);

impl Roots {
    /// Resolve every root, failing on the first one that is missing or
    /// not a directory.
    pub fn resolve<P: AsRef<Path>>(roots: &[P]) -> Result<Self, ConfigError> {
        if roots.is_empty() {
            return Err(ConfigError::NoRoots);
        }

        let mut resolved = Vec::with_capacity(roots.len());
        for root in roots {
            let root = root.as_ref();
            let path = fs::canonicalize(root).map_err(|source| ConfigError::RootUnresolvable {
                path: root.to_path_buf(),
                source,
            })?;
            if !path.is_dir() {
                return Err(ConfigError::RootNotDirectory {
                    path: root.to_path_buf(),
                });
            }
            resolved.push(path);
        }
        Ok(Self(resolved))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Canonical paths excluded together with everything beneath them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet(Vec<PathBuf>);

impl SkipSet {
    /// Resolve skip paths. Paths that do not exist are dropped: they could
    /// never match anything anyway.
    pub fn resolve<P: AsRef<Path>>(skip: &[P]) -> Self {
        let mut resolved = Vec::with_capacity(skip.len());
        for path in skip {
            let path = path.as_ref();
            match fs::canonicalize(path) {
                Ok(p) => resolved.push(p),
                Err(err) => {
                    log::debug!("Ignoring skip path \"{}\": {err}", path.display());
                }
            }
        }
        Self(resolved)
    }

    /// `true` if `path` is a skip path or lies beneath one.
    pub fn contains(&self, path: &Path) -> bool {
        self.0.iter().any(|skip| path.starts_with(skip))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
