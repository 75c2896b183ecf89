use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::playlist::DEFAULT_TITLE;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vidtree/config.toml` or `~/.config/vidtree/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags (applied by the caller)
/// 2) Environment variables (prefix `VIDTREE__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playlist: PlaylistSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directories to scan, in playlist order.
    pub roots: Vec<PathBuf>,
    /// Files or directories to leave out, including everything beneath them.
    pub skip: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Title of the playlist document.
    pub title: String,
    /// Where to write the playlist. Printed to stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output: None,
        }
    }
}
