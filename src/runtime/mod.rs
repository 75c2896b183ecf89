//! Wiring between configuration, scanning, rendering and output.

use anyhow::{Context as _, bail};

use crate::config::{self, LibrarySettings};
use crate::error::ScanWarning;
use crate::library::{self, Roots, SkipSet, TrackRegistry};
use crate::playlist::{self, Playlist};

mod cli;
mod output;
mod settings;

pub use cli::Args;
pub use output::write_playlist;

/// A rendered playlist together with what was found on the way.
#[derive(Debug)]
pub struct Generated {
    pub document: Vec<u8>,
    pub tracks: usize,
    pub groups: usize,
    pub warnings: Vec<ScanWarning>,
}

/// Scan `library` and render the playlist document.
///
/// Bad roots and unrenderable paths abort without producing a document;
/// unreadable entries only end up in `warnings`.
pub fn generate(library: &LibrarySettings, title: &str) -> anyhow::Result<Generated> {
    let roots = Roots::resolve(&library.roots)?;
    let skip = SkipSet::resolve(&library.skip);
    log::debug!(
        "Scanning {roots} roots with {skip} active skip paths",
        roots = roots.len(),
        skip = skip.len()
    );

    let mut registry = TrackRegistry::new();
    let report = library::scan(&roots, &skip, &mut registry);
    let groups = report.group_count();

    let list = Playlist::from_forest(title, &report.forest);
    let document = playlist::render(&list)?;

    Ok(Generated {
        document,
        tracks: list.tracks.len(),
        groups,
        warnings: report.warnings,
    })
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let mut settings = settings::load_settings();
    args.apply(&mut settings);

    if args.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }
    if let Err(msg) = settings.validate() {
        bail!("invalid settings: {msg}");
    }

    let config::Settings {
        library,
        playlist: playlist_settings,
    } = settings;
    let generated = generate(&library, &playlist_settings.title)?;

    if !generated.warnings.is_empty() {
        log::warn!(
            "{count} entries could not be scanned and were left out",
            count = generated.warnings.len()
        );
    }

    write_playlist(playlist_settings.output.as_deref(), &generated.document).with_context(|| {
        match &playlist_settings.output {
            Some(path) => format!("failed to write playlist \"{}\"", path.display()),
            None => "failed to write playlist to stdout".to_string(),
        }
    })?;

    log::info!(
        "Wrote {tracks} tracks in {groups} groups",
        tracks = generated.tracks,
        groups = generated.groups
    );
    Ok(())
}

#[cfg(test)]
mod tests;
