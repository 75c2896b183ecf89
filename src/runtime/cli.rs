use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan for mp4 and mkv files (repeatable).
    ///
    /// Roots are scanned in the given order, after any configured roots.
    #[arg(short, long)]
    pub root: Vec<PathBuf>,

    /// File or directory to leave out, with everything beneath it (repeatable).
    #[arg(short, long)]
    pub skip: Vec<PathBuf>,

    /// File to write the playlist to; printed to stdout if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Playlist title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Layer command-line flags on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        settings.library.roots.extend(self.root.iter().cloned());
        settings.library.skip.extend(self.skip.iter().cloned());
        if let Some(output) = &self.output {
            settings.playlist.output = Some(output.clone());
        }
        if let Some(title) = &self.title {
            settings.playlist.title = title.clone();
        }
    }
}
