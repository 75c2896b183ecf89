//! Turn video directory trees into a single browsable XSPF playlist.
//!
//! The [`library`] module walks root directories and keeps the `mp4`/`mkv`
//! files it finds in a tree mirroring the directories. The [`playlist`]
//! module flattens that tree into numbered tracks plus nested groups and
//! renders it in the flavour of XSPF that VLC understands.

pub mod config;
pub mod error;
pub mod library;
pub mod playlist;
pub mod runtime;
