//! Playlist model and XSPF rendering.
//!
//! A [`Playlist`] is derived from the scanned forest: a flat track list with
//! sequential ids plus a group tree that mirrors the directories and points
//! back into the track list by id.

mod model;
mod xspf;

pub use model::*;
pub use xspf::{DEFAULT_TITLE, render};
