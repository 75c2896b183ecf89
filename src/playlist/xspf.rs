use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use crate::error::PlaylistError;

use super::model::{Group, GroupItem, Playlist, TrackEntry};

pub const DEFAULT_TITLE: &str = "Media Library";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const PLAYLIST_START: &str = r#"<playlist xmlns="http://xspf.org/ns/0/" xmlns:vlc="http://www.videolan.org/vlc/playlist/ns/0/" version="1">"#;
const PLAYLIST_END: &str = "</playlist>";
const VLC_EXTENSION_START: &str = r#"<extension application="http://www.videolan.org/vlc/playlist/0">"#;
const VLC_EXTENSION_END: &str = "</extension>";

/// Render the whole document in memory.
///
/// Either the complete document is returned or nothing, so callers never
/// persist a truncated playlist.
pub fn render(playlist: &Playlist) -> Result<Vec<u8>, PlaylistError> {
    let mut out = Vec::new();
    write_xspf(&mut out, playlist)?;
    Ok(out)
}

fn write_xspf<W: Write>(w: &mut W, playlist: &Playlist) -> Result<(), PlaylistError> {
    if !is_xml_text(&playlist.title) {
        return Err(PlaylistError::UnencodableTitle {
            title: playlist.title.clone(),
        });
    }

    writeln!(w, "{XML_HEADER}")?;
    writeln!(w, "{PLAYLIST_START}")?;
    writeln!(
        w,
        "\t<title>{}</title>",
        html_escape::encode_text(&playlist.title)
    )?;

    writeln!(w, "\t<trackList>")?;
    for track in &playlist.tracks {
        write_track(w, track)?;
    }
    writeln!(w, "\t</trackList>")?;

    writeln!(w, "\t{VLC_EXTENSION_START}")?;
    for group in &playlist.groups {
        write_group(w, group, 2)?;
    }
    writeln!(w, "\t{VLC_EXTENSION_END}")?;

    writeln!(w, "{PLAYLIST_END}")?;
    Ok(())
}

fn write_track<W: Write>(w: &mut W, track: &TrackEntry) -> Result<(), PlaylistError> {
    let location = file_url(&track.location)?;
    let title = xml_str(&track.title, &track.location)?;

    writeln!(w, "\t\t<track>")?;
    writeln!(
        w,
        "\t\t\t<location>{}</location>",
        html_escape::encode_text(&location)
    )?;
    writeln!(w, "\t\t\t<title>{}</title>", html_escape::encode_text(title))?;
    writeln!(w, "\t\t\t{VLC_EXTENSION_START}")?;
    writeln!(w, "\t\t\t\t<vlc:id>{}</vlc:id>", track.id)?;
    writeln!(w, "\t\t\t{VLC_EXTENSION_END}")?;
    writeln!(w, "\t\t</track>")?;
    Ok(())
}

fn write_group<W: Write>(w: &mut W, group: &Group, depth: usize) -> Result<(), PlaylistError> {
    let indent = "\t".repeat(depth);
    let title = xml_str(&group.title, &group.path)?;

    writeln!(
        w,
        "{indent}<vlc:node title=\"{}\">",
        html_escape::encode_double_quoted_attribute(title)
    )?;
    for item in &group.items {
        match item {
            GroupItem::Group(sub) => write_group(w, sub, depth + 1)?,
            GroupItem::Track(id) => writeln!(w, "{indent}\t<vlc:item tid=\"{id}\"/>")?,
        }
    }
    writeln!(w, "{indent}</vlc:node>")?;
    Ok(())
}

/// `file://` URL for an absolute path, percent-encoded as a URL path.
fn file_url(path: &Path) -> Result<String, PlaylistError> {
    let path_str = utf8(path.as_os_str(), path)?;
    let encoded = url_escape::encode_path(path_str);
    if encoded.starts_with('/') {
        Ok(format!("file://{encoded}"))
    } else {
        Ok(format!("file:///{encoded}"))
    }
}

fn utf8<'a>(s: &'a OsStr, path: &Path) -> Result<&'a str, PlaylistError> {
    s.to_str().ok_or_else(|| PlaylistError::Unencodable {
        path: path.to_path_buf(),
    })
}

/// Like [`utf8`], but also rejects chars XML 1.0 cannot carry. Locations
/// don't need this: percent-encoding takes care of control chars there.
fn xml_str<'a>(s: &'a OsStr, path: &Path) -> Result<&'a str, PlaylistError> {
    let text = utf8(s, path)?;
    if !is_xml_text(text) {
        return Err(PlaylistError::Unencodable {
            path: path.to_path_buf(),
        });
    }
    Ok(text)
}

/// Every char matches the XML 1.0 `Char` production. Escaping cannot help
/// with the others, not even as character references.
fn is_xml_text(text: &str) -> bool {
    text.chars().all(|c| {
        matches!(
            c,
            '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
        )
    })
}
