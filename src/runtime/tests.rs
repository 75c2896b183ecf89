use super::*;
use crate::config::{LibrarySettings, Settings};
use crate::error::{ConfigError, PlaylistError, ScanWarning};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"not a real video").unwrap();
}

fn library(roots: &[PathBuf], skip: &[PathBuf]) -> LibrarySettings {
    LibrarySettings {
        roots: roots.to_vec(),
        skip: skip.to_vec(),
    }
}

fn document(generated: &Generated) -> String {
    String::from_utf8(generated.document.clone()).unwrap()
}

fn url(path: &Path) -> String {
    format!("file://{}", fs::canonicalize(path).unwrap().display())
}

#[test]
fn generate_movies_scenario() {
    let dir = tempdir().unwrap();
    let movies = dir.path().join("movies");
    touch(&movies.join("A").join("1.mp4"));
    touch(&movies.join("A").join("notes.txt"));
    touch(&movies.join("B").join("2.mkv"));

    let generated = generate(&library(&[movies.clone()], &[]), "Media Library").unwrap();
    let xml = document(&generated);

    assert_eq!(generated.tracks, 2);
    assert_eq!(generated.groups, 3);
    assert!(generated.warnings.is_empty());
    assert!(xml.contains(&format!(
        "<location>{}</location>\n\t\t\t<title>1.mp4</title>\n\t\t\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n\t\t\t\t<vlc:id>0</vlc:id>",
        url(&movies.join("A").join("1.mp4"))
    )));
    assert!(xml.contains(&format!(
        "<location>{}</location>\n\t\t\t<title>2.mkv</title>\n\t\t\t<extension application=\"http://www.videolan.org/vlc/playlist/0\">\n\t\t\t\t<vlc:id>1</vlc:id>",
        url(&movies.join("B").join("2.mkv"))
    )));
    assert!(xml.contains(
        "\t\t<vlc:node title=\"movies\">\n\
         \t\t\t<vlc:node title=\"A\">\n\
         \t\t\t\t<vlc:item tid=\"0\"/>\n\
         \t\t\t</vlc:node>\n\
         \t\t\t<vlc:node title=\"B\">\n\
         \t\t\t\t<vlc:item tid=\"1\"/>\n\
         \t\t\t</vlc:node>\n\
         \t\t</vlc:node>\n"
    ));
    assert!(!xml.contains("notes.txt"));
}

#[test]
fn generate_skip_scenario_drops_group() {
    let dir = tempdir().unwrap();
    let lib = dir.path().join("lib");
    touch(&lib.join("private").join("secret.mp4"));
    touch(&lib.join("public").join("ok.mkv"));

    let generated = generate(&library(&[lib.clone()], &[lib.join("private")]), "t").unwrap();
    let xml = document(&generated);

    assert_eq!(generated.tracks, 1);
    assert!(!xml.contains("secret.mp4"));
    assert!(!xml.contains("title=\"private\""));
    assert!(xml.contains("title=\"public\""));
}

#[test]
fn generate_nested_roots_emit_file_once() {
    let dir = tempdir().unwrap();
    let lib = dir.path().join("lib");
    let sub = lib.join("sub");
    touch(&sub.join("x.mkv"));

    let generated = generate(&library(&[lib.clone(), sub.clone()], &[]), "t").unwrap();
    let xml = document(&generated);

    assert_eq!(generated.tracks, 1);
    assert_eq!(xml.matches("<title>x.mkv</title>").count(), 1);
    assert_eq!(xml.matches("<vlc:item tid=").count(), 1);
    assert!(xml.contains("<vlc:node title=\"lib\">\n\t\t\t<vlc:node title=\"sub\">"));
}

#[test]
fn generate_ids_are_dense_and_ordered() {
    let dir = tempdir().unwrap();
    for path in ["b/2.mkv", "a/1.mp4", "a/z/3.MP4", "c.mp4", "d/readme.md"] {
        touch(&dir.path().join(path));
    }

    let generated = generate(&library(&[dir.path().to_path_buf()], &[]), "t").unwrap();
    let xml = document(&generated);

    assert_eq!(generated.tracks, 4);
    for id in 0..4 {
        assert_eq!(xml.matches(&format!("<vlc:id>{id}</vlc:id>")).count(), 1);
        assert_eq!(xml.matches(&format!("<vlc:item tid=\"{id}\"/>")).count(), 1);
    }
    assert!(!xml.contains("<vlc:id>4</vlc:id>"));
    assert!(!xml.contains("title=\"d\""));
}

#[test]
fn generate_is_byte_identical_across_runs() {
    let dir = tempdir().unwrap();
    for path in ["s2/e2.mkv", "s1/e1.mkv", "s1/e10.mkv", "extra.mp4"] {
        touch(&dir.path().join(path));
    }
    let settings = library(&[dir.path().to_path_buf()], &[]);

    let first = generate(&settings, "t").unwrap();
    let second = generate(&settings, "t").unwrap();

    assert_eq!(first.document, second.document);
}

#[test]
fn generate_without_videos_renders_empty_playlist() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("docs").join("readme.txt"));
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    let generated = generate(&library(&[dir.path().to_path_buf()], &[]), "t").unwrap();
    let xml = document(&generated);

    assert_eq!(generated.tracks, 0);
    assert_eq!(generated.groups, 0);
    assert!(!xml.contains("<vlc:node"));
}

#[test]
fn generate_rejects_missing_root() {
    let dir = tempdir().unwrap();
    let err = generate(&library(&[dir.path().join("missing")], &[]), "t").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::RootUnresolvable { .. })
    ));
}

#[test]
fn generate_rejects_no_roots() {
    let err = generate(&library(&[], &[]), "t").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NoRoots)
    ));
}

#[test]
fn write_playlist_replaces_file_contents() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("library.xspf");
    fs::write(&dest, b"old and much longer contents").unwrap();

    write_playlist(Some(&dest), b"<playlist/>").unwrap();

    assert_eq!(fs::read(&dest).unwrap(), b"<playlist/>");
    let leftovers = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn write_playlist_fails_for_missing_directory() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("nope").join("library.xspf");
    assert!(write_playlist(Some(&dest), b"<playlist/>").is_err());
    assert!(!dest.exists());
}

#[test]
fn args_extend_and_override_settings() {
    let mut settings = Settings::default();
    settings.library.roots = vec!["/configured".into()];
    settings.playlist.output = Some("/configured.xspf".into());

    let args = Args {
        root: vec!["/cli".into()],
        skip: vec!["/cli/skip".into()],
        output: Some("/cli.xspf".into()),
        title: Some("Mine".into()),
        print_config: false,
    };
    args.apply(&mut settings);

    assert_eq!(
        settings.library.roots,
        vec![PathBuf::from("/configured"), PathBuf::from("/cli")]
    );
    assert_eq!(settings.library.skip, vec![PathBuf::from("/cli/skip")]);
    assert_eq!(settings.playlist.output, Some(PathBuf::from("/cli.xspf")));
    assert_eq!(settings.playlist.title, "Mine");
}

#[test]
fn args_without_flags_keep_settings() {
    let mut settings = Settings::default();
    settings.playlist.title = "Configured".into();

    Args::default().apply(&mut settings);

    assert!(settings.library.roots.is_empty());
    assert_eq!(settings.playlist.title, "Configured");
    assert!(settings.playlist.output.is_none());
}

#[test]
fn args_parse_repeated_flags() {
    use clap::Parser as _;

    let args = Args::try_parse_from([
        "vidtree", "-r", "/a", "--root", "/b", "-s", "/a/x", "-o", "out.xspf",
    ])
    .unwrap();

    assert_eq!(args.root, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    assert_eq!(args.skip, vec![PathBuf::from("/a/x")]);
    assert_eq!(args.output, Some(PathBuf::from("out.xspf")));
    assert!(args.title.is_none());
    assert!(!args.print_config);
}

#[cfg(unix)]
#[test]
fn generate_fails_on_control_char_name() {
    let dir = tempdir().unwrap();
    let movies = dir.path().join("mov\u{1}ies");
    touch(&movies.join("a\u{1}b.mp4"));

    let err = generate(&library(&[dir.path().to_path_buf()], &[]), "t").unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PlaylistError>(),
        Some(PlaylistError::Unencodable { .. })
    ));
}

#[cfg(unix)]
#[test]
fn generate_unreadable_directory_still_renders_rest() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    touch(&locked.join("hidden.mp4"));
    touch(&dir.path().join("open").join("a.mp4"));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&locked).is_ok();

    let result = generate(&library(&[dir.path().to_path_buf()], &[]), "t");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    if readable {
        return;
    }

    let generated = result.unwrap();
    let xml = document(&generated);
    assert_eq!(generated.tracks, 1);
    assert!(matches!(generated.warnings[..], [ScanWarning::Unreadable { .. }]));
    assert!(!xml.contains("title=\"locked\""));
    assert!(xml.contains("<title>a.mp4</title>"));
}
