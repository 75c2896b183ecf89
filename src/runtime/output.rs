use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Write the finished document to `dest`, or to stdout when `None`.
///
/// Files are replaced atomically: the document goes to a temporary file in
/// the destination directory which is then renamed over `dest`.
pub fn write_playlist(dest: Option<&Path>, document: &[u8]) -> io::Result<()> {
    match dest {
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document)?;
            stdout.flush()
        }
        Some(path) => write_atomic(path, document),
    }
}

fn write_atomic(path: &Path, document: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(document)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
