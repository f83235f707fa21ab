//! Writing the finished document

use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

/// Write `contents` to `path` in one step
///
/// The document goes to a temporary file in the destination directory, which
/// is then renamed over `path`. Readers see either the old file or the
/// complete new one, and a failure leaves `path` untouched. A symlinked `path`
/// stays a symlink and the file it points at is replaced. An existing file
/// keeps its permissions.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    // Temp files are created owner-only
    let permissions = match fs::metadata(&target) {
        Ok(meta) => meta.permissions(),
        Err(_) => default_permissions(file.as_file())?,
    };
    file.as_file().set_permissions(permissions)?;

    file.persist(&target).map_err(|e| e.error)?;
    debug!(path = %target.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Follow a symlinked output path to the file it names
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)
            .or_else(|_| {
                // Dangling link: create the file it points at
                fs::read_link(path).map(|link| match path.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                })
            })
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

#[cfg(unix)]
fn default_permissions(_file: &File) -> io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(file: &File) -> io::Result<Permissions> {
    Ok(file.metadata()?.permissions())
}
