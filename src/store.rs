//! Reading and writing blob files.
//!
//! The envelope itself never touches the filesystem; this module is the
//! thin layer the CLI uses to persist blobs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::errors::{IncognitoError, Result};

/// Write a blob to disk **atomically**.
///
/// The blob goes to a temp file in the same directory first and is then
/// renamed over `path`, so readers never see a half-written file. On Unix
/// the file is created owner-read/write only.
///
/// Fails with `BlobAlreadyExists` if `path` exists and `overwrite` is false.
pub fn write_blob(path: &Path, blob: &[u8], overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(IncognitoError::BlobAlreadyExists(path.to_path_buf()));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    // A stale temp file from an interrupted write would make `create_new` fail.
    let _ = fs::remove_file(&tmp_path);

    if let Err(e) = write_new_file(&tmp_path, blob).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), "wrote blob");
    Ok(())
}

/// Create `path` (which must not exist) and write `contents` to it.
///
/// On Unix the file is created with mode 0600, so the contents are never
/// readable by other users, not even briefly.
fn write_new_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(path)?
    };

    #[cfg(not(unix))]
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;

    file.write_all(contents)?;
    file.sync_all()
}

/// Read a blob from disk.
pub fn read_blob(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(IncognitoError::BlobNotFound(path.to_path_buf()));
    }

    let blob = fs::read(path)?;
    tracing::debug!(path = %path.display(), "read blob");
    Ok(blob)
}
