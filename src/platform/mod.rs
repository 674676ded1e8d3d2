//! Platform abstraction: hosts file location and storage.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use crate::error::{HostessError, Result};

/// Trait for reading and replacing the hosts file.
///
/// Content is raw bytes; lines the editor does not touch are written back
/// exactly as read, whatever their encoding.
pub trait HostsStore {
    /// Read the whole file.
    fn read(&self) -> Result<Vec<u8>>;
    /// Replace the whole file with `content`.
    fn write(&self, content: &[u8]) -> Result<()>;
}

/// Conventional hosts file path for this OS.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return unix::hosts_path();

    #[cfg(windows)]
    return windows::hosts_path();
}

/// HostsStore backed by a file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsStore {
    path: PathBuf,
}

impl FileHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Write to a temp file next to `target` and rename it into place, so a
/// failed write never leaves a truncated hosts file behind.
fn replace_atomically(target: &Path, content: &[u8]) -> io::Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let perms = fs::metadata(target)?.permissions();
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().set_permissions(perms)?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

/// Failures where the file itself is still writable in place: a bind-mounted
/// target (EBUSY), a target on another device (EXDEV), or a directory the
/// user may not create files in (EACCES).
fn can_write_in_place(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::PermissionDenied {
        return true;
    }
    #[cfg(unix)]
    if matches!(err.raw_os_error(), Some(libc::EBUSY) | Some(libc::EXDEV)) {
        return true;
    }
    false
}

impl HostsStore for FileHostsStore {
    fn read(&self) -> Result<Vec<u8>> {
        tracing::debug!(path = %self.path.display(), "reading hosts file");
        fs::read(&self.path).map_err(|e| HostessError::io(&self.path, e))
    }

    fn write(&self, content: &[u8]) -> Result<()> {
        // Replace the link target, not a symlink itself.
        let target = fs::canonicalize(&self.path).map_err(|e| HostessError::io(&self.path, e))?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "replacing hosts file");

        match replace_atomically(&target, content) {
            Ok(()) => Ok(()),
            Err(e) if can_write_in_place(&e) => {
                tracing::warn!(path = %target.display(), error = %e, "atomic replace failed, writing in place");
                fs::write(&target, content).map_err(|e| HostessError::io(&target, e))
            }
            Err(e) => Err(HostessError::io(&target, e)),
        }
    }
}
