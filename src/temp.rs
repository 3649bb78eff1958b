//! Temporary directories
//!
//! Container extraction needs scratch directories that outlive a single function call but not
//! the batch. [`ScratchSpace`] owns them and removes them when dropped.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::{InstallError, Result};

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so temp dirs are never created under the current working
/// directory (e.g. when TMPDIR=tmp).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Batch-scoped owner of scratch directories
#[derive(Debug)]
pub struct ScratchSpace {
    base: PathBuf,
    dirs: Vec<TempDir>,
}

impl Default for ScratchSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchSpace {
    pub fn new() -> Self {
        Self::in_dir(temp_dir_base())
    }

    pub fn in_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            dirs: Vec::new(),
        }
    }

    /// Create a fresh directory that lives as long as this scratch space
    pub fn create(&mut self) -> Result<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("just-install-")
            .tempdir_in(&self.base)
            .map_err(|e| InstallError::DirectoryCreateFailed {
                path: self.base.display().to_string(),
                reason: e.to_string(),
            })?;

        let path = dir.path().to_path_buf();
        self.dirs.push(dir);
        Ok(path)
    }
}
