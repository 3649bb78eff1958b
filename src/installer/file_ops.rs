//! Basic file operations for the copy and zip strategies
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir, ensure_dir)
//! - Artifact copying (copy_file)

use std::path::Path;

use log::info;

use crate::error::{InstallError, Result};

fn dir_create_error(path: &Path, e: std::io::Error) -> InstallError {
    InstallError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        info!("creating {}", path.display());
    }
    std::fs::create_dir_all(path).map_err(|e| dir_create_error(path, e))
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Copy `source` to `target`, creating the target's parent directories
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;

    info!("copying {} to {}", source.display(), target.display());
    std::fs::copy(source, target)
        .map_err(|e| InstallError::CopyFailed {
            from: source.display().to_string(),
            to: target.display().to_string(),
            reason: e.to_string(),
        })
        .map(|_| ())
}
