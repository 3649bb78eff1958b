//! Start-menu shortcut creation

use std::path::Path;

use crate::error::{InstallError, Result};

/// Create a shortcut at `link` pointing to `target`
pub trait LinkCreator {
    fn create_link(&self, target: &Path, link: &Path) -> Result<()>;
}

/// Writes Windows `.lnk` files with `mslnk`
///
/// Other hosts have no shell links; every call fails with
/// [`InstallError::ShortcutCreationFailed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLinkCreator;

impl LinkCreator for ShellLinkCreator {
    #[cfg(windows)]
    fn create_link(&self, target: &Path, link: &Path) -> Result<()> {
        let failed = |reason: String| shortcut_failed(link, reason);

        if let Some(parent) = link.parent() {
            std::fs::create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
        }

        let shell_link = mslnk::ShellLink::new(target).map_err(|e| failed(e.to_string()))?;
        shell_link
            .create_lnk(link)
            .map_err(|e| failed(e.to_string()))
    }

    #[cfg(not(windows))]
    fn create_link(&self, _target: &Path, link: &Path) -> Result<()> {
        Err(shortcut_failed(
            link,
            "shell links are only supported on Windows".to_string(),
        ))
    }
}

fn shortcut_failed(link: &Path, reason: String) -> InstallError {
    InstallError::ShortcutCreationFailed {
        path: link.display().to_string(),
        reason,
    }
}
