//! Installer source selection and download

use std::path::{Path, PathBuf};

use log::debug;

use crate::arch::Arch;
use crate::common::string_utils::{is_blank, path_segment};
use crate::config::Package;
use crate::error::{InstallError, Result};
use crate::fetch::{FetchOptions, Fetcher};
use crate::template::TemplateExpander;

/// Pick and expand the installer URL for `arch`.
///
/// A 64-bit target with no 64-bit installer uses the 32-bit one. Whitespace-only URLs count as
/// missing.
pub fn select_installer_url(
    package: &Package,
    arch: Arch,
    expander: &TemplateExpander,
) -> Result<String> {
    let installer = &package.installer;
    if is_blank(&installer.x86) && is_blank(&installer.x86_64) {
        return Err(InstallError::MissingInstallers);
    }

    let template = match arch {
        Arch::X86 if is_blank(&installer.x86) => return Err(InstallError::Missing32BitInstaller),
        Arch::X86 => &installer.x86,
        Arch::X86_64 if is_blank(&installer.x86_64) => {
            debug!("no x86_64 installer, falling back to x86");
            &installer.x86
        }
        Arch::X86_64 => &installer.x86_64,
    };

    expander.expand(template, &[("version", package.version.as_str())])
}

/// Cache directory for one package version: `<download_dir>/<name>/<version>`
pub fn artifact_dir(download_dir: &Path, name: &str, version: &str) -> PathBuf {
    download_dir.join(path_segment(name)).join(path_segment(version))
}

/// Download the installer for `arch` into the package's own cache directory
pub fn fetch_installer(
    name: &str,
    package: &Package,
    arch: Arch,
    expander: &TemplateExpander,
    fetcher: &dyn Fetcher,
    download_dir: &Path,
    force: bool,
) -> Result<PathBuf> {
    let url = select_installer_url(package, arch, expander)?;

    let options = FetchOptions {
        destination: artifact_dir(download_dir, name, &package.version),
        overwrite: force,
        progress: true,
    };

    fetcher.fetch(&url, &options).map_err(|e| match e {
        InstallError::DownloadFailed { .. } => e,
        other => InstallError::DownloadFailed {
            url,
            reason: other.to_string(),
        },
    })
}
