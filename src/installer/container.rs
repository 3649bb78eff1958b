//! Container unwrapping
//!
//! Some installers ship inside an archive. The archive is extracted into batch-owned scratch
//! space and the real installer's path is returned in its place.

use std::path::{Path, PathBuf};

use log::info;

use crate::common::string_utils::is_blank;
use crate::config::Options;
use crate::error::{InstallError, Result};
use crate::system::ArchiveExtractor;
use crate::temp::ScratchSpace;

/// Only supported container format
const ZIP_CONTAINER: &str = "zip";

/// Return the path of the installer to run for `artifact`
pub fn unwrap(
    artifact: &Path,
    options: Option<&Options>,
    archives: &dyn ArchiveExtractor,
    scratch: &mut ScratchSpace,
) -> Result<PathBuf> {
    let Some(container) = options.and_then(|o| o.container.as_ref()) else {
        return Ok(artifact.to_path_buf());
    };

    if is_blank(&container.installer) {
        return Err(InstallError::EmptyContainerInstallerPath);
    }
    if container.kind != ZIP_CONTAINER {
        return Err(InstallError::UnsupportedContainerKind {
            kind: container.kind.clone(),
        });
    }

    let base = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extracted = scratch.create()?.join(format!("{}_extracted", base));

    info!("extracting {} to {}", artifact.display(), extracted.display());
    archives.extract_zip(artifact, &extracted)?;

    Ok(extracted.join(&container.installer))
}
