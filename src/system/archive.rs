//! ZIP extraction

use std::fs::File;
use std::path::Path;

use log::debug;
use zip::ZipArchive;

use crate::error::{InstallError, Result};

/// Extract an archive into a directory
pub trait ArchiveExtractor {
    fn extract_zip(&self, archive: &Path, destination: &Path) -> Result<()>;
}

/// Extracts ZIP files with the `zip` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipExtractor;

impl ArchiveExtractor for ZipExtractor {
    fn extract_zip(&self, archive: &Path, destination: &Path) -> Result<()> {
        let failed = |reason: String| InstallError::ExtractionFailed {
            archive: archive.display().to_string(),
            reason,
        };

        debug!("extracting {} to {}", archive.display(), destination.display());

        let file = File::open(archive).map_err(|e| failed(e.to_string()))?;
        let mut zip = ZipArchive::new(file).map_err(|e| failed(e.to_string()))?;

        std::fs::create_dir_all(destination).map_err(|e| failed(e.to_string()))?;
        zip.extract(destination).map_err(|e| failed(e.to_string()))
    }
}
