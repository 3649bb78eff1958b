//! `copy`: place the downloaded artifact at a destination path

use std::path::{Path, PathBuf};

use super::{InstallStrategy, require_destination, require_options};
use crate::config::Options;
use crate::error::Result;
use crate::installer::{InstallContext, file_ops};

pub struct CopyInstaller;

impl InstallStrategy for CopyInstaller {
    fn kind(&self) -> &'static str {
        "copy"
    }

    fn install(
        &self,
        artifact: &Path,
        options: Option<&Options>,
        ctx: &InstallContext,
    ) -> Result<()> {
        let options = require_options(self.kind(), options)?;
        let destination = require_destination(self.kind(), options)?;

        let destination = PathBuf::from(ctx.expander.expand(destination, &[])?);
        file_ops::copy_file(artifact, &destination)
    }
}
