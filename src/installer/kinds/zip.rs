//! `zip`: extract the archive to a destination and add start-menu shortcuts

use std::path::{Path, PathBuf};

use log::info;

use super::{InstallStrategy, require_destination, require_options};
use crate::config::Options;
use crate::error::Result;
use crate::installer::InstallContext;

pub struct ZipInstaller;

impl InstallStrategy for ZipInstaller {
    fn kind(&self) -> &'static str {
        "zip"
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
        info!("extracting {} to {}", artifact.display(), destination.display());
        ctx.archives.extract_zip(artifact, &destination)?;

        for shortcut in &options.shortcuts {
            let name = ctx.expander.expand(&shortcut.name, &[])?;
            let target = PathBuf::from(ctx.expander.expand(&shortcut.target, &[])?);
            let link = ctx.start_menu.join(format!("{}.lnk", name));

            info!("creating shortcut {}", link.display());
            ctx.links.create_link(&target, &link)?;
        }

        Ok(())
    }
}
