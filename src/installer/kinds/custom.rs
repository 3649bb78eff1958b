//! `custom`: run a registry-supplied command line

use std::path::Path;

use super::{InstallStrategy, require_options};
use crate::config::Options;
use crate::error::{InstallError, Result};
use crate::installer::InstallContext;

/// Runs `options.arguments`, where `${installer}` names the downloaded artifact
pub struct CustomInstaller;

impl InstallStrategy for CustomInstaller {
    fn kind(&self) -> &'static str {
        "custom"
    }

    fn install(
        &self,
        artifact: &Path,
        options: Option<&Options>,
        ctx: &InstallContext,
    ) -> Result<()> {
        let options = require_options(self.kind(), options)?;
        if options.arguments.is_empty() {
            return Err(InstallError::MissingArguments);
        }

        let installer = artifact.display().to_string();
        let argv = options
            .arguments
            .iter()
            .map(|arg| ctx.expander.expand(arg, &[("installer", installer.as_str())]))
            .collect::<Result<Vec<_>>>()?;

        ctx.runner.run(&argv)
    }
}
