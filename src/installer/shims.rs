//! Shim creation
//!
//! Shims are small proxies in a shared directory that forward to an installed executable. They
//! are produced by the external `exeproxy` tool.

use std::path::PathBuf;

use log::info;

use crate::common::string_utils::base_name;
use crate::error::{InstallError, Result};
use crate::system::ProcessRunner;
use crate::template::TemplateExpander;

pub struct ShimCreator<'a> {
    exeproxy: PathBuf,
    shims_dir: PathBuf,
    runner: &'a dyn ProcessRunner,
    expander: &'a TemplateExpander,
}

impl<'a> ShimCreator<'a> {
    pub fn new(
        exeproxy: PathBuf,
        shims_dir: PathBuf,
        runner: &'a dyn ProcessRunner,
        expander: &'a TemplateExpander,
    ) -> Self {
        Self {
            exeproxy,
            shims_dir,
            runner,
            expander,
        }
    }

    /// Create one shim per target, in order. The first failure stops the remaining shims.
    pub fn create(&self, targets: &[String], version: &str) -> Result<()> {
        if !self.exeproxy.is_file() {
            return Err(InstallError::ShimToolMissing {
                path: self.exeproxy.display().to_string(),
            });
        }

        if !self.shims_dir.is_dir() {
            info!("creating {}", self.shims_dir.display());
            std::fs::create_dir_all(&self.shims_dir).map_err(|e| {
                InstallError::ShimDirectoryFailed {
                    path: self.shims_dir.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        for target in targets {
            let target = self.expander.expand(target, &[("version", version)])?;
            let shim = self.shims_dir.join(base_name(&target));

            if shim.exists() {
                std::fs::remove_file(&shim).map_err(|e| InstallError::ShimRemovalFailed {
                    path: shim.display().to_string(),
                    reason: e.to_string(),
                })?;
            }

            info!("creating shim for {} in {}", target, shim.display());
            let argv = vec![
                self.exeproxy.display().to_string(),
                "exeproxy-copy".to_string(),
                shim.display().to_string(),
                target.clone(),
            ];
            self.runner
                .run(&argv)
                .map_err(|e| InstallError::ShimCreationFailed {
                    shim: shim.display().to_string(),
                    reason: e.to_string(),
                })?;
        }

        Ok(())
    }
}
