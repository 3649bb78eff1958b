//! Installation dispatch for downloaded artifacts
//!
//! This module handles:
//! - Picking the installer URL for the target architecture ([`source`])
//! - Unwrapping installers shipped inside a container archive ([`container`])
//! - Running the install strategy selected by the registry `kind` ([`kinds`])
//! - Exposing installed executables as shims ([`shims`])

pub mod container;
pub mod file_ops;
pub mod kinds;
pub mod shims;
pub mod source;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::arch::Host;
use crate::config::Options;
use crate::error::{InstallError, Result};
use crate::system::{ArchiveExtractor, LinkCreator, ProcessRunner};
use crate::template::TemplateExpander;

pub use kinds::{InstallStrategy, NativeKind};

/// Everything an install strategy may touch
pub struct InstallContext<'a> {
    pub expander: &'a TemplateExpander,
    pub runner: &'a dyn ProcessRunner,
    pub archives: &'a dyn ArchiveExtractor,
    pub links: &'a dyn LinkCreator,
    /// Directory shortcuts are written into
    pub start_menu: &'a Path,
    pub host: Host,
}

/// Runs the strategy registered for an installer kind.
///
/// Bespoke strategies (`copy`, `custom`, `zip`) are consulted first, so they win over a native
/// kind with the same tag.
pub struct Dispatcher {
    strategies: Vec<Box<dyn InstallStrategy>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher with the built-in bespoke strategies
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(Box::new(kinds::CopyInstaller));
        dispatcher.register(Box::new(kinds::CustomInstaller));
        dispatcher.register(Box::new(kinds::ZipInstaller));
        dispatcher
    }

    /// Dispatcher that only knows native installer kinds
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn register(&mut self, strategy: Box<dyn InstallStrategy>) {
        self.strategies.push(strategy);
    }

    /// Install `artifact` with the strategy for `kind`
    pub fn install(
        &self,
        artifact: &Path,
        kind: &str,
        options: Option<&Options>,
        ctx: &InstallContext,
    ) -> Result<()> {
        if let Some(strategy) = self.strategies.iter().find(|s| s.kind() == kind) {
            return strategy.install(artifact, options, ctx);
        }

        let native = NativeKind::from_tag(kind).ok_or_else(|| InstallError::UnknownInstallerKind {
            kind: kind.to_string(),
        })?;

        ctx.runner.run(&native.command(artifact, ctx.host))
    }
}
