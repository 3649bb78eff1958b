//! Main orchestrator for install operation
//! Coordinates the installation workflow using modular components

use log::{error, info, warn};

use super::policy::{Policy, PolicyTable, Stage};
use super::report::{BatchReport, Outcome};
use crate::arch::{Arch, Host, resolve_arch};
use crate::cli::InstallArgs;
use crate::config::{Package, Registry, Settings};
use crate::error::{InstallError, Result};
use crate::fetch::Fetcher;
use crate::installer::shims::ShimCreator;
use crate::installer::{Dispatcher, InstallContext, container, source};
use crate::system::{ArchiveExtractor, LinkCreator, ProcessRunner};
use crate::temp::ScratchSpace;
use crate::template::TemplateExpander;

/// Options for installation
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Requested architecture; empty picks the host's widest
    pub arch: String,
    /// Re-download artifacts that are already present
    pub force: bool,
    pub download_only: bool,
    /// Only create the declared shims
    pub shims_only: bool,
}

impl From<&InstallArgs> for InstallOptions {
    fn from(args: &InstallArgs) -> Self {
        Self {
            arch: args.arch.clone().unwrap_or_default(),
            force: args.force,
            download_only: args.download_only,
            shims_only: args.shim,
        }
    }
}

/// External collaborators the install pipeline calls out to
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub runner: &'a dyn ProcessRunner,
    pub archives: &'a dyn ArchiveExtractor,
    pub links: &'a dyn LinkCreator,
}

/// A stage error on its way to the policy table
struct StageFailure {
    stage: Stage,
    error: InstallError,
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> std::result::Result<T, StageFailure>;
}

impl<T> AtStage<T> for Result<T> {
    fn at(self, stage: Stage) -> std::result::Result<T, StageFailure> {
        self.map_err(|error| StageFailure { stage, error })
    }
}

/// Main orchestrator for install operation
pub struct InstallOperation<'a> {
    registry: &'a Registry,
    settings: &'a Settings,
    expander: &'a TemplateExpander,
    services: Services<'a>,
    host: Host,
    dispatcher: Dispatcher,
    policies: PolicyTable,
}

impl<'a> InstallOperation<'a> {
    pub fn new(
        registry: &'a Registry,
        settings: &'a Settings,
        expander: &'a TemplateExpander,
        services: Services<'a>,
        host: Host,
    ) -> Self {
        Self {
            registry,
            settings,
            expander,
            services,
            host,
            dispatcher: Dispatcher::new(),
            policies: PolicyTable::default(),
        }
    }

    #[cfg(test)]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Install `packages` in order.
    ///
    /// Architecture resolution and aborting stages fail the whole call. Every other failure is
    /// logged and recorded in the report; [`BatchReport::into_result`] turns those into one
    /// aggregate error.
    pub fn execute(&self, packages: &[String], options: &InstallOptions) -> Result<BatchReport> {
        let arch = resolve_arch(&options.arch, self.host)?;
        info!("target architecture: {}", arch);

        let interactive = self.registry.interactive_packages(packages);
        if !interactive.is_empty() {
            info!(
                "these packages might require user interaction to complete their installation: {}",
                interactive.join(", ")
            );
        }

        let mut scratch = ScratchSpace::new();
        let mut report = BatchReport::default();

        for name in packages {
            let Some(package) = self.registry.get(name) else {
                warn!("unknown package: {}", name);
                report.push(name, Outcome::Unknown);
                continue;
            };

            match self.install_package(name, package, arch, options, &mut scratch) {
                Ok(outcome) => report.push(name, outcome),
                Err(StageFailure { stage, error }) => {
                    error!("{}: {} failed ({}): {}", name, stage, error.kind(), error);
                    match self.policies.policy(stage) {
                        Policy::Continue => report.push(name, Outcome::Failed { stage, error }),
                        Policy::Abort => return Err(error),
                    }
                }
            }
        }

        Ok(report)
    }

    fn install_package(
        &self,
        name: &str,
        package: &Package,
        arch: Arch,
        options: &InstallOptions,
        scratch: &mut ScratchSpace,
    ) -> std::result::Result<Outcome, StageFailure> {
        let installer_options = package.installer.options_for_arch(arch);
        let shims = installer_options.map_or(&[][..], |o| o.shims.as_slice());

        if options.shims_only {
            if shims.is_empty() {
                info!("{} declares no shims", name);
                return Ok(Outcome::ShimsCreated);
            }
            info!("creating shims for {}", name);
            self.shim_creator()
                .create(shims, &package.version)
                .at(Stage::ShimOnly)?;
            return Ok(Outcome::ShimsCreated);
        }

        info!("installing {} {}", name, package.version);
        let artifact = source::fetch_installer(
            name,
            package,
            arch,
            self.expander,
            self.services.fetcher,
            &self.settings.download_dir,
            options.force,
        )
        .at(Stage::Fetch)?;

        if options.download_only {
            info!("downloaded {} to {}", name, artifact.display());
            return Ok(Outcome::Downloaded);
        }

        let installer = container::unwrap(
            &artifact,
            installer_options,
            self.services.archives,
            scratch,
        )
        .at(Stage::Unwrap)?;

        self.dispatcher
            .install(
                &installer,
                &package.installer.kind,
                installer_options,
                &self.install_context(),
            )
            .at(Stage::Install)?;

        if !shims.is_empty() {
            self.shim_creator()
                .create(shims, &package.version)
                .at(Stage::Shims)?;
        }

        Ok(Outcome::Installed)
    }

    fn install_context(&self) -> InstallContext<'_> {
        InstallContext {
            expander: self.expander,
            runner: self.services.runner,
            archives: self.services.archives,
            links: self.services.links,
            start_menu: &self.settings.start_menu,
            host: self.host,
        }
    }

    fn shim_creator(&self) -> ShimCreator<'_> {
        ShimCreator::new(
            self.settings.exeproxy.clone(),
            self.settings.shims_dir.clone(),
            self.services.runner,
            self.expander,
        )
    }
}
