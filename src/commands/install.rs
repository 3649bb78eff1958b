//! Install command implementation
//!
//! The installation process:
//! 1. Load the registry (downloading it when remote)
//! 2. Resolve the target architecture
//! 3. Fetch, unwrap and install each requested package
//! 4. Create declared shims
//! 5. Fail with one aggregate error if any package failed

use crate::arch::Host;
use crate::cli::InstallArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::operations::install::{InstallOperation, InstallOptions, Services};
use crate::system::{ShellLinkCreator, SystemRunner, ZipExtractor};
use crate::template::{Environment, TemplateExpander, UndefinedPolicy};

use super::load_registry;

pub fn run(env: &Environment, settings: &Settings, args: InstallArgs) -> Result<()> {
    let registry = load_registry(settings, args.force)?;

    let policy = if args.strict_templates {
        UndefinedPolicy::Error
    } else {
        UndefinedPolicy::Empty
    };
    let expander = TemplateExpander::new(env.clone(), policy);
    let options = InstallOptions::from(&args);

    let fetcher = HttpFetcher::new();
    let services = Services {
        fetcher: &fetcher,
        runner: &SystemRunner,
        archives: &ZipExtractor,
        links: &ShellLinkCreator,
    };

    InstallOperation::new(&registry, settings, &expander, services, Host::detect(env))
        .execute(&args.packages, &options)?
        .into_result()
        .map(|_| ())
}
