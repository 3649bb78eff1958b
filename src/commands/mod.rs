//! Command implementations for the just-install CLI

pub mod clean;
pub mod completions;
pub mod install;
pub mod list;

use crate::config::registry::loader;
use crate::config::{Registry, Settings};
use crate::error::Result;
use crate::fetch::HttpFetcher;

/// Load the registry named by `settings`, downloading it when it is remote
fn load_registry(settings: &Settings, force: bool) -> Result<Registry> {
    loader::resolve(
        &settings.registry,
        &HttpFetcher::new(),
        &settings.download_dir,
        force,
    )
}
