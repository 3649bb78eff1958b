//! Install strategies
//!
//! Each registry `kind` maps to one strategy. The bespoke strategies implement
//! [`InstallStrategy`] and are registered with [`super::Dispatcher`]; everything else is an OS
//! installer technology described by [`NativeKind`].
//!
//! ## Adding a strategy
//!
//! ```ignore
//! pub struct MsixInstaller;
//!
//! impl InstallStrategy for MsixInstaller {
//!     fn kind(&self) -> &'static str {
//!         "msix"
//!     }
//!
//!     fn install(&self, artifact: &Path, _options: Option<&Options>, ctx: &InstallContext) -> Result<()> {
//!         ctx.runner.run(&["Add-AppxPackage".to_string(), artifact.display().to_string()])
//!     }
//! }
//!
//! dispatcher.register(Box::new(MsixInstaller));
//! ```

mod copy;
mod custom;
mod native;
mod zip;

pub use copy::CopyInstaller;
pub use custom::CustomInstaller;
pub use native::NativeKind;
pub use zip::ZipInstaller;

use std::path::Path;

use super::InstallContext;
use crate::common::string_utils::is_blank;
use crate::config::Options;
use crate::error::{InstallError, Result};

pub trait InstallStrategy {
    /// Registry tag handled by this strategy
    fn kind(&self) -> &'static str;

    /// Install the downloaded artifact
    fn install(
        &self,
        artifact: &Path,
        options: Option<&Options>,
        ctx: &InstallContext,
    ) -> Result<()>;
}

/// Options are mandatory for every bespoke kind
fn require_options<'a>(kind: &str, options: Option<&'a Options>) -> Result<&'a Options> {
    options.ok_or_else(|| InstallError::MissingOptions {
        kind: kind.to_string(),
    })
}

/// A destination that is not blank after trimming
fn require_destination<'a>(kind: &str, options: &'a Options) -> Result<&'a str> {
    if is_blank(&options.destination) {
        return Err(InstallError::MissingDestination {
            kind: kind.to_string(),
        });
    }
    Ok(&options.destination)
}
