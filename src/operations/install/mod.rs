//! Install operation submodules
//!
//! The batch install runs every requested package through fetch, unwrap, install and shim
//! stages. What a failed stage does to the rest of the batch is decided by [`PolicyTable`].

pub mod orchestrator;
pub mod policy;
pub mod report;


pub use orchestrator::{InstallOperation, InstallOptions, Services};
pub use policy::{Policy, PolicyTable, Stage};
pub use report::{BatchReport, Outcome, PackageReport};
