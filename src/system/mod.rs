//! Host primitives consumed by the installer
//!
//! Subprocess execution, ZIP extraction and shortcut creation sit behind traits so the dispatch
//! pipeline can be exercised without touching the real system.

pub mod archive;
pub mod process;
pub mod shortcut;

pub use archive::{ArchiveExtractor, ZipExtractor};
pub use process::{ProcessRunner, SystemRunner};
pub use shortcut::{LinkCreator, ShellLinkCreator};
