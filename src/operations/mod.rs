//! High-level operations
//!
//! - InstallOperation: batch installation of registry packages
//!
//! The operations coordinate with:
//! - Installer: source selection, container unwrapping, dispatch and shims (from installer module)
//! - Config: registry and well-known paths (from config module)
//! - System and fetch: the external collaborators the pipeline calls out to

pub mod install;
