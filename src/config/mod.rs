//! Configuration for just-install
//!
//! This module contains:
//! - The package registry (`just-install-v4.json`) and its loader
//! - [`Settings`], the well-known host paths derived from the environment snapshot

pub mod registry;
pub mod settings;

pub use registry::{Container, Installer, Options, Package, Registry, Shortcut};
pub use settings::Settings;
