//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod install;
pub mod list;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;

/// just-install - The simple package installer for Windows
#[derive(Parser, Debug)]
#[command(
    name = "just-install",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "The simple package installer for Windows",
    long_about = "just-install downloads and silently installs Windows software listed in a \
                  package registry, optionally exposing executables through shims.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  just-install install 7zip putty       \x1b[90m# Install two packages\x1b[0m\n   \
                  just-install install -a x86 python    \x1b[90m# Force the 32-bit installer\x1b[0m\n   \
                  just-install install -d firefox       \x1b[90m# Only download the installer\x1b[0m\n   \
                  just-install list --filter zip        \x1b[90m# Search the registry\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Registry file or URL (defaults to the public registry)
    #[arg(long, short = 'r', global = true, env = "JUST_INSTALL_REGISTRY")]
    pub registry: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages from the registry
    Install(InstallArgs),

    /// List packages available in the registry
    List(ListArgs),

    /// Remove downloaded installers
    Clean,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
