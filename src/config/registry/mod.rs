//! Package registry data structures
//!
//! The registry is a declarative catalog mapping package names to installer metadata. It is
//! read once per invocation and never written back.

pub mod loader;


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::arch::Arch;

/// Registry document (`just-install-v4.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    /// Schema version
    #[serde(default)]
    pub version: u32,

    /// Packages keyed by their unique name
    #[serde(default)]
    pub packages: BTreeMap<String, Package>,
}

impl Registry {
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Names among `requested` whose installers need user interaction, in request order
    pub fn interactive_packages<'a>(&self, requested: &'a [String]) -> Vec<&'a str> {
        requested
            .iter()
            .filter(|name| self.get(name).is_some_and(|p| p.installer.interactive))
            .map(String::as_str)
            .collect()
    }
}

/// One package's metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default)]
    pub version: String,

    pub installer: Installer,
}

/// How to fetch and run a package's installer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installer {
    /// Tag selecting the install strategy
    pub kind: String,

    /// 32-bit installer URL template
    #[serde(default)]
    pub x86: String,

    /// 64-bit installer URL template
    #[serde(default)]
    pub x86_64: String,

    /// Informational only: the installer may ask the user questions
    #[serde(default)]
    pub interactive: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsSpec>,
}

impl Installer {
    /// Options that apply when installing for `arch`.
    ///
    /// Per-architecture options fall back from `x86_64` to `x86`, the same way installer URLs do.
    pub fn options_for_arch(&self, arch: Arch) -> Option<&Options> {
        match self.options.as_ref()? {
            OptionsSpec::Shared(options) => Some(options),
            // `{}` deserializes as an empty per-arch table; treat it as empty shared options
            OptionsSpec::PerArch(ArchOptions {
                x86: None,
                x86_64: None,
            }) => Some(&EMPTY_OPTIONS),
            OptionsSpec::PerArch(per_arch) => match arch {
                Arch::X86 => per_arch.x86.as_ref(),
                Arch::X86_64 => per_arch.x86_64.as_ref().or(per_arch.x86.as_ref()),
            },
        }
    }
}

static EMPTY_OPTIONS: Options = Options {
    destination: String::new(),
    arguments: Vec::new(),
    container: None,
    shortcuts: Vec::new(),
    shims: Vec::new(),
};

/// Installer options, either shared or split by architecture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionsSpec {
    PerArch(ArchOptions),
    Shared(Options),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x86: Option<Options>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x86_64: Option<Options>,
}

/// Kind-specific installer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Target path for `copy` and `zip` installers
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination: String,

    /// Command line for `custom` installers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,

    /// Archive wrapping the real installer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,

    /// Start-menu shortcuts created by `zip` installers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortcuts: Vec<Shortcut>,

    /// Executables to expose on the shim path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shims: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub kind: String,

    /// Path of the real installer relative to the extracted container
    #[serde(default)]
    pub installer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub target: String,
}
