//! Target architecture resolution

use std::fmt;

use crate::error::{InstallError, Result};
use crate::template::Environment;

/// Processor word-width class used to pick an installer variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    X86_64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities of the machine we are installing on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Host {
    pub is_64bit: bool,
}

impl Host {
    /// Detect host capabilities.
    ///
    /// A 32-bit build running under WOW64 still reports a 64-bit host through
    /// `PROCESSOR_ARCHITEW6432`.
    pub fn detect(env: &Environment) -> Self {
        let is_64bit = cfg!(target_pointer_width = "64")
            || env.get("PROCESSOR_ARCHITEW6432").is_some()
            || env
                .get("PROCESSOR_ARCHITECTURE")
                .is_some_and(|a| a.eq_ignore_ascii_case("AMD64") || a.eq_ignore_ascii_case("ARM64"));

        Self { is_64bit }
    }
}

/// Map a user-requested architecture token onto a concrete target.
///
/// An empty request picks the widest architecture the host can run.
pub fn resolve_arch(requested: &str, host: Host) -> Result<Arch> {
    match requested {
        "" => Ok(if host.is_64bit { Arch::X86_64 } else { Arch::X86 }),
        "x86" => Ok(Arch::X86),
        "x86_64" => {
            if host.is_64bit {
                Ok(Arch::X86_64)
            } else {
                Err(InstallError::UnsupportedArchitecture {
                    arch: requested.to_string(),
                })
            }
        }
        other => Err(InstallError::UnknownArchitecture {
            arch: other.to_string(),
        }),
    }
}
