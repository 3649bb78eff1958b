//! Error categories

use std::fmt;

/// Coarse error taxonomy shared by every [`super::InstallError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed registry, unknown architecture or kind, missing required options
    Configuration,
    /// Malformed template syntax or an undefined variable under the strict policy
    TemplateExpansion,
    /// Download failure
    Transport,
    /// Copy, extract, mkdir or remove failure
    Filesystem,
    /// Subprocess launch failure or non-zero exit
    Process,
    /// The shim proxy is not installed
    ToolMissing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::TemplateExpansion => "template",
            ErrorKind::Transport => "transport",
            ErrorKind::Filesystem => "filesystem",
            ErrorKind::Process => "process",
            ErrorKind::ToolMissing => "tool-missing",
        };
        f.write_str(name)
    }
}
