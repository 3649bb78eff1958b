//! Error types and handling for just-install
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! Every variant belongs to one of the coarse categories in [`ErrorKind`], which is what the
//! batch orchestrator and the CLI reason about. The variants themselves carry enough context
//! (paths, URLs, kinds) to be logged as-is.

pub mod kind;


pub use kind::ErrorKind;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for just-install operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallError {
    // Architecture errors
    #[error("Unknown architecture: {arch}")]
    #[diagnostic(
        code(just_install::arch::unknown),
        help("Supported architectures: x86, x86_64")
    )]
    UnknownArchitecture { arch: String },

    #[error("This machine cannot run {arch} software")]
    #[diagnostic(
        code(just_install::arch::unsupported),
        help("Pass --arch x86 to install 32-bit packages instead")
    )]
    UnsupportedArchitecture { arch: String },

    // Registry errors
    #[error("Failed to read registry: {path}: {reason}")]
    #[diagnostic(code(just_install::registry::read_failed))]
    RegistryReadFailed { path: String, reason: String },

    #[error("Failed to parse registry: {path}: {reason}")]
    #[diagnostic(
        code(just_install::registry::parse_failed),
        help("Run with --force to download a fresh copy of the registry")
    )]
    RegistryParseFailed { path: String, reason: String },

    // Installer source errors
    #[error("Package entry is missing both 32-bit and 64-bit installers")]
    #[diagnostic(code(just_install::source::missing_installers))]
    MissingInstallers,

    #[error("This package doesn't offer a 32-bit installer")]
    #[diagnostic(code(just_install::source::missing_32bit_installer))]
    Missing32BitInstaller,

    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(just_install::fetch::download_failed),
        help("Check your network connection, or retry with --force")
    )]
    DownloadFailed { url: String, reason: String },

    // Container errors
    #[error("\"installer\" container option cannot be empty")]
    #[diagnostic(code(just_install::container::empty_installer_path))]
    EmptyContainerInstallerPath,

    #[error("Unsupported container kind: {kind}")]
    #[diagnostic(
        code(just_install::container::unsupported_kind),
        help("Only \"zip\" containers are supported")
    )]
    UnsupportedContainerKind { kind: String },

    #[error("Failed to extract {archive}: {reason}")]
    #[diagnostic(code(just_install::container::extraction_failed))]
    ExtractionFailed { archive: String, reason: String },

    // Installer errors
    #[error("The \"{kind}\" installer requires additional options")]
    #[diagnostic(code(just_install::install::missing_options))]
    MissingOptions { kind: String },

    #[error("\"destination\" is missing from the \"{kind}\" installer options")]
    #[diagnostic(code(just_install::install::missing_destination))]
    MissingDestination { kind: String },

    #[error("\"arguments\" is missing from the \"custom\" installer options")]
    #[diagnostic(code(just_install::install::missing_arguments))]
    MissingArguments,

    #[error("Unknown installer kind: {kind}")]
    #[diagnostic(code(just_install::install::unknown_kind))]
    UnknownInstallerKind { kind: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(just_install::install::directory_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(just_install::install::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Command failed: {command}: {reason}")]
    #[diagnostic(code(just_install::process::failed))]
    ProcessFailed { command: String, reason: String },

    #[error("Failed to create shortcut: {path}: {reason}")]
    #[diagnostic(code(just_install::install::shortcut_creation_failed))]
    ShortcutCreationFailed { path: String, reason: String },

    // Template errors
    #[error("Could not expand template '{template}': {reason}")]
    #[diagnostic(code(just_install::template::expansion_failed))]
    TemplateExpansionFailed { template: String, reason: String },

    #[error("Undefined variable '{name}' in template '{template}'")]
    #[diagnostic(
        code(just_install::template::undefined_variable),
        help("Set the environment variable, or run without --strict-templates")
    )]
    UndefinedVariable { name: String, template: String },

    // Shim errors
    #[error("Could not find exeproxy at {path}")]
    #[diagnostic(
        code(just_install::shim::tool_missing),
        help("Run 'just-install install exeproxy' first")
    )]
    ShimToolMissing { path: String },

    #[error("Could not create shims directory: {path}: {reason}")]
    #[diagnostic(code(just_install::shim::directory_failed))]
    ShimDirectoryFailed { path: String, reason: String },

    #[error("Could not remove existing shim: {path}: {reason}")]
    #[diagnostic(code(just_install::shim::removal_failed))]
    ShimRemovalFailed { path: String, reason: String },

    #[error("Could not create shim: {shim}: {reason}")]
    #[diagnostic(code(just_install::shim::creation_failed))]
    ShimCreationFailed { shim: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(just_install::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Batch errors
    #[error("Encountered errors installing packages (see the log for details)")]
    #[diagnostic(code(just_install::batch::failed))]
    BatchFailed,

    #[error("IO error: {message}")]
    #[diagnostic(code(just_install::fs::io_error))]
    IoError { message: String },
}

impl InstallError {
    /// The coarse category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstallError::UnknownArchitecture { .. }
            | InstallError::UnsupportedArchitecture { .. }
            | InstallError::RegistryParseFailed { .. }
            | InstallError::MissingInstallers
            | InstallError::Missing32BitInstaller
            | InstallError::EmptyContainerInstallerPath
            | InstallError::UnsupportedContainerKind { .. }
            | InstallError::MissingOptions { .. }
            | InstallError::MissingDestination { .. }
            | InstallError::MissingArguments
            | InstallError::UnknownInstallerKind { .. }
            | InstallError::UnknownShell { .. }
            | InstallError::BatchFailed => ErrorKind::Configuration,
            InstallError::TemplateExpansionFailed { .. }
            | InstallError::UndefinedVariable { .. } => ErrorKind::TemplateExpansion,
            InstallError::DownloadFailed { .. } => ErrorKind::Transport,
            InstallError::RegistryReadFailed { .. }
            | InstallError::ExtractionFailed { .. }
            | InstallError::DirectoryCreateFailed { .. }
            | InstallError::CopyFailed { .. }
            | InstallError::ShortcutCreationFailed { .. }
            | InstallError::ShimDirectoryFailed { .. }
            | InstallError::ShimRemovalFailed { .. }
            | InstallError::IoError { .. } => ErrorKind::Filesystem,
            InstallError::ProcessFailed { .. } | InstallError::ShimCreationFailed { .. } => {
                ErrorKind::Process
            }
            InstallError::ShimToolMissing { .. } => ErrorKind::ToolMissing,
        }
    }
}

impl From<std::io::Error> for InstallError {
    fn from(err: std::io::Error) -> Self {
        InstallError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallError>;
