use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install packages:\n    just-install install 7zip putty\n\n\
                   Re-download installers that are already cached:\n    just-install install --force 7zip\n\n\
                   Install the 32-bit variant:\n    just-install install --arch x86 python\n\n\
                   Recreate shims without reinstalling:\n    just-install install --shim putty")]
pub struct InstallArgs {
    /// Packages to install, in order
    #[arg(required = true, value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Re-download installers even if they are already present
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Download installers without running them
    #[arg(long, short = 'd')]
    pub download_only: bool,

    /// Only create shims for the given packages
    #[arg(long, short = 's')]
    pub shim: bool,

    /// Target architecture (x86 or x86_64); defaults to the host's
    #[arg(long, short = 'a', value_name = "ARCH")]
    pub arch: Option<String>,

    /// Fail on template variables that are not defined instead of expanding them to ""
    #[arg(long)]
    pub strict_templates: bool,
}
