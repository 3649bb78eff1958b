//! OS installer technologies run as a subprocess

use std::path::Path;

use crate::arch::Host;

/// Installer kinds handled by invoking the artifact (or an OS tool) with silent-install flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKind {
    AdvancedInstaller,
    AsIs,
    ConEmu,
    EasyInstall26,
    EasyInstall27,
    InnoSetup,
    InstallShield,
    Msi,
    Nsis,
}

impl NativeKind {
    pub const ALL: [NativeKind; 9] = [
        NativeKind::AdvancedInstaller,
        NativeKind::AsIs,
        NativeKind::ConEmu,
        NativeKind::EasyInstall26,
        NativeKind::EasyInstall27,
        NativeKind::InnoSetup,
        NativeKind::InstallShield,
        NativeKind::Msi,
        NativeKind::Nsis,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Registry tag
    pub fn tag(self) -> &'static str {
        match self {
            NativeKind::AdvancedInstaller => "advancedinstaller",
            NativeKind::AsIs => "as-is",
            NativeKind::ConEmu => "conemu",
            NativeKind::EasyInstall26 => "easy_install_26",
            NativeKind::EasyInstall27 => "easy_install_27",
            NativeKind::InnoSetup => "innosetup",
            NativeKind::InstallShield => "installshield",
            NativeKind::Msi => "msi",
            NativeKind::Nsis => "nsis",
        }
    }

    /// Command line that installs `installer` unattended
    pub fn command(self, installer: &Path, host: Host) -> Vec<String> {
        let path = installer.display().to_string();
        let args: &[&str] = match self {
            NativeKind::AdvancedInstaller => &["/q", "/i"],
            NativeKind::AsIs => &[],
            NativeKind::ConEmu if host.is_64bit => &["/p:x64,adm", "/qr"],
            NativeKind::ConEmu => &["/p:x86,adm", "/qr"],
            NativeKind::EasyInstall26 => {
                return vec![r"C:\Python26\Scripts\easy_install.exe".to_string(), path];
            }
            NativeKind::EasyInstall27 => {
                return vec![r"C:\Python27\Scripts\easy_install.exe".to_string(), path];
            }
            NativeKind::InnoSetup => &["/norestart", "/sp-", "/verysilent"],
            NativeKind::InstallShield => &["/s", "/sms"],
            NativeKind::Msi => {
                return ["msiexec.exe", "/q", "/i", path.as_str(), "ALLUSERS=1", "REBOOT=ReallySuppress"]
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect();
            }
            NativeKind::Nsis => &["/S", "/NCRC"],
        };

        std::iter::once(path)
            .chain(args.iter().map(|a| (*a).to_string()))
            .collect()
    }
}
