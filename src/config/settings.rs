//! Well-known host paths
//!
//! On Windows every path derives from standard environment variables. Elsewhere (and whenever a
//! variable is missing) directories fall back to `dirs` locations so the tool still runs, which
//! is what the integration tests rely on. Each path can be pinned with a `JUST_INSTALL_*`
//! variable.

use std::path::PathBuf;

use super::registry::loader::DEFAULT_REGISTRY_URL;
use crate::template::Environment;
use crate::temp::temp_dir_base;

/// Subdirectory used for fallback locations
const APP_DIR: &str = "just-install";

pub const SHIMS_DIR_VAR: &str = "JUST_INSTALL_SHIMS_DIR";
pub const START_MENU_VAR: &str = "JUST_INSTALL_START_MENU";
pub const EXEPROXY_VAR: &str = "JUST_INSTALL_EXEPROXY";
pub const DOWNLOAD_DIR_VAR: &str = "JUST_INSTALL_DOWNLOAD_DIR";
pub const REGISTRY_VAR: &str = "JUST_INSTALL_REGISTRY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory shims are written into
    pub shims_dir: PathBuf,
    /// Start-menu programs directory shortcuts go into
    pub start_menu: PathBuf,
    /// Shim-proxy executable
    pub exeproxy: PathBuf,
    /// Persistent directory for downloaded artifacts
    pub download_dir: PathBuf,
    /// Registry path or URL
    pub registry: String,
}

impl Settings {
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            shims_dir: path_setting(env, SHIMS_DIR_VAR)
                .or_else(|| env.get("SystemDrive").map(|d| format!("{}\\Shims", d).into()))
                .unwrap_or_else(|| fallback_dir(dirs::data_local_dir(), "shims")),
            start_menu: path_setting(env, START_MENU_VAR)
                .or_else(|| {
                    env.get("ProgramData").map(|d| {
                        format!("{}\\Microsoft\\Windows\\Start Menu\\Programs", d).into()
                    })
                })
                .unwrap_or_else(|| fallback_dir(dirs::data_dir(), "start-menu")),
            exeproxy: path_setting(env, EXEPROXY_VAR)
                .or_else(|| {
                    env.get("ProgramFiles(x86)")
                        .map(|d| format!("{}\\exeproxy\\exeproxy.exe", d).into())
                })
                .unwrap_or_else(|| {
                    fallback_dir(dirs::data_local_dir(), "exeproxy").join("exeproxy.exe")
                }),
            download_dir: path_setting(env, DOWNLOAD_DIR_VAR)
                .unwrap_or_else(|| temp_dir_base().join(APP_DIR)),
            registry: env
                .get(REGISTRY_VAR)
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_REGISTRY_URL)
                .to_string(),
        }
    }

    /// Replace the registry location (from `--registry`)
    pub fn with_registry(mut self, registry: Option<String>) -> Self {
        if let Some(registry) = registry {
            self.registry = registry;
        }
        self
    }
}

fn path_setting(env: &Environment, var: &str) -> Option<PathBuf> {
    env.get(var).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn fallback_dir(base: Option<PathBuf>, name: &str) -> PathBuf {
    base.unwrap_or_else(temp_dir_base).join(APP_DIR).join(name)
}
