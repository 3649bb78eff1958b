//! Registry loading
//!
//! A registry source is either a local file or an `http(s)`/`file` URL. Remote registries are
//! downloaded into the download directory and reused until `--force` asks for a fresh copy.

use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::Url;

use super::Registry;
use crate::error::{InstallError, Result};
use crate::fetch::{FetchOptions, Fetcher};

/// Registry used when neither `--registry` nor `JUST_INSTALL_REGISTRY` is set
pub const DEFAULT_REGISTRY_URL: &str =
    "https://just-install.github.io/registry/just-install-v4.json";

/// Locate (downloading when needed) and parse the registry named by `source`.
pub fn resolve(
    source: &str,
    fetcher: &dyn Fetcher,
    download_dir: &Path,
    force: bool,
) -> Result<Registry> {
    let path = match remote_url(source) {
        Some(url) => {
            info!("fetching registry from {}", url);
            fetcher.fetch(
                url.as_str(),
                &FetchOptions {
                    destination: download_dir.to_path_buf(),
                    overwrite: force,
                    progress: false,
                },
            )?
        }
        None => local_path(source),
    };

    load(&path)
}

/// Read and parse a registry file; `.yaml`/`.yml` files are YAML, everything else JSON.
pub fn load(path: &Path) -> Result<Registry> {
    debug!("loading registry from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| InstallError::RegistryReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        serde_yaml::from_str::<Registry>(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Registry>(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| InstallError::RegistryParseFailed {
        path: path.display().to_string(),
        reason,
    })
}

/// `Some` for sources that must be downloaded
fn remote_url(source: &str) -> Option<Url> {
    Url::parse(source)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}

fn local_path(source: &str) -> PathBuf {
    if let Some(path) = Url::parse(source)
        .ok()
        .filter(|u| u.scheme() == "file")
        .and_then(|u| u.to_file_path().ok())
    {
        return path;
    }

    let path = PathBuf::from(source);
    dunce::canonicalize(&path).unwrap_or(path)
}
