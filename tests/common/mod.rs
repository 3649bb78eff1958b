//! Common test utilities for just-install integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// An isolated environment for running the just-install binary
///
/// Every well-known path (downloads, shims, start menu, exeproxy) points inside a temp
/// directory, so tests never touch the host.
pub struct TestEnv {
    pub temp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { temp, root }
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.path("downloads")
    }

    /// Cached artifact of one package version
    #[allow(dead_code)]
    pub fn artifact(&self, package: &str, version: &str, file: &str) -> PathBuf {
        self.download_dir().join(package).join(version).join(file)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.path("registry.json")
    }

    /// Write `packages` as a v4 registry
    pub fn write_registry(&self, packages: Value) {
        let registry = json!({ "version": 4, "packages": packages });
        std::fs::write(
            self.registry_path(),
            serde_json::to_string_pretty(&registry).expect("Failed to serialize registry"),
        )
        .expect("Failed to write registry");
    }

    /// Write a file that a registry entry can point at as its installer source
    #[allow(dead_code)]
    pub fn write_source(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path("sources").join(name);
        write_file(&path, content);
        path
    }

    /// just-install command preconfigured for this environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("just-install").expect("Failed to find binary");
        cmd.env("JUST_INSTALL_REGISTRY", self.registry_path())
            .env("JUST_INSTALL_DOWNLOAD_DIR", self.download_dir())
            .env("JUST_INSTALL_SHIMS_DIR", self.path("Shims"))
            .env("JUST_INSTALL_START_MENU", self.path("Start Menu"))
            .env("JUST_INSTALL_EXEPROXY", self.path("exeproxy/exeproxy.exe"))
            .env("TEST_ROOT", &self.root)
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Registry URL template for a local source, with `${version}` in place of the version
#[allow(dead_code)]
pub fn source_template(dir: &Path, stem: &str, ext: &str) -> String {
    format!("{}/{}-${{version}}.{}", dir.display(), stem, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creation() {
        let env = TestEnv::new();
        assert!(env.root.is_dir());
    }

    #[test]
    fn test_write_registry() {
        let env = TestEnv::new();
        env.write_registry(json!({}));
        let content = std::fs::read_to_string(env.registry_path()).unwrap();
        assert!(content.contains("\"version\": 4"));
    }
}
