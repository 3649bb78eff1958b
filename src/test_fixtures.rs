//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides temp directories plus recording fakes for every external collaborator
//! (download, archive extraction, shortcut creation, subprocess execution), so installer and
//! orchestrator tests never touch the network or spawn processes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{RecordingFetcher, RecordingRunner, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let fetcher = RecordingFetcher::new().failing_on("broken");
//!     let runner = RecordingRunner::new();
//!     // ... run the code under test ...
//!     assert_eq!(runner.calls().len(), 1);
//! }
//! ```

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{InstallError, Result};
use crate::fetch::{FetchOptions, Fetcher, file_name_from_url};
use crate::system::{ArchiveExtractor, LinkCreator, ProcessRunner};

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Fetcher that writes a placeholder file instead of downloading
#[derive(Default)]
pub struct RecordingFetcher {
    fail_on: Vec<String>,
    calls: RefCell<Vec<(String, FetchOptions)>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every URL containing `pattern`
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.fail_on.push(pattern.to_string());
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn calls(&self) -> Vec<(String, FetchOptions)> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for RecordingFetcher {
    fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PathBuf> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), options.clone()));

        if self.fail_on.iter().any(|p| url.contains(p.as_str())) {
            return Err(InstallError::DownloadFailed {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let name = reqwest::Url::parse(url)
            .map(|u| file_name_from_url(&u))
            .unwrap_or_else(|_| "download".to_string());
        std::fs::create_dir_all(&options.destination)?;
        let path = options.destination.join(name);
        std::fs::write(&path, url.as_bytes())?;
        Ok(path)
    }
}

/// Process runner that records command lines
#[derive(Default)]
pub struct RecordingRunner {
    fail_on: Vec<String>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command line with an argument containing `pattern`
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.fail_on.push(pattern.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(argv.to_vec());

        if argv
            .iter()
            .any(|arg| self.fail_on.iter().any(|p| arg.contains(p.as_str())))
        {
            return Err(InstallError::ProcessFailed {
                command: argv.join(" "),
                reason: "exited with exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Extractor that creates the destination and optional placeholder entries
#[derive(Default)]
pub struct FakeExtractor {
    entries: Vec<String>,
    fail: bool,
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl FakeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files created inside the destination on extraction
    pub fn with_entry(mut self, name: &str) -> Self {
        self.entries.push(name.to_string());
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl ArchiveExtractor for FakeExtractor {
    fn extract_zip(&self, archive: &Path, destination: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((archive.to_path_buf(), destination.to_path_buf()));

        if self.fail {
            return Err(InstallError::ExtractionFailed {
                archive: archive.display().to_string(),
                reason: "invalid Zip archive".to_string(),
            });
        }

        std::fs::create_dir_all(destination)?;
        for entry in &self.entries {
            std::fs::write(destination.join(entry), b"")?;
        }
        Ok(())
    }
}

/// Link creator that records `(target, link)` pairs
#[derive(Default)]
pub struct RecordingLinks {
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl RecordingLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl LinkCreator for RecordingLinks {
    fn create_link(&self, target: &Path, link: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((target.to_path_buf(), link.to_path_buf()));
        Ok(())
    }
}
