//! Download collaborator
//!
//! [`Fetcher`] is the seam the orchestrator downloads through. [`HttpFetcher`] is the real
//! implementation: `http(s)` URLs are streamed with `reqwest`, `file://` URLs and plain paths are
//! copied.
//!
//! The destination directory belongs to a single artifact. A download is named after the
//! server's `Content-Disposition` file name, or else the last segment of the final URL after
//! redirects, so the cached file may not match the requested URL's name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_DISPOSITION;

use crate::common::string_utils::{base_name, is_blank};
use crate::error::{InstallError, Result};
use crate::progress::DownloadProgress;

/// Connect timeout; the transfer itself is not time-limited
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Name used when a URL has no usable last path segment
const FALLBACK_FILE_NAME: &str = "download";

/// Suffix of a download still in flight
const PARTIAL_SUFFIX: &str = ".part";

/// Where and how to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Directory reserved for this artifact
    pub destination: PathBuf,
    /// Replace an artifact that is already present
    pub overwrite: bool,
    /// Show a progress bar
    pub progress: bool,
}

/// Fetch a URL to a local file and return its path
pub trait Fetcher {
    fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PathBuf>;
}

/// `reqwest`-backed fetcher
#[derive(Debug, Default)]
pub struct HttpFetcher;

impl HttpFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Stream `url` into `destination` and return the written file
    fn download(
        &self,
        url: &str,
        destination: &Path,
        requested_name: &str,
        show_progress: bool,
    ) -> Result<PathBuf> {
        let client = Client::builder()
            .user_agent(concat!("just-install/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(None)
            .build()
            .map_err(|e| download_failed(url, e))?;

        let mut response = client.get(url).send().map_err(|e| download_failed(url, e))?;

        if !response.status().is_success() {
            return Err(download_failed(
                url,
                format!("server returned {}", response.status()),
            ));
        }

        let name = response_file_name(&response).unwrap_or_else(|| requested_name.to_string());
        if name != requested_name {
            debug!("{} is served as {}", requested_name, name);
        }
        let target = destination.join(&name);
        let partial = destination.join(format!("{}{}", name, PARTIAL_SUFFIX));

        let progress = DownloadProgress::new(response.content_length(), &name, show_progress);
        let file = File::create(&partial).map_err(|e| download_failed(url, e))?;
        let mut writer = progress.wrap(BufWriter::new(file));

        let copied = response
            .copy_to(&mut writer)
            .map_err(|e| download_failed(url, e))
            .and_then(|_| writer.flush().map_err(|e| download_failed(url, e)));

        if let Err(e) = copied {
            progress.abandon();
            let _ = fs::remove_file(&partial);
            return Err(e);
        }
        progress.finish();
        drop(writer);

        fs::rename(&partial, &target).map_err(|e| download_failed(url, e))?;
        Ok(target)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, options: &FetchOptions) -> Result<PathBuf> {
        let parsed = Url::parse(url).ok();
        let local_source = match &parsed {
            Some(u) if matches!(u.scheme(), "http" | "https") => None,
            Some(u) if u.scheme() == "file" => Some(
                u.to_file_path()
                    .map_err(|()| download_failed(url, "not a valid file URL"))?,
            ),
            _ => Some(PathBuf::from(url)),
        };

        let file_name = match &local_source {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string()),
            None => parsed
                .as_ref()
                .map(file_name_from_url)
                .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string()),
        };

        if !options.overwrite {
            if let Some(cached) = cached_artifact(&options.destination, &file_name) {
                info!(
                    "{} already downloaded, skipping (use --force to refresh)",
                    cached.display()
                );
                return Ok(cached);
            }
        }

        fs::create_dir_all(&options.destination).map_err(|e| download_failed(url, e))?;

        match local_source {
            Some(source) => {
                let target = options.destination.join(&file_name);
                debug!("copying {} to {}", source.display(), target.display());
                fs::copy(&source, &target).map_err(|e| download_failed(url, e))?;
                Ok(target)
            }
            None => {
                info!("downloading {}", url);
                self.download(url, &options.destination, &file_name, options.progress)
            }
        }
    }
}

/// An artifact already present in `destination`
///
/// `requested_name` wins. Otherwise a directory holding exactly one finished file is taken as
/// that file, which covers downloads renamed by the server.
pub fn cached_artifact(destination: &Path, requested_name: &str) -> Option<PathBuf> {
    let requested = destination.join(requested_name);
    if requested.is_file() {
        return Some(requested);
    }

    let mut finished = fs::read_dir(destination)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && !path
                    .file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(PARTIAL_SUFFIX))
        });

    match (finished.next(), finished.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// Last non-empty path segment of `url`
pub fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}

/// File name the server chose for a response
fn response_file_name(response: &Response) -> Option<String> {
    let from_header = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(content_disposition_file_name);

    from_header.or_else(|| {
        let name = file_name_from_url(response.url());
        (name != FALLBACK_FILE_NAME).then_some(name)
    })
}

/// `filename` parameter of a `Content-Disposition` header, reduced to its last path component
pub fn content_disposition_file_name(header: &str) -> Option<String> {
    header.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let name = base_name(value.trim().trim_matches('"'));
        (!is_blank(name) && name != "." && name != "..").then(|| name.to_string())
    })
}

fn download_failed(url: &str, reason: impl std::fmt::Display) -> InstallError {
    InstallError::DownloadFailed {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
