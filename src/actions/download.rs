// src/actions/download.rs

use crate::cancellation::CancellationToken;
use crate::errors::{dir_error_with_path, write_error_with_path, AppError, Result};
use crate::github::RemoteSource;
use crate::walker::{walk, WalkStats};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The local filesystem operations the Download action needs.
pub trait LocalStore {
    /// Creates `path` and all of its missing ancestors. Must succeed if it already exists.
    fn ensure_dir(&self, path: &Path) -> io::Result<()>;
    /// Writes `bytes` to `path`, creating or truncating the file.
    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// `LocalStore` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl LocalStore for FsStore {
    fn ensure_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }
}

/// What happened to one file during a download.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was written to this path.
    Written(PathBuf),
    /// The file could not be fetched or written. Holds `AppError::ContentFetch`
    /// or `AppError::FileWrite`.
    Failed(AppError),
}

/// Result of a Download action.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Files written, in traversal order.
    pub written: Vec<PathBuf>,
    /// Per-file failures, in traversal order.
    pub failures: Vec<AppError>,
    /// Traversal counters.
    pub stats: WalkStats,
}

impl DownloadReport {
    /// Returns `true` if every file was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Mirrors every file under `listing_endpoint` into `local_root`.
///
/// Parent directories are created on demand before each file is written. A
/// directory that cannot be created aborts the run with
/// `AppError::DirectoryCreate`. A file whose content cannot be fetched or
/// written is recorded as a failure and its siblings are still processed.
///
/// `on_outcome` is called once per file, right after it is handled.
pub fn download_tree<S, L, F>(
    source: &S,
    store: &L,
    listing_endpoint: &str,
    local_root: &Path,
    token: &CancellationToken,
    mut on_outcome: F,
) -> Result<DownloadReport>
where
    S: RemoteSource + ?Sized,
    L: LocalStore + ?Sized,
    F: FnMut(&FileOutcome),
{
    let mut report = DownloadReport::default();

    let stats = walk(source, listing_endpoint, local_root, token, |path, url| {
        let outcome = match download_file(source, store, path, url) {
            Ok(()) => FileOutcome::Written(path.to_path_buf()),
            Err(e) if e.is_per_file() => {
                log::debug!("{}", e);
                FileOutcome::Failed(e)
            }
            Err(e) => return Err(e),
        };
        on_outcome(&outcome);
        match outcome {
            FileOutcome::Written(p) => report.written.push(p),
            FileOutcome::Failed(e) => report.failures.push(e),
        }
        Ok(())
    })?;
    report.stats = stats;

    log::debug!(
        "Downloaded {} file(s), {} failed",
        report.written.len(),
        report.failures.len()
    );
    Ok(report)
}

/// Materializes one file, creating its parent directories first.
fn download_file<S, L>(source: &S, store: &L, path: &Path, url: &str) -> Result<()>
where
    S: RemoteSource + ?Sized,
    L: LocalStore + ?Sized,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        store
            .ensure_dir(parent)
            .map_err(|e| dir_error_with_path(e, parent))?;
    }

    let bytes = source
        .fetch_bytes(url)
        .map_err(|source| AppError::ContentFetch {
            url: url.to_string(),
            path: path.to_path_buf(),
            source,
        })?;

    store
        .write_file(path, &bytes)
        .map_err(|e| write_error_with_path(e, path))
}
