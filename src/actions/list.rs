// src/actions/list.rs

use crate::cancellation::CancellationToken;
use crate::errors::Result;
use crate::github::RemoteSource;
use crate::walker::{walk, WalkStats};
use std::path::{Path, PathBuf};

/// A file found by the List action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// Where the file would be written by a download.
    pub local_path: PathBuf,
    /// URL serving the file's raw bytes.
    pub content_url: String,
}

/// Result of a List action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Files in traversal order.
    pub files: Vec<ListedFile>,
    /// Traversal counters.
    pub stats: WalkStats,
}

/// Enumerates every file under `listing_endpoint` without touching the filesystem.
///
/// `on_listed` is called as each file is found so callers can stream output;
/// the full list is also returned.
pub fn list_tree<S, F>(
    source: &S,
    listing_endpoint: &str,
    local_root: &Path,
    token: &CancellationToken,
    mut on_listed: F,
) -> Result<Listing>
where
    S: RemoteSource + ?Sized,
    F: FnMut(&ListedFile),
{
    let mut files = Vec::new();
    let stats = walk(source, listing_endpoint, local_root, token, |path, url| {
        let listed = ListedFile {
            local_path: path.to_path_buf(),
            content_url: url.to_string(),
        };
        on_listed(&listed);
        files.push(listed);
        Ok(())
    })?;
    log::debug!("Listed {} file(s) in {} directories", files.len(), stats.directories);
    Ok(Listing { files, stats })
}
