//! Defines the `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings parsed and validated from the CLI,
//! with the source URL already resolved into repository coordinates.

use crate::github::RepoCoordinates;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod validation;

/// Which action runs over the remote tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print each file's local path and content URL.
    List,
    /// Write each file into the local tree.
    Download,
    /// Neither action was requested (`--download=false` without `--dry-run`).
    Idle,
}

/// Represents the fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The URL as given by the user.
    pub source_url: String,
    /// Coordinates parsed from `source_url`.
    pub coordinates: RepoCoordinates,
    /// The action to run.
    pub mode: RunMode,
    /// Directory under which the repository path is mirrored. `None` means the
    /// current directory.
    pub output_dir: Option<PathBuf>,
    /// Base URL of the GitHub REST API.
    pub api_url: String,
    /// If `true`, per-file download failures fail the run.
    pub strict: bool,
    /// Whether colored output is allowed.
    pub color: bool,
}

impl Config {
    /// The contents API endpoint the walk starts from.
    pub fn listing_endpoint(&self) -> String {
        self.coordinates.listing_endpoint_at(&self.api_url)
    }

    /// The local path mirroring the remote folder.
    ///
    /// This is the decoded repository-relative folder path, placed under
    /// `output_dir` when one is set.
    pub fn local_root(&self) -> PathBuf {
        let folder = self.coordinates.folder_path();
        match &self.output_dir {
            Some(dir) if folder.as_os_str().is_empty() => dir.clone(),
            Some(dir) => dir.join(folder),
            None => folder,
        }
    }
}
