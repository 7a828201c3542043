//! Defines application-specific error types.
//!
//! This module provides the `AppError` enum, which categorizes the failures
//! that can occur while resolving a GitHub URL, walking the remote tree, and
//! materializing files locally. Each variant documents whether it aborts the
//! whole run or only affects a single file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed error used as the `source` of fetch failures.
///
/// Fetches can fail inside the HTTP client, while checking the status code, or
/// while decoding JSON, so the concrete source type is erased.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application-specific errors used throughout `snatcher`.
#[derive(Error, Debug)]
pub enum AppError {
    // --- Input Errors ---
    /// The input is not a GitHub repository or folder URL. Fatal.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The raw input as given by the user.
        url: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Generic error related to invalid configuration settings.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // --- Traversal Errors ---
    /// A directory listing could not be fetched or decoded. Fatal, since the
    /// traversal cannot know what it missed.
    #[error("Error retrieving directory contents from '{url}': {source}")]
    ListingFetch {
        /// The listing endpoint that failed.
        url: String,
        /// The underlying transport, status, or decode error.
        #[source]
        source: BoxError,
    },

    /// A parent directory of a file could not be created. Fatal.
    #[error("Error creating directory '{path}': {source}")]
    DirectoryCreate {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    // --- Per-file Errors ---
    /// The raw content of one file could not be fetched. Local to that file.
    #[error("Error downloading '{url}' to '{path}': {source}")]
    ContentFetch {
        /// The raw content URL.
        url: String,
        /// The local path the content was destined for.
        path: PathBuf,
        /// The underlying transport or status error.
        #[source]
        source: BoxError,
    },

    /// The downloaded bytes could not be written. Local to that file.
    #[error("Error writing '{path}': {source}")]
    FileWrite {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Some files failed to download and the run was asked to treat that as fatal.
    #[error("{failed} file(s) could not be downloaded")]
    IncompleteDownload {
        /// Number of files that failed.
        failed: usize,
    },

    /// Writing to the output stream failed (e.g., a closed pipe).
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    // --- Signal Handling ---
    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

impl AppError {
    /// Returns `true` if the error only affects a single file and sibling
    /// processing may continue.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            AppError::ContentFetch { .. } | AppError::FileWrite { .. }
        )
    }
}

/// Result alias used by the library.
pub type Result<T> = std::result::Result<T, AppError>;

/// Helper function to create an `AppError::DirectoryCreate` with path context.
pub fn dir_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::DirectoryCreate {
        path: path.as_ref().to_path_buf(),
        source,
    }
}

/// Helper function to create an `AppError::FileWrite` with path context.
pub fn write_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> AppError {
    AppError::FileWrite {
        path: path.as_ref().to_path_buf(),
        source,
    }
}
