//! `snatcher` is a library and command-line tool for downloading a single
//! folder (or a whole repository) from GitHub without cloning it.
//!
//! It resolves a GitHub web URL into contents API coordinates, walks the
//! remote directory tree depth-first, and runs one of two actions on every
//! file it finds:
//! 1.  **List**: report each file's local path and raw content URL.
//! 2.  **Download**: write each file into a local tree mirroring the remote one.
//!
//! # Example: Library Usage
//!
//! ```no_run
//! use snatcher::{run, CancellationToken, ConfigBuilder, RunOutcome};
//!
//! let config = ConfigBuilder::new()
//!     .url("https://github.com/rust-lang/cargo/tree/master/src/doc")
//!     .dry_run(true)
//!     .build()
//!     .unwrap();
//!
//! let mut output = Vec::new();
//! match run(&config, &CancellationToken::new(), &mut output).unwrap() {
//!     RunOutcome::Listed(listing) => println!("{} files", listing.files.len()),
//!     RunOutcome::Downloaded(_) | RunOutcome::Idle => unreachable!(),
//! }
//! ```

pub mod actions;
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod errors;
pub mod github;
pub mod output;
pub mod signal;
pub mod walker;

// Re-export key public types for easier use as a library
pub use actions::{DownloadReport, FsStore, ListedFile, Listing, LocalStore};
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, RunMode};
pub use errors::{AppError, Result};
pub use github::{GithubClient, RemoteEntry, RemoteSource, RepoCoordinates};

use std::io::Write;

/// What a completed run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The List action ran.
    Listed(Listing),
    /// The Download action ran.
    Downloaded(DownloadReport),
    /// No action was requested, so nothing was fetched.
    Idle,
}

/// Executes a run against the real GitHub API and filesystem.
///
/// Per-file lines are streamed to `writer` as the walk progresses.
///
/// # Errors
/// Fatal errors (`ListingFetch`, `DirectoryCreate`, `Interrupted`, `Output`)
/// abort the run. Per-file download failures are collected in the returned
/// `DownloadReport`, unless `config.strict` is set, in which case the run
/// fails with `AppError::IncompleteDownload` after the walk completes.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<RunOutcome> {
    let client = GithubClient::new().map_err(|e| {
        AppError::ConfigError(format!("Failed to build HTTP client: {}", e))
    })?;
    run_with(config, &client, &FsStore, token, writer)
}

/// Executes a run with caller-supplied remote and filesystem collaborators.
///
/// This is the seam `run` is built on; it lets other transports or stores
/// drive the same traversal.
pub fn run_with<S, L>(
    config: &Config,
    source: &S,
    store: &L,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<RunOutcome>
where
    S: RemoteSource + ?Sized,
    L: LocalStore + ?Sized,
{
    let endpoint = config.listing_endpoint();
    let local_root = config.local_root();
    log::info!(
        "{:?} {} from {} into '{}'",
        config.mode,
        config.coordinates,
        endpoint,
        local_root.display()
    );

    // Callbacks cannot return errors, so keep the first write failure.
    let mut write_error: Option<std::io::Error> = None;
    let mut record = |result: std::io::Result<()>| {
        if let Err(e) = result {
            if write_error.is_none() {
                write_error = Some(e);
            }
        }
    };

    let outcome = match config.mode {
        RunMode::List => {
            let listing = actions::list_tree(source, &endpoint, &local_root, token, |file| {
                record(output::lines::write_listed_file(writer, file))
            })?;
            RunOutcome::Listed(listing)
        }
        RunMode::Download => {
            let report = actions::download_tree(
                source,
                store,
                &endpoint,
                &local_root,
                token,
                |outcome| record(output::lines::write_file_outcome(writer, outcome)),
            )?;
            RunOutcome::Downloaded(report)
        }
        RunMode::Idle => {
            log::warn!("--download=false without --dry-run: nothing to do");
            RunOutcome::Idle
        }
    };

    if let Some(e) = write_error {
        return Err(AppError::Output(e));
    }
    writer.flush().map_err(AppError::Output)?;

    if let RunOutcome::Downloaded(report) = &outcome {
        if config.strict && !report.is_complete() {
            return Err(AppError::IncompleteDownload {
                failed: report.failures.len(),
            });
        }
    }
    Ok(outcome)
}
