// src/github/mod.rs
//! Handles GitHub URLs and the GitHub contents API.
//!
//! This module provides functionality to:
//! - Parse GitHub repository and folder URLs into API coordinates.
//! - List directories and download raw files through the contents API using `reqwest`.

// Declare the sub-modules.
mod api;
mod url;

// Re-export the public-facing API.
pub use api::{parse_listing, EntryKind, GithubClient, RemoteEntry, RemoteSource};
pub use url::{RepoCoordinates, DEFAULT_API_URL};
