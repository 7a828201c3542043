// src/github/api.rs
//! Talks to the GitHub contents API: directory listings and raw file downloads.

use crate::errors::{AppError, BoxError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;

/// One item of a contents API listing, as it appears on the wire.
#[derive(Deserialize, Debug)]
struct ContentItem {
    name: String,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    download_url: Option<String>,
}

/// What a listed entry is, together with the URL needed to process it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file, fetched from its raw content URL.
    File {
        /// URL serving the raw bytes.
        content_url: String,
    },
    /// A directory, listed through its own contents endpoint.
    Directory {
        /// Contents API endpoint listing this directory.
        listing_url: String,
    },
    /// Any other entry type (`symlink`, `submodule`, ...) or an entry missing
    /// the URL its type requires. Never descended into nor downloaded.
    Other(String),
}

/// A single node of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    /// Entry name, i.e. the last path component.
    pub name: String,
    /// Kind of the entry.
    pub kind: EntryKind,
}

impl RemoteEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>, content_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File {
                content_url: content_url.into(),
            },
        }
    }

    /// Creates a directory entry.
    pub fn dir(name: impl Into<String>, listing_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory {
                listing_url: listing_url.into(),
            },
        }
    }
}

impl From<ContentItem> for RemoteEntry {
    fn from(item: ContentItem) -> Self {
        let kind = match (item.item_type.as_str(), item.url, item.download_url) {
            ("file", _, Some(content_url)) => EntryKind::File { content_url },
            ("dir", Some(listing_url), _) => EntryKind::Directory { listing_url },
            (other, _, _) => EntryKind::Other(other.to_string()),
        };
        RemoteEntry {
            name: item.name,
            kind,
        }
    }
}

/// Decodes the body of a contents API listing into entries, preserving API order.
pub fn parse_listing(body: &str) -> std::result::Result<Vec<RemoteEntry>, serde_json::Error> {
    let items: Vec<ContentItem> = serde_json::from_str(body)?;
    Ok(items.into_iter().map(RemoteEntry::from).collect())
}

/// The remote capabilities the tree walker and download action depend on.
///
/// `GithubClient` is the production implementation; tests provide in-memory trees.
pub trait RemoteSource {
    /// Fetches and decodes the directory listing at `url`.
    fn fetch_listing(&self, url: &str) -> Result<Vec<RemoteEntry>>;

    /// Fetches the raw bytes at `url`.
    ///
    /// The caller knows which local file the bytes are for, so it wraps
    /// failures into `AppError::ContentFetch` itself.
    fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, BoxError>;
}

/// A blocking GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
}

impl GithubClient {
    /// Builds a client with default headers for GitHub API interaction.
    pub fn new() -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("snatcher/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }

    fn get_text(&self, url: &str) -> std::result::Result<String, BoxError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

impl RemoteSource for GithubClient {
    fn fetch_listing(&self, url: &str) -> Result<Vec<RemoteEntry>> {
        log::debug!("Fetching directory contents from: {}", url);
        let body = self.get_text(url).map_err(|source| AppError::ListingFetch {
            url: url.to_string(),
            source,
        })?;
        parse_listing(&body).map_err(|e| AppError::ListingFetch {
            url: url.to_string(),
            source: Box::new(e),
        })
    }

    fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, BoxError> {
        log::debug!("Downloading file from: {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
