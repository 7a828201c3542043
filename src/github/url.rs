//! Handles parsing of GitHub repository and folder URLs.

use crate::errors::{AppError, Result};
use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Base of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Regex for the path of a GitHub web URL: `/<owner>/<repo>[/tree/<branch>[/<path>]]`
static GITHUB_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/([^/]+)/([^/]+)(?:/tree/([^/]+)(?:/(.*))?)?$").expect("valid static regex")
});

/// The API coordinates of a repository folder, parsed from a GitHub web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag, or commit. Empty means the repository's default branch.
    pub branch: String,
    /// Path of the folder inside the repository, percent-encoded as it appears
    /// in the URL. Empty means the repository root.
    pub path: String,
}

impl RepoCoordinates {
    /// Parses a GitHub web URL into its coordinates.
    ///
    /// Accepts `https://github.com/<owner>/<repo>` and
    /// `https://github.com/<owner>/<repo>/tree/<branch>[/<path>]`. Only the URL
    /// path is matched; query and fragment are ignored.
    ///
    /// # Examples
    /// ```
    /// use snatcher::github::RepoCoordinates;
    ///
    /// let coords = RepoCoordinates::resolve("https://github.com/rust-lang/cargo/tree/master/src/cargo").unwrap();
    /// assert_eq!(coords.owner, "rust-lang");
    /// assert_eq!(coords.repo, "cargo");
    /// assert_eq!(coords.branch, "master");
    /// assert_eq!(coords.path, "src/cargo");
    /// assert_eq!(
    ///     coords.listing_endpoint(),
    ///     "https://api.github.com/repos/rust-lang/cargo/contents/src/cargo?ref=master"
    /// );
    ///
    /// assert!(RepoCoordinates::resolve("https://github.com/rust-lang").is_err());
    /// ```
    pub fn resolve(raw_url: &str) -> Result<Self> {
        let parsed = Url::parse(raw_url.trim()).map_err(|e| AppError::InvalidUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut path = parsed.path();
        // "https://github.com/<owner>/<repo>/" is a common shape when copying from a browser.
        if path.len() > 1 {
            if let Some(stripped) = path.strip_suffix('/') {
                path = stripped;
            }
        }

        let caps = GITHUB_PATH_RE
            .captures(path)
            .ok_or_else(|| AppError::InvalidUrl {
                url: raw_url.to_string(),
                reason: "incomplete url".to_string(),
            })?;

        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        let coords = RepoCoordinates {
            owner: group(1),
            repo: group(2),
            branch: group(3),
            path: group(4),
        };

        if let Err(reason) = check_folder_path(&coords.path) {
            return Err(AppError::InvalidUrl {
                url: raw_url.to_string(),
                reason,
            });
        }

        if let Some(host) = parsed.host_str() {
            if host != "github.com" && host != "www.github.com" {
                log::debug!("URL host '{}' is not github.com; using its path anyway", host);
            }
        }
        log::debug!("Resolved '{}' to {}", raw_url, coords);
        Ok(coords)
    }

    /// The folder path decoded into a relative local path, e.g. `my%20docs` becomes `my docs`.
    pub fn folder_path(&self) -> PathBuf {
        PathBuf::from(percent_decode_str(&self.path).decode_utf8_lossy().into_owned())
    }

    /// Renders the contents API endpoint listing this folder on api.github.com.
    pub fn listing_endpoint(&self) -> String {
        self.listing_endpoint_at(DEFAULT_API_URL)
    }

    /// Renders the contents API endpoint listing this folder against a custom API base.
    ///
    /// `?ref=<branch>` is appended only when the branch is non-blank.
    pub fn listing_endpoint_at(&self, api_url: &str) -> String {
        let mut endpoint = format!(
            "{}/repos/{}/{}/contents/{}",
            api_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.path
        );
        if !self.branch.trim().is_empty() {
            endpoint.push_str("?ref=");
            endpoint.push_str(&self.branch);
        }
        endpoint
    }
}

/// Rejects folder paths that do not decode to plain relative components.
fn check_folder_path(encoded: &str) -> std::result::Result<(), String> {
    let decoded = percent_decode_str(encoded)
        .decode_utf8()
        .map_err(|_| "folder path is not valid UTF-8".to_string())?;
    if Path::new(decoded.as_ref())
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Ok(())
    } else {
        Err(format!("folder path '{}' leaves the repository", decoded))
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)?;
        if !self.branch.is_empty() {
            write!(f, "@{}", self.branch)?;
        }
        if !self.path.is_empty() {
            write!(f, ":{}", self.path)?;
        }
        Ok(())
    }
}
