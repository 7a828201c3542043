use super::{validation::validate_api_url, Config, RunMode};
use crate::cli::Cli;
use crate::errors::{AppError, Result};
use crate::github::{RepoCoordinates, DEFAULT_API_URL};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically or from CLI arguments.
///
/// # Examples
/// ```
/// use snatcher::config::{ConfigBuilder, RunMode};
///
/// let config = ConfigBuilder::new()
///     .url("https://github.com/rust-lang/cargo/tree/master/src/cargo")
///     .dry_run(true)
///     .output_dir("mirror")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode, RunMode::List);
/// assert_eq!(config.coordinates.path, "src/cargo");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    url: Option<String>,
    download: Option<bool>,
    dry_run: Option<bool>,
    output_dir: Option<String>,
    api_url: Option<String>,
    strict: Option<bool>,
    color: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            url: cli.url,
            download: Some(cli.download),
            dry_run: Some(cli.dry_run),
            output_dir: cli.output_dir,
            api_url: Some(cli.api_url),
            strict: Some(cli.strict),
            color: Some(!cli.no_color),
        }
    }

    /// Sets the GitHub URL to resolve.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Enables or disables the Download action (default: enabled).
    pub fn download(mut self, download: bool) -> Self {
        self.download = Some(download);
        self
    }

    /// Runs the List action instead of downloading.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Sets the directory under which the remote folder is mirrored.
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the base URL of the GitHub REST API.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Makes per-file download failures fail the run.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Allows or forbids colored output.
    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    /// Whether colored output is allowed (default: allowed).
    ///
    /// Available before `build`, so URL errors can be reported with the same
    /// preference.
    pub fn color_allowed(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Validates the settings and resolves the URL.
    ///
    /// # Errors
    /// Returns `AppError::InvalidUrl` if the URL is not a GitHub repository or
    /// folder URL, and `AppError::ConfigError` for missing or invalid settings.
    pub fn build(self) -> Result<Config> {
        let download = self.download.unwrap_or(true);
        let dry_run = self.dry_run.unwrap_or(false);
        let color = self.color_allowed();

        let source_url = self
            .url
            .ok_or_else(|| AppError::ConfigError("A GitHub URL is required.".to_string()))?;
        let coordinates = RepoCoordinates::resolve(&source_url)?;

        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let config = Config {
            source_url,
            coordinates,
            mode: match (dry_run, download) {
                (true, _) => RunMode::List,
                (false, true) => RunMode::Download,
                (false, false) => RunMode::Idle,
            },
            output_dir: self.output_dir.map(PathBuf::from),
            api_url,
            strict: self.strict.unwrap_or(false),
            color,
        };
        log::debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}
