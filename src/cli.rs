// src/cli.rs

use crate::github::DEFAULT_API_URL;
use clap::Parser;

/// Download or list a folder of a GitHub repository.
///
/// snatcher resolves a GitHub web URL (a repository root, or a
/// `tree/<branch>/<path>` folder) into a contents API endpoint, walks the
/// remote tree, and either lists each file with its raw content URL or
/// downloads every file into a mirrored local directory tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub URL, e.g. https://github.com/<owner>/<repo>/tree/<branch>/<folder/path>
    pub url: Option<String>,

    /// Download the folder. Enabled by default; pass `--download=false` to disable.
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = clap::ArgAction::Set
    )]
    pub download: bool,

    /// List files and their content URLs instead of downloading. Takes precedence over --download.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Directory under which the folder's path is mirrored (default: current directory).
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Base URL of the GitHub REST API.
    #[arg(long, value_name = "URL", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Exit with an error if any file fails to download.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub strict: bool,

    /// Disable colored output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_color: bool,
}
