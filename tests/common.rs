// tests/common.rs

use mockito::{Matcher, Mock, ServerGuard};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn snatcher_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("snatcher"));
    // Keep output free of ANSI escapes and independent of the caller's environment.
    cmd.arg("--no-color").env_remove("GITHUB_API_URL");
    cmd
}

/// Serves a contents API listing at `path`, whatever the query string.
#[allow(dead_code)]
pub fn mock_listing(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Serves raw file bytes at `path`, whatever the query string.
#[allow(dead_code)]
pub fn mock_raw(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(body)
        .create()
}

/// A listing entry for a file served by `mock_raw` at `/raw/<name>`.
#[allow(dead_code)]
pub fn file_json(base: &str, name: &str) -> String {
    format!(
        r#"{{"name": "{name}", "type": "file", "url": "{base}/api/{name}", "download_url": "{base}/raw/{name}"}}"#
    )
}

/// A listing entry for a directory listed at `listing_path`.
#[allow(dead_code)]
pub fn dir_json(base: &str, name: &str, listing_path: &str) -> String {
    format!(
        r#"{{"name": "{name}", "type": "dir", "url": "{base}{listing_path}", "download_url": null}}"#
    )
}

/// Mocks the tree `docs/{intro.md, guide/{setup.md}}` of `o/r` on branch `main`.
#[allow(dead_code)]
pub fn mock_docs_tree(server: &mut ServerGuard) -> Vec<Mock> {
    let base = server.url();
    let root = format!(
        "[{}, {}]",
        file_json(&base, "intro.md"),
        dir_json(&base, "guide", "/repos/o/r/contents/docs/guide")
    );
    let guide = format!("[{}]", file_json(&base, "setup.md"));
    vec![
        mock_listing(server, "/repos/o/r/contents/docs", &root),
        mock_listing(server, "/repos/o/r/contents/docs/guide", &guide),
        mock_raw(server, "/raw/intro.md", "# Intro\n"),
        mock_raw(server, "/raw/setup.md", "# Setup\n"),
    ]
}
