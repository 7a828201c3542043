// src/walker.rs
//! Depth-first traversal of a remote GitHub directory tree.

use crate::cancellation::CancellationToken;
use crate::errors::Result;
use crate::github::{EntryKind, RemoteEntry, RemoteSource};
use log::{debug, warn};
use std::path::{Component, Path, PathBuf};

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directory listings fetched, including the starting one.
    pub directories: usize,
    /// Files handed to the per-file action.
    pub files: usize,
    /// Entries neither descended into nor handed to the action.
    pub skipped: usize,
}

/// A directory whose listing has been fetched but not fully processed.
struct Frame {
    local_dir: PathBuf,
    entries: std::vec::IntoIter<RemoteEntry>,
}

/// Walks the remote tree rooted at `listing_endpoint`, calling `on_file` for every file.
///
/// Each entry's local path is `local_prefix` joined with the names of every
/// directory on the way down, so the local tree mirrors the remote one.
/// Entries are processed in the order the API returns them, and a
/// subdirectory's whole subtree is processed before its next sibling.
///
/// Directories are tracked on an explicit stack rather than by recursion, so
/// tree depth is not limited by the call stack.
///
/// Entry kinds other than files and directories are skipped, as are names
/// that are not a single plain path component.
///
/// # Errors
/// A failed listing fetch aborts the walk with the source's error
/// (`AppError::ListingFetch` for `GithubClient`). An error returned by
/// `on_file` also aborts the walk, so actions decide which of their failures
/// are fatal. Cancellation yields `AppError::Interrupted`.
pub fn walk<S, F>(
    source: &S,
    listing_endpoint: &str,
    local_prefix: &Path,
    token: &CancellationToken,
    mut on_file: F,
) -> Result<WalkStats>
where
    S: RemoteSource + ?Sized,
    F: FnMut(&Path, &str) -> Result<()>,
{
    let mut stats = WalkStats::default();

    token.check()?;
    let root = source.fetch_listing(listing_endpoint)?;
    stats.directories += 1;
    let mut stack = vec![Frame {
        local_dir: local_prefix.to_path_buf(),
        entries: root.into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.next() else {
            stack.pop();
            continue;
        };

        if !is_plain_name(&entry.name) {
            warn!(
                "Skipping entry with unsafe name '{}' under '{}'",
                entry.name,
                frame.local_dir.display()
            );
            stats.skipped += 1;
            continue;
        }
        let child_path = frame.local_dir.join(&entry.name);

        match entry.kind {
            EntryKind::Directory { listing_url } => {
                token.check()?;
                debug!("Descending into '{}'", child_path.display());
                let listing = source.fetch_listing(&listing_url)?;
                stats.directories += 1;
                stack.push(Frame {
                    local_dir: child_path,
                    entries: listing.into_iter(),
                });
            }
            EntryKind::File { content_url } => {
                token.check()?;
                on_file(&child_path, &content_url)?;
                stats.files += 1;
            }
            EntryKind::Other(kind) => {
                debug!(
                    "Skipping '{}' of unsupported type '{}'",
                    child_path.display(),
                    kind
                );
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Returns `true` if `name` is exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('/')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::{AppError, BoxError};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// An in-memory remote tree keyed by listing and content URL.
    #[derive(Default)]
    pub(crate) struct MockRemote {
        pub(crate) listings: HashMap<String, Vec<RemoteEntry>>,
        pub(crate) contents: HashMap<String, Vec<u8>>,
        pub(crate) requested: RefCell<Vec<String>>,
    }

    impl MockRemote {
        pub(crate) fn listing(mut self, url: &str, entries: Vec<RemoteEntry>) -> Self {
            self.listings.insert(url.to_string(), entries);
            self
        }

        pub(crate) fn content(mut self, url: &str, bytes: &[u8]) -> Self {
            self.contents.insert(url.to_string(), bytes.to_vec());
            self
        }

        /// The synthetic tree `{a.txt, sub/{b.txt, subsub/{c.txt}}}`.
        pub(crate) fn sample_tree() -> Self {
            MockRemote::default()
                .listing(
                    "api://root",
                    vec![
                        RemoteEntry::file("a.txt", "raw://a"),
                        RemoteEntry::dir("sub", "api://sub"),
                    ],
                )
                .listing(
                    "api://sub",
                    vec![
                        RemoteEntry::dir("subsub", "api://subsub"),
                        RemoteEntry::file("b.txt", "raw://b"),
                    ],
                )
                .listing("api://subsub", vec![RemoteEntry::file("c.txt", "raw://c")])
                .content("raw://a", b"alpha")
                .content("raw://b", b"bravo")
                .content("raw://c", b"charlie")
        }
    }

    impl RemoteSource for MockRemote {
        fn fetch_listing(&self, url: &str) -> Result<Vec<RemoteEntry>> {
            self.requested.borrow_mut().push(url.to_string());
            self.listings
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::ListingFetch {
                    url: url.to_string(),
                    source: "404 Not Found".into(),
                })
        }

        fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, BoxError> {
            self.requested.borrow_mut().push(url.to_string());
            self.contents
                .get(url)
                .cloned()
                .ok_or_else(|| "404 Not Found".into())
        }
    }

    fn collect(remote: &MockRemote, root: &str) -> Result<(Vec<(PathBuf, String)>, WalkStats)> {
        let mut seen = Vec::new();
        let stats = walk(
            remote,
            root,
            Path::new("root"),
            &CancellationToken::new(),
            |path, url| {
                seen.push((path.to_path_buf(), url.to_string()));
                Ok(())
            },
        )?;
        Ok((seen, stats))
    }

    #[test]
    fn test_walk_is_depth_first_preorder() -> Result<()> {
        let remote = MockRemote::sample_tree();
        let (seen, stats) = collect(&remote, "api://root")?;

        assert_eq!(
            seen,
            vec![
                (PathBuf::from("root/a.txt"), "raw://a".to_string()),
                (PathBuf::from("root/sub/subsub/c.txt"), "raw://c".to_string()),
                (PathBuf::from("root/sub/b.txt"), "raw://b".to_string()),
            ]
        );
        assert_eq!(
            stats,
            WalkStats {
                directories: 3,
                files: 3,
                skipped: 0
            }
        );
        Ok(())
    }

    #[test]
    fn test_walk_result_set_is_order_independent() -> Result<()> {
        let remote = MockRemote::sample_tree().listing(
            "api://root",
            vec![
                RemoteEntry::dir("sub", "api://sub"),
                RemoteEntry::file("a.txt", "raw://a"),
            ],
        );
        let (seen, _) = collect(&remote, "api://root")?;

        let mut paths: Vec<_> = seen.into_iter().map(|(p, _)| p).collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("root/a.txt"),
                PathBuf::from("root/sub/b.txt"),
                PathBuf::from("root/sub/subsub/c.txt"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_walk_skips_unknown_kinds_and_unsafe_names() -> Result<()> {
        let remote = MockRemote::default().listing(
            "api://root",
            vec![
                RemoteEntry {
                    name: "vendor".to_string(),
                    kind: EntryKind::Other("submodule".to_string()),
                },
                RemoteEntry {
                    name: "link".to_string(),
                    kind: EntryKind::Other("symlink".to_string()),
                },
                RemoteEntry::dir("..", "api://escape"),
                RemoteEntry::file("a/b", "raw://nested"),
                RemoteEntry::file("", "raw://empty"),
                RemoteEntry::file("ok.txt", "raw://ok"),
            ],
        );
        let (seen, stats) = collect(&remote, "api://root")?;

        assert_eq!(
            seen,
            vec![(PathBuf::from("root/ok.txt"), "raw://ok".to_string())]
        );
        assert_eq!(stats.skipped, 5);
        // Neither the unsafe directory nor anything else was fetched.
        assert_eq!(*remote.requested.borrow(), vec!["api://root".to_string()]);
        Ok(())
    }

    #[test]
    fn test_walk_aborts_on_listing_failure() {
        // "broken" has no listing; "later" must never be visited.
        let remote = MockRemote::default()
            .listing(
                "api://root",
                vec![
                    RemoteEntry::file("first.txt", "raw://first"),
                    RemoteEntry::dir("broken", "api://broken"),
                    RemoteEntry::file("after.txt", "raw://after"),
                    RemoteEntry::dir("later", "api://later"),
                ],
            )
            .listing("api://later", vec![RemoteEntry::file("x.txt", "raw://x")]);

        let mut seen = Vec::new();
        let result = walk(
            &remote,
            "api://root",
            Path::new(""),
            &CancellationToken::new(),
            |path, _| {
                seen.push(path.to_path_buf());
                Ok(())
            },
        );

        match result {
            Err(AppError::ListingFetch { url, .. }) => assert_eq!(url, "api://broken"),
            other => panic!("Expected ListingFetch, got {:?}", other),
        }
        assert_eq!(seen, vec![PathBuf::from("first.txt")]);
        assert!(!remote
            .requested
            .borrow()
            .contains(&"api://later".to_string()));
    }

    #[test]
    fn test_walk_fails_when_root_listing_fails() {
        let remote = MockRemote::default();
        let result = collect(&remote, "api://missing");
        assert!(matches!(result, Err(AppError::ListingFetch { .. })));
    }

    #[test]
    fn test_walk_propagates_action_errors() {
        let remote = MockRemote::sample_tree();
        let mut calls = 0;
        let result = walk(
            &remote,
            "api://root",
            Path::new("root"),
            &CancellationToken::new(),
            |path, _| {
                calls += 1;
                Err(crate::errors::dir_error_with_path(
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                    path,
                ))
            },
        );
        assert!(matches!(result, Err(AppError::DirectoryCreate { .. })));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_walk_stops_when_cancelled() {
        let remote = MockRemote::sample_tree();
        let token = CancellationToken::new();
        let mut seen = 0;
        let result = walk(&remote, "api://root", Path::new("root"), &token, |_, _| {
            seen += 1;
            token.cancel();
            Ok(())
        });
        assert!(matches!(result, Err(AppError::Interrupted)));
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_walk_empty_prefix_yields_bare_names() -> Result<()> {
        let remote = MockRemote::default().listing(
            "api://root",
            vec![RemoteEntry::file("README.md", "raw://readme")],
        );
        let mut seen = Vec::new();
        walk(
            &remote,
            "api://root",
            Path::new(""),
            &CancellationToken::new(),
            |path, _| {
                seen.push(path.to_path_buf());
                Ok(())
            },
        )?;
        assert_eq!(seen, vec![PathBuf::from("README.md")]);
        Ok(())
    }

    #[test]
    fn test_is_plain_name() {
        assert!(is_plain_name("file.txt"));
        assert!(is_plain_name(".github"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name("."));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("a/b"));
        assert!(!is_plain_name("/etc"));
    }
}
