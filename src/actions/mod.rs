//! The two actions driven by the tree walker.
//!
//! Both share `walker::walk` and differ only in what they do with each file:
//! - `list`: records `(local path, content URL)` pairs, no side effects.
//! - `download`: creates parent directories and writes each file's bytes.

pub mod download;
pub mod list;

pub use download::{download_tree, DownloadReport, FileOutcome, FsStore, LocalStore};
pub use list::{list_tree, ListedFile, Listing};
