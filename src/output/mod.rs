// src/output/mod.rs

//! Formatting of everything printed to the terminal.
//!
//! These helpers are only called from the CLI boundary (`run` and `main`);
//! the walker and actions never print.

pub mod formatter;
pub mod lines;
pub mod summary;
pub mod usage;

pub use formatter::{format_path_for_display, set_color_enabled, should_colorize};
