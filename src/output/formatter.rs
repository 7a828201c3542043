// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use std::path::Path;

/// Globally enables or disables ANSI colors for this process.
///
/// This overrides `colored`'s own environment detection, including
/// `NO_COLOR`, so pass the result of [`should_colorize`].
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Decides whether to emit colors.
///
/// `allowed` is the configured preference (`Config::color`). Colors also
/// require `NO_COLOR` to be unset and stdout to be a terminal.
pub fn should_colorize(allowed: bool, no_color_env: bool, stdout_is_tty: bool) -> bool {
    allowed && !no_color_env && stdout_is_tty
}

/// Formats a path for display.
///
/// Path separators are normalized to `/` so output looks the same on every
/// platform.
///
/// # Examples
/// ```
/// use snatcher::output::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/main.rs")), "src/main.rs");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
