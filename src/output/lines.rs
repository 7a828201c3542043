// src/output/lines.rs

//! Per-file output lines for the List and Download actions.

use super::formatter::format_path_for_display;
use crate::actions::{FileOutcome, ListedFile};
use crate::errors::AppError;
use colored::Colorize;
use std::io::{self, Write};

/// Writes one `<path> <content url>` line for the List action.
pub fn write_listed_file(writer: &mut dyn Write, file: &ListedFile) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        format_path_for_display(&file.local_path).green(),
        file.content_url.blue()
    )
}

/// Writes one line for a file handled by the Download action.
///
/// Failures only name the file here; the reason is logged by the action and
/// repeated in the summary.
pub fn write_file_outcome(writer: &mut dyn Write, outcome: &FileOutcome) -> io::Result<()> {
    match outcome {
        FileOutcome::Written(path) => writeln!(
            writer,
            "{} {}",
            format_path_for_display(path).blue(),
            "[created]".green()
        ),
        FileOutcome::Failed(err) => {
            let path = match err {
                AppError::ContentFetch { path, .. } | AppError::FileWrite { path, .. } => {
                    format_path_for_display(path)
                }
                other => other.to_string(),
            };
            writeln!(writer, "{} {}", path.red(), "[failed]".red())
        }
    }
}
