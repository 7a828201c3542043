// src/output/usage.rs

//! Usage and guidance text for input errors.

use colored::Colorize;
use std::io::{self, Write};

/// One-line usage, printed when no URL is given.
pub const USAGE: &str = "Usage: snatcher [--download] [--dry-run] <url>";

/// Writes the usage line.
pub fn write_usage(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "{}", USAGE)
}

/// Writes an invalid-URL error followed by the two accepted URL shapes.
pub fn write_invalid_url(writer: &mut dyn Write, reason: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(writer, "{}", reason.to_string().red())?;
    writeln!(writer, "Expected URLs:")?;
    writeln!(
        writer,
        "{}{}",
        "https://github.com/<username>/<repo>/".green(),
        " => Download all the repository.".yellow()
    )?;
    writeln!(
        writer,
        "{}{}",
        "https://github.com/<username>/<repo>/tree/master/<folder/path>".green(),
        " => Download a folder.".yellow()
    )
}
