// src/output/summary.rs

use crate::actions::{DownloadReport, Listing};
use colored::Colorize;
use std::io::{self, Write};

/// Writes the closing line of a List run.
pub fn write_list_summary(writer: &mut dyn Write, listing: &Listing) -> io::Result<()> {
    writeln!(
        writer,
        "{} file(s) in {} director{}",
        listing.files.len(),
        listing.stats.directories,
        if listing.stats.directories == 1 { "y" } else { "ies" }
    )
}

/// Writes the closing lines of a Download run, including each failure's reason.
pub fn write_download_summary(writer: &mut dyn Write, report: &DownloadReport) -> io::Result<()> {
    let line = format!(
        "{} file(s) downloaded, {} failed",
        report.written.len(),
        report.failures.len()
    );
    if report.is_complete() {
        writeln!(writer, "{}", line.green())?;
    } else {
        writeln!(writer, "{}", line.yellow())?;
        for failure in &report.failures {
            writeln!(writer, "  {}", failure.to_string().red())?;
        }
    }
    Ok(())
}
