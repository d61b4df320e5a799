//! Messages printed around the solution line

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Explain how to turn notifications on
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn print_notification_guidance<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "NTFY_URL is not set in the environment variables".yellow()
    )?;
    writeln!(
        out,
        "Please set it to the URL of your ntfy instance if you want to receive push notifications."
    )?;
    writeln!(out, "More Info: https://docs.ntfy.sh")
}

/// Announce that the solutions directory is about to be created
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn print_creating_directory<W: Write>(out: &mut W, dir: &Path) -> io::Result<()> {
    writeln!(out, "Creating '{}' directory...", dir.display())
}

/// Confirm where the solution was written
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn print_saved<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("Solution saved to {}", path.display()).green()
    )
}
