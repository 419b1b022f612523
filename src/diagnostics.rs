//! Shared diagnostics helpers for consistent, colored stderr output.

use colored::Colorize;

/// Print a warning message with a colored prefix.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Print an informational status line with a colored prefix.
pub fn note(message: impl AsRef<str>) {
    eprintln!("{} {}", "INFO".green().bold(), message.as_ref());
}

/// Format an error message with a colored prefix.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}
