//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Human-readable lines go through these helpers; machine-readable output
//! (the `positions`/`rates` JSON payloads) is printed directly by the
//! handlers so it stays clean for piping.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<16} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a note/hint.
pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Format a profit-style value: green when non-negative, red otherwise.
pub fn signed(value: impl Display, negative: bool) -> String {
    let value = value.to_string();
    if negative {
        format!("{}", value.red())
    } else {
        format!("{}", value.green())
    }
}
