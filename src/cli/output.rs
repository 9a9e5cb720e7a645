//! Terminal output for the parcel CLI.
//!
//! Status lines (verbose, warnings, success) go to stderr. The report and the
//! result line go to stdout, and in quiet mode stdout carries only the result.

use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

/// Output manager honouring verbose and quiet modes.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Verbose-only diagnostic line.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        writeln!(
            io::stderr(),
            "{} {}",
            "•".if_supports_color(Stream::Stderr, |s| s.blue()),
            message.if_supports_color(Stream::Stderr, |s| s.dimmed())
        )
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stderr(),
            "{} {}",
            "⚠".if_supports_color(Stream::Stderr, |s| s.yellow()),
            message.if_supports_color(Stream::Stderr, |s| s.yellow())
        )
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stderr(),
            "{} {}",
            "✓".if_supports_color(Stream::Stderr, |s| s.green()),
            message
        )
    }

    /// Section header on stdout.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{}",
            title.if_supports_color(Stream::Stdout, |s| s.bold())
        )
    }

    /// Aligned `label : value` line on stdout.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "  {} : {}",
            format!("{label:<13}").if_supports_color(Stream::Stdout, |s| s.dimmed()),
            value
        )
    }

    /// Indented line on stdout.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout(), "    {message}")
    }

    /// Result line on stdout. Printed even in quiet mode.
    pub fn result(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{message}")
    }
}
