//! Diagnostic printing.
//!
//! Skipped call sites are reported cargo-style on stderr so they never mix
//! with a catalog written to stdout.

use std::io::{self, Write};

use colored::Colorize;

use super::RunSummary;
use crate::issues::Diagnostic;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics to stderr.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    print_diagnostics_to(diagnostics, &mut io::stderr().lock());
}

/// Print diagnostics to a custom writer.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, writer);
    }

    let _ = writeln!(
        writer,
        "\n{} {} call {} skipped",
        FAILURE_MARK.yellow(),
        diagnostics.len(),
        plural(diagnostics.len(), "site", "sites")
    );
}

/// Print the closing summary line to stderr.
pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {} extracted from {} {}",
        SUCCESS_MARK.green(),
        summary.messages,
        plural(summary.messages, "message", "messages"),
        summary.files,
        plural(summary.files, "file", "files"),
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: unable to obtain value: {}",
        "warning".bold().yellow(),
        diagnostic.error
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.location());
    let _ = writeln!(
        writer,
        "   {} {} in call to {}",
        "=".blue(),
        "note:".bold(),
        diagnostic.keyword
    );
}
