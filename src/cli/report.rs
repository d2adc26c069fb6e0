//! Console narration in cargo-style format.
//!
//! The written report file is the full record; this is the terminal summary.
//! Issues go to stdout, per-file diagnostics to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::run::RunOutcome;
use crate::core::ScanDiagnostic;
use crate::report::{MissingKeyEntry, Report, ReportOccurrence, UnusedKeyEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of usages to display per issue.
const MAX_USAGES_DISPLAY: usize = 3;

pub fn print(outcome: &RunOutcome, verbose: bool) {
    if verbose {
        print_scan_details_to(outcome, &mut io::stdout().lock());
    }
    print_diagnostics_to(&outcome.report.diagnostics, &mut io::stderr().lock());
    print_report_to(&outcome.report, &mut io::stdout().lock());
    println!(
        "Report written to {}",
        outcome.output_path.display().to_string().cyan()
    );
}

fn print_scan_details_to<W: Write>(outcome: &RunOutcome, writer: &mut W) {
    let ctx = &outcome.ctx;

    let _ = writeln!(
        writer,
        "{} {}",
        "Scanning".green().bold(),
        ctx.root.display()
    );
    match &outcome.config_path {
        Some(path) => {
            let _ = writeln!(writer, "  config: {}", path.display());
        }
        None => {
            let _ = writeln!(writer, "  config: {}", "(defaults)".dimmed());
        }
    }

    let _ = writeln!(writer, "  {} resource file(s)", ctx.resource_files.len());
    for file in &ctx.resource_files {
        let _ = writeln!(writer, "    {}", file);
    }

    for (language, count) in ctx.source_counts() {
        let _ = writeln!(writer, "  {} {} file(s)", count, language);
        for file in ctx.source_files.iter().filter(|f| f.language == language) {
            let _ = writeln!(writer, "    {}", file.file_path);
        }
    }

    let _ = writeln!(
        writer,
        "  {} key usage(s) of {} distinct key(s)",
        ctx.used.occurrence_count(),
        ctx.used.len()
    );

    for path in &ctx.skipped_paths {
        let _ = writeln!(writer, "  {} {}", "skipped:".dimmed(), path);
    }
    let _ = writeln!(writer);
}

/// Print one warning per file that could not be read or parsed.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[ScanDiagnostic], writer: &mut W) {
    for diagnostic in diagnostics {
        let _ = writeln!(
            writer,
            "{} skipped {}  {}",
            "warning:".bold().yellow(),
            diagnostic.file_path,
            diagnostic.kind.to_string().dimmed().cyan()
        );
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "=".blue(),
            "note:".bold(),
            diagnostic.error
        );
    }
    if !diagnostics.is_empty() {
        let _ = writeln!(writer);
    }
}

/// Print missing keys, unused keys and the summary line.
pub fn print_report_to<W: Write>(report: &Report, writer: &mut W) {
    let max_line_width = calculate_max_line_width(report);

    for entry in &report.missing {
        print_missing(entry, writer, max_line_width);
    }
    for entry in &report.unused {
        print_unused(entry, writer, max_line_width);
    }

    print_summary(report, writer);
}

fn print_missing<W: Write>(entry: &MissingKeyEntry, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "error".bold().red(),
        entry.key,
        "missing-key".dimmed().cyan()
    );

    let Some((first, rest)) = entry.occurrences.split_first() else {
        let _ = writeln!(writer);
        return;
    };

    print_source_context(first, writer, max_line_width);
    print_usages(rest, writer, max_line_width);

    if let Some(suggestion) = &entry.suggestion {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} add to {}",
            "",
            "=".blue(),
            "help:".bold().cyan(),
            suggestion.target_file,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_source_context<W: Write>(usage: &ReportOccurrence, writer: &mut W, max_line_width: usize) {
    let occurrence = &usage.occurrence;
    let line = occurrence.line();
    let col = occurrence.col();
    let source_line = occurrence.source_line.as_str();

    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        occurrence.file_path(),
        line,
        col
    );
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Caret under the key literal (col is 1-based)
    let prefix = if col > 1 {
        source_line.chars().take(col - 1).collect::<String>()
    } else {
        String::new()
    };
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = max_line_width,
        padding = caret_padding
    );
}

fn print_usages<W: Write>(usages: &[ReportOccurrence], writer: &mut W, max_line_width: usize) {
    let total = usages.len();
    let display_count = total.min(MAX_USAGES_DISPLAY);

    for (i, usage) in usages.iter().take(display_count).enumerate() {
        let is_last = i == display_count - 1;
        let remaining = total.saturating_sub(display_count);
        let suffix = if is_last && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };

        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}:{}:{}{}",
            "",
            "=".blue(),
            "used:".bold(),
            usage.occurrence.file_path(),
            usage.occurrence.line(),
            usage.occurrence.col(),
            suffix,
            width = max_line_width
        );
    }
}

fn print_unused<W: Write>(entry: &UnusedKeyEntry, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "warning".bold().yellow(),
        entry.key,
        "unused-key".dimmed().cyan()
    );

    if let Some((first, rest)) = entry.declarations.split_first() {
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            first.file_path,
            first.line
        );
        for declaration in rest {
            let _ = writeln!(
                writer,
                "{:>width$} {} {} {}:{} ({})",
                "",
                "=".blue(),
                "declared:".bold(),
                declaration.file_path,
                declaration.line,
                declaration.locale,
                width = max_line_width
            );
        }
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(report: &Report, writer: &mut W) {
    if report.is_clean() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {}, {} resource {} - no issues found",
                report.stats.source_files,
                plural(report.stats.source_files, "file", "files"),
                report.stats.resource_files,
                plural(report.stats.resource_files, "file", "files")
            )
            .green()
        );
        return;
    }

    let missing = report.missing.len();
    let unused = report.unused.len();
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        missing + unused,
        missing,
        plural(missing, "missing key", "missing keys").red(),
        unused,
        plural(unused, "unused key", "unused keys").yellow()
    );
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn calculate_max_line_width(report: &Report) -> usize {
    report
        .missing
        .iter()
        .filter_map(|entry| entry.occurrences.first())
        .map(|usage| usage.occurrence.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
