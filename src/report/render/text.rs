use std::fmt::Write;

use anyhow::Result;

use crate::report::{MissingKeyEntry, Report, UnusedKeyEntry};

const BANNER: &str = "======================================================";
const RULE: &str = "------------------------------------------------------";

pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", BANNER)?;
    writeln!(
        out,
        "          i18n INTERNATIONALIZATION REPORT            "
    )?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out)?;
    writeln!(out, "Scanned: {}", report.scan_root)?;
    writeln!(
        out,
        "Files: {} source, {} resource",
        report.stats.source_files, report.stats.resource_files
    )?;
    writeln!(out)?;

    writeln!(out, "🚨 MISSING KEYS (Used in Code but Not in JSON):")?;
    writeln!(out, "{}", RULE)?;
    if report.missing.is_empty() {
        writeln!(out, "✅ No missing keys found!")?;
        writeln!(out)?;
    }
    for entry in &report.missing {
        write_missing(&mut out, entry, report.fix_mode)?;
    }

    writeln!(
        out,
        "🗑️ UNUSED KEYS (Present in JSON but Not Used in Code):"
    )?;
    writeln!(out, "{}", RULE)?;
    if report.unused.is_empty() {
        writeln!(out, "✅ No unused keys found!")?;
        writeln!(out)?;
    }
    for entry in &report.unused {
        write_unused(&mut out, entry)?;
    }

    if !report.diagnostics.is_empty() {
        writeln!(out, "⚠️ SKIPPED FILES (Could Not Be Read or Parsed):")?;
        writeln!(out, "{}", RULE)?;
        for diagnostic in &report.diagnostics {
            writeln!(
                out,
                "   - {} [{}]: {}",
                diagnostic.file_path, diagnostic.kind, diagnostic.error
            )?;
        }
        writeln!(out)?;
    }

    Ok(out)
}

fn write_missing(out: &mut String, entry: &MissingKeyEntry, fix_mode: bool) -> Result<()> {
    writeln!(out, "❌ Missing Key: {}", entry.key)?;
    writeln!(out, "   Used in:")?;
    for usage in &entry.occurrences {
        let occurrence = &usage.occurrence;
        writeln!(
            out,
            "   - {}:{}:{} -> {}",
            occurrence.file_path(),
            occurrence.line(),
            occurrence.col(),
            occurrence.source_line.trim()
        )?;
    }

    if fix_mode && let Some(suggestion) = &entry.suggestion {
        writeln!(out)?;
        writeln!(out, "   Suggestion to fix:")?;
        writeln!(out, "   Add to {}:", suggestion.target_file)?;
        writeln!(out, "{}", suggestion.fragment_json()?)?;
    }

    writeln!(out)?;
    Ok(())
}

fn write_unused(out: &mut String, entry: &UnusedKeyEntry) -> Result<()> {
    writeln!(out, "⚠️ Unused Key: {}", entry.key)?;
    writeln!(out, "   Defined in:")?;
    for declaration in &entry.declarations {
        writeln!(
            out,
            "   - {}:{} ({})",
            declaration.file_path, declaration.line, declaration.locale
        )?;
    }
    writeln!(out)?;
    Ok(())
}
