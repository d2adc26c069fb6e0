use std::fmt::Write;

use anyhow::Result;

use crate::report::Report;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 { color: #2c3e50; }
        .container {
            background-color: #fff;
            padding: 20px;
            border-radius: 5px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
        th, td { padding: 10px; text-align: left; border: 1px solid #ddd; }
        th { background-color: #0e293c; color: white; }
        tr:nth-child(even) { background-color: #f2f2f2; }
        .key-path { color: #2ecc71; font-family: monospace; }
        .file-path { color: #3498db; font-family: monospace; }
        .language-tag {
            display: inline-block;
            padding: 2px 6px;
            background-color: #e0f2f1;
            border-radius: 4px;
            font-size: 0.9em;
            color: #00897b;
        }
        .suggestion {
            background-color: #fff8e1;
            border-left: 4px solid #ffc107;
            padding: 10px;
            margin: 10px 0;
            font-family: monospace;
            white-space: pre;
            overflow-x: auto;
        }
        .none-found { color: green; font-weight: bold; }
"#;

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    )?;
    writeln!(out, "    <title>i18n Internationalization Report</title>")?;
    writeln!(out, "    <style>\n{}    </style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <h1>i18n Internationalization Report</h1>")?;
    writeln!(
        out,
        "    <p>Scanned <code class=\"file-path\">{}</code>: {} source file(s), {} resource file(s).</p>",
        escape(&report.scan_root),
        report.stats.source_files,
        report.stats.resource_files
    )?;

    write_missing(&mut out, report)?;
    write_unused(&mut out, report)?;
    write_diagnostics(&mut out, report)?;

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

fn write_missing(out: &mut String, report: &Report) -> Result<()> {
    writeln!(out, "    <div class=\"container\">")?;
    writeln!(
        out,
        "        <h2>🚨 Missing Keys (Used in Code but Not in JSON)</h2>"
    )?;

    if report.missing.is_empty() {
        writeln!(
            out,
            "        <p class=\"none-found\">✅ No missing keys found!</p>"
        )?;
        writeln!(out, "    </div>")?;
        return Ok(());
    }

    writeln!(out, "        <table>")?;
    writeln!(
        out,
        "            <thead><tr><th>(index)</th><th>key</th><th>line</th><th>file</th><th>language</th></tr></thead>"
    )?;
    writeln!(out, "            <tbody>")?;
    for (i, entry) in report.missing.iter().enumerate() {
        for (j, usage) in entry.occurrences.iter().enumerate() {
            let index = if j == 0 { i.to_string() } else { String::new() };
            writeln!(
                out,
                "                <tr><td>{}</td><td class=\"key-path\">{}</td><td>{}</td><td class=\"file-path\">{}</td><td><span class=\"language-tag\">{}</span></td></tr>",
                index,
                escape(&entry.key),
                usage.occurrence.line(),
                escape(usage.occurrence.file_path()),
                escape(&usage.language)
            )?;
        }
    }
    writeln!(out, "            </tbody>")?;
    writeln!(out, "        </table>")?;

    if report.fix_mode {
        writeln!(out, "        <h3>Suggestions to Fix Missing Keys</h3>")?;
        for entry in &report.missing {
            let Some(suggestion) = &entry.suggestion else {
                continue;
            };
            writeln!(
                out,
                "        <div>\n            <p>For key <code class=\"key-path\">{}</code>, add to <code class=\"file-path\">{}</code>:</p>\n            <div class=\"suggestion\">{}</div>\n        </div>",
                escape(&entry.key),
                escape(&suggestion.target_file),
                escape(&suggestion.fragment_json()?)
            )?;
        }
    }

    writeln!(out, "    </div>")?;
    Ok(())
}

fn write_unused(out: &mut String, report: &Report) -> Result<()> {
    writeln!(out, "    <div class=\"container\">")?;
    writeln!(
        out,
        "        <h2>🗑️ Unused Keys (Present in JSON but Not Used in Code)</h2>"
    )?;

    if report.unused.is_empty() {
        writeln!(
            out,
            "        <p class=\"none-found\">✅ No unused keys found!</p>"
        )?;
        writeln!(out, "    </div>")?;
        return Ok(());
    }

    writeln!(out, "        <table>")?;
    writeln!(
        out,
        "            <thead><tr><th>(index)</th><th>key</th><th>line</th><th>file</th><th>locale</th></tr></thead>"
    )?;
    writeln!(out, "            <tbody>")?;
    for (i, entry) in report.unused.iter().enumerate() {
        for (j, declaration) in entry.declarations.iter().enumerate() {
            let index = if j == 0 { i.to_string() } else { String::new() };
            writeln!(
                out,
                "                <tr><td>{}</td><td class=\"key-path\">{}</td><td>{}</td><td class=\"file-path\">{}</td><td><span class=\"language-tag\">{}</span></td></tr>",
                index,
                escape(&entry.key),
                declaration.line,
                escape(&declaration.file_path),
                escape(&declaration.locale)
            )?;
        }
    }
    writeln!(out, "            </tbody>")?;
    writeln!(out, "        </table>")?;
    writeln!(out, "    </div>")?;
    Ok(())
}

fn write_diagnostics(out: &mut String, report: &Report) -> Result<()> {
    if report.diagnostics.is_empty() {
        return Ok(());
    }

    writeln!(out, "    <div class=\"container\">")?;
    writeln!(out, "        <h2>⚠️ Skipped Files</h2>")?;
    writeln!(out, "        <ul>")?;
    for diagnostic in &report.diagnostics {
        writeln!(
            out,
            "            <li><code class=\"file-path\">{}</code> [{}]: {}</li>",
            escape(&diagnostic.file_path),
            diagnostic.kind,
            escape(&diagnostic.error)
        )?;
    }
    writeln!(out, "        </ul>")?;
    writeln!(out, "    </div>")?;
    Ok(())
}
