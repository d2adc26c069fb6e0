//! Source key extraction.
//!
//! Extraction is line-local and pattern-based: each dialect registers the call
//! forms it recognizes (`_("key")`, `t("key")`, `$t("key")`, ...) and every line
//! of a source file is matched against them. There is no parsing, so a call
//! whose literal spans several lines is not detected.
//!
//! ## Module Structure
//!
//! - `gettext`: Python gettext-style calls
//! - `script`: JavaScript / TypeScript templating calls
//! - `vue`: Vue component template calls
//! - `registry`: Extension to dialect dispatch table

pub mod gettext;
pub mod registry;
pub mod script;
pub mod vue;

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;
use regex::Regex;

pub use gettext::GettextExtractor;
pub use registry::{Dialect, ExtractorRegistry, RESOURCE_EXTENSION, SourceRoute};
pub use script::ScriptExtractor;
pub use vue::VueExtractor;

use crate::core::{FileKeyUsages, Occurrence, SourceLocation};

/// A quoted string literal; the key is in group 1 (double) or group 2 (single).
pub(crate) const QUOTED: &str = r#"(?:"([^"]+)"|'([^']+)')"#;

/// Build a pattern for `callee("key")`, tolerating whitespace inside the parentheses.
///
/// `callee` is a regex fragment, e.g. `\bt` or `\$t`.
pub(crate) fn call_pattern(callee: &str) -> Regex {
    Regex::new(&format!(r"{callee}\(\s*{QUOTED}\s*\)")).unwrap()
}

/// A key literal found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub key: String,
    /// Column of the key's first character (1-indexed, in chars).
    pub col: usize,
}

/// A source dialect: a set of call patterns naming translation keys.
#[enum_dispatch]
pub trait Extractor {
    /// Call patterns. Each match captures the key in its first participating group.
    fn patterns(&self) -> &'static [Regex];

    /// Keys referenced on a single line, left to right.
    fn match_line(&self, line: &str) -> Vec<KeyMatch> {
        match_patterns(self.patterns(), line)
    }
}

/// Run every pattern over `line` and collect the captured keys.
///
/// Several patterns can match the same call (`this.$t("k")` is also a bare
/// `t("k")` call); matches are keyed by the literal's position so each call
/// site is reported once. Separate calls on the same line are all kept.
pub fn match_patterns(patterns: &[Regex], line: &str) -> Vec<KeyMatch> {
    let mut found: BTreeMap<usize, &str> = BTreeMap::new();

    for pattern in patterns {
        for captures in pattern.captures_iter(line) {
            if let Some(key) = captures.iter().skip(1).flatten().next() {
                found.entry(key.start()).or_insert(key.as_str());
            }
        }
    }

    found
        .into_iter()
        .map(|(start, key)| KeyMatch {
            key: key.to_string(),
            col: line[..start].chars().count() + 1,
        })
        .collect()
}

/// Extract key usages from the text of one source file.
///
/// Every occurrence is kept, including repeats of the same key.
pub fn extract_source(extractor: &impl Extractor, file_path: &str, content: &str) -> FileKeyUsages {
    let mut usages = FileKeyUsages::new();

    for (line_idx, line) in content.lines().enumerate() {
        let matches = extractor.match_line(line);
        if matches.is_empty() {
            continue;
        }

        let source_line = line.trim_end();
        for KeyMatch { key, col } in matches {
            usages.entry(key).or_default().push(Occurrence::new(
                SourceLocation::new(file_path, line_idx + 1, col),
                source_line,
            ));
        }
    }

    usages
}

/// Read a source file and extract its key usages.
pub fn extract_file(extractor: &impl Extractor, path: &Path) -> Result<FileKeyUsages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(extract_source(extractor, &path.to_string_lossy(), &content))
}
