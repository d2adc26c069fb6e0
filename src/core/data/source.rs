use std::collections::BTreeMap;

use serde::Serialize;

/// Pure position information in source code files (PY/JS/TS/VUE).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column of the key literal (1-indexed, in chars).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// One place in source code where a translation key is referenced.
///
/// Created at extraction time and never mutated afterwards. The same key
/// usually collects many occurrences, one per call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    #[serde(flatten)]
    pub location: SourceLocation,
    /// The source line without trailing whitespace; `col` indexes into it.
    pub source_line: String,
}

impl Occurrence {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Keys found in a single source file, each with its occurrences in line order.
pub type FileKeyUsages = BTreeMap<String, Vec<Occurrence>>;

/// Every key referenced in source code, mapped to all of its occurrences.
///
/// Occurrences of a key keep discovery order: files in scan order, then lines
/// within a file. They are never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct UsedKeyIndex {
    entries: BTreeMap<String, Vec<Occurrence>>,
}

impl UsedKeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`.
    pub fn record(&mut self, key: impl Into<String>, occurrence: Occurrence) {
        self.entries.entry(key.into()).or_default().push(occurrence);
    }

    /// Append the usages of one file after everything recorded so far.
    pub fn merge(&mut self, usages: FileKeyUsages) {
        for (key, occurrences) in usages {
            for occurrence in occurrences {
                self.record(key.as_str(), occurrence);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Occurrence]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All used keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Whether any used key lies under `namespace` (`namespace.x` or `namespace[0]`).
    pub fn contains_key_under(&self, namespace: &str) -> bool {
        ['.', '['].into_iter().any(|separator| {
            let prefix = format!("{}{}", namespace, separator);
            self.entries
                .range(prefix.clone()..)
                .next()
                .is_some_and(|(key, _)| key.starts_with(&prefix))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all keys.
    pub fn occurrence_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
