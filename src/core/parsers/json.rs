use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;

use super::locale::extract_locale;
use crate::core::{DeclaredKeyIndex, KeyKind, KeyLocation, ResourceFile, ScanDiagnostic};

/// A key declared by one resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKey {
    /// Dotted key path, e.g. `user.name` or `messages[0]`.
    pub path: String,
    pub kind: KeyKind,
    /// Line number (1-indexed) where the key appears.
    pub line: usize,
}

/// Result of loading every resource file of a scan.
#[derive(Debug, Default)]
pub struct ScanResourcesResult {
    pub declared: DeclaredKeyIndex,
    pub diagnostics: Vec<ScanDiagnostic>,
}

/// Parse a resource document.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Invalid JSON")
}

/// Read, parse and flatten a single resource file.
pub fn parse_resource_file(path: &Path) -> Result<Vec<ResourceKey>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource file: {}", path.display()))?;
    let document = parse_document(&content)
        .with_context(|| format!("Failed to parse resource file: {}", path.display()))?;
    Ok(extract_keys(&document, &content))
}

/// Load all resource files into a declared-key index.
///
/// Files are parsed in parallel but merged in the given order. A file that
/// fails to load contributes nothing and yields a diagnostic instead.
pub fn scan_resource_files(files: &[String]) -> ScanResourcesResult {
    let parsed: Vec<_> = files
        .par_iter()
        .map(|file_path| {
            let keys = parse_resource_file(Path::new(file_path));
            (file_path, keys)
        })
        .collect();

    let mut result = ScanResourcesResult::default();
    for (file_path, keys) in parsed {
        match keys {
            Ok(keys) => {
                let locale = extract_locale(file_path);
                for key in keys {
                    result.declared.declare(
                        key.path,
                        key.kind,
                        KeyLocation::new(file_path.as_str(), locale.as_str(), key.line),
                    );
                }
                result
                    .declared
                    .add_file(ResourceFile::new(file_path.as_str(), locale));
            }
            Err(e) => {
                result
                    .diagnostics
                    .push(ScanDiagnostic::resource_parse(file_path.as_str(), e));
            }
        }
    }
    result
}

/// All dotted key paths reachable from the document root, sorted by path.
///
/// Object children become `parent.child`, array elements become
/// `parent[index]`. Namespace nodes are keys too, so `{"user": {"name": ""}}`
/// yields both `user` and `user.name`. Lines are looked up in `content`, the
/// text `document` was parsed from.
pub fn extract_keys(document: &Value, content: &str) -> Vec<ResourceKey> {
    let mut collector = KeyCollector {
        content,
        line_index: build_line_index(content),
        keys: BTreeMap::new(),
    };
    collector.visit(document, "", 0);
    collector.keys.into_values().collect()
}

fn kind_of(value: &Value) -> KeyKind {
    match value {
        Value::Object(_) | Value::Array(_) => KeyKind::Namespace,
        _ => KeyKind::Leaf,
    }
}

struct KeyCollector<'a> {
    content: &'a str,
    line_index: Vec<usize>,
    keys: BTreeMap<String, ResourceKey>,
}

impl KeyCollector<'_> {
    /// Walk `value`, searching the raw text for keys from byte offset `from`.
    ///
    /// Returns the offset just past the last key or array element found in the
    /// subtree, so the next sibling is searched after it.
    fn visit(&mut self, value: &Value, prefix: &str, from: usize) -> usize {
        let mut cursor = from;
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    // Empty segments are not addressable key paths.
                    if key.is_empty() {
                        continue;
                    }
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    let line = match find_key_offset(self.content, key, cursor) {
                        Some((start, end)) => {
                            cursor = end;
                            offset_to_line(&self.line_index, start)
                        }
                        None => offset_to_line(&self.line_index, cursor),
                    };
                    self.record(&path, kind_of(child), line);
                    cursor = self.visit(child, &path, cursor);
                }
            }
            // A root array has no named parent, so `[0]` would not be a key path.
            Value::Array(_) if prefix.is_empty() => {}
            Value::Array(items) => {
                let mut next = find_array_open(self.content, cursor).map(|open| open + 1);
                for (index, child) in items.iter().enumerate() {
                    let path = format!("{}[{}]", prefix, index);
                    let start = next.and_then(|pos| find_element_start(self.content, pos));
                    let line = offset_to_line(&self.line_index, start.unwrap_or(cursor));
                    self.record(&path, kind_of(child), line);
                    cursor = self.visit(child, &path, start.unwrap_or(cursor));
                    next = start.and_then(|pos| skip_value(self.content, pos));
                    if let Some(end) = next {
                        cursor = cursor.max(end);
                    }
                }
            }
            _ => {}
        }
        cursor
    }

    fn record(&mut self, path: &str, kind: KeyKind, line: usize) {
        // `{"a.b": 1, "a": {"b": 2}}` flattens both to `a.b`; the first one wins the line.
        let entry = self
            .keys
            .entry(path.to_string())
            .or_insert_with(|| ResourceKey {
                path: path.to_string(),
                kind,
                line,
            });
        if kind.is_namespace() {
            entry.kind = KeyKind::Namespace;
        }
    }
}

/// Find `"key"` used as an object key (followed by `:`) at or after `from`.
///
/// Matches inside string values are skipped. Returns the byte range of the
/// quoted key.
fn find_key_offset(content: &str, key: &str, from: usize) -> Option<(usize, usize)> {
    let pattern = serde_json::to_string(key).ok()?;
    let haystack = content.get(from..)?;

    let mut pos = 0;
    while let Some(rel_pos) = haystack[pos..].find(&pattern) {
        let start = pos + rel_pos;
        let end = start + pattern.len();
        if haystack[end..].trim_start().starts_with(':') {
            return Some((from + start, from + end));
        }
        pos = start + 1;
    }
    None
}

/// Offset of the `[` opening an array value at or after `from`, skipping
/// whitespace and the `:` separating it from its key.
fn find_array_open(content: &str, from: usize) -> Option<usize> {
    let rest = content.get(from..)?;
    let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':');
    let offset = from + rest.len() - trimmed.len();
    trimmed.starts_with('[').then_some(offset)
}

/// Offset of the next array element at or after `from`, or `None` at the closing `]`.
fn find_element_start(content: &str, from: usize) -> Option<usize> {
    let rest = content.get(from..)?;
    let trimmed = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
    match trimmed.chars().next() {
        None | Some(']') => None,
        Some(_) => Some(from + rest.len() - trimmed.len()),
    }
}

/// Offset just past the JSON value starting at `start`.
fn skip_value(content: &str, start: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => {
                    in_string = false;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            // Scalars end at the first delimiter.
            b',' | b'}' | b']' if depth == 0 => return Some(i),
            _ if depth == 0 && b.is_ascii_whitespace() => return Some(i),
            _ => {}
        }
    }
    (depth == 0 && !in_string).then_some(bytes.len())
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Convert a byte offset to a 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
