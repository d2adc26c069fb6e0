use std::collections::BTreeMap;

use serde::Serialize;

/// Shape of the JSON node a declared key points at.
///
/// Translation catalogs nest namespaces, so object and array nodes are keys
/// too, not just scalar leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// A scalar value: `"submit": "Submit"`
    Leaf,
    /// An object or array holding further keys: `"user": { ... }`
    Namespace,
}

impl KeyKind {
    pub fn is_namespace(self) -> bool {
        matches!(self, KeyKind::Namespace)
    }
}

/// A translation resource file and the locale inferred from its path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFile {
    pub file_path: String,
    pub locale: String,
}

impl ResourceFile {
    pub fn new(file_path: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            locale: locale.into(),
        }
    }
}

/// Where a key is declared: resource file, inferred locale and line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyLocation {
    pub file_path: String,
    pub locale: String,
    /// Line number (1-indexed) of the key inside the resource file.
    pub line: usize,
}

impl KeyLocation {
    pub fn new(file_path: impl Into<String>, locale: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            locale: locale.into(),
            line,
        }
    }
}

/// All declarations of one key across resource files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredKey {
    /// `Namespace` if any file declares the key as an object or array.
    pub kind: KeyKind,
    /// Declarations in resource scan order.
    pub locations: Vec<KeyLocation>,
}

/// Every key declared in any resource file.
///
/// Presence is OR-ed across files: a key exists if it is declared anywhere,
/// and every declaring file is retained.
#[derive(Debug, Clone, Default)]
pub struct DeclaredKeyIndex {
    entries: BTreeMap<String, DeclaredKey>,
    files: Vec<ResourceFile>,
}

impl DeclaredKeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource file that parsed successfully.
    pub fn add_file(&mut self, file: ResourceFile) {
        self.files.push(file);
    }

    /// Record one declaration of `key`.
    pub fn declare(&mut self, key: impl Into<String>, kind: KeyKind, location: KeyLocation) {
        let entry = self.entries.entry(key.into()).or_insert(DeclaredKey {
            kind,
            locations: Vec::new(),
        });
        if kind.is_namespace() {
            entry.kind = KeyKind::Namespace;
        }
        entry.locations.push(location);
    }

    pub fn get(&self, key: &str) -> Option<&DeclaredKey> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All declared keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DeclaredKey)> {
        self.entries.iter()
    }

    /// Resource files that contributed declarations, in scan order.
    pub fn files(&self) -> &[ResourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
