//! Placeholder entries for missing keys.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::core::ResourceFile;

/// Prefix of the placeholder value written for a missing key.
pub const MISSING_PLACEHOLDER_PREFIX: &str = "MISSING: ";

/// A proposed resource entry for one missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub key: String,
    /// Resource file that should receive the entry.
    pub target_file: String,
    /// Single-branch JSON object ending in the placeholder value.
    pub fragment: Value,
}

impl Suggestion {
    /// The fragment as pretty JSON with 4-space indentation.
    pub fn fragment_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.fragment
            .serialize(&mut serializer)
            .context("Failed to serialize suggestion")?;
        String::from_utf8(buf).context("Suggestion is not valid UTF-8")
    }
}

/// Pick the resource file a missing key should be added to.
///
/// Prefers `<default_locale>.json`, then the first file in scan order.
pub fn choose_target<'a>(
    files: &'a [ResourceFile],
    default_locale: &str,
) -> Option<&'a ResourceFile> {
    let canonical = format!("{}.json", default_locale);
    files
        .iter()
        .find(|file| {
            Path::new(&file.file_path)
                .file_name()
                .is_some_and(|name| name == canonical.as_str())
        })
        .or_else(|| files.first())
}

/// Build the placeholder fragment for `key`.
///
/// `errors.unexpected` becomes `{"errors": {"unexpected": "MISSING: errors.unexpected"}}`;
/// a key without dots becomes a flat single-entry object.
pub fn build_fragment(key: &str) -> Value {
    let placeholder = Value::String(format!("{}{}", MISSING_PLACEHOLDER_PREFIX, key));
    key.rsplit('.').fold(placeholder, |inner, segment| {
        let mut map = Map::new();
        map.insert(segment.to_string(), inner);
        Value::Object(map)
    })
}

/// One suggestion per missing key, keyed by the missing key.
///
/// Keys get no suggestion when there is no resource file to target.
pub fn suggest_fixes(
    missing_keys: &BTreeSet<String>,
    files: &[ResourceFile],
    default_locale: &str,
) -> BTreeMap<String, Suggestion> {
    let Some(target) = choose_target(files, default_locale) else {
        return BTreeMap::new();
    };

    missing_keys
        .iter()
        .map(|key| {
            let suggestion = Suggestion {
                key: key.clone(),
                target_file: target.file_path.clone(),
                fragment: build_fragment(key),
            };
            (key.clone(), suggestion)
        })
        .collect()
}
