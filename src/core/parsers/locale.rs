//! Best-effort locale inference for resource files.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

/// Returned when neither the file name nor any ancestor directory looks like a locale.
pub const UNKNOWN_LOCALE: &str = "unknown";

// "en.json", "en_US.json", "en.messages.json" -> "en"
static FILE_LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]{2})(?:_[A-Z]{2})?\.").unwrap());

// "fr", "pt_BR"
static DIR_LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(?:_[A-Z]{2})?$").unwrap());

/// Infer the locale of a resource file from its path.
///
/// 1. A file name starting with a language code (`en.json`, `en_US.json`)
///    yields the language code alone.
/// 2. Otherwise the nearest ancestor directory named like a locale
///    (`fr/`, `pt_BR/`) yields the directory name.
/// 3. Otherwise [`UNKNOWN_LOCALE`].
///
/// # Examples
///
/// ```
/// use keyscan::core::parsers::locale::extract_locale;
///
/// assert_eq!(extract_locale("locales/en.json"), "en");
/// assert_eq!(extract_locale("locales/fr/messages.json"), "fr");
/// assert_eq!(extract_locale("notes.txt"), "unknown");
/// ```
pub fn extract_locale(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    if let Some(captures) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| FILE_LOCALE_REGEX.captures(name))
        && let Some(code) = captures.get(1)
    {
        return code.as_str().to_string();
    }

    path.parent()
        .into_iter()
        .flat_map(Path::ancestors)
        .filter_map(|dir| dir.file_name().and_then(|name| name.to_str()))
        .find(|name| DIR_LOCALE_REGEX.is_match(name))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_LOCALE.to_string())
}
