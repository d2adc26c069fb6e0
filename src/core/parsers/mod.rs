//! Parsers for translation resource files.
//!
//! - `json`: JSON resource flattening into dotted key paths
//! - `locale`: Locale inference from resource file paths

pub mod json;
pub mod locale;
