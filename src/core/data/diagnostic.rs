use std::fmt;

use serde::Serialize;

/// Which stage of the scan a per-file failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A resource file could not be read or is not valid JSON.
    ResourceParse,
    /// A source file could not be read.
    SourceRead,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::ResourceParse => write!(f, "resource-parse"),
            DiagnosticKind::SourceRead => write!(f, "source-read"),
        }
    }
}

/// A non-fatal, per-file failure.
///
/// The file contributes no keys; the scan carries on with the rest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDiagnostic {
    pub file_path: String,
    pub kind: DiagnosticKind,
    pub error: String,
}

impl ScanDiagnostic {
    pub fn resource_parse(file_path: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            file_path: file_path.into(),
            kind: DiagnosticKind::ResourceParse,
            error: format!("{:#}", error),
        }
    }

    pub fn source_read(file_path: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            file_path: file_path.into(),
            kind: DiagnosticKind::SourceRead,
            error: format!("{:#}", error),
        }
    }
}
