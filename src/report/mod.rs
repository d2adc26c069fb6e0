//! Format-agnostic report model.
//!
//! The model is assembled once from a finished scan and handed to a renderer
//! (see [`render`]). Both key lists are in lexicographic order; occurrences
//! and declarations keep discovery order.

pub mod render;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{
    KeyKind, KeyLocation, Occurrence, Reconciliation, ScanContext, ScanDiagnostic, Suggestion,
    extract::ExtractorRegistry,
};

pub use render::{Format, render};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub scan_root: String,
    /// Whether suggestions were requested for this run.
    pub fix_mode: bool,
    pub stats: ReportStats,
    pub missing: Vec<MissingKeyEntry>,
    pub unused: Vec<UnusedKeyEntry>,
    pub diagnostics: Vec<ScanDiagnostic>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub source_files: usize,
    pub resource_files: usize,
    pub used_keys: usize,
    pub declared_keys: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyEntry {
    pub key: String,
    pub occurrences: Vec<ReportOccurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

/// An occurrence plus the language label of its file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOccurrence {
    #[serde(flatten)]
    pub occurrence: Occurrence,
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedKeyEntry {
    pub key: String,
    pub kind: KeyKind,
    pub declarations: Vec<KeyLocation>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

/// Assemble the report for a finished scan.
///
/// `suggestions` is `Some` only in fix mode. A missing key without an entry
/// in it (no resource file to target) gets no suggestion.
pub fn build_report(
    ctx: &ScanContext,
    reconciliation: &Reconciliation,
    suggestions: Option<&BTreeMap<String, Suggestion>>,
    registry: &ExtractorRegistry,
) -> Report {
    let missing = reconciliation
        .missing_keys
        .iter()
        .map(|key| {
            let occurrences = ctx
                .used
                .get(key)
                .unwrap_or_default()
                .iter()
                .map(|occurrence| ReportOccurrence {
                    language: registry
                        .language_for(occurrence.file_path())
                        .unwrap_or_default()
                        .to_string(),
                    occurrence: occurrence.clone(),
                })
                .collect();

            MissingKeyEntry {
                key: key.clone(),
                occurrences,
                suggestion: suggestions.and_then(|s| s.get(key)).cloned(),
            }
        })
        .collect();

    let unused = reconciliation
        .unused_keys
        .iter()
        .filter_map(|key| {
            let declared = ctx.declared.get(key)?;
            Some(UnusedKeyEntry {
                key: key.clone(),
                kind: declared.kind,
                declarations: declared.locations.clone(),
            })
        })
        .collect();

    Report {
        scan_root: ctx.root.display().to_string(),
        fix_mode: suggestions.is_some(),
        stats: ReportStats {
            source_files: ctx.source_files.len(),
            resource_files: ctx.resource_files.len(),
            used_keys: ctx.used.len(),
            declared_keys: ctx.declared.len(),
        },
        missing,
        unused,
        diagnostics: ctx.diagnostics.clone(),
    }
}
