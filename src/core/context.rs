use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;

use crate::core::{
    DeclaredKeyIndex, ScanDiagnostic, UsedKeyIndex,
    error::ScanError,
    extract::{ExtractorRegistry, RESOURCE_EXTENSION, extract_file},
    file_scanner::find_files,
    parsers::json::scan_resource_files,
    reconcile::{Reconciliation, reconcile},
    suggest::{Suggestion, suggest_fixes},
};

/// A discovered source file and the language its extension maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_path: String,
    pub language: &'static str,
}

/// Everything extracted from one scan of a directory tree.
///
/// `ScanContext` runs discovery, resource loading and source extraction once,
/// in that order. Both indexes are complete and immutable afterwards; all
/// later phases (reconciliation, suggestions, reporting) only read them.
///
/// # Pipeline
///
/// 1. **Discovery** → resource files (`.json`) and routed source files
/// 2. **Resource loading** → `declared` (keys, files, locales)
/// 3. **Source extraction** → `used` (keys with every occurrence)
///
/// Per-file failures in 2 and 3 end up in `diagnostics`; only a missing or
/// invalid root stops the scan.
#[derive(Debug)]
pub struct ScanContext {
    /// Directory that was scanned.
    pub root: PathBuf,

    /// Resource files found by discovery, in walk order (parsed or not).
    pub resource_files: Vec<String>,

    /// Source files found by discovery, in walk order.
    pub source_files: Vec<SourceFile>,

    /// Keys referenced in source code.
    pub used: UsedKeyIndex,

    /// Keys declared in resource files.
    pub declared: DeclaredKeyIndex,

    /// Per-file failures, resource files first, each group in walk order.
    pub diagnostics: Vec<ScanDiagnostic>,

    /// Paths discovery could not access.
    pub skipped_paths: Vec<String>,
}

impl ScanContext {
    /// Scan `root` with the given ignore patterns and dialect registry.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if `root` does not exist or is not a directory.
    pub fn scan(root: &Path, ignores: &[String], registry: &ExtractorRegistry) -> Result<Self> {
        Self::ensure_root(root)?;

        // ============================================================
        // 1. Discovery
        // ============================================================
        let discovered = find_files(root, &registry.scanned_extensions(), ignores);

        let mut resource_files = Vec::new();
        let mut routed = Vec::new();
        for file_path in discovered.files {
            if Path::new(&file_path).extension().and_then(|e| e.to_str())
                == Some(RESOURCE_EXTENSION)
            {
                resource_files.push(file_path);
            } else if let Some(route) = registry.route_for(&file_path) {
                routed.push((file_path, *route));
            }
        }

        // ============================================================
        // 2. Resource loading
        // ============================================================
        let resources = scan_resource_files(&resource_files);
        let mut diagnostics = resources.diagnostics;

        // ============================================================
        // 3. Source extraction (parallel read, ordered merge)
        // ============================================================
        let extracted: Vec<_> = routed
            .par_iter()
            .map(|(file_path, route)| {
                (file_path, extract_file(&route.dialect, Path::new(file_path)))
            })
            .collect();

        let mut used = UsedKeyIndex::new();
        for (file_path, usages) in extracted {
            match usages {
                Ok(usages) => used.merge(usages),
                Err(e) => diagnostics.push(ScanDiagnostic::source_read(file_path.as_str(), e)),
            }
        }

        let source_files = routed
            .into_iter()
            .map(|(file_path, route)| SourceFile {
                file_path,
                language: route.language,
            })
            .collect();

        Ok(Self {
            root: root.to_path_buf(),
            resource_files,
            source_files,
            used,
            declared: resources.declared,
            diagnostics,
            skipped_paths: discovered.skipped,
        })
    }

    /// Check that `root` exists and is a directory.
    pub fn ensure_root(root: &Path) -> Result<(), ScanError> {
        if !root.exists() {
            return Err(ScanError::RootMissing(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::RootNotDirectory(root.to_path_buf()));
        }
        Ok(())
    }

    /// Diff used and declared keys.
    pub fn reconcile(&self) -> Reconciliation {
        reconcile(&self.used, &self.declared)
    }

    /// Placeholder entries for `missing_keys`, targeting successfully parsed resource files.
    pub fn suggest(
        &self,
        reconciliation: &Reconciliation,
        default_locale: &str,
    ) -> BTreeMap<String, Suggestion> {
        suggest_fixes(
            &reconciliation.missing_keys,
            self.declared.files(),
            default_locale,
        )
    }

    /// Number of source files per language, in first-seen order.
    pub fn source_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for file in &self.source_files {
            match counts.iter_mut().find(|(language, _)| *language == file.language) {
                Some((_, count)) => *count += 1,
                None => counts.push((file.language, 1)),
            }
        }
        counts
    }
}
