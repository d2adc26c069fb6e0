use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of walking the scan root.
#[derive(Debug, Default)]
pub struct ScanFilesResult {
    /// Matching files in walk order (lexicographic within each directory).
    pub files: Vec<String>,
    /// Paths that could not be accessed, with the reason.
    pub skipped: Vec<String>,
}

/// Find every file under `root` whose extension is in `extensions`.
///
/// The walk is sorted by file name at each level, so the same tree always
/// produces the same sequence.
pub fn find_files(root: &Path, extensions: &[&str], ignore_patterns: &[String]) -> ScanFilesResult {
    let mut result = ScanFilesResult::default();

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            // Invalid patterns are rejected by config validation.
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped.push(e.to_string());
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, extensions) {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        result.files.push(path_str.into_owned());
    }

    result
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
