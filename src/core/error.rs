use std::path::PathBuf;

use thiserror::Error;

/// Conditions that stop a scan before any file is read.
///
/// Everything that goes wrong with an individual file is reported as a
/// [`ScanDiagnostic`](crate::core::ScanDiagnostic) instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{}' does not exist", .0.display())]
    RootMissing(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}
