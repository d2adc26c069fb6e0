//! Core data types shared by the extraction and reconciliation phases.
//!
//! ## Module Structure
//!
//! - `source`: Used-key side (SourceLocation, Occurrence, UsedKeyIndex)
//! - `message`: Declared-key side (ResourceFile, KeyLocation, DeclaredKeyIndex)
//! - `diagnostic`: Per-file, non-fatal scan failures

pub mod diagnostic;
pub mod message;
pub mod source;

pub use diagnostic::{DiagnosticKind, ScanDiagnostic};
pub use message::{DeclaredKey, DeclaredKeyIndex, KeyKind, KeyLocation, ResourceFile};
pub use source::{FileKeyUsages, Occurrence, SourceLocation, UsedKeyIndex};
