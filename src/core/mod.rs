//! Key extraction and reconciliation engine.
//!
//! ## Module Structure
//!
//! - `data`: Used-key and declared-key indexes, per-file diagnostics
//! - `parsers`: Resource document flattening and locale inference
//! - `extract`: Per-dialect key extractors and the extension registry
//! - `file_scanner`: Deterministic directory walk with ignore globs
//! - `context`: Scan orchestration (discovery, loading, extraction)
//! - `reconcile`: Missing/unused key sets
//! - `suggest`: Placeholder entries for missing keys

pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod reconcile;
pub mod suggest;

pub use context::{ScanContext, SourceFile};
pub use data::*;
pub use error::ScanError;
pub use reconcile::Reconciliation;
pub use suggest::Suggestion;
