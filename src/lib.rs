//! keyscan - missing and unused i18n key checker
//!
//! keyscan walks a project, collects the translation keys its Python,
//! JavaScript, TypeScript and Vue sources reference, flattens the keys its
//! JSON resource files declare, and reports which keys are missing (used but
//! never declared) and which are unused (declared but never referenced).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and reconciliation engine
//! - `report`: Report model and txt/html/json renderers

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
