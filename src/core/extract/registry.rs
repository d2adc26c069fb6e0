//! Dispatch table routing file extensions to extractors.
//!
//! This is the single place that decides which files are scanned and how.
//! Adding a dialect means adding a variant to [`Dialect`] and a route here;
//! reconciliation never looks at dialects.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use super::{GettextExtractor, ScriptExtractor, VueExtractor};

/// Extension of translation resource files.
pub const RESOURCE_EXTENSION: &str = "json";

/// All supported source dialects.
#[enum_dispatch(Extractor)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Gettext(GettextExtractor),
    Script(ScriptExtractor),
    Vue(VueExtractor),
}

/// One routing entry: files with `extension` are read by `dialect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRoute {
    /// Extension without the leading dot.
    pub extension: &'static str,
    /// Language label shown next to occurrences (e.g. "TypeScript").
    pub language: &'static str,
    pub dialect: Dialect,
}

#[derive(Debug, Clone)]
pub struct ExtractorRegistry {
    routes: Vec<SourceRoute>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("py", "Python", GettextExtractor.into());
        registry.register("js", "JavaScript", ScriptExtractor.into());
        registry.register("ts", "TypeScript", ScriptExtractor.into());
        registry.register("vue", "Vue", VueExtractor.into());
        registry
    }
}

impl ExtractorRegistry {
    /// A registry with no routes.
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Route `extension` to `dialect`, replacing any existing route for it.
    pub fn register(&mut self, extension: &'static str, language: &'static str, dialect: Dialect) {
        let route = SourceRoute {
            extension,
            language,
            dialect,
        };
        match self.routes.iter_mut().find(|r| r.extension == extension) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[SourceRoute] {
        &self.routes
    }

    /// Route for a file, chosen by its extension.
    pub fn route_for(&self, path: impl AsRef<Path>) -> Option<&SourceRoute> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.routes.iter().find(|r| r.extension == extension)
    }

    /// Language label for a source file, if its extension is routed.
    pub fn language_for(&self, path: impl AsRef<Path>) -> Option<&'static str> {
        self.route_for(path).map(|r| r.language)
    }

    /// Source extensions plus the resource extension: everything discovery must find.
    pub fn scanned_extensions(&self) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = self.routes.iter().map(|r| r.extension).collect();
        extensions.push(RESOURCE_EXTENSION);
        extensions
    }
}
