use std::sync::LazyLock;

use regex::Regex;

use super::{Extractor, QUOTED, call_pattern};

static SCRIPT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // t("key")
        call_pattern(r"\bt"),
        // t.rich("key"), t.raw("key")
        call_pattern(r"\bt\.\w+"),
        // t({ key: "key", ... })
        Regex::new(&format!(
            r#"\bt\(\s*\{{(?:[^}}]*,)?\s*["']?key["']?\s*:\s*{QUOTED}[^}}]*\}}\s*\)"#
        ))
        .unwrap(),
        // this.$t("key")
        call_pattern(r"\bthis\.\$t"),
    ]
});

/// JavaScript / TypeScript templating calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptExtractor;

impl Extractor for ScriptExtractor {
    fn patterns(&self) -> &'static [Regex] {
        &SCRIPT_PATTERNS
    }
}
