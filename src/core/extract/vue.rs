use std::sync::LazyLock;

use regex::Regex;

use super::{Extractor, call_pattern};

static VUE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // {{ $t("key") }}
        call_pattern(r"\$t"),
        // t("key") from useI18n()
        call_pattern(r"\bt"),
        // i18n.t("key")
        call_pattern(r"\bi18n\.t"),
    ]
});

/// Vue single-file component calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VueExtractor;

impl Extractor for VueExtractor {
    fn patterns(&self) -> &'static [Regex] {
        &VUE_PATTERNS
    }
}
