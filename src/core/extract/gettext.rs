use std::sync::LazyLock;

use regex::Regex;

use super::{Extractor, call_pattern};

// _("greeting"), gettext('user.name')
static GETTEXT_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![call_pattern(r"\b_"), call_pattern(r"\bgettext")]);

/// Python gettext-style calls: `_("key")` and `gettext("key")`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GettextExtractor;

impl Extractor for GettextExtractor {
    fn patterns(&self) -> &'static [Regex] {
        &GETTEXT_PATTERNS
    }
}
