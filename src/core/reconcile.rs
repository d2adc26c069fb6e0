//! Set reconciliation between used and declared keys.
//!
//! Matching is exact over the key string: no fuzzy matching and no separator
//! normalization, so `user.name` in code never matches a declared `user_name`.

use std::collections::BTreeSet;

use crate::core::{DeclaredKeyIndex, UsedKeyIndex};

/// Keys out of sync between code and resource files, each set in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Used in code, declared in no resource file.
    pub missing_keys: BTreeSet<String>,
    /// Declared in some resource file, never used in code.
    pub unused_keys: BTreeSet<String>,
}

/// Diff the used and declared key namespaces.
///
/// A namespace node (`user` in `{"user": {"name": ""}}`) counts as used when
/// any used key lies under it, so only namespaces whose whole subtree is
/// unreferenced are reported unused.
pub fn reconcile(used: &UsedKeyIndex, declared: &DeclaredKeyIndex) -> Reconciliation {
    let missing_keys = used
        .keys()
        .filter(|key| !declared.contains_key(key))
        .cloned()
        .collect();

    let unused_keys = declared
        .iter()
        .filter(|(key, declared_key)| {
            !used.contains_key(key)
                && (!declared_key.kind.is_namespace() || !used.contains_key_under(key))
        })
        .map(|(key, _)| key.clone())
        .collect();

    Reconciliation {
        missing_keys,
        unused_keys,
    }
}
