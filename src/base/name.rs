//! Identifier and compound-name helpers.

use smol_str::SmolStr;

/// A qualified name split into its segments (`java.util.List` → `[java, util, List]`).
pub type CompoundName = Vec<SmolStr>;

/// Check whether `text` is a single identifier.
///
/// Uses Unicode XID rules plus `$`, which is a legal identifier character in the
/// languages this tree models.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(unicode_ident::is_xid_start(first) || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| unicode_ident::is_xid_continue(c) || c == '$')
}

/// Split a qualified name on any of the given separators, dropping empty segments.
pub fn split_compound(text: &str, separators: &[char]) -> CompoundName {
    text.split(|c| separators.contains(&c))
        .filter(|s| !s.is_empty())
        .map(SmolStr::new)
        .collect()
}
