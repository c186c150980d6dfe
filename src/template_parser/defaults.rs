//! Default template grammar configuration.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Markup elements that never have children and never take a close tag.
pub static VOID_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(name)
}
