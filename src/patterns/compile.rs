//! Pattern compiler with placeholder substitution
//!
//! A base pattern may reference named sub-patterns as `{{NAME}}` tokens;
//! these are textually substituted before the matcher is finalized. An
//! unresolved placeholder is a configuration error and fails here, never at
//! match time.

use once_cell::sync::Lazy;
use regex::Regex;

use super::builtin::builtins;
use crate::error::PatternError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([_\-0-9a-zA-Z]+)\}\}").expect("placeholder pattern"));

/// Substitute placeholders from `map` (merged over the builtins) into
/// `base` and compile the result anchored at the start of input.
pub fn compile(base: &str, map: &[(&str, &str)]) -> Result<Regex, PatternError> {
    let builtin = builtins();

    let mut out = String::with_capacity(base.len() + 16);
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(base) {
        let whole = caps.get(0).expect("capture 0 always present");
        let name = &caps[1];
        let replacement = map
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, sub)| *sub)
            .or_else(|| {
                builtin
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, sub)| sub.as_str())
            })
            .ok_or_else(|| PatternError::UnresolvedPlaceholder(name.to_string()))?;
        out.push_str(&base[last..whole.start()]);
        out.push_str(replacement);
        last = whole.end();
    }
    out.push_str(&base[last..]);

    // every pattern behaves as if prefixed with start-of-string
    Regex::new(&format!("^(?:{out})")).map_err(|e| PatternError::InvalidPattern(e.to_string()))
}
