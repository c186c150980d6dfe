//! Built-in sub-patterns shared by the top-level lexical patterns.

// https://www.w3.org/TR/1999/REC-xml-names-19990114/#NT-QName
const NCNAME: &str = r"[a-zA-Z_][\w\-\.]*";

/// Name/sub-pattern pairs substituted into `{{NAME}}` placeholders.
pub fn builtins() -> Vec<(&'static str, String)> {
    vec![
        // namespace-qualified XML-style tag name
        ("TAG_NAME", format!(r"(?:{NCNAME}\:)?{NCNAME}")),
        ("IDENT", String::from(r"[\$_a-zA-Z][\$_0-9a-zA-Z]*")),
        // directive/interpolation delimiters
        ("BEGIN", String::from(r"\{")),
        ("END", String::from(r"\}")),
    ]
}
