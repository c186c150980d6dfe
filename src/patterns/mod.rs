//! Lexical pattern set
//!
//! Named pattern-to-matcher tables used by the template and expression
//! lexers. Compiled once per process and read-only afterwards, so the
//! tables are safe to share across threads.
//!
//! The original grammar leaned on backreferences for quote matching
//! (`(['"])body\1`); the `regex` crate has none, so string and attribute
//! values are expressed as explicit two-quote alternations instead. The
//! capture layout of each pattern is documented next to its definition.

pub mod builtin;
pub mod compile;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub use compile::compile;

/// A named table of anchored matchers.
pub struct PatternSet {
    patterns: Vec<(&'static str, Regex)>,
}

impl PatternSet {
    fn build(entries: &[(&'static str, &str)]) -> Self {
        let patterns = entries
            .iter()
            .map(|(name, base)| {
                let regex = compile(base, &[])
                    .unwrap_or_else(|e| panic!("pattern {name} failed to compile: {e}"));
                (*name, regex)
            })
            .collect();
        PatternSet { patterns }
    }

    /// First capture-group match of the named pattern anchored at the start
    /// of `tail`, or `None`. Unknown names also yield `None`, mirroring the
    /// original table lookup.
    pub fn captures<'t>(&self, name: &str, tail: &'t str) -> Option<Captures<'t>> {
        let (_, regex) = self.patterns.iter().find(|(n, _)| *n == name)?;
        regex.captures(tail)
    }
}

/// Patterns for the template (markup + directive) grammar.
///
/// Capture layout:
/// - `TAG_OPEN`: 1 = tag name
/// - `ATTRIBUTE`: 1 = name, 2 = double-quoted value, 3 = single-quoted
///   value, 4 = unquoted value (2-4 absent when there is no `=`)
/// - `TAG_END`: 1 = `/` for self-closing, empty otherwise
/// - `TAG_CLOSE`: 1 = tag name
/// - `TAG_COMMENT`: 1 = comment body
/// - `MUSTACHE_OPEN` / `MUSTACHE_CLOSE`: 1 = directive name
/// - `MUSTACHE_EXPRESSION_STRING`: 1 = single-quoted body, 2 = double-quoted
pub static TEMPLATE_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::build(&[
        // tag
        ("TAG_OPEN", r"<({{TAG_NAME}})\s*"),
        (
            "ATTRIBUTE",
            r#"([-@:\.0-9a-z\(\)\[\]]+)(?:=(?:"([^"]*?)"|'([^']*?)'|([^\s/>]+)))?\s*"#,
        ),
        ("TAG_END", r"(/?)>"),
        ("TAG_CLOSE", r"</({{TAG_NAME}})>"),
        ("TAG_COMMENT", r"<!--((?s:.)*?)-->"),
        // mustache
        ("MUSTACHE_OPEN", r"{{BEGIN}}#({{IDENT}})\s*"),
        ("MUSTACHE_END", r"{{END}}"),
        ("MUSTACHE_CLOSE", r"{{BEGIN}}/({{IDENT}}){{END}}"),
        ("MUSTACHE_EXPRESSION_OPEN", r"{{BEGIN}}"),
        ("MUSTACHE_EXPRESSION_IDENT", r"({{IDENT}})"),
        (
            "MUSTACHE_EXPRESSION_NUMBER",
            r"((?:\d*\.\d+|\d+)(?:e\d+)?)",
        ),
        (
            "MUSTACHE_EXPRESSION_STRING",
            r#"(?:'([^']*?)'|"([^"]*?)")"#,
        ),
        (
            "MUSTACHE_EXPRESSION_SYMBOL",
            r"([=!]?==|[-=><+*/%!]?=|\|\||&&|[<>\[\]\(\)\-\|\+\*/%?:\.!,])",
        ),
        ("MUSTACHE_EXPRESSION_BRACE_OPEN", r"(\{)"),
        ("MUSTACHE_EXPRESSION_BRACE_END", r"(\})"),
        // others
        ("TEXT", r"[^<{}]+"),
        // single-char fallback for a `<` or `{` that opens nothing
        ("TEXT_CHAR", r"(?s:[^}])"),
        ("WHITESPACE", r"\s+"),
    ])
});

/// Patterns for the standalone expression grammar.
///
/// Multi-character operators are listed before their single-character
/// prefixes so greedy matching picks `===` over `==` over `=`.
pub static EXPRESSION_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::build(&[
        ("IDENT", r"({{IDENT}})"),
        ("STRING", r#"(?:'([^']*?)'|"([^"]*?)")"#),
        ("NUMBER", r"((?:\d*\.\d+|\d+)(?:e\d+)?)"),
        (
            "SYMBOL",
            r"([=!]?==|<=|>=|!=|\|\||&&|[~<>\[\]\(\)\-\|\{}\+\*/%?:\.!,])",
        ),
        ("WHITESPACE", r"\s+"),
        ("UNKNOWN", r"(?s:.)"),
    ])
});
