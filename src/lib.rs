//! Template compiler front end: a context-sensitive template lexer and
//! recursive-descent parser for an HTML-like template language with
//! mustache directives (`{#if}`, `{#each}`) and `{ expr }` interpolation,
//! plus a standalone precedence-climbing parser for the embedded
//! expression grammar.
//!
//! ```
//! use mustache_compiler::{parse, ParseOptions};
//!
//! let program = parse("<p>{ user.name }</p>", ParseOptions::default()).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

pub mod error;
pub mod expression_parser;
pub mod parse_util;
pub mod patterns;
pub mod state;
pub mod template_parser;

pub use error::{CompileError, LexError, ParseError, PatternError, Result};
pub use expression_parser::ast::Expr;
pub use template_parser::ast::{Node, Program};

/// Knobs for a parse run. Currently carries no options; it exists so the
/// entry points keep a stable signature as configuration grows.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {}

/// Parse a template into its `Program` tree.
pub fn parse(source: &str, options: ParseOptions) -> Result<Program> {
    template_parser::parser::Parser::new(source, options).parse()
}

/// Parse a standalone expression, e.g. a directive condition on its own.
pub fn parse_expression(source: &str) -> Result<Expr> {
    expression_parser::parser::Parser::new(source).parse()
}
