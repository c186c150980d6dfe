//! Template tokens
//!
//! Typed token stream produced by the template lexer. Tokens are immutable
//! once produced: `pos` is the offset where the token started and `frame`
//! is the exact source slice consumed for it.

use serde::{Deserialize, Serialize};

/// Token payloads, one variant per token type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    /// `<name`
    TagOpen { name: String },
    /// `name` or `name="value"` inside an open tag
    Attribute {
        name: String,
        value: Option<String>,
    },
    /// `>` or `/>`
    TagEnd { is_self_closed: bool },
    /// `</name>`
    TagClose { name: String },
    /// `<!-- ... -->`
    Comment { content: String },
    /// `{#name`
    MustacheOpen { name: String },
    /// the `}` closing a directive or interpolation body
    MustacheEnd,
    /// `{/name}`
    MustacheClose { name: String },
    /// `{` opening an interpolation
    InterpolationOpen,
    // expression sub-tokens, emitted only inside a mustache body
    Ident(String),
    Number(f64),
    Str(String),
    Symbol(String),
    Text(String),
    Whitespace(String),
    Eos,
}

impl TokenKind {
    /// Short name used in error messages and test assertions.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::TagOpen { .. } => "tagOpen",
            TokenKind::Attribute { .. } => "attribute",
            TokenKind::TagEnd { .. } => "tagEnd",
            TokenKind::TagClose { .. } => "tagClose",
            TokenKind::Comment { .. } => "comment",
            TokenKind::MustacheOpen { .. } => "mustacheOpen",
            TokenKind::MustacheEnd => "mustacheEnd",
            TokenKind::MustacheClose { .. } => "mustacheClose",
            TokenKind::InterpolationOpen => "interpolationOpen",
            TokenKind::Ident(_) => "ident",
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Text(_) => "text",
            TokenKind::Whitespace(_) => "whitespace",
            TokenKind::Eos => "eos",
        }
    }
}

/// A produced token with its source position and consumed slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(flatten)]
    pub kind: TokenKind,
    pub pos: usize,
    pub frame: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize, frame: String) -> Self {
        Token { kind, pos, frame }
    }

    pub fn is_eos(&self) -> bool {
        matches!(self.kind, TokenKind::Eos)
    }
}
