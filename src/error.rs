//! Error types for the template and expression front ends
//!
//! Every detected violation raises immediately and unwinds to the top-level
//! parse call; there is no local recovery or partial-AST return.

use thiserror::Error;

/// Lexical error: an unexpected character in the current lexical state,
/// e.g. a closing `}` with no matching open context, or text appearing
/// where only markup structure is allowed.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{msg} at offset {pos}\n{code_frame}")]
pub struct LexError {
    pub msg: String,
    pub pos: usize,
    pub frame: String,
    pub code_frame: String,
}

impl LexError {
    pub fn new(msg: impl Into<String>, pos: usize, frame: impl Into<String>, code_frame: String) -> Self {
        LexError {
            msg: msg.into(),
            pos,
            frame: frame.into(),
            code_frame,
        }
    }
}

/// Syntactic error: a token-type mismatch against an expected type, an
/// unmatched open/close tag or directive pair, or an unknown directive name.
/// Carries the offending token's type name, source frame and position.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{msg} (token `{token}`, frame {frame:?}, offset {pos})")]
pub struct ParseError {
    pub msg: String,
    pub token: String,
    pub frame: String,
    pub pos: usize,
}

impl ParseError {
    pub fn new(
        msg: impl Into<String>,
        token: impl Into<String>,
        frame: impl Into<String>,
        pos: usize,
    ) -> Self {
        ParseError {
            msg: msg.into(),
            token: token.into(),
            frame: frame.into(),
            pos,
        }
    }
}

/// Pattern-set configuration error, raised at compile time of a pattern,
/// never at match time.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatternError {
    #[error("unresolved pattern placeholder `{{{{{0}}}}}`")]
    UnresolvedPlaceholder(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Top-level error surface of the crate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T, E = CompileError> = std::result::Result<T, E>;
