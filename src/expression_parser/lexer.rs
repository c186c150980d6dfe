//! Expression lexer
//!
//! Standalone tokenizer for the JavaScript-like expression grammar used by
//! directive conditions and interpolation bodies. Whitespace is consumed
//! but never surfaces to the parser. Unrecognized characters become
//! `unknown` tokens instead of failing here; rejecting them is the
//! parser's job, so this lexer is total.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::patterns::EXPRESSION_PATTERNS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ExprTokenKind {
    Ident(String),
    Number(f64),
    Str(String),
    Symbol(String),
    Unknown(String),
    Eos,
}

impl ExprTokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            ExprTokenKind::Ident(_) => "ident",
            ExprTokenKind::Number(_) => "number",
            ExprTokenKind::Str(_) => "string",
            ExprTokenKind::Symbol(_) => "symbol",
            ExprTokenKind::Unknown(_) => "unknown",
            ExprTokenKind::Eos => "eos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprToken {
    #[serde(flatten)]
    pub kind: ExprTokenKind,
    pub pos: usize,
    pub frame: String,
}

impl ExprToken {
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, ExprTokenKind::Symbol(ref s) if s == symbol)
    }

    pub fn is_eos(&self) -> bool {
        matches!(self.kind, ExprTokenKind::Eos)
    }
}

pub struct Lexer {
    source: String,
    pos: usize,
    stash: SmallVec<[ExprToken; 4]>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Self {
        Lexer {
            source: source.into(),
            pos: 0,
            stash: SmallVec::new(),
        }
    }

    fn tail(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn next(&mut self) -> ExprToken {
        if self.stash.is_empty() {
            self.advance()
        } else {
            self.stash.remove(0)
        }
    }

    pub fn peek(&mut self) -> ExprToken {
        self.lookahead(1)
    }

    pub fn lookahead(&mut self, n: usize) -> ExprToken {
        while self.stash.len() < n {
            let token = self.advance();
            self.stash.push(token);
        }
        self.stash[n - 1].clone()
    }

    fn advance(&mut self) -> ExprToken {
        // whitespace never surfaces to the parser
        if let Some(caps) = EXPRESSION_PATTERNS.captures("WHITESPACE", self.tail()) {
            let len = caps[0].len();
            self.pos += len;
        }

        let start = self.pos;
        let kind = self.scan();
        let frame = self.source[start..self.pos].to_string();
        ExprToken {
            kind,
            pos: start,
            frame,
        }
    }

    fn scan(&mut self) -> ExprTokenKind {
        if self.tail().is_empty() {
            return ExprTokenKind::Eos;
        }
        if let Some(kind) = self.string() {
            return kind;
        }
        if let Some(kind) = self.ident() {
            return kind;
        }
        if let Some(kind) = self.number() {
            return kind;
        }
        if let Some(kind) = self.symbol() {
            return kind;
        }
        self.unknown()
    }

    fn string(&mut self) -> Option<ExprTokenKind> {
        let (len, body) = {
            let caps = EXPRESSION_PATTERNS.captures("STRING", self.tail())?;
            let body = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (caps[0].len(), body)
        };
        self.pos += len;
        Some(ExprTokenKind::Str(body))
    }

    fn ident(&mut self) -> Option<ExprTokenKind> {
        let (len, ident) = {
            let caps = EXPRESSION_PATTERNS.captures("IDENT", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.pos += len;
        Some(ExprTokenKind::Ident(ident))
    }

    fn number(&mut self) -> Option<ExprTokenKind> {
        let (len, value) = {
            let caps = EXPRESSION_PATTERNS.captures("NUMBER", self.tail())?;
            (caps[0].len(), caps[1].parse::<f64>().ok()?)
        };
        self.pos += len;
        Some(ExprTokenKind::Number(value))
    }

    fn symbol(&mut self) -> Option<ExprTokenKind> {
        let (len, symbol) = {
            let caps = EXPRESSION_PATTERNS.captures("SYMBOL", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.pos += len;
        Some(ExprTokenKind::Symbol(symbol))
    }

    fn unknown(&mut self) -> ExprTokenKind {
        let len = self
            .tail()
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        let content = self.tail()[..len].to_string();
        self.pos += len;
        ExprTokenKind::Unknown(content)
    }
}
