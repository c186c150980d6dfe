//! Template lexer
//!
//! Tokenizes template source against the tail of unconsumed input. The
//! lexer is context-sensitive: a stack of lexical modes decides which
//! patterns are live at the current position, and a brace-depth marker
//! distinguishes an expression's own `}` from the closing delimiter of the
//! surrounding directive or interpolation.

use smallvec::SmallVec;

use crate::error::LexError;
use crate::parse_util::code_frame;
use crate::patterns::TEMPLATE_PATTERNS;
use crate::state::{LexState, StateStack};
use crate::ParseOptions;

use super::tokens::{Token, TokenKind};

/// Nesting counters carried across token productions. `brace` tracks the
/// depth of literal `{`/`}` inside an expression body.
#[derive(Debug, Clone, Copy, Default)]
struct Marker {
    brace: i32,
}

pub struct Lexer {
    source: String,
    pos: usize,
    #[allow(dead_code)]
    options: ParseOptions,
    stash: SmallVec<[Token; 4]>,
    marker: Marker,
    state: StateStack,
}

impl Lexer {
    pub fn new(source: impl Into<String>, options: ParseOptions) -> Self {
        let mut state = StateStack::new();
        state.enter(LexState::Data);
        Lexer {
            source: source.into(),
            pos: 0,
            options,
            stash: SmallVec::new(),
            marker: Marker::default(),
            state,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn tail(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Consume and return the next token, draining the lookahead buffer
    /// first.
    pub fn next(&mut self) -> Result<Token, LexError> {
        match self.stashed() {
            Some(token) => Ok(token),
            None => self.advance(),
        }
    }

    /// Inspect the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token, LexError> {
        self.lookahead(1)
    }

    /// Inspect the `n`-th upcoming token (1-based) without consuming.
    pub fn lookahead(&mut self, n: usize) -> Result<Token, LexError> {
        while self.stash.len() < n {
            let token = self.advance()?;
            self.stash.push(token);
        }
        Ok(self.stash[n - 1].clone())
    }

    fn stashed(&mut self) -> Option<Token> {
        if self.stash.is_empty() {
            None
        } else {
            Some(self.stash.remove(0))
        }
    }

    fn advance(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let kind = self.scan()?;
        let frame = self.source[start..self.pos].to_string();
        Ok(Token::new(kind, start, frame))
    }

    /// Token production order at the current position; first match wins.
    fn scan(&mut self) -> Result<TokenKind, LexError> {
        if self.tail().is_empty() {
            return Ok(TokenKind::Eos);
        }
        if let Some(kind) = self.whitespace() {
            return Ok(kind);
        }
        if let Some(kind) = self.tag_open() {
            return Ok(kind);
        }
        if let Some(kind) = self.tag_end() {
            return Ok(kind);
        }
        if let Some(kind) = self.tag_close() {
            return Ok(kind);
        }
        if let Some(kind) = self.attribute() {
            return Ok(kind);
        }
        if let Some(kind) = self.mustache_open() {
            return Ok(kind);
        }
        if let Some(kind) = self.mustache_close() {
            return Ok(kind);
        }
        if let Some(kind) = self.interpolation_open() {
            return Ok(kind);
        }
        // expression sub-tokens are only live after entering mustacheOpen
        if let Some(kind) = self.expression()? {
            return Ok(kind);
        }
        if let Some(kind) = self.comment() {
            return Ok(kind);
        }
        self.text()
    }

    fn skip(&mut self, len: usize) {
        self.pos += len;
    }

    fn error(&self, msg: impl Into<String>) -> LexError {
        let frame: String = self.tail().chars().take(1).collect();
        LexError::new(msg, self.pos, frame, code_frame(&self.source, self.pos))
    }

    fn whitespace(&mut self) -> Option<TokenKind> {
        let len = TEMPLATE_PATTERNS.captures("WHITESPACE", self.tail())?[0].len();
        let value = self.tail()[..len].to_string();
        self.skip(len);
        Some(TokenKind::Whitespace(value))
    }

    fn comment(&mut self) -> Option<TokenKind> {
        let (len, content) = {
            let caps = TEMPLATE_PATTERNS.captures("TAG_COMMENT", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        Some(TokenKind::Comment { content })
    }

    fn tag_open(&mut self) -> Option<TokenKind> {
        let (len, name) = {
            let caps = TEMPLATE_PATTERNS.captures("TAG_OPEN", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        self.state.enter(LexState::TagOpen);
        Some(TokenKind::TagOpen { name })
    }

    fn attribute(&mut self) -> Option<TokenKind> {
        if !self.state.is(LexState::TagOpen) {
            return None;
        }
        let (len, name, value) = {
            let caps = TEMPLATE_PATTERNS.captures("ATTRIBUTE", self.tail())?;
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string());
            (caps[0].len(), caps[1].to_string(), value)
        };
        self.skip(len);
        Some(TokenKind::Attribute { name, value })
    }

    fn tag_end(&mut self) -> Option<TokenKind> {
        let (len, is_self_closed) = {
            let caps = TEMPLATE_PATTERNS.captures("TAG_END", self.tail())?;
            (caps[0].len(), !caps[1].is_empty())
        };
        self.skip(len);
        self.state.leave(LexState::TagOpen);
        Some(TokenKind::TagEnd { is_self_closed })
    }

    fn tag_close(&mut self) -> Option<TokenKind> {
        let (len, name) = {
            let caps = TEMPLATE_PATTERNS.captures("TAG_CLOSE", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        Some(TokenKind::TagClose { name })
    }

    fn mustache_open(&mut self) -> Option<TokenKind> {
        let (len, name) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_OPEN", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        self.state.enter(LexState::MustacheOpen);
        Some(TokenKind::MustacheOpen { name })
    }

    fn mustache_end(&mut self) -> Option<TokenKind> {
        if !self.state.is(LexState::MustacheOpen) {
            return None;
        }
        let len = TEMPLATE_PATTERNS.captures("MUSTACHE_END", self.tail())?[0].len();
        self.skip(len);
        self.state.leave(LexState::MustacheOpen);
        self.marker = Marker::default();
        Some(TokenKind::MustacheEnd)
    }

    fn mustache_close(&mut self) -> Option<TokenKind> {
        let (len, name) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_CLOSE", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        Some(TokenKind::MustacheClose { name })
    }

    fn interpolation_open(&mut self) -> Option<TokenKind> {
        // a bare `{` inside an open tag or another mustache body never
        // opens an interpolation
        if self.state.is(LexState::TagOpen) || self.state.is(LexState::MustacheOpen) {
            return None;
        }
        let len = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_OPEN", self.tail())?[0].len();
        self.skip(len);
        self.state.enter(LexState::MustacheOpen);
        Some(TokenKind::InterpolationOpen)
    }

    fn expression(&mut self) -> Result<Option<TokenKind>, LexError> {
        if !self.state.is(LexState::MustacheOpen) {
            return Ok(None);
        }
        if let Some(kind) = self.ident() {
            return Ok(Some(kind));
        }
        if let Some(kind) = self.number() {
            return Ok(Some(kind));
        }
        if let Some(kind) = self.string() {
            return Ok(Some(kind));
        }
        if let Some(kind) = self.symbol() {
            return Ok(Some(kind));
        }
        self.brace()
    }

    fn ident(&mut self) -> Option<TokenKind> {
        let (len, ident) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_IDENT", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        Some(TokenKind::Ident(ident))
    }

    fn number(&mut self) -> Option<TokenKind> {
        let (len, value) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_NUMBER", self.tail())?;
            (caps[0].len(), caps[1].parse::<f64>().ok()?)
        };
        self.skip(len);
        Some(TokenKind::Number(value))
    }

    fn string(&mut self) -> Option<TokenKind> {
        let (len, value) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_STRING", self.tail())?;
            let body = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (caps[0].len(), body)
        };
        self.skip(len);
        Some(TokenKind::Str(value))
    }

    fn symbol(&mut self) -> Option<TokenKind> {
        let (len, symbol) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_SYMBOL", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        Some(TokenKind::Symbol(symbol))
    }

    fn brace(&mut self) -> Result<Option<TokenKind>, LexError> {
        if let Some(kind) = self.brace_open() {
            return Ok(Some(kind));
        }
        self.brace_end()
    }

    fn brace_open(&mut self) -> Option<TokenKind> {
        let (len, symbol) = {
            let caps = TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_BRACE_OPEN", self.tail())?;
            (caps[0].len(), caps[1].to_string())
        };
        self.skip(len);
        self.marker.brace += 1;
        Some(TokenKind::Symbol(symbol))
    }

    fn brace_end(&mut self) -> Result<Option<TokenKind>, LexError> {
        let (len, symbol) = {
            let caps = match TEMPLATE_PATTERNS.captures("MUSTACHE_EXPRESSION_BRACE_END", self.tail())
            {
                Some(caps) => caps,
                None => return Ok(None),
            };
            (caps[0].len(), caps[1].to_string())
        };
        self.marker.brace -= 1;

        if self.marker.brace >= 0 {
            // closes a nested object literal
            self.skip(len);
            return Ok(Some(TokenKind::Symbol(symbol)));
        }

        // below depth zero this `}` must be the directive's own delimiter
        match self.mustache_end() {
            Some(kind) => Ok(Some(kind)),
            None => Err(self.error("unexpected close brace `}`")),
        }
    }

    fn text(&mut self) -> Result<TokenKind, LexError> {
        let len = match TEMPLATE_PATTERNS.captures("TEXT", self.tail()) {
            Some(caps) => caps[0].len(),
            None => match TEMPLATE_PATTERNS.captures("TEXT_CHAR", self.tail()) {
                Some(caps) => caps[0].len(),
                None => return Err(self.error("unexpected close brace `}`")),
            },
        };
        if self.state.is(LexState::TagOpen) || self.state.is(LexState::MustacheOpen) {
            return Err(self.error("text appears in unexpected state"));
        }
        let value = self.tail()[..len].to_string();
        self.skip(len);
        Ok(TokenKind::Text(value))
    }
}
