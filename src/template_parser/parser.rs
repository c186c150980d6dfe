//! Template parser
//!
//! Recursive-descent parser over the template lexer's token stream. A
//! statement sequence is bounded by end-of-source or by the enclosing
//! construct's close token, so tag children reuse the same rule with a
//! different stop condition. Directive conditions and interpolation bodies
//! are collected as a flat token run and handed to the expression parser
//! for their structured form.

use indexmap::IndexMap;

use crate::error::{CompileError, ParseError, Result};
use crate::expression_parser::ast::Expr;
use crate::expression_parser::parser::Parser as ExpressionParser;
use crate::ParseOptions;

use super::ast::{Block, Each, If, IfAlternate, Node, Program, Tag, Text};
use super::defaults::is_void_tag;
use super::lexer::Lexer;
use super::tokens::{Token, TokenKind};

/// The block currently receiving statements while an `if` region is open.
/// `else` switches the slot; everything else appends to whichever block is
/// active.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Receiver {
    Consequent,
    Alternate,
}

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: impl Into<String>, options: ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(source, options),
        }
    }

    /// Parse a whole template into a `Program`.
    pub fn parse(&mut self) -> Result<Program> {
        let mut body = Vec::new();
        while !self.peek()?.is_eos() {
            if let Some(node) = self.statement()? {
                body.push(node);
            }
        }
        Ok(Program { body })
    }

    fn peek(&mut self) -> Result<Token> {
        Ok(self.lexer.peek()?)
    }

    fn next(&mut self) -> Result<Token> {
        Ok(self.lexer.next()?)
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while matches!(self.peek()?.kind, TokenKind::Whitespace(_)) {
            self.next()?;
        }
        Ok(())
    }

    fn unexpected(&self, token: &Token, msg: impl Into<String>) -> CompileError {
        ParseError::new(msg, token.kind.name(), token.frame.clone(), token.pos).into()
    }

    /// Dispatch one statement. Comments are consumed and produce no node.
    fn statement(&mut self) -> Result<Option<Node>> {
        let token = self.peek()?;
        match token.kind {
            TokenKind::Text(_) | TokenKind::Whitespace(_) => self.text().map(Some),
            TokenKind::TagOpen { .. } => self.tag().map(Some),
            TokenKind::MustacheOpen { .. } => self.directive().map(Some),
            TokenKind::InterpolationOpen => self.interpolation().map(Some),
            TokenKind::Comment { .. } => {
                self.next()?;
                Ok(None)
            }
            _ => Err(self.unexpected(&token, format!("unexpected token `{}`", token.kind.name()))),
        }
    }

    /// Coalesce a run of consecutive text/whitespace tokens into one node.
    fn text(&mut self) -> Result<Node> {
        let mut value = String::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::Text(ref t) => {
                    value.push_str(t);
                    self.next()?;
                }
                TokenKind::Whitespace(ref w) => {
                    value.push_str(w);
                    self.next()?;
                }
                _ => break,
            }
        }
        Ok(Node::Text(Text { value }))
    }

    fn tag(&mut self) -> Result<Node> {
        let open = self.next()?;
        let name = match open.kind {
            TokenKind::TagOpen { name } => name,
            _ => return Err(self.unexpected(&open, "expected tag open")),
        };

        let mut attributes: IndexMap<String, Option<String>> = IndexMap::new();
        let is_self_closed = loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::Attribute { .. } => {
                    let token = self.next()?;
                    if let TokenKind::Attribute { name, value } = token.kind {
                        // last duplicate wins
                        attributes.insert(name, value);
                    }
                }
                TokenKind::Whitespace(_) => {
                    self.next()?;
                }
                TokenKind::TagEnd { is_self_closed } => {
                    self.next()?;
                    break is_self_closed;
                }
                _ => {
                    return Err(self.unexpected(
                        &token,
                        format!("expected attribute or `>` in tag `<{name}>`"),
                    ))
                }
            }
        };

        if is_self_closed || is_void_tag(&name) {
            return Ok(Node::Tag(Tag {
                name,
                attributes,
                children: Vec::new(),
                is_self_closed: true,
            }));
        }

        let children = self.statements_until(|kind| {
            matches!(kind, TokenKind::TagClose { .. } | TokenKind::Eos)
        })?;

        let close = self.next()?;
        match close.kind {
            TokenKind::TagClose { name: ref close_name } if *close_name == name => {}
            TokenKind::TagClose { name: ref close_name } => {
                return Err(self.unexpected(
                    &close,
                    format!("unmatched close tag: expected `</{name}>`, found `</{close_name}>`"),
                ));
            }
            _ => {
                return Err(self.unexpected(&close, format!("unclosed tag `<{name}>`")));
            }
        }

        Ok(Node::Tag(Tag {
            name,
            attributes,
            children,
            is_self_closed: false,
        }))
    }

    fn statements_until(&mut self, stop: impl Fn(&TokenKind) -> bool) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            let token = self.peek()?;
            if stop(&token.kind) {
                break;
            }
            if let Some(node) = self.statement()? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    /// `{#name ...}` block directives.
    fn directive(&mut self) -> Result<Node> {
        let token = self.next()?;
        let name = match token.kind {
            TokenKind::MustacheOpen { ref name } => name.clone(),
            _ => return Err(self.unexpected(&token, "expected directive open")),
        };
        match name.as_str() {
            "if" => Ok(Node::If(self.if_directive()?)),
            "each" => Ok(Node::Each(self.each_directive()?)),
            _ => Err(self.unexpected(&token, format!("unknown directive `{name}`"))),
        }
    }

    /// Body of an `if` after its open marker was consumed. An `elseif`
    /// recurses into a fresh `if` whose region extends to the single shared
    /// `{/if}` close marker; the chain is therefore right-nested.
    fn if_directive(&mut self) -> Result<If> {
        let test = self.expression(false)?;
        self.expect_mustache_end()?;

        let mut node = If {
            test,
            consequent: Block::default(),
            alternate: None,
        };
        let mut alternate = Block::default();
        let mut receiver = Receiver::Consequent;

        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::MustacheClose { ref name } => {
                    let token = self.next()?;
                    if name != "if" {
                        return Err(self.unexpected(
                            &token,
                            format!("expected `{{/if}}`, found `{{/{name}}}`"),
                        ));
                    }
                    break;
                }
                TokenKind::Eos => {
                    return Err(self.unexpected(&token, "unclosed `{#if}` directive"));
                }
                TokenKind::MustacheOpen { ref name } if name == "elseif" => {
                    if receiver == Receiver::Alternate {
                        let token = self.next()?;
                        return Err(
                            self.unexpected(&token, "`{#elseif}` cannot follow `{#else}`")
                        );
                    }
                    self.next()?;
                    // the nested rule consumes the shared close marker
                    let nested = self.if_directive()?;
                    node.alternate = Some(Box::new(IfAlternate::If(nested)));
                    return Ok(node);
                }
                TokenKind::MustacheOpen { ref name } if name == "else" => {
                    self.next()?;
                    self.expect_mustache_end()?;
                    receiver = Receiver::Alternate;
                }
                _ => {
                    if let Some(stmt) = self.statement()? {
                        match receiver {
                            Receiver::Consequent => node.consequent.body.push(stmt),
                            Receiver::Alternate => alternate.body.push(stmt),
                        }
                    }
                }
            }
        }

        if receiver == Receiver::Alternate {
            node.alternate = Some(Box::new(IfAlternate::Block(alternate)));
        }
        Ok(node)
    }

    /// Body of an `each` after its open marker was consumed:
    /// `sequenceExpr [as item]` then statements up to `{/each}`.
    fn each_directive(&mut self) -> Result<Each> {
        let sequence = self.expression(true)?;

        self.skip_whitespace()?;
        let item = match self.peek()?.kind {
            TokenKind::Ident(ref id) if id == "as" => {
                self.next()?;
                self.skip_whitespace()?;
                let token = self.next()?;
                match token.kind {
                    TokenKind::Ident(name) => Some(name),
                    _ => {
                        return Err(
                            self.unexpected(&token, "expected identifier after `as` in `{#each}`")
                        )
                    }
                }
            }
            _ => None,
        };

        self.expect_mustache_end()?;

        let mut body = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::MustacheClose { ref name } => {
                    let token = self.next()?;
                    if name != "each" {
                        return Err(self.unexpected(
                            &token,
                            format!("expected `{{/each}}`, found `{{/{name}}}`"),
                        ));
                    }
                    break;
                }
                TokenKind::Eos => {
                    return Err(self.unexpected(&token, "unclosed `{#each}` directive"));
                }
                _ => {
                    if let Some(stmt) = self.statement()? {
                        body.push(stmt);
                    }
                }
            }
        }

        Ok(Each {
            sequence,
            item,
            body,
        })
    }

    /// `{ expr }` — the expression node is the statement, unwrapped.
    fn interpolation(&mut self) -> Result<Node> {
        self.next()?; // interpolationOpen
        let value = self.expression(false)?;
        self.expect_mustache_end()?;
        Ok(Node::Expression { value })
    }

    /// Collect the flat run of expression tokens and delegate the structured
    /// parse to the expression grammar. With `stop_at_as` the run ends at
    /// the `as` keyword (the `each` binding separator).
    fn expression(&mut self, stop_at_as: bool) -> Result<Expr> {
        let mut source = String::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                TokenKind::Ident(ref id) if stop_at_as && id == "as" => break,
                TokenKind::Ident(_)
                | TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::Symbol(_)
                | TokenKind::Whitespace(_) => {
                    let token = self.next()?;
                    source.push_str(&token.frame);
                }
                _ => break,
            }
        }

        if source.trim().is_empty() {
            let token = self.peek()?;
            return Err(self.unexpected(&token, "expected expression"));
        }

        ExpressionParser::new(&source).parse()
    }

    fn expect_mustache_end(&mut self) -> Result<()> {
        self.skip_whitespace()?;
        let token = self.next()?;
        match token.kind {
            TokenKind::MustacheEnd => Ok(()),
            _ => Err(self.unexpected(&token, "expected `}`")),
        }
    }
}
