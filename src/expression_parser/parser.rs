//! Expression parser
//!
//! Recursive-descent over the expression token stream, one method per
//! precedence tier. Binary tiers loop on their own operators, so chains
//! like `a - b - c` associate to the left; the conditional tier recurses
//! on its alternate and is right-associative.
//!
//! Tiers, loosest to tightest: conditional, `||`, `&&`, comparison
//! (`=== !== == != <= >= < >`), additive, multiplicative, unary,
//! member/call postfix, primary.

use crate::error::{CompileError, ParseError, Result};

use super::ast::{Expr, MemberKey, ObjectKey};
use super::lexer::{ExprToken, ExprTokenKind, Lexer};

pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(source: impl Into<String>) -> Self {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    /// Parse the whole source as a single expression. Trailing tokens are
    /// an error.
    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.conditional()?;
        let token = self.lexer.next();
        if !token.is_eos() {
            return Err(self.unexpected(&token, format!("unexpected token `{}`", token.frame)));
        }
        Ok(expr)
    }

    fn unexpected(&self, token: &ExprToken, msg: impl Into<String>) -> CompileError {
        ParseError::new(msg, token.kind.name(), token.frame.clone(), token.pos).into()
    }

    fn expect_symbol(&mut self, symbol: &str) -> Result<()> {
        let token = self.lexer.next();
        if token.is_symbol(symbol) {
            Ok(())
        } else {
            Err(self.unexpected(&token, format!("expected `{symbol}`")))
        }
    }

    fn conditional(&mut self) -> Result<Expr> {
        let test = self.or()?;
        if !self.lexer.peek().is_symbol("?") {
            return Ok(test);
        }
        self.lexer.next();
        let consequent = self.conditional()?;
        self.expect_symbol(":")?;
        let alternate = self.conditional()?;
        Ok(Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    fn or(&mut self) -> Result<Expr> {
        let mut left = self.and()?;
        while self.lexer.peek().is_symbol("||") {
            self.lexer.next();
            let right = self.and()?;
            left = Expr::Binary {
                op: "||".to_string(),
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Expr> {
        let mut left = self.comparison()?;
        while self.lexer.peek().is_symbol("&&") {
            self.lexer.next();
            let right = self.comparison()?;
            left = Expr::Binary {
                op: "&&".to_string(),
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Expr> {
        const OPS: &[&str] = &["===", "!==", "==", "!=", "<=", ">=", "<", ">"];
        let mut left = self.additive()?;
        while let Some(op) = self.match_op(OPS) {
            let right = self.additive()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expr> {
        let mut left = self.multiplicative()?;
        while let Some(op) = self.match_op(&["+", "-"]) {
            let right = self.multiplicative()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Expr> {
        let mut left = self.unary()?;
        while let Some(op) = self.match_op(&["*", "/", "%"]) {
            let right = self.unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Consume the next token if it is one of the given operator symbols.
    fn match_op(&mut self, ops: &[&str]) -> Option<String> {
        let token = self.lexer.peek();
        if let ExprTokenKind::Symbol(ref s) = token.kind {
            if ops.contains(&s.as_str()) {
                let op = s.clone();
                self.lexer.next();
                return Some(op);
            }
        }
        None
    }

    fn unary(&mut self) -> Result<Expr> {
        if let Some(op) = self.match_op(&["!", "~", "+", "-"]) {
            let expr = self.unary()?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(expr),
            });
        }
        self.postfix()
    }

    /// Member access and call chains: `a.b[c](d).e`.
    fn postfix(&mut self) -> Result<Expr> {
        let mut expr = self.primary()?;
        loop {
            let token = self.lexer.peek();
            if token.is_symbol(".") {
                self.lexer.next();
                let token = self.lexer.next();
                let name = match token.kind {
                    ExprTokenKind::Ident(name) => name,
                    _ => return Err(self.unexpected(&token, "expected property name after `.`")),
                };
                expr = Expr::Member {
                    object: Box::new(expr),
                    property: MemberKey::Dot(name),
                };
            } else if token.is_symbol("[") {
                self.lexer.next();
                let key = self.conditional()?;
                self.expect_symbol("]")?;
                expr = Expr::Member {
                    object: Box::new(expr),
                    property: MemberKey::Computed(Box::new(key)),
                };
            } else if token.is_symbol("(") {
                self.lexer.next();
                let args = self.arguments()?;
                expr = Expr::Call {
                    callee: Box::new(expr),
                    args,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Comma-separated argument list; the opening `(` is already consumed.
    fn arguments(&mut self) -> Result<Vec<Expr>> {
        let mut args = Vec::new();
        if self.lexer.peek().is_symbol(")") {
            self.lexer.next();
            return Ok(args);
        }
        loop {
            args.push(self.conditional()?);
            let token = self.lexer.next();
            if token.is_symbol(",") {
                continue;
            }
            if token.is_symbol(")") {
                break;
            }
            return Err(self.unexpected(&token, "expected `,` or `)` in argument list"));
        }
        Ok(args)
    }

    fn primary(&mut self) -> Result<Expr> {
        let token = self.lexer.next();
        match token.kind {
            ExprTokenKind::Str(value) => Ok(Expr::Str(value)),
            ExprTokenKind::Number(value) => Ok(Expr::Number(value)),
            ExprTokenKind::Ident(name) => Ok(Expr::Ident(name)),
            ExprTokenKind::Symbol(ref s) if s == "{" => self.object(),
            ExprTokenKind::Symbol(ref s) if s == "[" => self.array(),
            ExprTokenKind::Symbol(ref s) if s == "(" => {
                let inner = self.conditional()?;
                self.expect_symbol(")")?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            ExprTokenKind::Eos => Err(self.unexpected(&token, "unexpected end of expression")),
            _ => Err(self.unexpected(&token, format!("unexpected token `{}`", token.frame))),
        }
    }

    /// Object literal body; the opening `{` is already consumed. Keys are
    /// identifiers, strings or numbers; a trailing comma is allowed.
    fn object(&mut self) -> Result<Expr> {
        let mut entries = Vec::new();
        loop {
            if self.lexer.peek().is_symbol("}") {
                self.lexer.next();
                break;
            }
            let token = self.lexer.next();
            let key = match token.kind {
                ExprTokenKind::Ident(name) => ObjectKey::Ident(name),
                ExprTokenKind::Str(value) => ObjectKey::Str(value),
                ExprTokenKind::Number(value) => ObjectKey::Number(value),
                _ => return Err(self.unexpected(&token, "expected object key")),
            };
            self.expect_symbol(":")?;
            let value = self.conditional()?;
            entries.push((key, value));

            let token = self.lexer.peek();
            if token.is_symbol(",") {
                self.lexer.next();
            } else if !token.is_symbol("}") {
                return Err(self.unexpected(&token, "expected `,` or `}` in object literal"));
            }
        }
        Ok(Expr::Object { entries })
    }

    /// Array literal body; the opening `[` is already consumed. A trailing
    /// comma is allowed.
    fn array(&mut self) -> Result<Expr> {
        let mut elements = Vec::new();
        loop {
            if self.lexer.peek().is_symbol("]") {
                self.lexer.next();
                break;
            }
            elements.push(self.conditional()?);

            let token = self.lexer.peek();
            if token.is_symbol(",") {
                self.lexer.next();
            } else if !token.is_symbol("]") {
                return Err(self.unexpected(&token, "expected `,` or `]` in array literal"));
            }
        }
        Ok(Expr::Array(elements))
    }
}
