//! Expression AST
//!
//! Structured form of directive conditions, sequence expressions and
//! interpolation bodies. Every composite node owns its operands; the
//! serializer in this module's sibling renders the canonical source form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Expr {
    Ident(String),
    Number(f64),
    Str(String),
    /// Prefix operator application: `!x`, `~x`, `-x`, `+x`.
    Unary {
        op: String,
        expr: Box<Expr>,
    },
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `test ? consequent : alternate`.
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Member {
        object: Box<Expr>,
        property: MemberKey,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Object {
        entries: Vec<(ObjectKey, Expr)>,
    },
    Array(Vec<Expr>),
    /// Explicit grouping, kept so the serializer reproduces the source
    /// parenthesization.
    Paren(Box<Expr>),
}

/// Property access form: `object.name` or `object[expr]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum MemberKey {
    Dot(String),
    Computed(Box<Expr>),
}

/// Object literal key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ObjectKey {
    Ident(String),
    Str(String),
    Number(f64),
}
