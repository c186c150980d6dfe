//! Template AST
//!
//! Nodes are built bottom-up by the parser and never mutated after
//! construction, except that an open `if` region fills its receiver block
//! incrementally while its body is being parsed. Each node exclusively owns
//! its children; the tree is acyclic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::expression_parser::ast::Expr;

/// Template statement union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Tag(Tag),
    Text(Text),
    If(If),
    Each(Each),
    /// An interpolation: the expression node is the statement itself,
    /// with no extra wrapping.
    Expression { value: Expr },
}

/// Root of a parsed template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

/// `<name attr="v">children</name>`, `<name/>`, or a void tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Insertion-ordered; a duplicate attribute name overwrites in place,
    /// so the last occurrence wins.
    pub attributes: IndexMap<String, Option<String>>,
    pub children: Vec<Node>,
    pub is_self_closed: bool,
}

/// A coalesced run of text and whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

/// `{#if test}...{#elseif ...}...{#else}...{/if}`. An `elseif` chain is
/// represented as a right-nested `If` in `alternate`, not a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub test: Expr,
    pub consequent: Block,
    pub alternate: Option<Box<IfAlternate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum IfAlternate {
    If(If),
    Block(Block),
}

/// `{#each sequence}body{/each}` or `{#each sequence as item}body{/each}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Each {
    pub sequence: Expr,
    pub item: Option<String>,
    pub body: Vec<Node>,
}

/// Statement container used for `if` branches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    pub body: Vec<Node>,
}
