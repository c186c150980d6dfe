//! Lexical state stack
//!
//! Both lexers thread a stack of named modes through tokenization so a
//! single character stream can switch between markup, directive and
//! expression contexts without ambiguity. The stack is only ever inspected
//! by the lexer that owns it.

use serde::{Deserialize, Serialize};

/// Lexical modes. `Data` is the default outside any tag or directive,
/// `TagOpen` spans `<name` up to the matching `>`, `MustacheOpen` covers a
/// directive or interpolation body, including nested object-literal braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LexState {
    Data,
    TagOpen,
    MustacheOpen,
}

/// Stack of active lexical modes.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    stack: Vec<LexState>,
}

impl StateStack {
    pub fn new() -> Self {
        StateStack { stack: Vec::new() }
    }

    /// Push a mode.
    pub fn enter(&mut self, state: LexState) {
        self.stack.push(state);
    }

    /// Guarded pop: removes the top entry only when it equals `state`.
    /// Returns whether a pop happened, so mismatched enter/leave pairs are
    /// observable rather than silently masked.
    pub fn leave(&mut self, state: LexState) -> bool {
        if self.stack.last() == Some(&state) {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Membership test anywhere in the active stack, not just the top.
    pub fn is(&self, state: LexState) -> bool {
        self.stack.contains(&state)
    }

    pub fn top(&self) -> Option<LexState> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
