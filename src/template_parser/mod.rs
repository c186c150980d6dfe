pub mod ast;
pub mod defaults;
pub mod lexer;
pub mod parser;
pub mod tokens;

pub use ast::{Block, Each, If, IfAlternate, Node, Program, Tag, Text};
pub use lexer::Lexer;
pub use parser::Parser;
pub use tokens::{Token, TokenKind};
