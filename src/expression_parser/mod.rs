pub mod ast;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use ast::{Expr, MemberKey, ObjectKey};
pub use lexer::{ExprToken, ExprTokenKind, Lexer};
pub use parser::Parser;
pub use serializer::serialize;
