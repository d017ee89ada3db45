pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod token;

pub use lexer::{scan, Lexer};
pub use parser::{parse_expression, parse_program, Parser};
pub use resolver::{ExpressionResolver, RpnItem};
pub use token::{Token, TokenKind};
