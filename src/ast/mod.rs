// Abstract Syntax Tree definitions for the PL/0 translator
// This module contains all AST node types and related traits.

mod traits;
pub use traits::{AstVisitor, Node};

// AST node modules
mod block;
mod expressions;
mod printer;
mod program;
mod statements;

pub use block::{Block, Procedure};
pub use expressions::{Expr, Operand, Operator};
pub use printer::AstPrinter;
pub use program::Program;
pub use statements::{Condition, RelOp, Statement};
