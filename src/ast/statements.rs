use crate::ast::{AstVisitor, Expr, Node};
use crate::frontend::token::TokenKind;
use crate::utils::errors::Pl0Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Compound(Vec<Statement>),
    Assignment { identifier: String, expr: Expr },
    Call(String),
    Write(Expr),
    IfThen { condition: Condition, body: Box<Statement> },
    While { condition: Condition, body: Box<Statement> },
}

impl Statement {
    pub fn node_count(&self) -> usize {
        match self {
            Statement::Compound(stmts) => 1 + stmts.iter().map(Statement::node_count).sum::<usize>(),
            Statement::Assignment { expr, .. } => 1 + expr.node_count(),
            Statement::Call(_) => 1,
            Statement::Write(expr) => 1 + expr.node_count(),
            Statement::IfThen { condition, body } | Statement::While { condition, body } => {
                1 + condition.node_count() + body.node_count()
            }
        }
    }
}

impl Node for Statement {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_statement(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<RelOp> {
        match kind {
            TokenKind::Equal => Some(RelOp::Eq),
            TokenKind::Hash => Some(RelOp::Ne),
            TokenKind::LessThan => Some(RelOp::Lt),
            TokenKind::LessThanEqual => Some(RelOp::Le),
            TokenKind::GreaterThan => Some(RelOp::Gt),
            TokenKind::GreaterThanEqual => Some(RelOp::Ge),
            _ => None,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelOp::Eq => "EQ",
            RelOp::Ne => "NE",
            RelOp::Lt => "LT",
            RelOp::Le => "LE",
            RelOp::Gt => "GT",
            RelOp::Ge => "GE",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Odd(Expr),
    Comparison { op: RelOp, left: Expr, right: Expr },
}

impl Condition {
    pub fn node_count(&self) -> usize {
        match self {
            Condition::Odd(expr) => 1 + expr.node_count(),
            Condition::Comparison { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl Node for Condition {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_condition(self)
    }
}
