use crate::ast::{AstVisitor, Node};
use crate::frontend::token::TokenKind;
use crate::utils::config::resolver::{
    ADDITIVE_PRECEDENCE, MULTIPLICATIVE_PRECEDENCE, UNARY_PRECEDENCE,
};
use crate::utils::errors::Pl0Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    UnaryPlus,
    UnaryMinus,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Operator> {
        match kind {
            TokenKind::UnaryPlus => Some(Operator::UnaryPlus),
            TokenKind::UnaryMinus => Some(Operator::UnaryMinus),
            TokenKind::Plus => Some(Operator::Plus),
            TokenKind::Minus => Some(Operator::Minus),
            TokenKind::Multiply => Some(Operator::Multiply),
            TokenKind::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::UnaryPlus | Operator::UnaryMinus)
    }

    pub fn arity(&self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    /// Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => ADDITIVE_PRECEDENCE,
            Operator::UnaryPlus | Operator::UnaryMinus => UNARY_PRECEDENCE,
            Operator::Multiply | Operator::Divide => MULTIPLICATIVE_PRECEDENCE,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::UnaryPlus | Operator::Plus => "+",
            Operator::UnaryMinus | Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::UnaryPlus => "UNARY_PLUS",
            Operator::UnaryMinus => "UNARY_MINUS",
            Operator::Plus => "PLUS",
            Operator::Minus => "MINUS",
            Operator::Multiply => "MULT",
            Operator::Divide => "DIV",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Number(i64),
    Ident(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Ident(name) => write!(f, "{}", name),
        }
    }
}

/// Precedence-resolved expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Operand(Operand),
    Unary {
        op: Operator,
        operand: Box<Expr>,
    },
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Operand(Operand::Number(value))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Operand(Operand::Ident(name.into()))
    }

    pub fn unary(op: Operator, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Operand(_) => 1,
            Expr::Unary { operand, .. } => 1 + operand.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl Node for Expr {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_expr(self)
    }
}

/// Prefix notation, e.g. `PLUS(1, MULT(2, 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Operand(operand) => write!(f, "{}", operand),
            Expr::Unary { op, operand } => write!(f, "{}({})", op, operand),
            Expr::Binary { op, left, right } => write!(f, "{}({}, {})", op, left, right),
        }
    }
}
