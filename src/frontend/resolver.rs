//! Operator-precedence (shunting-yard) engine.
//!
//! The parser forwards every token of an expression, nested parentheses
//! included, to one [`ExpressionResolver`]. Operands go straight to the
//! postfix queue, operators wait on a stack until something of lower
//! precedence arrives. Once [`ExpressionResolver::complete`] has drained the
//! stack, [`ExpressionResolver::tree`] replays the queue into an [`Expr`].

use crate::ast::{Expr, Operand, Operator};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::{Pl0Error, Pl0Result};

/// Entry of the postfix (reverse Polish) queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnItem {
    Operand(Operand),
    Operator(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackItem {
    Operator(Operator),
    LParen,
}

#[derive(Debug, Default)]
pub struct ExpressionResolver {
    queue: Vec<RpnItem>,
    stack: Vec<StackItem>,
    completed: bool,
    line: usize,
}

impl ExpressionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, token: &Token) -> Pl0Result<()> {
        self.line = token.line;
        match token.kind {
            TokenKind::Ident => {
                self.queue.push(RpnItem::Operand(Operand::Ident(token.text.clone())));
            }
            TokenKind::Number => {
                let value = token.value.ok_or_else(|| {
                    Pl0Error::expression_error(
                        format!("number token '{}' carries no value", token.text),
                        token.line,
                    )
                })?;
                self.queue.push(RpnItem::Operand(Operand::Number(value)));
            }
            TokenKind::LParen => self.stack.push(StackItem::LParen),
            TokenKind::RParen => self.close_paren()?,
            kind => match Operator::from_token_kind(kind) {
                Some(op) => self.push_operator(op),
                None => {
                    return Err(Pl0Error::expression_error(
                        format!("unrecognized operator '{}'", token.lexeme()),
                        token.line,
                    ))
                }
            },
        }
        Ok(())
    }

    fn push_operator(&mut self, op: Operator) {
        // Prefix operators precede their operand, so nothing is ready to pop.
        if !op.is_unary() {
            while let Some(&StackItem::Operator(top)) = self.stack.last() {
                if top.precedence() < op.precedence() {
                    break;
                }
                self.stack.pop();
                self.queue.push(RpnItem::Operator(top));
            }
        }
        self.stack.push(StackItem::Operator(op));
    }

    fn close_paren(&mut self) -> Pl0Result<()> {
        loop {
            match self.stack.pop() {
                Some(StackItem::Operator(op)) => self.queue.push(RpnItem::Operator(op)),
                Some(StackItem::LParen) => return Ok(()),
                None => {
                    return Err(Pl0Error::paren_mismatch(
                        "')' without a matching '('",
                        self.line,
                    ))
                }
            }
        }
    }

    /// Call after the last token has been processed.
    pub fn complete(&mut self) -> Pl0Result<()> {
        while let Some(item) = self.stack.pop() {
            match item {
                StackItem::Operator(op) => self.queue.push(RpnItem::Operator(op)),
                StackItem::LParen => {
                    return Err(Pl0Error::paren_mismatch("'(' is never closed", self.line))
                }
            }
        }
        self.completed = true;
        Ok(())
    }

    /// Postfix form of the expression. Only meaningful after `complete`.
    pub fn rpn(&self) -> &[RpnItem] {
        &self.queue
    }

    /// Rebuilds the operator tree from the postfix queue without consuming it.
    pub fn tree(&self) -> Pl0Result<Expr> {
        if !self.completed {
            return Err(Pl0Error::expression_error(
                "expression resolver was not completed",
                self.line,
            ));
        }

        let mut nodes: Vec<Expr> = Vec::new();
        for item in &self.queue {
            match item {
                RpnItem::Operand(operand) => nodes.push(Expr::Operand(operand.clone())),
                RpnItem::Operator(op) if op.arity() == 1 => {
                    let operand = self.pop_operand(&mut nodes, *op)?;
                    nodes.push(Expr::unary(*op, operand));
                }
                RpnItem::Operator(op) => {
                    // Right operand sits on top; order matters for MINUS and DIV.
                    let right = self.pop_operand(&mut nodes, *op)?;
                    let left = self.pop_operand(&mut nodes, *op)?;
                    nodes.push(Expr::binary(*op, left, right));
                }
            }
        }

        let root = nodes
            .pop()
            .ok_or_else(|| Pl0Error::expression_error("empty expression", self.line))?;
        if !nodes.is_empty() {
            return Err(Pl0Error::expression_error(
                format!("{} operand(s) without an operator", nodes.len()),
                self.line,
            ));
        }
        Ok(root)
    }

    fn pop_operand(&self, nodes: &mut Vec<Expr>, op: Operator) -> Pl0Result<Expr> {
        nodes.pop().ok_or_else(|| {
            Pl0Error::expression_error(format!("missing operand for {}", op), self.line)
        })
    }
}
