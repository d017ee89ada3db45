use crate::ast::{AstVisitor, Node, Statement};
use crate::semantic::symboltable::SymbolTable;
use crate::utils::errors::Pl0Result;

/// A scope: declarations, nested procedures and exactly one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub symbols: SymbolTable,
    pub procedures: Vec<Procedure>,
    pub statement: Statement,
}

impl Block {
    pub fn new(symbols: SymbolTable, procedures: Vec<Procedure>, statement: Statement) -> Self {
        Self {
            symbols,
            procedures,
            statement,
        }
    }

    pub fn procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures.iter().find(|p| p.name == name)
    }

    pub fn node_count(&self) -> usize {
        1 + self.symbols.len()
            + self.procedures.iter().map(Procedure::node_count).sum::<usize>()
            + self.statement.node_count()
    }
}

impl Node for Block {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_block(self)
    }
}

/// A named, zero-argument callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    pub name: String,
    pub block: Block,
}

impl Procedure {
    pub fn new(name: impl Into<String>, block: Block) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.block.node_count()
    }
}

impl Node for Procedure {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_procedure(self)
    }
}
