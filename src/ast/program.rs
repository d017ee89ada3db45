use crate::ast::{AstVisitor, Block, Node};
use crate::utils::errors::Pl0Result;

/// Root of a compilation unit: `program = block "." .`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub block: Block,
}

impl Program {
    pub fn new(block: Block) -> Self {
        Self { block }
    }

    pub fn node_count(&self) -> usize {
        1 + self.block.node_count()
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> Pl0Result<()> {
        visitor.visit_program(self)
    }
}
