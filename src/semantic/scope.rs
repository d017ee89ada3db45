use crate::ast::{Block, Procedure};
use crate::semantic::symboltable::{Symbol, SymbolType};

/// What a name refers to once resolved through the scope chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    Symbol(&'a Symbol),
    Procedure(&'a Procedure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub binding: Binding<'a>,
    /// Number of blocks walked outwards to find the declaration.
    pub distance: usize,
}

impl<'a> Resolved<'a> {
    pub fn describe(&self) -> String {
        let kind = match self.binding {
            Binding::Symbol(symbol) => match symbol.symbol_type {
                SymbolType::Constant(value) => format!("const = {}", value),
                SymbolType::Variable => "var".to_string(),
            },
            Binding::Procedure(_) => "procedure".to_string(),
        };
        format!("{}, distance {}", kind, self.distance)
    }
}

/// Lexical scope chain: each link is a block plus the link of its enclosing block.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    block: &'a Block,
    parent: Option<&'a Scope<'a>>,
    level: usize,
}

impl<'a> Scope<'a> {
    pub fn root(block: &'a Block) -> Self {
        Self {
            block,
            parent: None,
            level: 0,
        }
    }

    pub fn child<'b>(&'b self, block: &'b Block) -> Scope<'b> {
        Scope {
            block,
            parent: Some(self),
            level: self.level + 1,
        }
    }

    pub fn block(&self) -> &'a Block {
        self.block
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Searches from the innermost block to the outermost one.
    pub fn resolve(&self, name: &str) -> Option<Resolved<'a>> {
        let mut scope = Some(self);
        let mut distance = 0;
        while let Some(current) = scope {
            if let Some(symbol) = current.block.symbols.get(name) {
                return Some(Resolved {
                    binding: Binding::Symbol(symbol),
                    distance,
                });
            }
            if let Some(procedure) = current.block.procedure(name) {
                return Some(Resolved {
                    binding: Binding::Procedure(procedure),
                    distance,
                });
            }
            scope = current.parent;
            distance += 1;
        }
        None
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
