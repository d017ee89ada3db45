#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Constant(i64),
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: SymbolType,
    pub line_number: usize,
}

impl Symbol {
    pub fn new(name: impl Into<String>, symbol_type: SymbolType, line_number: usize) -> Self {
        Self {
            name: name.into(),
            symbol_type,
            line_number,
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self.symbol_type, SymbolType::Constant(_))
    }

    pub fn const_value(&self) -> Option<i64> {
        match self.symbol_type {
            SymbolType::Constant(value) => Some(value),
            SymbolType::Variable => None,
        }
    }
}

/// Declarations of one block, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration. Redeclaring a name replaces the earlier entry
    /// in place and returns the replaced symbol.
    // TODO: report redeclarations once the driver grows a warnings channel.
    pub fn insert(&mut self, symbol: Symbol) -> Option<Symbol> {
        match self.symbols.iter_mut().find(|s| s.name == symbol.name) {
            Some(existing) => Some(std::mem::replace(existing, symbol)),
            None => {
                self.symbols.push(symbol);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
